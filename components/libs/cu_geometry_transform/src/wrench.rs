//! Wrenches: force and torque are two free vectors, rotated independently.

use crate::convert::RigidlyTransformable;
use crate::rigid::RigidTransform;
use cu_geometry_payloads::Wrench;

impl RigidlyTransformable for Wrench {
    fn apply_rigid(&self, transform: &RigidTransform) -> Self {
        Wrench::new(
            self.force.apply_rigid(transform),
            self.torque.apply_rigid(transform),
        )
    }
}
