//! Orientations are pre-multiplied by the transform rotation; translation does not apply.

use crate::convert::RigidlyTransformable;
use crate::rigid::RigidTransform;
use cu_geometry_payloads::Quaternion;

impl RigidlyTransformable for Quaternion {
    fn apply_rigid(&self, transform: &RigidTransform) -> Self {
        Quaternion::from_array(transform.rotate_orientation(self.to_array()))
    }
}
