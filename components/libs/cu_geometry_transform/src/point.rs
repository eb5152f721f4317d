//! Points get the full rigid motion: rotate, then translate.

use crate::convert::RigidlyTransformable;
use crate::rigid::RigidTransform;
use cu_geometry_payloads::Point;

impl RigidlyTransformable for Point {
    fn apply_rigid(&self, transform: &RigidTransform) -> Self {
        Point::from_array(transform.transform_point(self.to_array()))
    }
}
