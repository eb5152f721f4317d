//! Free vectors only turn with the frame; translation never applies to a direction.

use crate::convert::RigidlyTransformable;
use crate::rigid::RigidTransform;
use cu_geometry_payloads::Vector3;

impl RigidlyTransformable for Vector3 {
    fn apply_rigid(&self, transform: &RigidTransform) -> Self {
        Vector3::from_array(transform.rotate_vector(self.to_array()))
    }
}

#[cfg(test)]
mod tests {
    use crate::convert::{DoTransform, FrameStamped};
    use crate::rigid::RigidTransform;
    use crate::RigidlyTransformable;
    use approx::assert_abs_diff_eq;
    use cu29_clock::CuDuration;
    use cu_geometry_payloads::{Quaternion, Transform, TransformStamped, Vector3, Vector3Stamped};
    use std::f64::consts::FRAC_PI_2;

    fn rz90() -> Quaternion {
        Quaternion::from_axis_angle([0.0, 0.0, 1.0], FRAC_PI_2)
    }

    #[test]
    fn test_vector_rotates() {
        let rigid = RigidTransform::from_rotation(rz90().to_array());
        let v = Vector3::new(1.0, 0.0, 0.0).apply_rigid(&rigid);
        assert_abs_diff_eq!(v.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v.y, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_vector_ignores_translation() {
        let v = Vector3::new(0.5, -2.0, 3.0);
        let a = v.apply_rigid(&RigidTransform::new(rz90().to_array(), [0.0, 0.0, 0.0]));
        let b = v.apply_rigid(&RigidTransform::new(rz90().to_array(), [10.0, -4.0, 2.5]));
        assert_eq!(a, b);
    }

    #[test]
    fn test_stamped_vector_takes_transform_stamp() {
        let v = Vector3Stamped::new(Vector3::new(0.0, 0.0, 1.0), "sensor", CuDuration(100));
        let tf = TransformStamped::new(
            Transform::new(Vector3::new(1.0, 1.0, 1.0), Quaternion::identity()),
            "base",
            "sensor",
            CuDuration(250),
        );
        let out = v.do_transform(&tf);
        assert_eq!(out.frame_id(), "base");
        assert_eq!(out.timestamp(), CuDuration(250));
        assert_eq!(out.payload, Vector3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_unstamped_vector_do_transform() {
        let tf = TransformStamped::new(
            Transform::new(Vector3::new(9.0, 9.0, 9.0), rz90()),
            "base",
            "sensor",
            CuDuration(1),
        );
        let v = Vector3::new(0.0, 1.0, 0.0).do_transform(&tf);
        assert_abs_diff_eq!(v.x, -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v.y, 0.0, epsilon = 1e-12);
    }
}
