//! Poses: the position follows the point rule and the orientation is pre-multiplied by the
//! transform rotation.

use crate::convert::RigidlyTransformable;
use crate::rigid::RigidTransform;
use cu_geometry_payloads::Pose;

impl RigidlyTransformable for Pose {
    fn apply_rigid(&self, transform: &RigidTransform) -> Self {
        Pose::new(
            self.position.apply_rigid(transform),
            self.orientation.apply_rigid(transform),
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::convert::{DoTransform, FrameStamped};
    use crate::rigid::RigidTransform;
    use crate::rotation::{quaternion_to_matrix, rotate};
    use approx::assert_abs_diff_eq;
    use cu29_clock::CuDuration;
    use cu_geometry_payloads::{
        Point, Pose, PoseStamped, Quaternion, Transform, TransformStamped, Vector3,
    };
    use std::f64::consts::FRAC_PI_2;

    fn transform() -> TransformStamped {
        TransformStamped::new(
            Transform::new(
                Vector3::new(1.0, 2.0, 3.0),
                Quaternion::from_axis_angle([0.0, 0.0, 1.0], FRAC_PI_2),
            ),
            "map",
            "base_link",
            CuDuration(500),
        )
    }

    #[test]
    fn test_pose_position_and_orientation() {
        let pose = PoseStamped::new(
            Pose::new(
                Point::new(1.0, 0.0, 0.0),
                Quaternion::from_axis_angle([1.0, 0.0, 0.0], FRAC_PI_2),
            ),
            "base_link",
            CuDuration(1),
        );
        let out = pose.do_transform(&transform());

        assert_abs_diff_eq!(out.payload.position.x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(out.payload.position.y, 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(out.payload.position.z, 3.0, epsilon = 1e-12);

        // Rx(90) maps y to z, then Rz(90) leaves z alone: R∘Q sends y to z.
        let m = quaternion_to_matrix(out.payload.orientation.to_array());
        let v = rotate(&m, [0.0, 1.0, 0.0]);
        assert_abs_diff_eq!(v[0], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v[1], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v[2], 1.0, epsilon = 1e-12);
        // and x to y
        let v = rotate(&m, [1.0, 0.0, 0.0]);
        assert_abs_diff_eq!(v[1], 1.0, epsilon = 1e-12);

        assert_eq!(out.frame_id(), "map");
        assert_eq!(out.timestamp(), CuDuration(500));
    }

    #[test]
    fn test_identity_orientation_takes_transform_rotation() {
        let rigid = RigidTransform::from(&transform());
        let out = crate::RigidlyTransformable::apply_rigid(&Pose::default(), &rigid);
        assert_eq!(out.orientation.to_array(), rigid.rotation());
        assert_eq!(out.position, Point::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_pose_in_place() {
        let mut pose = PoseStamped::new(
            Pose::new(Point::new(0.5, 0.5, 0.5), Quaternion::identity()),
            "base_link",
            CuDuration(1),
        );
        let expected = pose.do_transform(&transform());
        pose.do_transform_in_place(&transform());
        assert_eq!(pose, expected);
    }
}
