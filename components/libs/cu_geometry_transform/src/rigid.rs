use crate::rotation::{
    matrix_to_quaternion, quaternion_conjugate, quaternion_multiply, quaternion_to_matrix, rotate,
    transpose, Mat3, Quat, Vec3, IDENTITY_QUAT,
};
use cu_geometry_payloads::{Quaternion, Transform, TransformStamped, Vector3};
use std::ops::Mul;

/// A rotation followed by a translation.
///
/// Built fresh from each incoming transform and never mutated. The rotation matrix is computed
/// once at construction so applying the transform to many quantities stays cheap.
/// The quaternion is taken as given: nothing checks that it has unit norm.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigidTransform {
    rotation: Quat,
    translation: Vec3,
    matrix: Mat3,
}

impl RigidTransform {
    pub fn new(rotation: Quat, translation: Vec3) -> Self {
        Self {
            rotation,
            translation,
            matrix: quaternion_to_matrix(rotation),
        }
    }

    pub fn identity() -> Self {
        Self::new(IDENTITY_QUAT, [0.0; 3])
    }

    pub fn from_translation(translation: Vec3) -> Self {
        Self::new(IDENTITY_QUAT, translation)
    }

    pub fn from_rotation(rotation: Quat) -> Self {
        Self::new(rotation, [0.0; 3])
    }

    /// Rotation as `[x, y, z, w]`.
    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    pub fn translation(&self) -> Vec3 {
        self.translation
    }

    pub fn rotation_matrix(&self) -> Mat3 {
        self.matrix
    }

    /// Rotates `v`, translation is not applied.
    pub fn rotate_vector(&self, v: Vec3) -> Vec3 {
        rotate(&self.matrix, v)
    }

    /// Full rigid motion: `R·p + t`.
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        let r = rotate(&self.matrix, p);
        [
            r[0] + self.translation[0],
            r[1] + self.translation[1],
            r[2] + self.translation[2],
        ]
    }

    /// `R ∘ q`: the orientation `q` re-expressed in the destination frame.
    pub fn rotate_orientation(&self, q: Quat) -> Quat {
        quaternion_multiply(self.rotation, q)
    }

    pub fn inverse(&self) -> Self {
        let r_inv = transpose(&self.matrix);
        let t = rotate(&r_inv, self.translation);
        Self {
            rotation: quaternion_conjugate(self.rotation),
            translation: [-t[0], -t[1], -t[2]],
            matrix: r_inv,
        }
    }

    /// Builds a transform from a homogeneous row-major 4x4 matrix.
    /// The bottom row is ignored.
    pub fn from_matrix(mat: [[f64; 4]; 4]) -> Self {
        let r = [
            [mat[0][0], mat[0][1], mat[0][2]],
            [mat[1][0], mat[1][1], mat[1][2]],
            [mat[2][0], mat[2][1], mat[2][2]],
        ];
        Self {
            rotation: matrix_to_quaternion(&r),
            translation: [mat[0][3], mat[1][3], mat[2][3]],
            matrix: r,
        }
    }

    /// Homogeneous row-major 4x4 matrix.
    pub fn to_matrix(&self) -> [[f64; 4]; 4] {
        let r = &self.matrix;
        let t = &self.translation;
        [
            [r[0][0], r[0][1], r[0][2], t[0]],
            [r[1][0], r[1][1], r[1][2], t[1]],
            [r[2][0], r[2][1], r[2][2], t[2]],
            [0.0, 0.0, 0.0, 1.0],
        ]
    }

    pub fn to_transform(&self) -> Transform {
        Transform::new(
            Vector3::from_array(self.translation),
            Quaternion::from_array(self.rotation),
        )
    }
}

impl Default for RigidTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<&Transform> for RigidTransform {
    fn from(t: &Transform) -> Self {
        Self::new(t.rotation.to_array(), t.translation.to_array())
    }
}

impl From<&TransformStamped> for RigidTransform {
    fn from(t: &TransformStamped) -> Self {
        Self::from(&t.transform)
    }
}

/// `a * b` applies `b` first, then `a`.
impl Mul for RigidTransform {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl Mul for &RigidTransform {
    type Output = RigidTransform;

    fn mul(self, rhs: Self) -> Self::Output {
        RigidTransform::new(
            quaternion_multiply(self.rotation, rhs.rotation),
            self.transform_point(rhs.translation),
        )
    }
}

impl Mul<RigidTransform> for &RigidTransform {
    type Output = RigidTransform;

    fn mul(self, rhs: RigidTransform) -> Self::Output {
        self * &rhs
    }
}

impl Mul<&RigidTransform> for RigidTransform {
    type Output = RigidTransform;

    fn mul(self, rhs: &RigidTransform) -> Self::Output {
        &self * rhs
    }
}

#[cfg(feature = "nalgebra")]
mod nalgebra_integration {
    use super::RigidTransform;
    use nalgebra::{Isometry3, Quaternion, Translation3, UnitQuaternion};

    impl From<&RigidTransform> for Isometry3<f64> {
        fn from(t: &RigidTransform) -> Self {
            let [x, y, z, w] = t.rotation();
            let [tx, ty, tz] = t.translation();
            Isometry3::from_parts(
                Translation3::new(tx, ty, tz),
                UnitQuaternion::new_unchecked(Quaternion::new(w, x, y, z)),
            )
        }
    }

    impl From<Isometry3<f64>> for RigidTransform {
        fn from(iso: Isometry3<f64>) -> Self {
            let q = iso.rotation.quaternion();
            let v = iso.translation.vector;
            RigidTransform::new([q.i, q.j, q.k, q.w], [v.x, v.y, v.z])
        }
    }
}

#[cfg(feature = "glam")]
mod glam_integration {
    use super::RigidTransform;
    use glam::{DAffine3, DQuat, DVec3};

    impl From<&RigidTransform> for DAffine3 {
        fn from(t: &RigidTransform) -> Self {
            let [x, y, z, w] = t.rotation();
            DAffine3::from_rotation_translation(
                DQuat::from_xyzw(x, y, z, w),
                DVec3::from_array(t.translation()),
            )
        }
    }

    impl From<DAffine3> for RigidTransform {
        fn from(aff: DAffine3) -> Self {
            let (_scale, rotation, translation) = aff.to_scale_rotation_translation();
            RigidTransform::new(rotation.to_array(), translation.to_array())
        }
    }
}
