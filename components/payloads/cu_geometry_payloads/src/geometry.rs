use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};
use uom::si::f64::{Force, Length, Torque};
use uom::si::force::newton;
use uom::si::length::meter;
use uom::si::torque::newton_meter;

use crate::builtin::{Header, Stamped};

/// A free vector: a direction and magnitude, with no position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize, Encode, Decode)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    pub fn from_array(v: [f64; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

/// A position in space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize, Encode, Decode)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub const fn origin() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    pub fn from_array(p: [f64; 3]) -> Self {
        Self::new(p[0], p[1], p[2])
    }

    /// Coordinates with their unit, components are in meters.
    pub fn position(&self) -> [Length; 3] {
        [
            Length::new::<meter>(self.x),
            Length::new::<meter>(self.y),
            Length::new::<meter>(self.z),
        ]
    }
}

/// An orientation as a quaternion, stored `x, y, z, w`.
///
/// Nothing here enforces unit norm.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, Encode, Decode)]
pub struct Quaternion {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Quaternion {
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    pub const fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    pub fn to_array(self) -> [f64; 4] {
        [self.x, self.y, self.z, self.w]
    }

    pub fn from_array(q: [f64; 4]) -> Self {
        Self::new(q[0], q[1], q[2], q[3])
    }

    /// Rotation of `angle` radians about `axis`. The axis is normalized here.
    pub fn from_axis_angle(axis: [f64; 3], angle: f64) -> Self {
        let norm = (axis[0] * axis[0] + axis[1] * axis[1] + axis[2] * axis[2]).sqrt();
        let (s, c) = (angle * 0.5).sin_cos();
        let k = s / norm;
        Self::new(axis[0] * k, axis[1] * k, axis[2] * k, c)
    }

    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w).sqrt()
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::identity()
    }
}

/// Position plus orientation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize, Encode, Decode)]
pub struct Pose {
    pub position: Point,
    pub orientation: Quaternion,
}

impl Pose {
    pub const fn new(position: Point, orientation: Quaternion) -> Self {
        Self {
            position,
            orientation,
        }
    }
}

/// A pose with its uncertainty.
///
/// The covariance is a 6x6 matrix flattened row-major over
/// `(x, y, z, roll, pitch, yaw)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, Encode, Decode)]
pub struct PoseWithCovariance {
    pub pose: Pose,
    #[serde(with = "serde_arrays")]
    pub covariance: [f64; 36],
}

impl PoseWithCovariance {
    pub const fn new(pose: Pose, covariance: [f64; 36]) -> Self {
        Self { pose, covariance }
    }
}

impl Default for PoseWithCovariance {
    fn default() -> Self {
        Self {
            pose: Pose::default(),
            covariance: [0.0; 36],
        }
    }
}

/// Force and torque acting on a body.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize, Encode, Decode)]
pub struct Wrench {
    pub force: Vector3,
    pub torque: Vector3,
}

impl Wrench {
    pub const fn new(force: Vector3, torque: Vector3) -> Self {
        Self { force, torque }
    }

    /// Force with its unit, components are in newtons.
    pub fn force_newtons(&self) -> [Force; 3] {
        [
            Force::new::<newton>(self.force.x),
            Force::new::<newton>(self.force.y),
            Force::new::<newton>(self.force.z),
        ]
    }

    /// Torque with its unit, components are in newton meters.
    pub fn torque_newton_meters(&self) -> [Torque; 3] {
        [
            Torque::new::<newton_meter>(self.torque.x),
            Torque::new::<newton_meter>(self.torque.y),
            Torque::new::<newton_meter>(self.torque.z),
        ]
    }
}

/// Rotation followed by translation between two frames.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize, Encode, Decode)]
pub struct Transform {
    pub translation: Vector3,
    pub rotation: Quaternion,
}

impl Transform {
    pub const fn new(translation: Vector3, rotation: Quaternion) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    pub const fn identity() -> Self {
        Self::new(Vector3::zero(), Quaternion::identity())
    }

    /// Translation with its unit, components are in meters.
    pub fn translation_lengths(&self) -> [Length; 3] {
        [
            Length::new::<meter>(self.translation.x),
            Length::new::<meter>(self.translation.y),
            Length::new::<meter>(self.translation.z),
        ]
    }
}

/// A transform from `child_frame_id` into `header.frame_id`, valid at `header.stamp`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Encode, Decode)]
pub struct TransformStamped {
    pub header: Header,
    pub child_frame_id: String,
    pub transform: Transform,
}

impl TransformStamped {
    pub fn new(
        transform: Transform,
        frame_id: impl Into<String>,
        child_frame_id: impl Into<String>,
        stamp: cu29_clock::CuTime,
    ) -> Self {
        Self {
            header: Header::new(frame_id, stamp),
            child_frame_id: child_frame_id.into(),
            transform,
        }
    }
}

pub type Vector3Stamped = Stamped<Vector3>;
pub type PointStamped = Stamped<Point>;
pub type QuaternionStamped = Stamped<Quaternion>;
pub type PoseStamped = Stamped<Pose>;
pub type PoseWithCovarianceStamped = Stamped<PoseWithCovariance>;
pub type WrenchStamped = Stamped<Wrench>;
