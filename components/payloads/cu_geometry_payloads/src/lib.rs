//! Frame-tagged geometric payloads.
//!
//! These are plain data carriers: a payload plus a [`Header`] telling in which frame and at
//! which [`CuTime`](cu29_clock::CuTime) it is valid. The math that moves them between frames
//! lives in `cu-geometry-transform`.
pub mod builtin;
pub mod geometry;

pub use builtin::{Header, Stamped};
pub use geometry::{
    Point, PointStamped, Pose, PoseStamped, PoseWithCovariance, PoseWithCovarianceStamped,
    Quaternion, QuaternionStamped, Transform, TransformStamped, Vector3, Vector3Stamped, Wrench,
    WrenchStamped,
};

pub use cu29_clock::CuTime;
