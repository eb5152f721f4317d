//! Rigid transforms applied to frame-tagged geometric payloads.
//!
//! Each payload type has its own rule:
//! - [`Vector3`](cu_geometry_payloads::Vector3): rotation only.
//! - [`Point`](cu_geometry_payloads::Point): rotation, then translation.
//! - [`Quaternion`](cu_geometry_payloads::Quaternion): pre-multiplied by the rotation.
//! - [`Pose`](cu_geometry_payloads::Pose): point rule for the position, quaternion rule for the
//!   orientation.
//! - [`Wrench`](cu_geometry_payloads::Wrench): force and torque each get the vector rule.
//! - [`Transform`](cu_geometry_payloads::Transform): composition.
//!
//! A stamped quantity that goes through [`DoTransform`] always comes out with the frame id and the
//! stamp of the transform that was applied, whatever its own header said.
//!
//! # Example
//! ```
//! use cu_geometry_transform::{DoTransform, FrameStamped};
//! use cu_geometry_payloads::{
//!     Point, PointStamped, Quaternion, Transform, TransformStamped, Vector3,
//! };
//! use cu29_clock::CuDuration;
//!
//! let tf = TransformStamped::new(
//!     Transform::new(
//!         Vector3::new(0.0, 0.0, 1.0),
//!         Quaternion::from_axis_angle([0.0, 0.0, 1.0], std::f64::consts::FRAC_PI_2),
//!     ),
//!     "world",
//!     "robot",
//!     CuDuration(1_000),
//! );
//! let p = PointStamped::new(Point::new(1.0, 0.0, 0.0), "robot", CuDuration(0));
//! let out = p.do_transform(&tf);
//! assert!((out.payload.y - 1.0).abs() < 1e-12);
//! assert!((out.payload.z - 1.0).abs() < 1e-12);
//! assert_eq!(out.frame_id(), "world");
//! ```
pub mod convert;
pub mod covariance;
pub mod error;
pub mod lookup;
pub mod rigid;
pub mod rotation;

mod point;
mod pose;
mod pose_with_covariance;
mod quaternion;
mod transform_stamped;
mod vector;
mod wrench;

pub use convert::{
    convert, CovarianceMatrix, DoTransform, FrameStamped, GenericConvert, RigidlyTransformable,
};
pub use covariance::{covariance_nested_to_row_major, covariance_row_major_to_nested};
pub use error::{TransformError, TransformResult};
pub use lookup::{transform, TransformLookup};
pub use rigid::RigidTransform;

pub use cu_geometry_payloads;
