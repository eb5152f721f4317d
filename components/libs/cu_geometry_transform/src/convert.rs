//! The generic contract every transformable quantity implements.
//!
//! A transform broker only ever talks to these traits. Each payload type provides its own rule
//! in its own module; the stamped wrappers get theirs from the blanket impls below.

use crate::rigid::RigidTransform;
use cu29_clock::CuTime;
use cu_geometry_payloads::{Stamped, TransformStamped};

/// Timestamp and frame of a stamped quantity.
pub trait FrameStamped {
    fn timestamp(&self) -> CuTime;
    fn frame_id(&self) -> &str;
}

/// Per-payload rule for moving a value through a rigid transform.
pub trait RigidlyTransformable: Sized {
    fn apply_rigid(&self, transform: &RigidTransform) -> Self;
}

/// Applies a [`TransformStamped`] to a quantity.
pub trait DoTransform: Sized {
    fn do_transform(&self, transform: &TransformStamped) -> Self;

    /// Overwrites `self` with the transformed value.
    /// The full result is computed before anything is written.
    fn do_transform_in_place(&mut self, transform: &TransformStamped) {
        *self = self.do_transform(transform);
    }
}

/// Nested 6x6 view of a flat covariance.
pub trait CovarianceMatrix {
    fn covariance_matrix(&self) -> [[f64; 6]; 6];
}

/// Conversion to and from the representation the broker works with.
///
/// Stamped payloads already are that representation, so for them both directions are the
/// identity.
pub trait GenericConvert {
    type Generic;

    fn to_generic(&self) -> Self::Generic;
    fn from_generic(msg: &Self::Generic, out: &mut Self);
}

/// Moves `input` into `output` through their shared generic representation.
pub fn convert<A, B>(input: &A, output: &mut B)
where
    A: GenericConvert,
    B: GenericConvert<Generic = A::Generic>,
{
    B::from_generic(&input.to_generic(), output);
}

impl<P> FrameStamped for Stamped<P> {
    fn timestamp(&self) -> CuTime {
        self.header.stamp
    }

    fn frame_id(&self) -> &str {
        &self.header.frame_id
    }
}

impl<P: RigidlyTransformable> DoTransform for Stamped<P> {
    /// The payload follows its own rule; the stamp and frame always come from `transform`.
    fn do_transform(&self, transform: &TransformStamped) -> Self {
        let rigid = RigidTransform::from(transform);
        Stamped::from_parts(transform.header.clone(), self.payload.apply_rigid(&rigid))
    }
}

impl<P: Clone> GenericConvert for Stamped<P> {
    type Generic = Stamped<P>;

    fn to_generic(&self) -> Self::Generic {
        self.clone()
    }

    fn from_generic(msg: &Self::Generic, out: &mut Self) {
        *out = msg.clone();
    }
}

impl FrameStamped for TransformStamped {
    fn timestamp(&self) -> CuTime {
        self.header.stamp
    }

    fn frame_id(&self) -> &str {
        &self.header.frame_id
    }
}

impl GenericConvert for TransformStamped {
    type Generic = TransformStamped;

    fn to_generic(&self) -> Self::Generic {
        self.clone()
    }

    fn from_generic(msg: &Self::Generic, out: &mut Self) {
        *out = msg.clone();
    }
}

/// Unstamped payloads take the rigid part of the transform and drop its header.
macro_rules! impl_do_transform_unstamped {
    ($($t:ty),* $(,)?) => {
        $(
            impl DoTransform for $t {
                fn do_transform(&self, transform: &TransformStamped) -> Self {
                    self.apply_rigid(&RigidTransform::from(transform))
                }
            }
        )*
    };
}

impl_do_transform_unstamped!(
    cu_geometry_payloads::Vector3,
    cu_geometry_payloads::Point,
    cu_geometry_payloads::Quaternion,
    cu_geometry_payloads::Pose,
    cu_geometry_payloads::Wrench,
    cu_geometry_payloads::Transform,
);
