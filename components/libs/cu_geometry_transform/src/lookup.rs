//! Seam between the adapters and whatever keeps track of frames.
//!
//! A broker implements [`TransformLookup`]; [`transform`] then works for every quantity that has
//! a frame, a stamp and a transform rule.

use crate::convert::{DoTransform, FrameStamped};
use crate::error::{TransformError, TransformResult};
use cu29_clock::CuTime;
use cu_geometry_payloads::TransformStamped;
use log::{debug, trace};

pub trait TransformLookup {
    /// Transform taking data expressed in `source` at `time` into `target`.
    fn lookup_transform(
        &self,
        target: &str,
        source: &str,
        time: CuTime,
    ) -> TransformResult<TransformStamped>;
}

/// Re-expresses `quantity` in `target_frame`.
///
/// The lookup happens at the quantity's own stamp. The result carries the stamp and frame of the
/// transform that was applied.
///
/// # Example
/// ```
/// use cu_geometry_transform::{transform, FrameStamped, TransformLookup, TransformResult};
/// use cu_geometry_payloads::{
///     Point, PointStamped, Quaternion, Transform, TransformStamped, Vector3,
/// };
/// use cu29_clock::{CuDuration, CuTime};
///
/// struct Fixed;
///
/// impl TransformLookup for Fixed {
///     fn lookup_transform(
///         &self,
///         target: &str,
///         source: &str,
///         time: CuTime,
///     ) -> TransformResult<TransformStamped> {
///         let t = Transform::new(Vector3::new(1.0, 0.0, 0.0), Quaternion::identity());
///         Ok(TransformStamped::new(t, target, source, time))
///     }
/// }
///
/// let p = PointStamped::new(Point::new(1.0, 2.0, 3.0), "base", CuDuration(10));
/// let out = transform(&Fixed, &p, "odom").unwrap();
/// assert_eq!(out.payload, Point::new(2.0, 2.0, 3.0));
/// assert_eq!(out.frame_id(), "odom");
/// ```
pub fn transform<Q, L>(lookup: &L, quantity: &Q, target_frame: &str) -> TransformResult<Q>
where
    Q: DoTransform + FrameStamped,
    L: TransformLookup + ?Sized,
{
    if target_frame.is_empty() {
        return Err(TransformError::InvalidFrameId(target_frame.to_string()));
    }
    let source = quantity.frame_id();
    let stamp = quantity.timestamp();
    trace!("transforming from '{source}' to '{target_frame}' at {stamp}");

    let tf = lookup
        .lookup_transform(target_frame, source, stamp)
        .inspect_err(|e| debug!("lookup '{source}' -> '{target_frame}' failed: {e}"))?;
    Ok(quantity.do_transform(&tf))
}
