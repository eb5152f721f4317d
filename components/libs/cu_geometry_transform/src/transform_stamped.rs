//! Transforms are quantities too: applying `T` to a transform `X` gives `T ∘ X`.

use crate::convert::{DoTransform, RigidlyTransformable};
use crate::rigid::RigidTransform;
use cu_geometry_payloads::{Transform, TransformStamped};

impl RigidlyTransformable for Transform {
    fn apply_rigid(&self, transform: &RigidTransform) -> Self {
        (transform * RigidTransform::from(self)).to_transform()
    }
}

impl DoTransform for TransformStamped {
    /// The child frame is kept; the parent frame and stamp come from `transform`.
    fn do_transform(&self, transform: &TransformStamped) -> Self {
        let rigid = RigidTransform::from(transform);
        TransformStamped {
            header: transform.header.clone(),
            child_frame_id: self.child_frame_id.clone(),
            transform: self.transform.apply_rigid(&rigid),
        }
    }
}
