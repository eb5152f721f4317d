//! Poses with covariance are read only here: their frame, their stamp and a nested view of the
//! covariance.
//! No `RigidlyTransformable` impl: the covariance is never re-expressed in another frame here.

use crate::convert::CovarianceMatrix;
use crate::covariance::covariance_row_major_to_nested;
use cu_geometry_payloads::{PoseWithCovariance, PoseWithCovarianceStamped};

impl CovarianceMatrix for PoseWithCovariance {
    fn covariance_matrix(&self) -> [[f64; 6]; 6] {
        covariance_row_major_to_nested(&self.covariance)
    }
}

impl CovarianceMatrix for PoseWithCovarianceStamped {
    fn covariance_matrix(&self) -> [[f64; 6]; 6] {
        self.payload.covariance_matrix()
    }
}
