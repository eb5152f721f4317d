use cu29_clock::CuTime;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransformError {
    #[error("Transform from frame '{from}' to frame '{to}' not found")]
    TransformNotFound { from: String, to: String },

    #[error("Transform at requested time {0} not available")]
    TransformTimeNotAvailable(CuTime),

    #[error("Frame '{0}' does not exist")]
    FrameNotFound(String),

    #[error("Invalid frame id '{0}'")]
    InvalidFrameId(String),
}

pub type TransformResult<T> = Result<T, TransformError>;
