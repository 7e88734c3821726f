//! Error types for midline-transform

use thiserror::Error;

/// Errors that can occur while configuring a viewport
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TransformError {
    /// Canvas with a zero dimension, or one that world pixels cannot address
    #[error("invalid viewport dimensions: {width}x{height}")]
    InvalidViewport { width: u32, height: u32 },

    /// Origin offset that is NaN or infinite
    #[error("invalid origin offset: ({left}, {top})")]
    InvalidOrigin { left: f64, top: f64 },
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
