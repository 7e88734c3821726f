//! Error types for midline-raster

use thiserror::Error;

/// Errors that can occur while drawing into a session
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RasterError {
    /// Point buffer error (capacity exhausted)
    #[error("core error: {0}")]
    Core(#[from] midline_core::Error),

    /// Viewport configuration error
    #[error("transform error: {0}")]
    Transform(#[from] midline_transform::TransformError),
}

/// Result type for raster operations
pub type RasterResult<T> = Result<T, RasterError>;
