//! Error types for midline-core
//!
//! Provides a unified error type for the point types and the point buffer.
//! Rasterization itself has no runtime failure modes; the only recoverable
//! condition is running out of buffer space.

use thiserror::Error;

/// midline-core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Append attempted on a full point buffer
    #[error("point buffer capacity exceeded: {requested} points requested, capacity {capacity}")]
    CapacityExceeded { capacity: usize, requested: usize },
}

/// Result type alias for midline-core operations
pub type Result<T> = std::result::Result<T, Error>;
