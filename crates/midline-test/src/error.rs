//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur during regression testing
#[derive(Debug, Error)]
pub enum TestError {
    /// Value comparison failed
    #[error(
        "value comparison failed at index {index}: expected {expected}, got {actual}, delta {delta}"
    )]
    ValueMismatch {
        index: usize,
        expected: f64,
        actual: f64,
        delta: f64,
    },

    /// Point sequence comparison failed
    #[error("point comparison failed at index {index}: {message}")]
    PointMismatch { index: usize, message: String },
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
