//! midline Core - Basic data structures for line rasterization
//!
//! This crate provides the data structures shared by the rest of the
//! workspace:
//!
//! - [`Point`] - A pixel on the integer world grid
//! - [`NormPoint`] - A point in normalized rendering space
//! - [`PointBuffer`] - Capacity-checked, append-only vertex store
//! - [`Error`] / [`Result`] - Error type for buffer operations

pub mod buffer;
pub mod error;
pub mod point;

pub use buffer::{DEFAULT_CAPACITY, PointBuffer, PointBufferIter, VERTEX_STRIDE};
pub use error::{Error, Result};
pub use point::{NormPoint, Point};
