//! midline-transform - Coordinate transform for midline
//!
//! This crate maps the integer world grid the rasterizer works on into the
//! normalized coordinate convention a renderer consumes:
//!
//! - [`Viewport`] - canvas dimensions plus origin offset
//! - [`Viewport::normalize`] - world pixel to normalized point
//! - [`Viewport::normalize_xy`] - raw pointer position to normalized point
//! - [`Viewport::denormalize`] - the inverse mapping

mod error;
pub mod viewport;

pub use error::{TransformError, TransformResult};
pub use viewport::{MAX_DIMENSION, Viewport};
