//! Viewport - World space to normalized rendering space
//!
//! A viewport is a canvas of `width x height` world units whose top-left
//! corner sits at `(origin_left, origin_top)` in the coordinate system the
//! input events are reported in. The transform is
//!
//! ```text
//! x_norm = 2x / width + (-2 * origin_left / width - 1)
//! y_norm = 2 * (origin_top - y) / height + 1
//! ```
//!
//! so the canvas maps onto the `[-1, 1]` square with y pointing up. Nothing
//! is clamped: world points beyond the canvas yield normalized values beyond
//! `[-1, 1]`.
//!
//! Rasterized pixels and raw pointer positions go through the same
//! transform, which is what makes clicked points land on drawn lines.

use crate::error::{TransformError, TransformResult};
use midline_core::{NormPoint, Point};

/// Largest accepted canvas dimension; every canvas pixel must fit a [`Point`].
pub const MAX_DIMENSION: u32 = i32::MAX as u32;

/// Canvas dimensions plus origin offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: u32,
    height: u32,
    origin_left: f64,
    origin_top: f64,
}

impl Viewport {
    /// Create a viewport with its origin at `(0, 0)`.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::InvalidViewport`] if either dimension is zero
    /// or exceeds [`MAX_DIMENSION`].
    pub fn new(width: u32, height: u32) -> TransformResult<Self> {
        let valid = 1..=MAX_DIMENSION;
        if !valid.contains(&width) || !valid.contains(&height) {
            return Err(TransformError::InvalidViewport { width, height });
        }
        Ok(Self {
            width,
            height,
            origin_left: 0.0,
            origin_top: 0.0,
        })
    }

    /// Return a copy of this viewport with a different origin offset.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::InvalidOrigin`] if either offset is not finite.
    pub fn with_origin(self, left: f64, top: f64) -> TransformResult<Self> {
        if !left.is_finite() || !top.is_finite() {
            return Err(TransformError::InvalidOrigin { left, top });
        }
        Ok(Self {
            origin_left: left,
            origin_top: top,
            ..self
        })
    }

    /// Canvas width in world units.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height in world units.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Origin offset as `(left, top)`.
    #[inline]
    pub fn origin(&self) -> (f64, f64) {
        (self.origin_left, self.origin_top)
    }

    /// The world pixel at the center of the canvas (integer division).
    pub fn center(&self) -> Point {
        Point::new((self.width / 2) as i32, (self.height / 2) as i32)
    }

    /// Map a world pixel to normalized space.
    #[inline]
    pub fn normalize(&self, p: Point) -> NormPoint {
        self.normalize_xy(p.x as f64, p.y as f64)
    }

    /// Map raw (possibly fractional) coordinates to normalized space.
    ///
    /// Used for pointer positions, which must line up with rasterized pixels.
    pub fn normalize_xy(&self, x: f64, y: f64) -> NormPoint {
        let w = self.width as f64;
        let h = self.height as f64;
        let translation_x = -2.0 * self.origin_left / w - 1.0;
        let x_norm = 2.0 * x / w + translation_x;
        let y_norm = 2.0 * (self.origin_top - y) / h + 1.0;
        NormPoint::new(x_norm as f32, y_norm as f32)
    }

    /// Map a normalized point back to world coordinates.
    ///
    /// Exact inverse of [`Viewport::normalize_xy`] up to `f32` rounding.
    pub fn denormalize(&self, p: NormPoint) -> (f64, f64) {
        let w = self.width as f64;
        let h = self.height as f64;
        let x = (p.x as f64 + 1.0) * w / 2.0 + self.origin_left;
        let y = self.origin_top - (p.y as f64 - 1.0) * h / 2.0;
        (x, y)
    }

    /// Whether a world pixel lies on the canvas.
    pub fn contains(&self, p: Point) -> bool {
        self.normalize(p).is_visible()
    }
}
