//! World-space and normalized-space points
//!
//! - [`Point`] is a pixel on the discrete world grid. It is never validated:
//!   negative coordinates and coordinates past the drawing surface are legal.
//! - [`NormPoint`] is the same pixel expressed in the renderer's normalized
//!   coordinate convention. Values outside `[-1, 1]` are legal too.

use std::fmt;

/// A pixel in world space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Point {
    /// X coordinate
    pub x: i32,
    /// Y coordinate
    pub y: i32,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (i32, i32) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// A point in normalized rendering space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NormPoint {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

impl NormPoint {
    /// Create a new normalized point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Whether the point falls inside the visible `[-1, 1]` square.
    pub fn is_visible(&self) -> bool {
        (-1.0..=1.0).contains(&self.x) && (-1.0..=1.0).contains(&self.y)
    }
}

impl From<(f32, f32)> for NormPoint {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for NormPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}
