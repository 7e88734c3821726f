//! Degenerate-case walkers
//!
//! Lines that need no decision variable:
//!
//! - [`VerticalWalk`]: `start.x == end.x`, including the zero-length segment
//! - [`DiagonalWalk`]: `end.x - start.x == end.y - start.y > 0`

use midline_core::Point;

/// Walks y from `start.y` to `end.y` inclusive with x held fixed.
///
/// Steps +1 when `end.y > start.y`, otherwise -1. A zero-length segment
/// yields exactly one point.
#[derive(Debug, Clone)]
pub struct VerticalWalk {
    x: i32,
    y: i64,
    step: i64,
    remaining: usize,
}

impl VerticalWalk {
    /// Create a walk between two points sharing an x coordinate.
    pub fn new(start: Point, end: Point) -> Self {
        debug_assert_eq!(start.x, end.x);
        let step = if end.y > start.y { 1 } else { -1 };
        let span = (end.y as i64 - start.y as i64).abs() + 1;
        Self {
            x: start.x,
            y: start.y as i64,
            step,
            remaining: usize::try_from(span).unwrap_or(usize::MAX),
        }
    }
}

impl Iterator for VerticalWalk {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let p = Point::new(self.x, self.y as i32);
        self.y += self.step;
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for VerticalWalk {}

/// Walks x from `start.x` to `end.x` inclusive, raising y by one per step.
#[derive(Debug, Clone)]
pub struct DiagonalWalk {
    start: Point,
    offset: i64,
    remaining: usize,
}

impl DiagonalWalk {
    /// Create a walk along a unit positive slope.
    pub fn new(start: Point, end: Point) -> Self {
        let dx = end.x as i64 - start.x as i64;
        debug_assert_eq!(dx, end.y as i64 - start.y as i64);
        Self {
            start,
            offset: 0,
            remaining: usize::try_from(dx + 1).unwrap_or(0),
        }
    }
}

impl Iterator for DiagonalWalk {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let p = Point::new(
            (self.start.x as i64 + self.offset) as i32,
            (self.start.y as i64 + self.offset) as i32,
        );
        self.offset += 1;
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for DiagonalWalk {}
