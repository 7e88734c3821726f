//! Pointer input pairing
//!
//! An input source delivers single positions (clicks). Every two positions
//! make one segment: the first is held as the pending start, the second
//! completes the segment and clears the pending state.

use midline_core::Point;

/// Pairs successive positions into segments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickPairer {
    pending: Option<Point>,
}

impl ClickPairer {
    /// Create a pairer with no pending start.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one position.
    ///
    /// Returns the completed `(start, end)` pair on every second call.
    pub fn feed(&mut self, p: Point) -> Option<(Point, Point)> {
        match self.pending.take() {
            Some(start) => Some((start, p)),
            None => {
                self.pending = Some(p);
                None
            }
        }
    }

    /// The start point waiting for its partner, if any.
    pub fn pending(&self) -> Option<Point> {
        self.pending
    }

    /// Drop any pending start.
    pub fn reset(&mut self) {
        self.pending = None;
    }
}

/// Round a raw pointer position to the world pixel it falls in.
pub fn to_world(x: f64, y: f64) -> Point {
    Point::new(x.round() as i32, y.round() as i32)
}

/// Result of feeding one click into a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// First click of a pair; holds the pending start
    Pending(Point),
    /// Second click of a pair; holds the rasterized pixels
    Drawn(Vec<Point>),
}
