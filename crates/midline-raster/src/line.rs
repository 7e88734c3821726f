//! Line dispatcher
//!
//! Turns a segment into the pixel walk that rasterizes it:
//!
//! 1. Swap the endpoints if `start.x > end.x`, so x never decreases along
//!    the walk. A segment and its reverse therefore produce the same pixel
//!    sequence; the direction of the call is not preserved.
//! 2. `start.x == end.x`: [`VerticalWalk`] (covers zero-length segments).
//! 3. `dx == dy`: [`DiagonalWalk`]. Only the positive diagonal is caught
//!    here; slope -1 goes to the steep-negative stepper.
//! 4. Otherwise classify into an [`Octant`] and run a [`Stepper`].
//!
//! The slope is never divided out. The vertical case is intercepted before
//! any classification, and the classification only compares `|dy|` with
//! `dx` and looks at the sign of `dy`.

use crate::degenerate::{DiagonalWalk, VerticalWalk};
use crate::octant::Octant;
use crate::stepper::{Fidelity, Stepper};
use midline_core::Point;

/// An ordered pair of world points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Segment {
    /// First endpoint as supplied
    pub start: Point,
    /// Second endpoint as supplied
    pub end: Point,
}

impl Segment {
    /// Create a new segment
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// The same segment with its endpoints exchanged
    pub const fn reversed(self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }

    /// Rasterize with [`Fidelity::Corrected`].
    pub fn rasterize(self) -> Vec<Point> {
        Line::new(self.start, self.end).collect()
    }
}

impl From<(Point, Point)> for Segment {
    fn from((start, end): (Point, Point)) -> Self {
        Self { start, end }
    }
}

/// How a segment was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// Same x at both ends
    Vertical,
    /// Slope exactly +1
    UnitDiagonal,
    /// General case, walked by the octant's stepper
    Stepped(Octant),
}

#[derive(Debug, Clone)]
enum Walk {
    Vertical(VerticalWalk),
    Diagonal(DiagonalWalk),
    Stepped(Stepper),
}

/// Iterator over the pixels of one segment, in x-ascending walk order.
#[derive(Debug, Clone)]
pub struct Line {
    start: Point,
    end: Point,
    kind: LineKind,
    walk: Walk,
}

impl Line {
    /// Dispatch a segment with [`Fidelity::Corrected`].
    pub fn new(start: Point, end: Point) -> Self {
        Self::with_fidelity(start, end, Fidelity::default())
    }

    /// Dispatch a segment.
    pub fn with_fidelity(start: Point, end: Point, fidelity: Fidelity) -> Self {
        let (start, end) = if start.x > end.x {
            (end, start)
        } else {
            (start, end)
        };
        let dx = end.x as i64 - start.x as i64;
        let dy = end.y as i64 - start.y as i64;
        log::debug!(
            "drawing line from {} to {} with slope {}/{}",
            start,
            end,
            dy,
            dx
        );

        let (kind, walk) = if dx == 0 {
            (LineKind::Vertical, Walk::Vertical(VerticalWalk::new(start, end)))
        } else if dx == dy {
            (
                LineKind::UnitDiagonal,
                Walk::Diagonal(DiagonalWalk::new(start, end)),
            )
        } else {
            let octant = Octant::from_deltas(dx, dy);
            (
                LineKind::Stepped(octant),
                Walk::Stepped(Stepper::new(octant, start, end, fidelity)),
            )
        };

        Self {
            start,
            end,
            kind,
            walk,
        }
    }

    /// First endpoint after x-ordering.
    pub fn start(&self) -> Point {
        self.start
    }

    /// Second endpoint after x-ordering.
    pub fn end(&self) -> Point {
        self.end
    }

    /// Classification of the segment.
    pub fn kind(&self) -> LineKind {
        self.kind
    }
}

impl Iterator for Line {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        match &mut self.walk {
            Walk::Vertical(w) => w.next(),
            Walk::Diagonal(w) => w.next(),
            Walk::Stepped(w) => w.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.walk {
            Walk::Vertical(w) => w.size_hint(),
            Walk::Diagonal(w) => w.size_hint(),
            Walk::Stepped(w) => w.size_hint(),
        }
    }
}

impl ExactSizeIterator for Line {}

/// Rasterize a segment into world pixels with [`Fidelity::Corrected`].
pub fn rasterize(start: Point, end: Point) -> Vec<Point> {
    Line::new(start, end).collect()
}

/// Rasterize a segment into world pixels.
pub fn rasterize_with(start: Point, end: Point, fidelity: Fidelity) -> Vec<Point> {
    Line::with_fidelity(start, end, fidelity).collect()
}
