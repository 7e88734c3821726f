//! Octant classification
//!
//! A line has eight symmetric slope classes. Once the dispatcher has swapped
//! the endpoints so that x never decreases, only the four right-hand octant
//! families remain:
//!
//! ```text
//!            SteepNegative
//!               |  /
//!               | /   ShallowNegative
//!   start  o----+------------------- x
//!               | \   ShallowPositive
//!               |  \
//!            SteepPositive            (y grows downward on screen)
//! ```
//!
//! Every family is the same walk in a local *(major, minor)* frame: the
//! major axis advances by one per pixel, the minor axis advances by zero or
//! one. An [`Octant`] carries the axis swap and the sign flips that map that
//! frame back to world coordinates.

use midline_core::Point;

/// One of the four octant families reachable after x-ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Octant {
    /// `|dy| < dx`, `dy >= 0`: x major, y increases
    ShallowPositive,
    /// `|dy| < dx`, `dy < 0`: x major, y decreases
    ShallowNegative,
    /// `|dy| >= dx`, `dy >= 0`: y major increasing, x increases
    SteepPositive,
    /// `|dy| >= dx`, `dy < 0`: y major decreasing, x increases
    SteepNegative,
}

impl Octant {
    /// All octant families, in dispatch order.
    pub const ALL: [Octant; 4] = [
        Octant::ShallowPositive,
        Octant::ShallowNegative,
        Octant::SteepPositive,
        Octant::SteepNegative,
    ];

    /// Classify from the deltas of an x-ordered segment.
    ///
    /// Assumes `dx > 0`; the vertical case must be handled before calling.
    /// Uses the sign of `dy` in place of the sign of `dy / dx`, which is the
    /// same thing when `dx > 0`.
    pub fn from_deltas(dx: i64, dy: i64) -> Self {
        debug_assert!(dx > 0, "octant classification requires dx > 0");
        match (dy.abs() < dx, dy < 0) {
            (true, false) => Octant::ShallowPositive,
            (true, true) => Octant::ShallowNegative,
            (false, false) => Octant::SteepPositive,
            (false, true) => Octant::SteepNegative,
        }
    }

    /// Classify a segment.
    ///
    /// Returns `None` unless `start.x < end.x`.
    pub fn classify(start: Point, end: Point) -> Option<Self> {
        let dx = end.x as i64 - start.x as i64;
        let dy = end.y as i64 - start.y as i64;
        (dx > 0).then(|| Self::from_deltas(dx, dy))
    }

    /// Whether y is the major axis.
    #[inline]
    pub fn is_steep(self) -> bool {
        matches!(self, Octant::SteepPositive | Octant::SteepNegative)
    }

    /// Whether y decreases along the walk.
    #[inline]
    pub fn is_negative(self) -> bool {
        matches!(self, Octant::ShallowNegative | Octant::SteepNegative)
    }

    /// Major and minor extents `(a, b)` of the segment in this octant's frame.
    ///
    /// Both are non-negative for a segment that classifies to `self`, and
    /// `b <= a`.
    pub fn extents(self, start: Point, end: Point) -> (i64, i64) {
        let dx = end.x as i64 - start.x as i64;
        let dy = end.y as i64 - start.y as i64;
        match self {
            Octant::ShallowPositive => (dx, dy),
            Octant::ShallowNegative => (dx, -dy),
            Octant::SteepPositive => (dy, dx),
            Octant::SteepNegative => (-dy, dx),
        }
    }

    /// Map a frame offset `(major, minor)` from `start` to a world pixel.
    #[inline]
    pub fn to_world(self, start: Point, major: i64, minor: i64) -> Point {
        let (ox, oy) = match self {
            Octant::ShallowPositive => (major, minor),
            Octant::ShallowNegative => (major, -minor),
            Octant::SteepPositive => (minor, major),
            Octant::SteepNegative => (minor, -major),
        };
        Point::new(
            (start.x as i64 + ox) as i32,
            (start.y as i64 + oy) as i32,
        )
    }
}
