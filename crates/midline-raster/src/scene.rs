//! Test pattern
//!
//! A fixed set of segments laid out relative to the canvas that touches
//! every dispatch path: both axes, all four octant families (each drawn
//! both toward and away from the center) and the four 100-pixel diagonals.
//!
//! All fractions of the canvas size use integer division, computed in
//! `i64` so the largest accepted canvas cannot overflow.

use crate::line::Segment;
use midline_core::Point;
use midline_transform::Viewport;

/// `dim * num / den` for `num <= den`, on the world grid.
fn fraction(dim: u32, num: i64, den: i64) -> i32 {
    i32::try_from(i64::from(dim) * num / den).unwrap_or(i32::MAX)
}

/// One labelled segment of the pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternLine {
    /// Short description of what the segment exercises
    pub label: &'static str,
    /// The segment itself
    pub segment: Segment,
}

/// Build the pattern for `viewport`.
pub fn test_pattern(viewport: &Viewport) -> Vec<PatternLine> {
    let (width, height) = (viewport.width(), viewport.height());
    let w = fraction(width, 1, 1);
    let h = fraction(height, 1, 1);
    let (origin_left, origin_top) = viewport.origin();
    let left = origin_left.round() as i32;
    let top = origin_top.round() as i32;
    // at most MAX_DIMENSION / 2, so the diagonals' +-100 stays in range
    let Point { x: cx, y: cy } = viewport.center();

    let line = |label: &'static str, x1: i32, y1: i32, x2: i32, y2: i32| PatternLine {
        label,
        segment: Segment::new(Point::new(x1, y1), Point::new(x2, y2)),
    };

    vec![
        // axes
        line("x axis", left, cy, w, cy),
        line("y axis", cx, h, cx, top),
        // shallow
        line("shallow positive, inward", left, fraction(height, 1, 4), cx, cy),
        line("shallow positive, outward", cx, cy, w, fraction(height, 3, 4)),
        line("shallow negative, inward", left, fraction(height, 3, 4), cx, cy),
        line("shallow negative, outward", cx, cy, w, fraction(height, 1, 4)),
        line("top center to right", cx, top, fraction(width, 3, 4), cy),
        line("top center to left", cx, top, fraction(width, 1, 4), cy),
        line("bottom center to right", cx, h, fraction(width, 3, 4), cy),
        line("bottom center to left", cx, h, fraction(width, 1, 4), cy),
        // steep
        line("steep, up right", cx, cy, fraction(width, 13, 25), top),
        line("steep, down right", cx, cy, fraction(width, 13, 25), h),
        line("steep, from top left", fraction(width, 12, 25), top, cx, cy),
        line("steep, from bottom left", fraction(width, 12, 25), h, cx, cy),
        // unit slope
        line("diagonal +1, outward", cx, cy, cx + 100, cy + 100),
        line("diagonal +1, inward", cx - 100, cy - 100, cx, cy),
        line("diagonal -1, outward", cx, cy, cx + 100, cy - 100),
        line("diagonal -1, inward", cx - 100, cy + 100, cx, cy),
    ]
}
