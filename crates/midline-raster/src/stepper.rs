//! Decision-variable stepper
//!
//! One midpoint walker for all four octant families. In an octant's local
//! frame (see [`Octant`]) the line runs `a` units along the major axis and
//! `b <= a` units along the minor axis. The walker keeps an integer
//! decision value `d`, twice the signed distance between the ideal line and
//! the midpoint of the two candidate pixels:
//!
//! ```text
//! emit (major, minor)
//! if d > 0 (or d == 0 when the octant steps on ties):
//!     d += 2 * (b - a); minor += 1
//! else:
//!     d += 2 * b
//! major += 1
//! ```
//!
//! Every octant family uses this update. The families differ only in how a
//! tie is broken, in the initial value of `d`, and in whether the final
//! major coordinate is emitted. Those three knobs form a [`DecisionRule`].
//!
//! # Fidelity
//!
//! [`Fidelity::Legacy`] reproduces a well-known hand-written set of four
//! loops exactly:
//!
//! | Octant | initial `d` | tie | last pixel |
//! |---|---|---|---|
//! | shallow positive | `2b - a` | no step | emitted |
//! | shallow negative | `2b - a` | step | emitted |
//! | steep positive | `-(a + 2b)` | step | emitted |
//! | steep negative | `3b` | no step | dropped |
//!
//! The steep entries are off by a constant. They drift one pixel away from
//! the ideal line and the steep-negative walk stops one row short of its
//! endpoint. [`Fidelity::Corrected`] (the default) starts every octant at
//! `2b - a` and always emits the endpoint, while keeping the tie polarity of
//! each family. Shallow lines are identical under both.

use crate::octant::Octant;
use midline_core::Point;

/// Which stepping rules to apply to steep lines.
///
/// The default, [`Fidelity::Corrected`], departs from the legacy loops in
/// both steep octants. Steep walks start at `2b - a`; the legacy
/// steep-positive start is `dy + 2dx` (`-(a + 2b)` in the local frame).
/// Steep-negative walks also include their endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Fidelity {
    /// Textbook initial decision value and inclusive end in every octant
    #[default]
    Corrected,
    /// Bit-for-bit reproduction of the legacy loops
    Legacy,
}

/// Initial decision value, tie polarity and end-bound of one walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecisionRule {
    /// Value of `d` before the first pixel
    pub initial: i64,
    /// Take the minor step when `d == 0`
    pub step_on_tie: bool,
    /// Emit the pixel at the final major coordinate
    pub inclusive_end: bool,
}

impl DecisionRule {
    /// Rule for a walk of extents `(a, b)` in `octant`.
    pub fn new(octant: Octant, fidelity: Fidelity, a: i64, b: i64) -> Self {
        let step_on_tie = matches!(octant, Octant::ShallowNegative | Octant::SteepPositive);
        let textbook = 2 * b - a;
        match fidelity {
            Fidelity::Corrected => Self {
                initial: textbook,
                step_on_tie,
                inclusive_end: true,
            },
            Fidelity::Legacy => {
                let initial = match octant {
                    Octant::ShallowPositive | Octant::ShallowNegative => textbook,
                    Octant::SteepPositive => -(a + 2 * b),
                    Octant::SteepNegative => 3 * b,
                };
                Self {
                    initial,
                    step_on_tie,
                    inclusive_end: octant != Octant::SteepNegative,
                }
            }
        }
    }
}

/// Iterator over the pixels of a non-vertical line in one octant.
#[derive(Debug, Clone)]
pub struct Stepper {
    octant: Octant,
    start: Point,
    major: i64,
    minor: i64,
    d: i64,
    inc_straight: i64,
    inc_diagonal: i64,
    step_on_tie: bool,
    remaining: usize,
}

impl Stepper {
    /// Walk from `start` to `end` in `octant`.
    ///
    /// `start.x < end.x` and `Octant::classify(start, end) == Some(octant)`
    /// are preconditions; the dispatcher in [`crate::line`] guarantees both.
    pub fn new(octant: Octant, start: Point, end: Point, fidelity: Fidelity) -> Self {
        debug_assert_eq!(Octant::classify(start, end), Some(octant));
        let (a, b) = octant.extents(start, end);
        let rule = DecisionRule::new(octant, fidelity, a, b);
        let steps = if rule.inclusive_end { a + 1 } else { a };
        Self {
            octant,
            start,
            major: 0,
            minor: 0,
            d: rule.initial,
            inc_straight: 2 * b,
            inc_diagonal: 2 * (b - a),
            step_on_tie: rule.step_on_tie,
            remaining: usize::try_from(steps).unwrap_or(usize::MAX),
        }
    }

    /// The octant being walked.
    pub fn octant(&self) -> Octant {
        self.octant
    }
}

impl Iterator for Stepper {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let p = self.octant.to_world(self.start, self.major, self.minor);

        if self.d > 0 || (self.step_on_tie && self.d == 0) {
            self.d += self.inc_diagonal;
            self.minor += 1;
        } else {
            self.d += self.inc_straight;
        }
        self.major += 1;

        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Stepper {}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk(start: (i32, i32), end: (i32, i32), fidelity: Fidelity) -> Vec<(i32, i32)> {
        let (s, e) = (Point::from(start), Point::from(end));
        let octant = Octant::classify(s, e).unwrap();
        Stepper::new(octant, s, e, fidelity).map(Into::into).collect()
    }

    #[test]
    fn test_shallow_positive_trace() {
        let pts = walk((0, 0), (4, 2), Fidelity::Corrected);
        assert_eq!(pts, vec![(0, 0), (1, 0), (2, 1), (3, 1), (4, 2)]);
    }

    #[test]
    fn test_horizontal_degenerates_to_run() {
        let pts = walk((2, 7), (6, 7), Fidelity::Corrected);
        assert_eq!(pts, vec![(2, 7), (3, 7), (4, 7), (5, 7), (6, 7)]);
    }

    #[test]
    fn test_shallow_negative_steps_on_tie() {
        let pts = walk((0, 0), (4, -2), Fidelity::Corrected);
        assert_eq!(pts, vec![(0, 0), (1, -1), (2, -1), (3, -2), (4, -2)]);
    }

    #[test]
    fn test_decision_rules_by_fidelity() {
        let (a, b) = (7, 3);
        for octant in Octant::ALL {
            let rule = DecisionRule::new(octant, Fidelity::Corrected, a, b);
            assert_eq!(rule.initial, 2 * b - a);
            assert!(rule.inclusive_end);
        }
        let legacy = DecisionRule::new(Octant::SteepPositive, Fidelity::Legacy, a, b);
        assert_eq!(legacy.initial, -(a + 2 * b));
        assert!(legacy.inclusive_end);
        let legacy = DecisionRule::new(Octant::SteepNegative, Fidelity::Legacy, a, b);
        assert_eq!(legacy.initial, 3 * b);
        assert!(!legacy.inclusive_end);
    }

    #[test]
    fn test_steep_positive_corrected_reaches_end() {
        let pts = walk((0, 0), (1, 3), Fidelity::Corrected);
        assert_eq!(pts, vec![(0, 0), (0, 1), (1, 2), (1, 3)]);
    }

    #[test]
    fn test_steep_positive_legacy_drifts() {
        let pts = walk((0, 0), (1, 3), Fidelity::Legacy);
        assert_eq!(pts, vec![(0, 0), (0, 1), (0, 2), (0, 3)]);
    }

    #[test]
    fn test_steep_negative_corrected_reaches_end() {
        let pts = walk((0, 0), (1, -3), Fidelity::Corrected);
        assert_eq!(pts, vec![(0, 0), (0, -1), (1, -2), (1, -3)]);
    }

    #[test]
    fn test_steep_negative_legacy_drops_end() {
        let pts = walk((0, 0), (1, -3), Fidelity::Legacy);
        assert_eq!(pts, vec![(0, 0), (1, -1), (1, -2)]);
    }

    #[test]
    fn test_negative_unit_slope() {
        let pts = walk((0, 0), (3, -3), Fidelity::Corrected);
        assert_eq!(pts, vec![(0, 0), (1, -1), (2, -2), (3, -3)]);
        let legacy = walk((0, 0), (3, -3), Fidelity::Legacy);
        assert_eq!(legacy, vec![(0, 0), (1, -1), (2, -2)]);
    }

    #[test]
    fn test_shallow_rules_match_across_fidelity() {
        for oct in [Octant::ShallowPositive, Octant::ShallowNegative] {
            assert_eq!(
                DecisionRule::new(oct, Fidelity::Corrected, 9, 4),
                DecisionRule::new(oct, Fidelity::Legacy, 9, 4)
            );
        }
    }

    #[test]
    fn test_exact_size() {
        let s = Point::new(0, 0);
        let e = Point::new(10, -3);
        let stepper = Stepper::new(Octant::ShallowNegative, s, e, Fidelity::Corrected);
        assert_eq!(stepper.len(), 11);
        assert_eq!(stepper.octant(), Octant::ShallowNegative);
    }
}
