//! midline-test - Regression test framework for midline
//!
//! Every `tests/*_reg.rs` file in the workspace drives its checks through a
//! [`RegParams`], which counts checks, collects failures instead of
//! panicking on the first one, and reports a summary at the end.
//!
//! # Usage
//!
//! ```ignore
//! use midline_test::RegParams;
//!
//! let mut rp = RegParams::new("octant");
//! rp.compare_values(5.0, points.len() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "display" to dump every compared point sequence
//! - `RUST_LOG`: Forwarded to `env_logger`

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use midline_core::Point;

/// Perpendicular distance from `p` to the infinite line through `a` and `b`.
///
/// Returns the plain distance to `a` when `a == b`.
pub fn distance_to_line(p: Point, a: Point, b: Point) -> f64 {
    let (px, py) = (p.x as f64, p.y as f64);
    let (ax, ay) = (a.x as f64, a.y as f64);
    let (bx, by) = (b.x as f64, b.y as f64);
    let (dx, dy) = (bx - ax, by - ay);
    let len = dx.hypot(dy);
    if len == 0.0 {
        return (px - ax).hypot(py - ay);
    }
    ((px - ax) * dy - (py - ay) * dx).abs() / len
}
