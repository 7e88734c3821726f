//! midline-raster - Midpoint line rasterization
//!
//! This crate turns segments between integer world points into pixel
//! sequences with integer-only decision-variable stepping:
//!
//! - [`Line`] / [`rasterize`] - dispatcher: endpoint ordering, degenerate
//!   cases, octant classification
//! - [`Octant`] - the four octant families and their axis/sign transform
//! - [`Stepper`] - one midpoint walker parameterized by octant and
//!   [`Fidelity`]
//! - [`VerticalWalk`] / [`DiagonalWalk`] - degenerate-case walkers
//! - [`Session`] - viewport, point buffer and click state for a sequence
//!   of draw calls
//! - [`test_pattern`] - canonical segment set covering every path

pub mod degenerate;
mod error;
pub mod input;
pub mod line;
pub mod octant;
pub mod scene;
pub mod session;
pub mod stepper;

pub use degenerate::{DiagonalWalk, VerticalWalk};
pub use error::{RasterError, RasterResult};
pub use input::{ClickOutcome, ClickPairer};
pub use line::{Line, LineKind, Segment, rasterize, rasterize_with};
pub use octant::Octant;
pub use scene::{PatternLine, test_pattern};
pub use session::{OverflowPolicy, Session, SessionOptions};
pub use stepper::{DecisionRule, Fidelity, Stepper};
