//! Midline - Midpoint line rasterization
//!
//! Turns segments between integer world points into pixel sequences using
//! integer-only decision-variable stepping, then maps those pixels into the
//! normalized [-1, 1] device space a renderer consumes.
//!
//! # Overview
//!
//! - Point types and the capacity-bounded point buffer (re-exported at the
//!   crate root)
//! - World-to-normalized viewport transform ([`transform`])
//! - The rasterizer, the drawing session and the test pattern ([`raster`])
//!
//! # Example
//!
//! ```
//! use midline::raster::{Session, SessionOptions, rasterize};
//! use midline::transform::Viewport;
//! use midline::Point;
//!
//! let px = rasterize(Point::new(0, 0), Point::new(4, 2));
//! assert_eq!(px.len(), 5);
//! assert_eq!(px[2], Point::new(2, 1));
//!
//! let viewport = Viewport::new(800, 600).unwrap();
//! let mut session = Session::new(viewport, SessionOptions::default());
//! session.draw_line(Point::new(0, 0), Point::new(4, 2)).unwrap();
//! assert_eq!(session.buffer().len(), 5);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use midline_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use midline_raster as raster;
pub use midline_transform as transform;
