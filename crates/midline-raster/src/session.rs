//! Drawing session
//!
//! A [`Session`] owns everything a sequence of draw calls shares: the
//! viewport, the point buffer, the options and the pending click. It is
//! driven by one thread of control; `&mut self` on every drawing method
//! is the only synchronization there is.
//!
//! # Overflow handling
//!
//! Every segment's pixel count is known before the first pixel is written
//! (`Line` is an `ExactSizeIterator`). The session checks it against the
//! buffer up front, so a segment is either appended completely or not at
//! all:
//!
//! - [`OverflowPolicy::Reject`] fails the call with
//!   `Error::CapacityExceeded` and leaves the buffer untouched.
//! - [`OverflowPolicy::Grow`] enlarges the buffer first, at least doubling
//!   its capacity.

use crate::error::RasterResult;
use crate::input::{ClickOutcome, ClickPairer, to_world};
use crate::line::{Line, Segment};
use crate::scene;
use crate::stepper::Fidelity;
use midline_core::{DEFAULT_CAPACITY, NormPoint, Point, PointBuffer};
use midline_transform::Viewport;

/// What to do when a segment does not fit in the point buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// Refuse the segment and leave the buffer unchanged
    #[default]
    Reject,
    /// Grow the buffer to fit
    Grow,
}

/// Session configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// Initial point buffer capacity
    pub capacity: usize,
    /// Behavior on buffer exhaustion
    pub overflow: OverflowPolicy,
    /// Stepping rules for steep lines
    pub fidelity: Fidelity,
    /// Log every emitted pixel at debug level instead of trace
    pub trace_points: bool,
    /// Append a marker point for every click
    pub mark_clicks: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            overflow: OverflowPolicy::Reject,
            fidelity: Fidelity::Corrected,
            trace_points: false,
            mark_clicks: true,
        }
    }
}

impl SessionOptions {
    /// Set the initial buffer capacity.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Set the overflow policy.
    pub fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }

    /// Set the stepping fidelity.
    pub fn with_fidelity(mut self, fidelity: Fidelity) -> Self {
        self.fidelity = fidelity;
        self
    }

    /// Enable or disable per-pixel debug logging.
    pub fn with_trace_points(mut self, trace_points: bool) -> Self {
        self.trace_points = trace_points;
        self
    }

    /// Enable or disable click markers.
    pub fn with_mark_clicks(mut self, mark_clicks: bool) -> Self {
        self.mark_clicks = mark_clicks;
        self
    }
}

/// Rasterization context: viewport, output buffer and input state.
#[derive(Debug, Clone)]
pub struct Session {
    viewport: Viewport,
    buffer: PointBuffer,
    options: SessionOptions,
    clicks: ClickPairer,
}

impl Session {
    /// Create a session with an empty buffer of `options.capacity` points.
    pub fn new(viewport: Viewport, options: SessionOptions) -> Self {
        Self {
            viewport,
            buffer: PointBuffer::with_capacity(options.capacity),
            options,
            clicks: ClickPairer::new(),
        }
    }

    /// The current viewport.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Replace the viewport, e.g. after the canvas was resized.
    ///
    /// Points already in the buffer keep their old normalization.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// The output buffer, for a renderer to upload.
    pub fn buffer(&self) -> &PointBuffer {
        &self.buffer
    }

    /// The session options.
    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// The pending first click, if any.
    pub fn pending_click(&self) -> Option<Point> {
        self.clicks.pending()
    }

    /// Make sure `count` more points can be appended.
    fn ensure_room(&mut self, count: usize) -> RasterResult<()> {
        match self.options.overflow {
            OverflowPolicy::Reject => {
                if let Err(e) = self.buffer.check_room(count) {
                    log::warn!("rejecting {} points: {}", count, e);
                    return Err(e.into());
                }
            }
            OverflowPolicy::Grow => {
                let shortfall = count.saturating_sub(self.buffer.remaining());
                if shortfall > 0 {
                    self.buffer
                        .reserve_exact(shortfall.max(self.buffer.capacity()));
                }
            }
        }
        Ok(())
    }

    /// Append one normalized point.
    ///
    /// # Errors
    ///
    /// Fails with `Error::CapacityExceeded` under [`OverflowPolicy::Reject`]
    /// when the buffer is full.
    pub fn add_point(&mut self, point: NormPoint) -> RasterResult<()> {
        self.ensure_room(1)?;
        log::trace!("adding point {}", point);
        self.buffer.push(point)?;
        Ok(())
    }

    /// Rasterize a segment, appending its normalized pixels to the buffer.
    ///
    /// Returns the world pixels in walk order (x ascending; see
    /// [`crate::line`]).
    ///
    /// # Errors
    ///
    /// Fails with `Error::CapacityExceeded` under [`OverflowPolicy::Reject`]
    /// when the whole segment does not fit. Nothing is appended then.
    pub fn draw_line(&mut self, start: Point, end: Point) -> RasterResult<Vec<Point>> {
        let line = Line::with_fidelity(start, end, self.options.fidelity);
        self.ensure_room(line.len())?;

        let level = if self.options.trace_points {
            log::Level::Debug
        } else {
            log::Level::Trace
        };
        let mut pixels = Vec::with_capacity(line.len());
        for p in line {
            let n = self.viewport.normalize(p);
            log::log!(level, "drawing point {} at {}", p, n);
            self.buffer.push(n)?;
            pixels.push(p);
        }
        Ok(pixels)
    }

    /// Rasterize a [`Segment`].
    pub fn draw_segment(&mut self, segment: Segment) -> RasterResult<Vec<Point>> {
        self.draw_line(segment.start, segment.end)
    }

    /// Rasterize segments in order, stopping at the first error.
    ///
    /// Returns the total number of pixels appended.
    pub fn draw_segments<I>(&mut self, segments: I) -> RasterResult<usize>
    where
        I: IntoIterator<Item = Segment>,
    {
        let mut total = 0;
        for seg in segments {
            total += self.draw_segment(seg)?.len();
        }
        Ok(total)
    }

    /// Draw the built-in test pattern for the current viewport.
    ///
    /// Returns the total number of pixels appended.
    pub fn draw_test_pattern(&mut self) -> RasterResult<usize> {
        log::info!(
            "drawing test pattern on {}x{} canvas",
            self.viewport.width(),
            self.viewport.height()
        );
        let lines = scene::test_pattern(&self.viewport);
        self.draw_segments(lines.into_iter().map(|l| l.segment))
    }

    /// Feed one raw pointer position.
    ///
    /// The position is normalized with the same viewport as rasterized
    /// pixels. With `mark_clicks` set, the click itself is appended as a
    /// marker point. Every second click rasterizes the segment from the
    /// pending click to this one.
    ///
    /// # Errors
    ///
    /// Capacity errors are reported as for [`Session::draw_line`]. Room for
    /// the marker and the completed segment is checked together, so a
    /// rejected click leaves the buffer and the pending start unchanged.
    pub fn add_click(&mut self, x: f64, y: f64) -> RasterResult<ClickOutcome> {
        let p = to_world(x, y);
        let marker = self
            .options
            .mark_clicks
            .then(|| self.viewport.normalize_xy(x, y));
        let segment_len = self.clicks.pending().map_or(0, |start| {
            Line::with_fidelity(start, p, self.options.fidelity).len()
        });
        self.ensure_room(segment_len.saturating_add(usize::from(marker.is_some())))?;

        if let Some(marker) = marker {
            log::debug!("click at ({}, {}) -> {}", x, y, marker);
            self.buffer.push(marker)?;
        }
        match self.clicks.feed(p) {
            None => Ok(ClickOutcome::Pending(p)),
            Some((start, end)) => Ok(ClickOutcome::Drawn(self.draw_line(start, end)?)),
        }
    }

    /// Forget the pending click.
    pub fn cancel_click(&mut self) {
        self.clicks.reset();
    }
}
