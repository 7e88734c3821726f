//! PointBuffer - Capacity-checked vertex store
//!
//! The rasterizer's only output surface. Normalized points are appended in
//! emission order and never removed.
//!
//! # Storage layout
//!
//! Points are stored interleaved as `x, y, z` triples with `z = 0.0`, the
//! layout a point-primitive draw call consumes directly. A renderer reads
//! [`PointBuffer::vertices`] together with [`PointBuffer::len`].
//!
//! # Capacity
//!
//! Capacity is explicit and enforced. [`PointBuffer::push`] fails with
//! [`Error::CapacityExceeded`] instead of writing past the end; callers that
//! want to grow do so through [`PointBuffer::reserve_exact`].

use crate::error::{Error, Result};
use crate::point::NormPoint;

/// Number of `f32` components per stored point.
pub const VERTEX_STRIDE: usize = 3;

/// Capacity used when none is given: the 90 000-float vertex array of the
/// reference renderer, i.e. 30 000 points.
pub const DEFAULT_CAPACITY: usize = 30_000;

/// Append-only, capacity-checked store of normalized points.
#[derive(Debug, Clone)]
pub struct PointBuffer {
    /// Interleaved x, y, z components
    vertices: Vec<f32>,
    /// Maximum number of points
    capacity: usize,
    /// Incremented on every successful append
    generation: u64,
}

impl Default for PointBuffer {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl PointBuffer {
    /// Create a buffer that holds at most `capacity` points.
    ///
    /// The backing storage is allocated up front.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity * VERTEX_STRIDE),
            capacity,
            generation: 0,
        }
    }

    /// Get the number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len() / VERTEX_STRIDE
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Maximum number of points the buffer accepts.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of points that can still be appended.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.capacity - self.len()
    }

    /// Change counter for renderers that re-upload on modification.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Verify that `count` more points fit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityExceeded`] if they do not.
    pub fn check_room(&self, count: usize) -> Result<()> {
        let requested = self.len().saturating_add(count);
        if requested > self.capacity {
            return Err(Error::CapacityExceeded {
                capacity: self.capacity,
                requested,
            });
        }
        Ok(())
    }

    /// Append a point.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityExceeded`] if the buffer is full. The buffer
    /// is left unchanged in that case.
    pub fn push(&mut self, point: NormPoint) -> Result<()> {
        self.check_room(1)?;
        self.vertices.extend_from_slice(&[point.x, point.y, 0.0]);
        self.generation += 1;
        Ok(())
    }

    /// Append every point of `points`, or none of them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityExceeded`] if the whole slice does not fit.
    pub fn extend_from_slice(&mut self, points: &[NormPoint]) -> Result<()> {
        self.check_room(points.len())?;
        for p in points {
            self.vertices.extend_from_slice(&[p.x, p.y, 0.0]);
        }
        if !points.is_empty() {
            self.generation += 1;
        }
        Ok(())
    }

    /// Raise the capacity by `additional` points.
    pub fn reserve_exact(&mut self, additional: usize) {
        if additional == 0 {
            return;
        }
        self.capacity = self.capacity.saturating_add(additional);
        let wanted = self.capacity.saturating_mul(VERTEX_STRIDE);
        self.vertices.reserve_exact(wanted - self.vertices.len());
        log::debug!(
            "point buffer grown by {} to capacity {}",
            additional,
            self.capacity
        );
    }

    /// Get a point by index.
    ///
    /// Returns `None` if the index is out of bounds.
    pub fn get(&self, index: usize) -> Option<NormPoint> {
        let base = index.checked_mul(VERTEX_STRIDE)?;
        let v = self.vertices.get(base..base.checked_add(VERTEX_STRIDE)?)?;
        Some(NormPoint::new(v[0], v[1]))
    }

    /// Get the most recently appended point.
    pub fn last(&self) -> Option<NormPoint> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }

    /// Interleaved vertex data, `len() * VERTEX_STRIDE` floats.
    pub fn vertices(&self) -> &[f32] {
        &self.vertices
    }

    /// Create an iterator over points.
    pub fn iter(&self) -> PointBufferIter<'_> {
        PointBufferIter {
            chunks: self.vertices.chunks_exact(VERTEX_STRIDE),
        }
    }
}

/// Iterator over PointBuffer points.
pub struct PointBufferIter<'a> {
    chunks: std::slice::ChunksExact<'a, f32>,
}

impl Iterator for PointBufferIter<'_> {
    type Item = NormPoint;

    fn next(&mut self) -> Option<Self::Item> {
        self.chunks.next().map(|v| NormPoint::new(v[0], v[1]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for PointBufferIter<'_> {}

impl<'a> IntoIterator for &'a PointBuffer {
    type Item = NormPoint;
    type IntoIter = PointBufferIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
