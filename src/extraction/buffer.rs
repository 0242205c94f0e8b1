//! Partitioned point buffer.
//!
//! A [`PointBuffer`] stores the points of one extraction run in a fixed,
//! pre-allocated block and splits them with a single `size` cursor:
//!
//! ```text
//!  0                size                 len <= capacity
//!  ├── active ───────┼── consumed ────────┤
//! ```
//!
//! Active points are still candidates for sampling and association. Consumed
//! points have either been assigned to an accepted line or were displaced by
//! the trial in progress. Every operation only moves points; nothing is
//! duplicated or dropped.

use crate::core::ScanPoint;
use crate::diagnostics::{DiagnosticSink, Level, diag};

use super::error::FitError;

/// Fixed-capacity point storage with an active/consumed split.
#[derive(Clone, Debug)]
pub struct PointBuffer {
    points: Vec<ScanPoint>,
    capacity: usize,
    size: usize,
}

impl PointBuffer {
    /// Create an empty buffer able to hold `capacity` points.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
            capacity,
            size: 0,
        }
    }

    /// Replace the contents with `points`, all of them active.
    ///
    /// Reuses the existing allocation.
    pub fn load(&mut self, points: &[ScanPoint]) -> Result<(), FitError> {
        if points.len() > self.capacity {
            return Err(FitError::CapacityExceeded {
                len: points.len(),
                capacity: self.capacity,
            });
        }
        self.points.clear();
        self.points.extend_from_slice(points);
        self.size = points.len();
        Ok(())
    }

    /// Maximum number of points this buffer accepts.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of stored points (active + consumed).
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if no points are stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of active points.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Active region `[0, size)`.
    #[inline]
    pub fn active(&self) -> &[ScanPoint] {
        &self.points[..self.size]
    }

    /// Consumed region `[size, len)`.
    #[inline]
    pub fn consumed(&self) -> &[ScanPoint] {
        &self.points[self.size..]
    }

    /// All stored points in buffer order.
    #[inline]
    pub fn points(&self) -> &[ScanPoint] {
        &self.points
    }

    /// Contiguous span `[start, end)` of stored points.
    #[inline]
    pub fn span(&self, start: usize, end: usize) -> &[ScanPoint] {
        &self.points[start..end]
    }

    /// Point at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> ScanPoint {
        self.points[index]
    }

    /// Move the active point at `index` to the head of the consumed region.
    ///
    /// Points after `index` shift one slot left, so the remaining active points
    /// keep their relative order and the consumed region is only ever extended
    /// at its front. O(size).
    ///
    /// # Panics
    /// If `index >= size`.
    pub fn remove(&mut self, index: usize) {
        assert!(
            index < self.size,
            "remove index {index} outside active region of size {}",
            self.size
        );
        self.points[index..self.size].rotate_left(1);
        self.size -= 1;
    }

    /// Undo a failed trial by reactivating `[0, original_size)`.
    ///
    /// The reactivated range is re-sorted by angle with a maximum-selection
    /// pass: for each tail position from `original_size - 1` down to 1, the
    /// largest angle in the unprocessed prefix is swapped into it, the first
    /// maximum winning ties. Largest angles therefore end up last, which puts
    /// the range back into ascending angle order. Equal angles are not kept
    /// in their previous relative order.
    ///
    /// # Panics
    /// If `original_size` is smaller than the current size or larger than the
    /// number of stored points.
    pub fn restore(&mut self, original_size: usize) {
        assert!(
            original_size >= self.size && original_size <= self.points.len(),
            "restore size {original_size} outside [{}, {}]",
            self.size,
            self.points.len()
        );

        for i in (1..original_size).rev() {
            let mut select = 0;
            for j in 1..=i {
                if self.points[j].angle > self.points[select].angle {
                    select = j;
                }
            }
            self.points.swap(i, select);
        }
        self.size = original_size;
    }

    /// Write the active and consumed regions to `sink` at `level`.
    pub fn dump(&self, sink: &dyn DiagnosticSink, level: Level) {
        if !sink.enabled(level) {
            return;
        }
        diag!(sink, level, "---[active points: {}]---", self.size);
        for p in self.active() {
            diag!(sink, level, "Point [x: {:7.2} y: {:7.2} theta: {:7.2}]", p.x, p.y, p.angle);
        }
        diag!(sink, level, "---[consumed points: {}]---", self.len() - self.size);
        for p in self.consumed() {
            diag!(sink, level, "Point [x: {:7.2} y: {:7.2} theta: {:7.2}]", p.x, p.y, p.angle);
        }
    }
}
