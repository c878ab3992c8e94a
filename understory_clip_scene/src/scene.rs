// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Segment list + clip window, re‑clipped on every change.

use alloc::vec::Vec;
use core::fmt;

use kurbo::{Line, Point};
use rand::Rng;
use understory_clip::{ClipResult, ClipWindow, InvalidWindow, clip};

use crate::random::{RandomConfig, random_segment, random_window};

/// Stable identity of a segment within a [`Scene`].
///
/// Identifiers are never reused within one scene, so a stale id held by the
/// UI after a removal resolves to [`SceneError::UnknownSegment`] rather than
/// to a different segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SegmentId(u32);

impl SegmentId {
    /// Returns the raw id value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

/// One end of a segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// The first point, `p0`.
    Start,
    /// The second point, `p1`.
    End,
}

/// A segment paired with its clipping outcome against the scene window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClippedSegment {
    /// Identity of the segment.
    pub id: SegmentId,
    /// The segment as entered, in world coordinates.
    pub segment: Line,
    /// The visible part of `segment`, if any.
    pub result: ClipResult,
}

/// Errors reported by [`Scene`] mutations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SceneError {
    /// No segment with this id exists in the scene.
    UnknownSegment(SegmentId),
    /// The submitted window bounds were rejected; the previous window is kept.
    InvalidWindow(InvalidWindow),
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownSegment(id) => write!(f, "no segment with id {}", id.get()),
            Self::InvalidWindow(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl core::error::Error for SceneError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::InvalidWindow(err) => Some(err),
            Self::UnknownSegment(_) => None,
        }
    }
}

impl From<InvalidWindow> for SceneError {
    fn from(err: InvalidWindow) -> Self {
        Self::InvalidWindow(err)
    }
}

/// An ordered list of segments plus one clip window.
///
/// Every effective mutation re‑runs clipping for all segments and bumps a
/// monotonically increasing [`revision`](Scene::revision), so
/// [`Scene::results`] is always current. Order only matters for display
/// numbering; see [`Scene::number_of`].
#[derive(Clone, Debug, Default)]
pub struct Scene {
    entries: Vec<ClippedSegment>,
    window: ClipWindow,
    next_id: u32,
    revision: u64,
}

impl Scene {
    /// Creates an empty scene with the default window (`-5..5` on both axes).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty scene with the given window.
    #[must_use]
    pub fn with_window(window: ClipWindow) -> Self {
        Self {
            window,
            ..Self::default()
        }
    }

    /// Returns the current clip window.
    #[must_use]
    pub fn window(&self) -> ClipWindow {
        self.window
    }

    /// Returns the change counter.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the scene holds no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Segments with their clipping results, in display order.
    #[must_use]
    pub fn results(&self) -> &[ClippedSegment] {
        &self.entries
    }

    /// Segments in display order.
    pub fn segments(&self) -> impl Iterator<Item = (SegmentId, Line)> + '_ {
        self.entries.iter().map(|e| (e.id, e.segment))
    }

    /// Looks up a segment by id.
    #[must_use]
    pub fn get(&self, id: SegmentId) -> Option<&ClippedSegment> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// 1‑based display number of a segment ("Segment 3").
    #[must_use]
    pub fn number_of(&self, id: SegmentId) -> Option<usize> {
        self.position(id).map(|idx| idx + 1)
    }

    /// Appends a segment and returns its id.
    pub fn add_segment(&mut self, segment: Line) -> SegmentId {
        let id = self.push(segment);
        tracing::debug!(id = id.get(), ?segment, "segment added");
        self.changed();
        id
    }

    /// Appends the default new segment, `(0, 0) → (1, 1)`.
    pub fn add_default_segment(&mut self) -> SegmentId {
        self.add_segment(Line::new((0.0, 0.0), (1.0, 1.0)))
    }

    /// Removes a segment, returning it.
    pub fn remove_segment(&mut self, id: SegmentId) -> Result<Line, SceneError> {
        let idx = self.position(id).ok_or(SceneError::UnknownSegment(id))?;
        let removed = self.entries.remove(idx);
        tracing::debug!(id = id.get(), "segment removed");
        self.changed();
        Ok(removed.segment)
    }

    /// Replaces a segment's geometry.
    ///
    /// Returns `Ok(false)` if the segment already had this geometry.
    pub fn set_segment(&mut self, id: SegmentId, segment: Line) -> Result<bool, SceneError> {
        let idx = self.position(id).ok_or(SceneError::UnknownSegment(id))?;
        if self.entries[idx].segment == segment {
            return Ok(false);
        }
        self.entries[idx].segment = segment;
        self.changed();
        Ok(true)
    }

    /// Moves one endpoint of a segment.
    ///
    /// Returns `Ok(false)` if the endpoint was already at `pt`.
    pub fn set_endpoint(
        &mut self,
        id: SegmentId,
        endpoint: Endpoint,
        pt: Point,
    ) -> Result<bool, SceneError> {
        let mut segment = self
            .get(id)
            .ok_or(SceneError::UnknownSegment(id))?
            .segment;
        match endpoint {
            Endpoint::Start => segment.p0 = pt,
            Endpoint::End => segment.p1 = pt,
        }
        self.set_segment(id, segment)
    }

    /// Replaces the clip window.
    ///
    /// Returns `false` if the window is unchanged.
    pub fn set_window(&mut self, window: ClipWindow) -> bool {
        if self.window == window {
            return false;
        }
        self.window = window;
        tracing::debug!(rect = ?window.rect(), "clip window updated");
        self.changed();
        true
    }

    /// Replaces the clip window from raw bounds.
    ///
    /// Inverted or non‑finite bounds are rejected and the previous window is
    /// kept; see [`ClipWindow::new`].
    pub fn set_window_bounds(
        &mut self,
        x_min: f64,
        y_min: f64,
        x_max: f64,
        y_max: f64,
    ) -> Result<bool, SceneError> {
        let window = ClipWindow::new(x_min, y_min, x_max, y_max).inspect_err(|err| {
            tracing::debug!(error = %err, "clip window rejected");
        })?;
        Ok(self.set_window(window))
    }

    /// Replaces every segment with `config.segment_count` random segments.
    ///
    /// The new segments get fresh ids.
    pub fn randomize_segments<R: Rng + ?Sized>(&mut self, rng: &mut R, config: &RandomConfig) {
        self.entries.clear();
        for _ in 0..config.segment_count {
            self.push(random_segment(rng, config));
        }
        tracing::debug!(count = config.segment_count, "segments randomized");
        self.changed();
    }

    /// Replaces the window with a random one.
    ///
    /// Returns `false` if the draw happened to reproduce the current window.
    pub fn randomize_window<R: Rng + ?Sized>(&mut self, rng: &mut R, config: &RandomConfig) -> bool {
        self.set_window(random_window(rng, config))
    }

    /// Removes all segments; the window is kept.
    pub fn clear(&mut self) -> bool {
        if self.entries.is_empty() {
            return false;
        }
        self.entries.clear();
        tracing::debug!("segments cleared");
        self.changed();
        true
    }

    fn position(&self, id: SegmentId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    fn push(&mut self, segment: Line) -> SegmentId {
        let id = SegmentId(self.next_id);
        self.next_id += 1;
        self.entries.push(ClippedSegment {
            id,
            segment,
            result: ClipResult::Rejected,
        });
        id
    }

    /// Re‑clips every segment and bumps the revision.
    fn changed(&mut self) {
        let window = self.window;
        for entry in &mut self.entries {
            entry.result = clip(entry.segment, &window);
        }
        self.revision += 1;
    }
}
