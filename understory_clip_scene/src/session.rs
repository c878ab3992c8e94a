// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interactive session: a [`Scene`] and a [`Viewport`] driven by pointer,
//! wheel and command input.
//!
//! ## Usage
//!
//! 1) Create a [`ClipSession`] for the surface size.
//! 2) Register a [`StateObserver`] to learn when a redraw is due.
//! 3) Forward pointer and wheel events, and UI commands.
//! 4) On notification, call [`ClipSession::draw_list`] and paint it.
//!
//! Observers are only notified for mutations that actually changed state.

use alloc::boxed::Box;
use core::fmt;

use kurbo::{Line, Point, Size};
use rand::Rng;
use understory_clip::ClipWindow;
use understory_clip_view::{Viewport, ZoomDirection};

use crate::random::RandomConfig;
use crate::render::DrawList;
use crate::scene::{Endpoint, Scene, SceneError, SegmentId};

/// What part of the session changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StateChange {
    /// Segments or the clip window changed; clip results were recomputed.
    Scene,
    /// Pan, zoom or surface size changed.
    View,
}

/// Receives change notifications from a [`ClipSession`].
pub trait StateObserver {
    /// Called after each effective mutation.
    fn state_changed(&mut self, change: StateChange);
}

impl<F: FnMut(StateChange)> StateObserver for F {
    fn state_changed(&mut self, change: StateChange) {
        self(change);
    }
}

/// A scene, its viewport, and drag‑to‑pan tracking.
pub struct ClipSession {
    scene: Scene,
    viewport: Viewport,
    drag_last: Option<Point>,
    observer: Option<Box<dyn StateObserver>>,
}

impl fmt::Debug for ClipSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClipSession")
            .field("scene", &self.scene)
            .field("viewport", &self.viewport)
            .field("drag_last", &self.drag_last)
            .field("has_observer", &self.observer.is_some())
            .finish()
    }
}

impl ClipSession {
    /// Creates a session with an empty scene, the default window and a
    /// default viewport over `surface`.
    pub fn new(surface: Size) -> Self {
        Self::with_parts(Scene::new(), Viewport::new(surface))
    }

    /// Creates a session from existing parts.
    pub fn with_parts(scene: Scene, viewport: Viewport) -> Self {
        Self {
            scene,
            viewport,
            drag_last: None,
            observer: None,
        }
    }

    /// Sets the observer, replacing any previous one.
    pub fn set_observer(&mut self, observer: impl StateObserver + 'static) {
        self.observer = Some(Box::new(observer));
    }

    /// Removes the observer.
    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    /// The scene.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The viewport.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    // --- scene commands ---

    /// Appends a segment.
    pub fn add_segment(&mut self, segment: Line) -> SegmentId {
        let id = self.scene.add_segment(segment);
        self.notify(StateChange::Scene);
        id
    }

    /// Appends the default new segment.
    pub fn add_default_segment(&mut self) -> SegmentId {
        let id = self.scene.add_default_segment();
        self.notify(StateChange::Scene);
        id
    }

    /// Removes a segment.
    pub fn remove_segment(&mut self, id: SegmentId) -> Result<Line, SceneError> {
        let removed = self.scene.remove_segment(id)?;
        self.notify(StateChange::Scene);
        Ok(removed)
    }

    /// Replaces a segment's geometry.
    pub fn set_segment(&mut self, id: SegmentId, segment: Line) -> Result<bool, SceneError> {
        let changed = self.scene.set_segment(id, segment)?;
        self.notify_if(changed, StateChange::Scene);
        Ok(changed)
    }

    /// Moves one endpoint of a segment.
    pub fn set_endpoint(
        &mut self,
        id: SegmentId,
        endpoint: Endpoint,
        pt: Point,
    ) -> Result<bool, SceneError> {
        let changed = self.scene.set_endpoint(id, endpoint, pt)?;
        self.notify_if(changed, StateChange::Scene);
        Ok(changed)
    }

    /// Replaces the clip window.
    pub fn set_window(&mut self, window: ClipWindow) -> bool {
        let changed = self.scene.set_window(window);
        self.notify_if(changed, StateChange::Scene)
    }

    /// Replaces the clip window from raw bounds; invalid bounds keep the
    /// previous window and notify nobody.
    pub fn set_window_bounds(
        &mut self,
        x_min: f64,
        y_min: f64,
        x_max: f64,
        y_max: f64,
    ) -> Result<bool, SceneError> {
        let changed = self.scene.set_window_bounds(x_min, y_min, x_max, y_max)?;
        self.notify_if(changed, StateChange::Scene);
        Ok(changed)
    }

    /// Replaces every segment with random ones.
    pub fn randomize_segments<R: Rng + ?Sized>(&mut self, rng: &mut R, config: &RandomConfig) {
        self.scene.randomize_segments(rng, config);
        self.notify(StateChange::Scene);
    }

    /// Replaces the window with a random one.
    pub fn randomize_window<R: Rng + ?Sized>(&mut self, rng: &mut R, config: &RandomConfig) -> bool {
        let changed = self.scene.randomize_window(rng, config);
        self.notify_if(changed, StateChange::Scene)
    }

    // --- view commands ---

    /// Resizes the surface.
    pub fn set_surface_size(&mut self, surface: Size) -> bool {
        let changed = self.viewport.set_surface_size(surface);
        self.notify_if(changed, StateChange::View)
    }

    /// Sets the zoom level directly, clamped to the viewport limits.
    pub fn set_scale(&mut self, scale: f64) -> bool {
        let changed = self.viewport.set_scale(scale);
        self.notify_if(changed, StateChange::View)
    }

    /// Zooms one step around `anchor` (screen pixels).
    pub fn zoom_at(&mut self, anchor: Point, direction: ZoomDirection) -> bool {
        let changed = self.viewport.zoom_at(anchor, direction);
        self.notify_if(changed, StateChange::View)
    }

    /// Restores the default scale and pan offset.
    pub fn reset_view(&mut self) -> bool {
        let changed = self.viewport.reset();
        self.notify_if(changed, StateChange::View)
    }

    /// Clears all segments and resets the view. The clip window is kept.
    pub fn reset(&mut self) {
        self.drag_last = None;
        let cleared = self.scene.clear();
        self.notify_if(cleared, StateChange::Scene);
        self.reset_view();
    }

    // --- pointer input ---

    /// Starts a drag‑to‑pan gesture at `pos`.
    pub fn pointer_down(&mut self, pos: Point) {
        tracing::trace!(?pos, "drag started");
        self.drag_last = Some(pos);
    }

    /// Pans by the pointer movement since the previous event.
    ///
    /// Returns `false` when no drag is active or the view did not move.
    pub fn pointer_move(&mut self, pos: Point) -> bool {
        let Some(last) = self.drag_last else {
            return false;
        };
        self.drag_last = Some(pos);
        let changed = self.viewport.pan_by(pos - last);
        self.notify_if(changed, StateChange::View)
    }

    /// Ends the drag gesture, if any.
    pub fn pointer_up(&mut self) {
        if self.drag_last.take().is_some() {
            tracing::trace!("drag ended");
        }
    }

    /// Returns `true` while a drag gesture is active.
    pub fn is_dragging(&self) -> bool {
        self.drag_last.is_some()
    }

    /// Handles a wheel event at `anchor`: negative `delta_y` zooms in,
    /// positive zooms out, zero is ignored.
    pub fn wheel(&mut self, anchor: Point, delta_y: f64) -> bool {
        match ZoomDirection::from_wheel_delta(delta_y) {
            Some(direction) => self.zoom_at(anchor, direction),
            None => false,
        }
    }

    /// Builds the draw list for the current state.
    pub fn draw_list(&self) -> DrawList {
        DrawList::build(&self.scene, &self.viewport)
    }

    fn notify(&mut self, change: StateChange) {
        tracing::trace!(?change, "state changed");
        if let Some(observer) = self.observer.as_mut() {
            observer.state_changed(change);
        }
    }

    fn notify_if(&mut self, changed: bool, change: StateChange) -> bool {
        if changed {
            self.notify(change);
        }
        changed
    }
}
