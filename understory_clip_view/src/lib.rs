// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_clip_view --heading-base-level=0

//! Understory Clip View: world‑to‑screen viewport for clipping scenes.
//!
//! This crate provides a small, headless model of a pan/zoom camera over an
//! unbounded, y‑up world plane, rendered onto a bounded pixel surface whose
//! y axis grows downward. It focuses on:
//! - Viewport state (scale + pan offset) with scale limits.
//! - Coordinate conversion between world and screen space.
//! - Zooming anchored at the pointer, and panning by pixel deltas.
//! - Grid helpers: grid spacing, label stride and visible grid lines.
//!
//! It does **not** own any scene or rendering backend. Callers are expected
//! to feed pointer drags into [`Viewport::pan_by`], wheel events into
//! [`Viewport::zoom_at`], and use the conversions to place geometry.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use understory_clip_view::{Viewport, ZoomDirection};
//!
//! // 800x600 surface; the world origin starts at the center.
//! let mut view = Viewport::new(Size::new(800.0, 600.0));
//! assert_eq!(view.world_to_screen_point(Point::ORIGIN), Point::new(400.0, 300.0));
//!
//! // Drag by some pixels, then zoom in around the cursor.
//! view.pan_by(Vec2::new(25.0, -10.0));
//! let cursor = Point::new(610.0, 140.0);
//! let under_cursor = view.screen_to_world_point(cursor);
//! view.zoom_at(cursor, ZoomDirection::In);
//!
//! // The same world point is still under the cursor.
//! let after = view.world_to_screen_point(under_cursor);
//! assert!((after - cursor).hypot() < 1e-9);
//! ```
//!
//! ## Design notes
//!
//! - Zoom is uniform and bounded to `[5, 50]` pixels per world unit by
//!   default; see [`ViewportConfig`].
//! - Panning operates in screen pixels and is not scaled by zoom.
//! - Rotation is out of scope.
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod modes;
mod viewport;

pub use config::{DEFAULT_SCALE, MAX_SCALE, MIN_SCALE, ViewportConfig, ZOOM_INTENSITY};
pub use modes::ZoomDirection;
pub use viewport::{Viewport, ViewportDebugInfo};
