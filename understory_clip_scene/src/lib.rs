// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_clip_scene --heading-base-level=0

//! Understory Clip Scene: segments, a clip window, and an interactive view.
//!
//! This crate ties [`understory_clip`] and [`understory_clip_view`] together:
//! - [`Scene`] owns the segment list and clip window, and keeps a clip result
//!   for every segment up to date after each edit.
//! - [`random_segment`] / [`random_window`] produce integer‑coordinate test
//!   data.
//! - [`DrawList`] turns a scene and viewport into screen‑space [`DrawOp`]s
//!   (grid, axes, labels, window, segments, visible parts) that any backend
//!   can paint, styled through a [`Palette`].
//! - [`ClipSession`] wires pointer drag to pan, wheel to zoom, and notifies a
//!   [`StateObserver`] whenever something changed.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Line, Point, Size};
//! use understory_clip_scene::{ClipSession, DrawOp};
//!
//! let mut session = ClipSession::new(Size::new(800.0, 600.0));
//! let id = session.add_segment(Line::new((-10.0, 0.0), (10.0, 0.0)));
//!
//! // The default window is [-5, 5] on both axes.
//! let visible = session.scene().get(id).unwrap().result.accepted().unwrap();
//! assert_eq!(visible, Line::new((-5.0, 0.0), (5.0, 0.0)));
//!
//! // Drag the view and redraw.
//! session.pointer_down(Point::new(400.0, 300.0));
//! session.pointer_move(Point::new(420.0, 300.0));
//! session.pointer_up();
//! let frame = session.draw_list();
//! assert!(frame.ops().iter().any(|op| matches!(op, DrawOp::Clipped { .. })));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod random;
mod render;
mod scene;
mod session;

pub use random::{RandomConfig, random_segment, random_window};
pub use render::{DrawList, DrawOp, LabelAlign, Layer, LayerStyle, Palette};
pub use scene::{ClippedSegment, Endpoint, Scene, SceneError, SegmentId};
pub use session::{ClipSession, StateChange, StateObserver};
