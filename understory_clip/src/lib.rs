// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_clip --heading-base-level=0

//! Understory Clip: line clipping against axis‑aligned windows.
//!
//! This crate answers a single question: given a line segment and a
//! rectangular clip window in world space, which part of the segment is
//! visible? It provides:
//! - [`ClipWindow`]: a validated, axis‑aligned window.
//! - [`Outcode`]: the 4‑bit region classification of a point against a window.
//! - [`clip`]: region‑outcode clipping returning a [`ClipResult`].
//!
//! Segments and points are plain [`kurbo::Line`] and [`kurbo::Point`] values.
//! Clipping is a pure function with no shared state, so independent segments
//! may be clipped from any number of threads.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Line, Point};
//! use understory_clip::{ClipResult, ClipWindow, clip};
//!
//! let window = ClipWindow::new(-5.0, -5.0, 5.0, 5.0).unwrap();
//! let segment = Line::new((-10.0, 0.0), (10.0, 0.0));
//!
//! assert_eq!(
//!     clip(segment, &window),
//!     ClipResult::Accepted(Line::new(Point::new(-5.0, 0.0), Point::new(5.0, 0.0))),
//! );
//!
//! let outside = Line::new((-10.0, 6.0), (10.0, 9.0));
//! assert_eq!(clip(outside, &window), ClipResult::Rejected);
//! ```
//!
//! ## Edge cases
//!
//! - Zero‑length segments are clipped like any other segment: a point inside
//!   the window is accepted as a zero‑length segment, a point outside is
//!   rejected.
//! - Segments with non‑finite coordinates are rejected.
//! - Boundaries parallel to the segment are never used as intersection
//!   targets, so clipping never divides by zero.
//! - Windows with inverted or non‑finite bounds cannot be constructed; see
//!   [`ClipWindow::new`] and [`InvalidWindow`].
//!
//! This crate is `no_std`.

#![no_std]

mod clip;
mod outcode;
mod window;

pub use clip::{ClipResult, MAX_CLIP_STEPS, clip, clip_all};
pub use outcode::Outcode;
pub use window::{ClipWindow, InvalidWindow};
