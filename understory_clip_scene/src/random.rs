// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Random test data: integer‑coordinate segments and windows.

use core::ops::RangeInclusive;

use kurbo::{Line, Point};
use rand::Rng;
use rand::distributions::{Distribution, Uniform};
use understory_clip::ClipWindow;

/// Parameters for [`random_segment`] and [`random_window`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RandomConfig {
    /// Inclusive range of integer world coordinates. A reversed range is
    /// treated as its ordered equivalent.
    pub coord_range: RangeInclusive<i32>,
    /// Number of segments produced by [`crate::Scene::randomize_segments`].
    pub segment_count: usize,
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self {
            coord_range: -10..=10,
            segment_count: 5,
        }
    }
}

impl RandomConfig {
    fn distribution(&self) -> Uniform<i32> {
        let (a, b) = (*self.coord_range.start(), *self.coord_range.end());
        Uniform::new_inclusive(a.min(b), a.max(b))
    }
}

/// Draws a segment whose four coordinates are independent uniform integers
/// from `config.coord_range`.
pub fn random_segment<R: Rng + ?Sized>(rng: &mut R, config: &RandomConfig) -> Line {
    let dist = config.distribution();
    let mut coord = || f64::from(dist.sample(&mut *rng));
    let p0 = Point::new(coord(), coord());
    let p1 = Point::new(coord(), coord());
    Line::new(p0, p1)
}

/// Draws a window from two uniform integer corners.
///
/// The bounds are ordered per axis, so the window is valid by construction;
/// it may be degenerate when both draws on an axis coincide.
pub fn random_window<R: Rng + ?Sized>(rng: &mut R, config: &RandomConfig) -> ClipWindow {
    let dist = config.distribution();
    let mut coord = || f64::from(dist.sample(&mut *rng));
    let a = Point::new(coord(), coord());
    let b = Point::new(coord(), coord());
    // Integer corners are always finite.
    ClipWindow::from_corners(a, b).unwrap_or_default()
}
