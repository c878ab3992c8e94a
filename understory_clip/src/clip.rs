// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Region‑outcode segment clipping.

use kurbo::{Line, Point};

use crate::{ClipWindow, Outcode};

/// Maximum number of boundary moves applied to each endpoint by [`clip`].
///
/// A single endpoint needs at most two moves in exact arithmetic (one per
/// axis). The extra headroom absorbs rounding at window corners; once the
/// budget is spent the segment is rejected.
pub const MAX_CLIP_STEPS: usize = 4;

/// Outcome of clipping one segment against a [`ClipWindow`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ClipResult {
    /// No part of the segment lies inside the window.
    Rejected,
    /// The visible part of the segment.
    ///
    /// Endpoint order follows the input: `p0` of the result lies on the
    /// input's `p0` side. A segment fully inside the window is returned
    /// unchanged.
    Accepted(Line),
}

impl ClipResult {
    /// Returns `true` for [`ClipResult::Accepted`].
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// The visible sub‑segment, if any.
    #[must_use]
    pub fn accepted(&self) -> Option<Line> {
        match self {
            Self::Accepted(line) => Some(*line),
            Self::Rejected => None,
        }
    }
}

/// Clips `segment` against `window`.
///
/// Each endpoint is classified with an [`Outcode`]. While the segment is
/// neither trivially accepted (both codes empty) nor trivially rejected (codes
/// share a bit), an outside endpoint is moved onto the first boundary it
/// violates, tested in the order `TOP`, `BOTTOM`, `RIGHT`, `LEFT`. The first
/// endpoint is preferred when both are outside.
///
/// Boundaries parallel to the segment are skipped, and segments with
/// non‑finite coordinates are rejected, so the result never carries NaN or
/// infinite coordinates.
///
/// ```rust
/// use kurbo::Line;
/// use understory_clip::{ClipResult, ClipWindow, clip};
///
/// let window = ClipWindow::new(0.0, 0.0, 10.0, 10.0).unwrap();
/// let outside = Line::new((-5.0, -5.0), (-1.0, -1.0));
/// assert_eq!(clip(outside, &window), ClipResult::Rejected);
/// ```
#[must_use]
pub fn clip(segment: Line, window: &ClipWindow) -> ClipResult {
    let Line { mut p0, mut p1 } = segment;
    if !p0.is_finite() || !p1.is_finite() {
        return ClipResult::Rejected;
    }

    let mut code0 = Outcode::of(p0, window);
    let mut code1 = Outcode::of(p1, window);
    let mut steps0 = 0;
    let mut steps1 = 0;

    loop {
        if (code0 | code1).is_inside() {
            return ClipResult::Accepted(Line::new(p0, p1));
        }
        if code0.intersects(code1) {
            return ClipResult::Rejected;
        }

        let move_first = !code0.is_inside();
        let (code, steps) = if move_first {
            (code0, &mut steps0)
        } else {
            (code1, &mut steps1)
        };
        if *steps == MAX_CLIP_STEPS {
            return ClipResult::Rejected;
        }
        *steps += 1;

        let Some(pt) = boundary_intersection(p0, p1, code, window) else {
            return ClipResult::Rejected;
        };
        if move_first {
            p0 = pt;
            code0 = Outcode::of(p0, window);
        } else {
            p1 = pt;
            code1 = Outcode::of(p1, window);
        }
    }
}

/// Clips every segment in `segments` against `window`, pairing each input
/// with its result.
pub fn clip_all<I>(segments: I, window: &ClipWindow) -> impl Iterator<Item = (Line, ClipResult)>
where
    I: IntoIterator<Item = Line>,
{
    let window = *window;
    segments
        .into_iter()
        .map(move |segment| (segment, clip(segment, &window)))
}

/// Intersects the line through `p0`/`p1` with the first boundary named in
/// `code` that is not parallel to it.
fn boundary_intersection(p0: Point, p1: Point, code: Outcode, window: &ClipWindow) -> Option<Point> {
    let d = p1 - p0;
    let pt = if code.contains(Outcode::TOP) && d.y != 0.0 {
        let y = window.y_max();
        Point::new(p0.x + d.x * (y - p0.y) / d.y, y)
    } else if code.contains(Outcode::BOTTOM) && d.y != 0.0 {
        let y = window.y_min();
        Point::new(p0.x + d.x * (y - p0.y) / d.y, y)
    } else if code.contains(Outcode::RIGHT) && d.x != 0.0 {
        let x = window.x_max();
        Point::new(x, p0.y + d.y * (x - p0.x) / d.x)
    } else if code.contains(Outcode::LEFT) && d.x != 0.0 {
        let x = window.x_min();
        Point::new(x, p0.y + d.y * (x - p0.x) / d.x)
    } else {
        return None;
    };
    pt.is_finite().then_some(pt)
}
