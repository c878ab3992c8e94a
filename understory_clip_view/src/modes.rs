// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Direction of a single zoom step.
///
/// Consulted by [`crate::Viewport::zoom_at`], which multiplies the current
/// scale by `1 + zoom_intensity` (in) or `1 - zoom_intensity` (out).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ZoomDirection {
    /// Magnify: world features grow on screen.
    In,
    /// Shrink: more of the world fits on screen.
    Out,
}

impl ZoomDirection {
    /// Maps a wheel delta to a zoom direction.
    ///
    /// Scrolling up (negative `delta_y`, as reported by browsers and winit
    /// pixel deltas) zooms in; scrolling down zooms out. A zero or NaN delta
    /// carries no direction.
    #[must_use]
    pub fn from_wheel_delta(delta_y: f64) -> Option<Self> {
        if delta_y < 0.0 {
            Some(Self::In)
        } else if delta_y > 0.0 {
            Some(Self::Out)
        } else {
            None
        }
    }

    /// Scale multiplier for one step with the given intensity.
    #[must_use]
    pub fn factor(self, zoom_intensity: f64) -> f64 {
        match self {
            Self::In => 1.0 + zoom_intensity,
            Self::Out => 1.0 - zoom_intensity,
        }
    }
}
