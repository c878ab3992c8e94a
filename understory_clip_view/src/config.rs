// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Initial and reset scale, in screen pixels per world unit.
pub const DEFAULT_SCALE: f64 = 20.0;
/// Smallest allowed scale.
pub const MIN_SCALE: f64 = 5.0;
/// Largest allowed scale.
pub const MAX_SCALE: f64 = 50.0;
/// Relative scale change per zoom step.
pub const ZOOM_INTENSITY: f64 = 0.05;

/// Tunables for a [`crate::Viewport`].
///
/// The defaults give a 20 px grid cell, a `[5, 50]` scale range and 5% zoom
/// steps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportConfig {
    /// Scale used on construction and by [`crate::Viewport::reset`].
    pub default_scale: f64,
    /// Lower scale bound.
    pub min_scale: f64,
    /// Upper scale bound.
    pub max_scale: f64,
    /// Relative scale change applied per [`crate::ZoomDirection`] step.
    pub zoom_intensity: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            default_scale: DEFAULT_SCALE,
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
            zoom_intensity: ZOOM_INTENSITY,
        }
    }
}

impl ViewportConfig {
    /// Returns a copy with consistent values.
    ///
    /// - `min_scale`/`max_scale` are swapped if given in the wrong order.
    /// - Non‑positive or non‑finite limits fall back to the defaults.
    /// - `default_scale` is clamped into the scale range.
    /// - `zoom_intensity` is clamped to `[0, 0.9]` so a zoom‑out step keeps
    ///   the scale positive.
    #[must_use]
    pub fn normalized(self) -> Self {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        let (mut min_scale, mut max_scale) = if valid(self.min_scale) && valid(self.max_scale) {
            (self.min_scale, self.max_scale)
        } else {
            (MIN_SCALE, MAX_SCALE)
        };
        if min_scale > max_scale {
            core::mem::swap(&mut min_scale, &mut max_scale);
        }
        let default_scale = if self.default_scale.is_finite() {
            self.default_scale.clamp(min_scale, max_scale)
        } else {
            DEFAULT_SCALE.clamp(min_scale, max_scale)
        };
        let zoom_intensity = if self.zoom_intensity.is_finite() {
            self.zoom_intensity.clamp(0.0, 0.9)
        } else {
            ZOOM_INTENSITY
        };
        Self {
            default_scale,
            min_scale,
            max_scale,
            zoom_intensity,
        }
    }
}
