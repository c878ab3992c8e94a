// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::RangeInclusive;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `floor`/`ceil`
use kurbo::{Affine, Line, Point, Rect, Size, Vec2};

use crate::config::ViewportConfig;
use crate::modes::ZoomDirection;

/// World‑to‑screen viewport over an unbounded, y‑up world plane.
///
/// The world origin sits at the center of the rendering surface shifted by a
/// pan `offset` (in screen pixels), and one world unit spans `scale` pixels:
///
/// ```text
/// screen = surface_center + offset + (world.x * scale, -world.y * scale)
/// ```
///
/// Screen y grows downward, so world y is flipped. The scale is always kept
/// inside the configured `[min_scale, max_scale]` range.
///
/// Every mutator returns `true` if it changed the transform, so callers can
/// redraw only on real changes.
#[derive(Clone, Debug)]
pub struct Viewport {
    surface: Size,
    scale: f64,
    offset: Vec2,
    config: ViewportConfig,
    world_to_screen: Affine,
    screen_to_world: Affine,
}

impl Viewport {
    /// Creates a viewport for a surface of the given size with the default
    /// [`ViewportConfig`].
    ///
    /// - Initial scale is `20` pixels per world unit.
    /// - Initial offset is zero (world origin at the surface center).
    #[must_use]
    pub fn new(surface: Size) -> Self {
        Self::with_config(surface, ViewportConfig::default())
    }

    /// Creates a viewport with explicit tunables.
    ///
    /// The config is normalized first; see [`ViewportConfig::normalized`].
    #[must_use]
    pub fn with_config(surface: Size, config: ViewportConfig) -> Self {
        let config = config.normalized();
        let mut vp = Self {
            surface,
            scale: config.default_scale,
            offset: Vec2::ZERO,
            config,
            world_to_screen: Affine::IDENTITY,
            screen_to_world: Affine::IDENTITY,
        };
        vp.rebuild_transforms();
        vp
    }

    /// Returns the rendering surface size in screen pixels.
    #[must_use]
    pub fn surface_size(&self) -> Size {
        self.surface
    }

    /// Sets the rendering surface size.
    ///
    /// Scale and offset are unchanged; the world origin follows the surface
    /// center.
    pub fn set_surface_size(&mut self, surface: Size) -> bool {
        if self.surface == surface {
            return false;
        }
        self.surface = surface;
        self.rebuild_transforms();
        true
    }

    /// Returns the active (normalized) configuration.
    #[must_use]
    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    /// Sets the minimum and maximum scale.
    ///
    /// The provided range is normalized so that `min_scale <= max_scale`. The
    /// current scale is clamped into the new range.
    pub fn set_scale_limits(&mut self, min_scale: f64, max_scale: f64) -> bool {
        self.config = ViewportConfig {
            min_scale,
            max_scale,
            ..self.config
        }
        .normalized();
        self.set_scale(self.scale)
    }

    /// Returns the current scale in screen pixels per world unit.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the current pan offset in screen pixels.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Sets the scale directly, clamping it into the configured range.
    ///
    /// The offset is left alone, so the world origin keeps its screen
    /// position. Use [`Viewport::zoom_about`] to keep another point fixed.
    pub fn set_scale(&mut self, scale: f64) -> bool {
        if !scale.is_finite() {
            return false;
        }
        let clamped = scale.clamp(self.config.min_scale, self.config.max_scale);
        if (self.scale - clamped).abs() < f64::EPSILON {
            return false;
        }
        self.scale = clamped;
        self.rebuild_transforms();
        true
    }

    /// Pans the view by a delta in screen pixels.
    ///
    /// The delta is applied as is; it is not divided by the scale.
    pub fn pan_by(&mut self, delta: Vec2) -> bool {
        if delta == Vec2::ZERO || !delta.is_finite() {
            return false;
        }
        self.offset += delta;
        self.rebuild_transforms();
        true
    }

    /// Applies one zoom step around an anchor point in screen coordinates.
    ///
    /// The scale is multiplied by `1 ± zoom_intensity` and clamped. The world
    /// point under `anchor` stays under `anchor`.
    pub fn zoom_at(&mut self, anchor: Point, direction: ZoomDirection) -> bool {
        self.zoom_about(anchor, direction.factor(self.config.zoom_intensity))
    }

    /// Multiplies the scale by `factor` around an anchor point in screen
    /// coordinates.
    ///
    /// The anchor point remains fixed in screen space. Once the scale hits a
    /// limit, further zooming in that direction is a no‑op.
    pub fn zoom_about(&mut self, anchor: Point, factor: f64) -> bool {
        if factor <= 0.0 || !factor.is_finite() || !anchor.is_finite() {
            return false;
        }
        let old_scale = self.scale;
        let new_scale = (old_scale * factor).clamp(self.config.min_scale, self.config.max_scale);
        if (new_scale - old_scale).abs() < f64::EPSILON {
            return false;
        }

        let old_world = self.screen_to_world_point(anchor);
        self.scale = new_scale;
        self.rebuild_transforms();
        let new_anchor = self.world_to_screen_point(old_world);
        self.offset += anchor - new_anchor;
        self.rebuild_transforms();
        true
    }

    /// Restores the default scale and a zero offset.
    pub fn reset(&mut self) -> bool {
        let unchanged = (self.scale - self.config.default_scale).abs() < f64::EPSILON
            && self.offset == Vec2::ZERO;
        if unchanged {
            return false;
        }
        self.scale = self.config.default_scale;
        self.offset = Vec2::ZERO;
        self.rebuild_transforms();
        true
    }

    /// Screen position of the world origin.
    #[must_use]
    pub fn origin_on_screen(&self) -> Point {
        self.world_to_screen_point(Point::ORIGIN)
    }

    /// Converts a world‑space point into screen coordinates.
    #[must_use]
    pub fn world_to_screen_point(&self, pt: Point) -> Point {
        self.world_to_screen * pt
    }

    /// Converts a screen‑space point into world coordinates.
    #[must_use]
    pub fn screen_to_world_point(&self, pt: Point) -> Point {
        self.screen_to_world * pt
    }

    /// Converts a world‑space segment into screen coordinates.
    #[must_use]
    pub fn world_to_screen_line(&self, line: Line) -> Line {
        Line::new(self.world_to_screen * line.p0, self.world_to_screen * line.p1)
    }

    /// Converts a world‑space rectangle into a screen‑space rectangle.
    ///
    /// The y flip swaps which world edge ends up on top; the result is
    /// always a positive rectangle.
    #[must_use]
    pub fn world_to_screen_rect(&self, rect: Rect) -> Rect {
        self.world_to_screen.transform_rect_bbox(rect)
    }

    /// Returns the world‑space rectangle currently covered by the surface.
    #[must_use]
    pub fn visible_world_rect(&self) -> Rect {
        self.screen_to_world
            .transform_rect_bbox(self.surface.to_rect())
    }

    /// Grid cell size in screen pixels (one world unit).
    #[must_use]
    pub fn grid_spacing(&self) -> f64 {
        self.scale
    }

    /// Stride between labelled grid lines, in world units.
    ///
    /// Every line is labelled at scale 20 and above, every second line from
    /// scale 10, and every fifth line below that.
    #[must_use]
    pub fn label_stride(&self) -> i64 {
        if self.scale >= 20.0 {
            1
        } else if self.scale >= 10.0 {
            2
        } else {
            5
        }
    }

    /// Suggested label font size in pixels: half a grid cell, at least 10.
    #[must_use]
    pub fn label_font_size(&self) -> f64 {
        (self.scale / 2.0).max(10.0)
    }

    /// Integer world x values of the vertical grid lines covering the
    /// surface.
    #[must_use]
    pub fn visible_grid_columns(&self) -> RangeInclusive<i64> {
        let visible = self.visible_world_rect();
        grid_range(visible.min_x(), visible.max_x())
    }

    /// Integer world y values of the horizontal grid lines covering the
    /// surface.
    #[must_use]
    pub fn visible_grid_rows(&self) -> RangeInclusive<i64> {
        let visible = self.visible_world_rect();
        grid_range(visible.min_y(), visible.max_y())
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            surface: self.surface,
            scale: self.scale,
            offset: self.offset,
            min_scale: self.config.min_scale,
            max_scale: self.config.max_scale,
            zoom_intensity: self.config.zoom_intensity,
            origin_on_screen: self.origin_on_screen(),
            visible_world_rect: self.visible_world_rect(),
        }
    }

    fn rebuild_transforms(&mut self) {
        let center = self.surface.to_vec2() * 0.5;
        // World → screen: flip y and scale, then move the origin to the
        // (panned) surface center.
        self.world_to_screen = Affine::translate(center + self.offset)
            * Affine::scale_non_uniform(self.scale, -self.scale);
        self.screen_to_world = self.world_to_screen.inverse();
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "grid bounds are finite world coordinates within a few thousand units"
)]
fn grid_range(min: f64, max: f64) -> RangeInclusive<i64> {
    (min.floor() as i64)..=(max.ceil() as i64)
}

/// Debug snapshot of a [`Viewport`] state.
#[derive(Clone, Copy, Debug)]
pub struct ViewportDebugInfo {
    /// Rendering surface size in pixels.
    pub surface: Size,
    /// Current scale in pixels per world unit.
    pub scale: f64,
    /// Current pan offset in pixels.
    pub offset: Vec2,
    /// Lower scale bound.
    pub min_scale: f64,
    /// Upper scale bound.
    pub max_scale: f64,
    /// Relative scale change per zoom step.
    pub zoom_intensity: f64,
    /// Screen position of the world origin.
    pub origin_on_screen: Point,
    /// World‑space rectangle currently visible on the surface.
    pub visible_world_rect: Rect,
}
