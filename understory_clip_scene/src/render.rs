// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Screen‑space draw lists for a [`Scene`] seen through a [`Viewport`].
//!
//! A [`DrawList`] is a flat, backend‑agnostic list of [`DrawOp`]s in paint
//! order. Rendering collaborators walk it (optionally paired with a
//! [`Palette`] via [`DrawList::styled`]) and issue their own strokes and
//! text.

use alloc::vec::Vec;

use kurbo::{Line, Point, Rect};
use peniko::Color;
use peniko::color::palette;
use understory_clip::ClipResult;
use understory_clip_view::Viewport;

use crate::scene::{Scene, SegmentId};

/// Gap in pixels between an axis and its labels.
const LABEL_GAP: f64 = 5.0;

/// Visual layer of a [`DrawOp`], used to look up its [`LayerStyle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    /// Grid lines, one per world unit.
    Grid,
    /// The x and y axes through the world origin.
    Axis,
    /// Integer coordinate labels along the axes.
    Label,
    /// Outline of the clip window.
    Window,
    /// Input segments.
    Segment,
    /// Visible (clipped) parts of segments.
    Clipped,
}

/// Placement of a label relative to its anchor point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LabelAlign {
    /// Anchor is the top‑center of the text (x‑axis labels, drawn below it).
    TopCenter,
    /// Anchor is the right‑middle of the text (y‑axis labels, drawn left of it).
    RightMiddle,
}

/// A single screen‑space drawing instruction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawOp {
    /// A grid line spanning the surface.
    GridLine(Line),
    /// An axis spanning the surface.
    Axis(Line),
    /// An integer world coordinate label.
    Label {
        /// World coordinate value to print.
        value: i64,
        /// Anchor point in screen pixels.
        anchor: Point,
        /// How the text sits relative to `anchor`.
        align: LabelAlign,
        /// Font size in pixels.
        font_size: f64,
    },
    /// The clip window outline.
    WindowOutline(Rect),
    /// An input segment, drawn in the neutral style.
    Segment {
        /// Segment identity.
        id: SegmentId,
        /// Screen‑space segment.
        line: Line,
    },
    /// The visible part of a segment, drawn highlighted.
    Clipped {
        /// Segment identity.
        id: SegmentId,
        /// Screen‑space visible sub‑segment.
        line: Line,
    },
}

impl DrawOp {
    /// The layer this op is styled with.
    #[must_use]
    pub fn layer(&self) -> Layer {
        match self {
            Self::GridLine(_) => Layer::Grid,
            Self::Axis(_) => Layer::Axis,
            Self::Label { .. } => Layer::Label,
            Self::WindowOutline(_) => Layer::Window,
            Self::Segment { .. } => Layer::Segment,
            Self::Clipped { .. } => Layer::Clipped,
        }
    }
}

/// Color and stroke width for one [`Layer`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerStyle {
    /// Stroke (or text fill) color.
    pub color: Color,
    /// Stroke width in pixels; ignored for labels.
    pub width: f64,
}

impl LayerStyle {
    /// Creates a style.
    #[must_use]
    pub const fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }
}

/// Per‑layer styles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    /// Grid lines.
    pub grid: LayerStyle,
    /// Axes.
    pub axis: LayerStyle,
    /// Labels.
    pub label: LayerStyle,
    /// Clip window outline.
    pub window: LayerStyle,
    /// Input segments.
    pub segment: LayerStyle,
    /// Clipped sub‑segments.
    pub clipped: LayerStyle,
}

impl Default for Palette {
    /// Light gray grid, black axes and labels, blue window, gray segments and
    /// red visible parts.
    fn default() -> Self {
        Self {
            grid: LayerStyle::new(Color::from_rgb8(0xdd, 0xdd, 0xdd), 1.0),
            axis: LayerStyle::new(palette::css::BLACK, 2.0),
            label: LayerStyle::new(palette::css::BLACK, 0.0),
            window: LayerStyle::new(palette::css::BLUE, 2.0),
            segment: LayerStyle::new(palette::css::GRAY, 1.0),
            clipped: LayerStyle::new(palette::css::RED, 2.0),
        }
    }
}

impl Palette {
    /// Returns the style for `layer`.
    #[must_use]
    pub fn style(&self, layer: Layer) -> &LayerStyle {
        match layer {
            Layer::Grid => &self.grid,
            Layer::Axis => &self.axis,
            Layer::Label => &self.label,
            Layer::Window => &self.window,
            Layer::Segment => &self.segment,
            Layer::Clipped => &self.clipped,
        }
    }
}

/// Draw operations for one frame, in paint order.
///
/// Order: grid lines, axes, labels, window outline, every input segment,
/// then every visible sub‑segment. Rejected segments only appear as
/// [`DrawOp::Segment`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawList {
    ops: Vec<DrawOp>,
}

impl DrawList {
    /// Builds the frame for `scene` as seen through `viewport`.
    #[must_use]
    pub fn build(scene: &Scene, viewport: &Viewport) -> Self {
        let mut list = Self::default();
        list.push_grid(viewport);
        list.push_labels(viewport);

        let window = viewport.world_to_screen_rect(scene.window().rect());
        list.ops.push(DrawOp::WindowOutline(window));

        for entry in scene.results() {
            list.ops.push(DrawOp::Segment {
                id: entry.id,
                line: viewport.world_to_screen_line(entry.segment),
            });
        }
        for entry in scene.results() {
            if let ClipResult::Accepted(visible) = entry.result {
                list.ops.push(DrawOp::Clipped {
                    id: entry.id,
                    line: viewport.world_to_screen_line(visible),
                });
            }
        }
        list
    }

    /// The ops in paint order.
    #[must_use]
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Number of ops.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Returns `true` if there is nothing to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Iterates over ops paired with their style from `palette`.
    pub fn styled<'a>(
        &'a self,
        palette: &'a Palette,
    ) -> impl Iterator<Item = (&'a DrawOp, &'a LayerStyle)> + 'a {
        self.ops.iter().map(|op| (op, palette.style(op.layer())))
    }

    fn push_grid(&mut self, viewport: &Viewport) {
        let size = viewport.surface_size();
        for x in viewport.visible_grid_columns() {
            let sx = column_x(viewport, x);
            self.ops
                .push(DrawOp::GridLine(Line::new((sx, 0.0), (sx, size.height))));
        }
        for y in viewport.visible_grid_rows() {
            let sy = row_y(viewport, y);
            self.ops
                .push(DrawOp::GridLine(Line::new((0.0, sy), (size.width, sy))));
        }

        let origin = viewport.origin_on_screen();
        self.ops.push(DrawOp::Axis(Line::new(
            (origin.x, 0.0),
            (origin.x, size.height),
        )));
        self.ops.push(DrawOp::Axis(Line::new(
            (0.0, origin.y),
            (size.width, origin.y),
        )));
    }

    fn push_labels(&mut self, viewport: &Viewport) {
        let stride = viewport.label_stride();
        let font_size = viewport.label_font_size();
        let origin = viewport.origin_on_screen();

        for x in viewport.visible_grid_columns() {
            if x == 0 || x % stride != 0 {
                continue;
            }
            self.ops.push(DrawOp::Label {
                value: x,
                anchor: Point::new(column_x(viewport, x), origin.y + LABEL_GAP),
                align: LabelAlign::TopCenter,
                font_size,
            });
        }
        for y in viewport.visible_grid_rows() {
            if y == 0 || y % stride != 0 {
                continue;
            }
            self.ops.push(DrawOp::Label {
                value: y,
                anchor: Point::new(origin.x - LABEL_GAP, row_y(viewport, y)),
                align: LabelAlign::RightMiddle,
                font_size,
            });
        }
    }
}

#[allow(
    clippy::cast_precision_loss,
    reason = "grid indices are small integers"
)]
fn column_x(viewport: &Viewport, x: i64) -> f64 {
    viewport.world_to_screen_point(Point::new(x as f64, 0.0)).x
}

#[allow(
    clippy::cast_precision_loss,
    reason = "grid indices are small integers"
)]
fn row_y(viewport: &Viewport, y: i64) -> f64 {
    viewport.world_to_screen_point(Point::new(0.0, y as f64)).y
}
