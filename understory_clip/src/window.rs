// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::{Point, Rect};

/// Error returned when clip window bounds are inverted or not finite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InvalidWindow {
    /// Requested minimum X bound.
    pub x_min: f64,
    /// Requested minimum Y bound.
    pub y_min: f64,
    /// Requested maximum X bound.
    pub x_max: f64,
    /// Requested maximum Y bound.
    pub y_max: f64,
}

impl fmt::Display for InvalidWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid clip window: x {}..{}, y {}..{} (bounds must be finite with min <= max)",
            self.x_min, self.x_max, self.y_min, self.y_max
        )
    }
}

impl core::error::Error for InvalidWindow {}

/// Axis‑aligned rectangular clip window in world coordinates.
///
/// A `ClipWindow` always satisfies `x_min <= x_max` and `y_min <= y_max`, and
/// all four bounds are finite. Zero‑width or zero‑height windows are valid;
/// they accept only segments that touch the degenerate window.
///
/// Windows with inverted bounds are rejected rather than silently
/// normalized: a caller that submits `x_min > x_max` gets an
/// [`InvalidWindow`] back. Use [`ClipWindow::from_corners`] when the input is
/// two arbitrary corner points rather than labelled bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipWindow {
    x_min: f64,
    y_min: f64,
    x_max: f64,
    y_max: f64,
}

impl Default for ClipWindow {
    /// A 10×10 window centered on the world origin.
    fn default() -> Self {
        Self {
            x_min: -5.0,
            y_min: -5.0,
            x_max: 5.0,
            y_max: 5.0,
        }
    }
}

impl ClipWindow {
    /// Creates a window from its four bounds.
    ///
    /// Returns [`InvalidWindow`] if any bound is not finite, or if
    /// `x_min > x_max` or `y_min > y_max`.
    pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Result<Self, InvalidWindow> {
        let finite =
            x_min.is_finite() && y_min.is_finite() && x_max.is_finite() && y_max.is_finite();
        if !finite || x_min > x_max || y_min > y_max {
            return Err(InvalidWindow {
                x_min,
                y_min,
                x_max,
                y_max,
            });
        }
        Ok(Self {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    /// Creates the window spanned by two arbitrary corner points.
    ///
    /// The corners are ordered per axis, so any two finite points produce a
    /// valid window. Returns [`InvalidWindow`] only for non‑finite input.
    pub fn from_corners(a: Point, b: Point) -> Result<Self, InvalidWindow> {
        Self::new(a.x.min(b.x), a.y.min(b.y), a.x.max(b.x), a.y.max(b.y))
    }

    /// Minimum X bound.
    #[must_use]
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    /// Minimum Y bound.
    #[must_use]
    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    /// Maximum X bound.
    #[must_use]
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    /// Maximum Y bound.
    #[must_use]
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    /// Width of the window (never negative).
    #[must_use]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Height of the window (never negative).
    #[must_use]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// The window as a world‑space [`Rect`].
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::new(self.x_min, self.y_min, self.x_max, self.y_max)
    }

    /// Returns `true` if `pt` lies inside the window or on its boundary.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.x_min && pt.x <= self.x_max && pt.y >= self.y_min && pt.y <= self.y_max
    }
}

impl TryFrom<Rect> for ClipWindow {
    type Error = InvalidWindow;

    fn try_from(rect: Rect) -> Result<Self, Self::Error> {
        Self::new(rect.x0, rect.y0, rect.x1, rect.y1)
    }
}

#[cfg(test)]
mod tests {
    extern crate alloc;

    use alloc::string::ToString;

    use kurbo::{Point, Rect};

    use super::{ClipWindow, InvalidWindow};

    #[test]
    fn inverted_bounds_are_rejected() {
        let err = ClipWindow::new(5.0, 0.0, -5.0, 10.0).unwrap_err();
        assert_eq!(
            err,
            InvalidWindow {
                x_min: 5.0,
                y_min: 0.0,
                x_max: -5.0,
                y_max: 10.0,
            }
        );
        assert!(ClipWindow::new(0.0, 3.0, 1.0, 2.0).is_err());
    }

    #[test]
    fn non_finite_bounds_are_rejected() {
        assert!(ClipWindow::new(f64::NAN, 0.0, 1.0, 1.0).is_err());
        assert!(ClipWindow::new(0.0, 0.0, f64::INFINITY, 1.0).is_err());
    }

    #[test]
    fn default_window_is_centered() {
        assert_eq!(ClipWindow::default().rect(), Rect::new(-5.0, -5.0, 5.0, 5.0));
    }

    #[test]
    fn degenerate_window_is_valid() {
        let w = ClipWindow::new(1.0, 1.0, 1.0, 1.0).unwrap();
        assert_eq!(w.width(), 0.0);
        assert_eq!(w.height(), 0.0);
        assert!(w.contains(Point::new(1.0, 1.0)));
    }

    #[test]
    fn from_corners_orders_each_axis() {
        let w = ClipWindow::from_corners(Point::new(4.0, -2.0), Point::new(-1.0, 7.0)).unwrap();
        assert_eq!(w.rect(), Rect::new(-1.0, -2.0, 4.0, 7.0));
    }

    #[test]
    fn contains_is_boundary_inclusive() {
        let w = ClipWindow::new(0.0, 0.0, 10.0, 10.0).unwrap();
        assert!(w.contains(Point::new(0.0, 10.0)));
        assert!(!w.contains(Point::new(-0.1, 5.0)));
        assert!(!w.contains(Point::new(5.0, 10.1)));
    }

    #[test]
    fn try_from_rect_keeps_rect_orientation() {
        assert!(ClipWindow::try_from(Rect::new(0.0, 0.0, 2.0, 3.0)).is_ok());
        assert!(ClipWindow::try_from(Rect::new(2.0, 0.0, 0.0, 3.0)).is_err());
    }

    #[test]
    fn error_message_names_bounds() {
        let err = ClipWindow::new(2.0, 0.0, 1.0, 1.0).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("invalid clip window"), "unexpected message: {msg}");
    }
}
