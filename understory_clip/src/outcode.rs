// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

use crate::ClipWindow;

bitflags::bitflags! {
    /// Region code of a point relative to a [`ClipWindow`].
    ///
    /// ```text
    ///        |        |
    ///  1001  |  1000  | 1010
    ///        |        |
    /// -------+--------+-------- y_max
    ///        |        |
    ///  0001  |  0000  | 0010
    ///        |        |
    /// -------+--------+-------- y_min
    ///        |        |
    ///  0101  |  0100  | 0110
    ///        |        |
    ///      x_min    x_max
    /// ```
    ///
    /// `LEFT`/`RIGHT` and `BOTTOM`/`TOP` are mutually exclusive. A point on a
    /// boundary line is inside with respect to that boundary.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Outcode: u8 {
        /// `x < x_min`.
        const LEFT   = 0b0001;
        /// `x > x_max`.
        const RIGHT  = 0b0010;
        /// `y < y_min`.
        const BOTTOM = 0b0100;
        /// `y > y_max`.
        const TOP    = 0b1000;
    }
}

impl Outcode {
    /// No bits set: the point lies inside the window (boundary included).
    pub const INSIDE: Self = Self::empty();

    /// Classifies `pt` against `window`.
    #[must_use]
    pub fn of(pt: Point, window: &ClipWindow) -> Self {
        let mut code = Self::INSIDE;
        if pt.x < window.x_min() {
            code |= Self::LEFT;
        } else if pt.x > window.x_max() {
            code |= Self::RIGHT;
        }
        if pt.y < window.y_min() {
            code |= Self::BOTTOM;
        } else if pt.y > window.y_max() {
            code |= Self::TOP;
        }
        code
    }

    /// Returns `true` if no boundary bit is set.
    #[must_use]
    pub fn is_inside(self) -> bool {
        self.is_empty()
    }
}
