//! Geometry
//!
//! Integer rectangles, size hints and layout axes.

use easel_render::RenderRect;
use serde::Serialize;

/// An axis-aligned rectangle in window pixels
///
/// The all-zero rectangle doubles as the "unset" value, see [`Rect::is_null`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    /// The null rectangle
    pub const NULL: Rect = Rect { x: 0, y: 0, w: 0, h: 0 };

    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Check if a point is inside the rectangle
    ///
    /// The right and bottom edges are exclusive.
    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && py >= self.y && px < self.x + self.w && py < self.y + self.h
    }

    /// True when every field is zero
    pub fn is_null(&self) -> bool {
        self.x == 0 && self.y == 0 && self.w == 0 && self.h == 0
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Extent along an axis
    pub fn extent(&self, axis: Axis) -> i32 {
        match axis {
            Axis::Horizontal => self.w,
            Axis::Vertical => self.h,
        }
    }

    /// Origin coordinate along an axis
    pub fn origin(&self, axis: Axis) -> i32 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    /// Shrink by `amount` on every side
    pub fn inset(&self, amount: i32) -> Rect {
        Rect::new(self.x + amount, self.y + amount, self.w - 2 * amount, self.h - 2 * amount)
    }
}

impl From<Rect> for RenderRect {
    fn from(r: Rect) -> Self {
        RenderRect::new(r.x as f32, r.y as f32, r.w as f32, r.h as f32)
    }
}

/// Layout axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub fn cross(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    /// Build a rect from primary/cross origin and extents
    pub fn compose(self, primary: (i32, i32), cross: (i32, i32)) -> Rect {
        match self {
            Axis::Horizontal => Rect::new(primary.0, cross.0, primary.1, cross.1),
            Axis::Vertical => Rect::new(cross.0, primary.0, cross.1, primary.1),
        }
    }
}

/// Requested size of an element inside a box layout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum SizeHint {
    /// No preference, share the remaining space
    #[default]
    Auto,
    /// Fixed extent, only the layout axis dimension is used
    Fixed { width: i32, height: i32 },
}

impl SizeHint {
    pub fn fixed(width: i32, height: i32) -> Self {
        SizeHint::Fixed { width, height }
    }

    /// Fixed width, height unconstrained
    pub fn width(width: i32) -> Self {
        SizeHint::Fixed { width, height: 0 }
    }

    /// Fixed height, width unconstrained
    pub fn height(height: i32) -> Self {
        SizeHint::Fixed { width: 0, height }
    }

    pub fn is_auto(&self) -> bool {
        matches!(self, SizeHint::Auto)
    }

    /// Requested extent along `axis`, `None` for auto
    pub fn extent(&self, axis: Axis) -> Option<i32> {
        match (self, axis) {
            (SizeHint::Auto, _) => None,
            (SizeHint::Fixed { width, .. }, Axis::Horizontal) => Some(*width),
            (SizeHint::Fixed { height, .. }, Axis::Vertical) => Some(*height),
        }
    }
}

impl From<Rect> for SizeHint {
    /// The null rect means "no hint"; any other rect contributes its size
    fn from(rect: Rect) -> Self {
        if rect.is_null() {
            SizeHint::Auto
        } else {
            SizeHint::Fixed {
                width: rect.w,
                height: rect.h,
            }
        }
    }
}
