//! Widgets
//!
//! Behaviour and painting plugged into an [`Element`](crate::Element).

use easel_render::{DisplayList, RenderColor, RenderRect};

use crate::geometry::Rect;
use crate::input::MouseClick;

/// Translucent fill drawn over elements hit by the latest hover pass
const DEBUG_OVERLAY_COLOR: RenderColor = RenderColor::new(255, 0, 0, 64);

/// Everything a paint pass hands down the tree
pub struct PaintContext<'a, S> {
    /// Draw commands for this frame
    pub list: &'a mut DisplayList,
    /// Shared application state, read-only while painting
    pub state: &'a S,
    debug_hits: bool,
}

impl<'a, S> PaintContext<'a, S> {
    pub fn new(list: &'a mut DisplayList, state: &'a S) -> Self {
        Self {
            list,
            state,
            debug_hits: false,
        }
    }

    /// Enable the hit-test overlay
    pub fn with_debug_hits(mut self, enabled: bool) -> Self {
        self.debug_hits = enabled;
        self
    }

    pub fn debug_hits(&self) -> bool {
        self.debug_hits
    }

    pub(crate) fn paint_debug(&mut self, rect: Rect) {
        if self.debug_hits {
            self.list.fill_rect(RenderRect::from(rect), DEBUG_OVERLAY_COLOR);
        }
    }
}

/// Leaf behaviour of an element
///
/// Every hook except [`Widget::paint`] defaults to doing nothing. `rect` is
/// always the owning element's current geometry.
pub trait Widget<S> {
    /// Geometry changed
    fn update(&mut self, _rect: Rect) {}

    /// Once per frame, before painting
    fn tick(&mut self, _rect: Rect, _state: &mut S) {}

    /// Draw into the frame's display list
    fn paint(&self, rect: Rect, ctx: &mut PaintContext<'_, S>);

    /// The pointer is inside `rect` at `(x, y)`
    fn mouse_over(&mut self, _rect: Rect, _x: i32, _y: i32) {}

    /// A button edge while the pointer is inside `rect`
    fn mouse_click(&mut self, _rect: Rect, _click: MouseClick, _state: &mut S) {}

    /// Only called on elements that track the mouse
    fn mouse_enter(&mut self, _state: &mut S) {}

    /// Only called on elements that track the mouse
    fn mouse_leave(&mut self, _state: &mut S) {}
}
