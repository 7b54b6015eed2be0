//! Frame driver
//!
//! Owns the root element and enforces the per-frame order:
//! reset → hover → (events) → tick → paint.

use easel_render::DisplayList;

use crate::element::Element;
use crate::geometry::Rect;
use crate::input::MouseClick;
use crate::snapshot::LayoutSnapshot;
use crate::widget::PaintContext;

/// Root of a UI tree plus the pointer state between frames
pub struct Ui<S> {
    root: Element<S>,
    pointer: Option<(i32, i32)>,
    debug_overlay: bool,
}

impl<S> Ui<S> {
    pub fn new(root: Element<S>) -> Self {
        Self {
            root,
            pointer: None,
            debug_overlay: false,
        }
    }

    pub fn root(&self) -> &Element<S> {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element<S> {
        &mut self.root
    }

    /// Last known pointer position
    pub fn pointer(&self) -> Option<(i32, i32)> {
        self.pointer
    }

    pub fn debug_overlay(&self) -> bool {
        self.debug_overlay
    }

    pub fn set_debug_overlay(&mut self, enabled: bool) {
        self.debug_overlay = enabled;
    }

    /// Re-root the layout on a window of the given size
    pub fn resize(&mut self, width: i32, height: i32) {
        log::debug!("Layout pass for {}x{}", width, height);
        self.root.set_rect(Rect::new(0, 0, width, height));
    }

    /// Start a frame: clear hit flags, resolve last frame's hover edges,
    /// then hover again at the last known pointer position
    pub fn begin_frame(&mut self, state: &mut S) {
        self.root.reset_debug();
        self.root.reset_mouse(state);
        if let Some((x, y)) = self.pointer {
            self.root.mouse_over(x, y);
        }
    }

    /// Pointer moved to `(x, y)`
    pub fn pointer_moved(&mut self, x: i32, y: i32) -> bool {
        self.pointer = Some((x, y));
        self.root.mouse_over(x, y)
    }

    /// Pointer left the window; leave edges fire next frame
    pub fn pointer_left(&mut self) {
        self.pointer = None;
    }

    /// Button edge at the current pointer position
    pub fn click(&mut self, click: MouseClick, state: &mut S) {
        self.root.mouse_click(click, state);
    }

    /// Finish a frame: tick, then paint into `list`
    pub fn end_frame(&mut self, state: &mut S, list: &mut DisplayList) {
        self.root.tick(state);
        let mut ctx = PaintContext::new(list, &*state).with_debug_hits(self.debug_overlay);
        self.root.paint(&mut ctx);
    }

    /// Current geometry of the whole tree
    pub fn snapshot(&self) -> LayoutSnapshot {
        LayoutSnapshot::capture(&self.root)
    }
}
