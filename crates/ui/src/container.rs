//! Containers
//!
//! Ordered child lists plus the layout strategy that places them and maps
//! points back to children.

use smallvec::SmallVec;

use crate::box_layout::BoxLayout;
use crate::element::Element;
use crate::geometry::{Axis, Rect};
use crate::grid::GridLayout;
use crate::input::MouseClick;
use crate::widget::PaintContext;

/// Layout strategy of a container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutKind {
    Box(BoxLayout),
    Grid(GridLayout),
}

impl LayoutKind {
    /// Child rectangles for the given container geometry
    fn arrange<S>(&self, rect: Rect, children: &[Element<S>]) -> SmallVec<[Rect; 16]> {
        match self {
            LayoutKind::Box(layout) => {
                let hints: SmallVec<[_; 16]> = children.iter().map(Element::size_hint).collect();
                layout.arrange(rect, &hints)
            }
            LayoutKind::Grid(grid) => grid.arrange(rect, children.len()),
        }
    }

    /// Child under a point, or `None`
    fn child_at<S>(&self, rect: Rect, children: &[Element<S>], x: i32, y: i32) -> Option<usize> {
        match self {
            LayoutKind::Box(layout) => layout.child_at(rect, children.iter().map(Element::rect), x, y),
            LayoutKind::Grid(grid) => grid.child_at(rect, children.len(), x, y),
        }
    }

    /// Short tag used in logs and snapshots
    pub fn tag(&self) -> &'static str {
        match self {
            LayoutKind::Box(layout) if layout.axis() == Axis::Horizontal => "hbox",
            LayoutKind::Box(_) => "vbox",
            LayoutKind::Grid(_) => "grid",
        }
    }
}

/// Children owned by an element
pub struct Container<S> {
    layout: LayoutKind,
    children: Vec<Element<S>>,
    /// Child routed to by the latest hover pass
    hovered: Option<usize>,
}

impl<S> Container<S> {
    pub fn new(layout: LayoutKind) -> Self {
        Self {
            layout,
            children: Vec::new(),
            hovered: None,
        }
    }

    pub fn layout(&self) -> &LayoutKind {
        &self.layout
    }

    pub fn layout_mut(&mut self) -> &mut LayoutKind {
        &mut self.layout
    }

    pub fn children(&self) -> &[Element<S>] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [Element<S>] {
        &mut self.children
    }

    /// Index of the child hit by the latest hover pass
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub(crate) fn push(&mut self, child: Element<S>) {
        self.children.push(child);
    }

    /// Place every child inside `rect`
    pub(crate) fn relayout(&mut self, rect: Rect) {
        let rects = self.layout.arrange(rect, &self.children);
        for (child, child_rect) in self.children.iter_mut().zip(rects) {
            child.set_rect(child_rect);
        }
    }

    pub(crate) fn reset_debug(&mut self) {
        self.hovered = None;
        for child in &mut self.children {
            child.reset_debug();
        }
    }

    pub(crate) fn reset_mouse(&mut self, state: &mut S) {
        for child in &mut self.children {
            child.reset_mouse(state);
        }
    }

    /// Forward a hover to the single child under the point
    ///
    /// Replaces the path of any earlier pass, so a gutter or empty cell
    /// leaves no child routed.
    pub(crate) fn mouse_over(&mut self, rect: Rect, x: i32, y: i32) {
        if let Some(child) = self.hovered.take().and_then(|index| self.children.get_mut(index)) {
            child.reset_debug();
        }
        let Some(index) = self.layout.child_at(rect, &self.children, x, y) else {
            return;
        };
        if let Some(child) = self.children.get_mut(index) {
            self.hovered = Some(index);
            child.mouse_over(x, y);
        }
    }

    pub(crate) fn mouse_click(&mut self, click: MouseClick, state: &mut S) {
        let Some(index) = self.hovered else {
            return;
        };
        if let Some(child) = self.children.get_mut(index) {
            child.mouse_click(click, state);
        }
    }

    pub(crate) fn tick(&mut self, state: &mut S) {
        for child in &mut self.children {
            child.tick(state);
        }
    }

    pub(crate) fn paint(&self, ctx: &mut PaintContext<'_, S>) {
        for child in &self.children {
            child.paint(ctx);
        }
    }
}
