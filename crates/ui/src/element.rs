//! Elements
//!
//! The unit of the UI tree: geometry and size hint, an optional widget, an
//! optional mouse tracker and an optional container of children.

use crate::box_layout::BoxLayout;
use crate::container::{Container, LayoutKind};
use crate::geometry::{Rect, SizeHint};
use crate::grid::GridLayout;
use crate::input::MouseClick;
use crate::mouse::{MouseEdge, MouseTracker};
use crate::widget::{PaintContext, Widget};

/// A node of the UI tree
///
/// `S` is the shared state handed to widgets while ticking, painting and
/// handling clicks.
pub struct Element<S> {
    name: &'static str,
    rect: Rect,
    size_hint: SizeHint,
    /// Set when the latest hover pass hit this element
    debug: bool,
    mouse: Option<MouseTracker>,
    widget: Option<Box<dyn Widget<S>>>,
    container: Option<Container<S>>,
}

impl<S> Element<S> {
    fn bare(container: Option<Container<S>>) -> Self {
        Self {
            name: "",
            rect: Rect::NULL,
            size_hint: SizeHint::Auto,
            debug: false,
            mouse: None,
            widget: None,
            container,
        }
    }

    /// Element without children
    pub fn leaf(widget: impl Widget<S> + 'static) -> Self {
        Self::bare(None).with_widget(widget)
    }

    /// Element without children or behaviour, useful as a spacer
    pub fn empty() -> Self {
        Self::bare(None)
    }

    /// Container using the given layout
    pub fn container(layout: LayoutKind) -> Self {
        Self::bare(Some(Container::new(layout)))
    }

    /// Children side by side
    pub fn hbox() -> Self {
        Self::container(LayoutKind::Box(BoxLayout::horizontal()))
    }

    /// Children stacked top to bottom
    pub fn vbox() -> Self {
        Self::container(LayoutKind::Box(BoxLayout::vertical()))
    }

    pub fn grid(grid: GridLayout) -> Self {
        Self::container(LayoutKind::Grid(grid))
    }

    pub fn named(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    pub fn with_hint(mut self, hint: impl Into<SizeHint>) -> Self {
        self.size_hint = hint.into();
        self
    }

    /// Attach a widget; on a container it paints below the children
    pub fn with_widget(mut self, widget: impl Widget<S> + 'static) -> Self {
        self.widget = Some(Box::new(widget));
        self
    }

    /// Deliver enter/leave edges to the widget
    pub fn tracking_mouse(mut self) -> Self {
        self.mouse = Some(MouseTracker::new());
        self
    }

    pub fn with_child(mut self, child: Element<S>) -> Self {
        self.add_child(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Element<S>>) -> Self {
        for child in children {
            self.add_child(child);
        }
        self
    }

    /// Take ownership of `child`
    ///
    /// Leaves have nowhere to put children, so the child is dropped with a
    /// warning. The child is placed on the next `set_rect`.
    pub fn add_child(&mut self, child: Element<S>) {
        match self.container.as_mut() {
            Some(container) => container.push(child),
            None => log::warn!("Dropping child '{}' added to leaf '{}'", child.name, self.name),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn size_hint(&self) -> SizeHint {
        self.size_hint
    }

    pub fn set_size_hint(&mut self, hint: impl Into<SizeHint>) {
        self.size_hint = hint.into();
    }

    /// True when the latest hover pass hit this element
    pub fn is_hit(&self) -> bool {
        self.debug
    }

    /// Resolved hover state, `false` for elements that do not track the mouse
    pub fn is_hovered(&self) -> bool {
        self.mouse.as_ref().is_some_and(MouseTracker::is_hovered)
    }

    pub fn is_container(&self) -> bool {
        self.container.is_some()
    }

    pub fn container_ref(&self) -> Option<&Container<S>> {
        self.container.as_ref()
    }

    pub fn children(&self) -> &[Element<S>] {
        match &self.container {
            Some(container) => container.children(),
            None => &[],
        }
    }

    pub fn children_mut(&mut self) -> &mut [Element<S>] {
        match &mut self.container {
            Some(container) => container.children_mut(),
            None => &mut [],
        }
    }

    /// Depth-first search by name
    pub fn find(&self, name: &str) -> Option<&Element<S>> {
        if self.name == name {
            return Some(self);
        }
        self.children().iter().find_map(|child| child.find(name))
    }

    /// Assign geometry and recompute everything derived from it
    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
        self.update();
    }

    /// Re-layout children and notify the widget
    ///
    /// Only ever touches children's geometry, never this element's.
    pub fn update(&mut self) {
        if let Some(container) = self.container.as_mut() {
            container.relayout(self.rect);
        }
        if let Some(widget) = self.widget.as_mut() {
            widget.update(self.rect);
        }
    }

    /// Hit test and route the pointer to the child under it
    ///
    /// Returns whether the point lies inside this element, whether or not a
    /// child was found there.
    ///
    /// Each pass replaces the routed path of the previous one within a frame:
    /// clicks and the hit overlay follow only the latest point. Mouse trackers
    /// keep every mark until `reset_mouse`, so hover still accumulates.
    pub fn mouse_over(&mut self, x: i32, y: i32) -> bool {
        if !self.rect.contains(x, y) {
            self.reset_debug();
            return false;
        }
        self.debug = true;

        if let Some(tracker) = self.mouse.as_mut() {
            tracker.mark();
        }
        if let Some(widget) = self.widget.as_mut() {
            widget.mouse_over(self.rect, x, y);
        }
        if let Some(container) = self.container.as_mut() {
            container.mouse_over(self.rect, x, y);
        }
        true
    }

    /// Deliver a button edge along the path found by the latest hover pass
    pub fn mouse_click(&mut self, click: MouseClick, state: &mut S) {
        if !self.debug {
            return;
        }

        if let Some(widget) = self.widget.as_mut() {
            if !self.name.is_empty() {
                log::debug!("Click {:?} on '{}'", click.button, self.name);
            }
            widget.mouse_click(self.rect, click, state);
        }
        if let Some(container) = self.container.as_mut() {
            container.mouse_click(click, state);
        }
    }

    /// Clear hit flags on the whole subtree
    pub fn reset_debug(&mut self) {
        self.debug = false;
        if let Some(container) = self.container.as_mut() {
            container.reset_debug();
        }
    }

    /// Close the hover frame on the whole subtree, firing enter/leave edges
    pub fn reset_mouse(&mut self, state: &mut S) {
        if let Some(tracker) = self.mouse.as_mut() {
            if let Some(edge) = tracker.resolve() {
                log::trace!("Mouse {:?} '{}'", edge, self.name);
                if let Some(widget) = self.widget.as_mut() {
                    match edge {
                        MouseEdge::Enter => widget.mouse_enter(state),
                        MouseEdge::Leave => widget.mouse_leave(state),
                    }
                }
            }
        }
        if let Some(container) = self.container.as_mut() {
            container.reset_mouse(state);
        }
    }

    /// Per-frame update, own widget first, then children in order
    pub fn tick(&mut self, state: &mut S) {
        if let Some(widget) = self.widget.as_mut() {
            widget.tick(self.rect, state);
        }
        if let Some(container) = self.container.as_mut() {
            container.tick(state);
        }
    }

    /// Paint self, then children in insertion order
    pub fn paint(&self, ctx: &mut PaintContext<'_, S>) {
        if let Some(widget) = self.widget.as_ref() {
            widget.paint(self.rect, ctx);
        }
        if let Some(container) = self.container.as_ref() {
            container.paint(ctx);
        }
        if self.debug {
            ctx.paint_debug(self.rect);
        }
    }
}

impl<S> std::fmt::Debug for Element<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Element")
            .field("name", &self.name)
            .field("rect", &self.rect)
            .field("size_hint", &self.size_hint)
            .field("layout", &self.container.as_ref().map(|c| c.layout().tag()))
            .field("children", &self.children())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use easel_render::DisplayList;

    use super::*;
    use crate::input::MouseButton;

    /// Records everything that happens to it
    #[derive(Default)]
    struct Recorder {
        log: Rc<RefCell<Vec<String>>>,
        tag: &'static str,
    }

    impl Recorder {
        fn new(tag: &'static str, log: &Rc<RefCell<Vec<String>>>) -> Self {
            Self {
                log: Rc::clone(log),
                tag,
            }
        }

        fn push(&self, event: &str) {
            self.log.borrow_mut().push(format!("{}:{}", self.tag, event));
        }
    }

    impl Widget<u32> for Recorder {
        fn tick(&mut self, _rect: Rect, state: &mut u32) {
            *state += 1;
            self.push("tick");
        }

        fn paint(&self, _rect: Rect, _ctx: &mut PaintContext<'_, u32>) {
            self.push("paint");
        }

        fn mouse_click(&mut self, _rect: Rect, _click: MouseClick, _state: &mut u32) {
            self.push("click");
        }

        fn mouse_enter(&mut self, _state: &mut u32) {
            self.push("enter");
        }

        fn mouse_leave(&mut self, _state: &mut u32) {
            self.push("leave");
        }
    }

    /// Counts its own drops
    struct DropCounter(Rc<Cell<usize>>);

    impl Widget<u32> for DropCounter {
        fn paint(&self, _rect: Rect, _ctx: &mut PaintContext<'_, u32>) {}
    }

    impl Drop for DropCounter {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn events(log: &Rc<RefCell<Vec<String>>>) -> Vec<String> {
        log.borrow_mut().drain(..).collect()
    }

    #[test]
    fn test_set_rect_lays_out_nested_children() {
        let mut root: Element<u32> = Element::vbox()
            .with_child(Element::empty().named("menu").with_hint(SizeHint::height(20)))
            .with_child(
                Element::hbox()
                    .named("body")
                    .with_child(Element::empty().named("left").with_hint(SizeHint::width(50)))
                    .with_child(Element::empty().named("right")),
            );

        root.set_rect(Rect::new(0, 0, 200, 120));

        assert_eq!(root.find("menu").map(Element::rect), Some(Rect::new(0, 0, 200, 20)));
        assert_eq!(root.find("body").map(Element::rect), Some(Rect::new(0, 20, 200, 100)));
        assert_eq!(root.find("left").map(Element::rect), Some(Rect::new(0, 20, 50, 100)));
        assert_eq!(root.find("right").map(Element::rect), Some(Rect::new(50, 20, 150, 100)));
    }

    #[test]
    fn test_relayout_is_idempotent() {
        let mut root: Element<u32> = Element::grid(GridLayout::new(2, 2).with_spacing(3, 3))
            .with_children((0..4).map(|_| Element::hbox().with_child(Element::empty()).with_child(Element::empty())));

        let rect = Rect::new(7, 9, 101, 77);
        root.set_rect(rect);
        let first = format!("{:?}", root);
        root.set_rect(rect);
        assert_eq!(format!("{:?}", root), first);
    }

    #[test]
    fn test_container_reports_hit_without_child() {
        let mut root: Element<u32> = Element::hbox().with_child(Element::empty().with_hint(SizeHint::width(10)));
        root.set_rect(Rect::new(0, 0, 100, 10));

        // Inside the container, past its only child
        assert!(root.mouse_over(50, 5));
        assert!(root.is_hit());
        assert!(!root.children()[0].is_hit());
        assert_eq!(root.container_ref().and_then(Container::hovered), None);

        assert!(!root.mouse_over(100, 5));
    }

    #[test]
    fn test_hover_marks_single_path() {
        let mut root: Element<u32> = Element::vbox()
            .with_child(Element::hbox().named("top").with_child(Element::empty().named("a")).with_child(Element::empty().named("b")))
            .with_child(Element::empty().named("bottom"));
        root.set_rect(Rect::new(0, 0, 100, 100));

        root.mouse_over(75, 10);

        let hit: Vec<_> = ["top", "a", "b", "bottom"]
            .iter()
            .map(|n| root.find(n).is_some_and(Element::is_hit))
            .collect();
        assert_eq!(hit, vec![true, false, true, false]);

        root.reset_debug();
        assert!(!root.is_hit());
        assert!(!root.find("b").is_some_and(Element::is_hit));
    }

    #[test]
    fn test_later_hover_replaces_path() {
        let mut root: Element<u32> = Element::vbox()
            .with_child(Element::hbox().named("top").with_child(Element::empty().named("a")).with_child(Element::empty().named("b")))
            .with_child(Element::empty().named("bottom"));
        root.set_rect(Rect::new(0, 0, 100, 100));
        let hit = |root: &Element<u32>| -> Vec<bool> {
            ["top", "a", "b", "bottom"]
                .iter()
                .map(|n| root.find(n).is_some_and(Element::is_hit))
                .collect()
        };

        root.mouse_over(75, 10);
        root.mouse_over(10, 90);
        assert_eq!(hit(&root), vec![false, false, false, true]);

        // Leaving the root clears the whole path
        root.mouse_over(10, 10);
        root.mouse_over(150, 10);
        assert!(!root.is_hit());
        assert_eq!(hit(&root), vec![false; 4]);

        let state = 0;
        let mut list = DisplayList::new();
        root.paint(&mut PaintContext::new(&mut list, &state).with_debug_hits(true));
        assert!(list.is_empty());
    }

    #[test]
    fn test_click_follows_hover_path() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut root: Element<u32> = Element::grid(GridLayout::new(1, 3))
            .with_child(Element::leaf(Recorder::new("a", &log)))
            .with_child(Element::leaf(Recorder::new("b", &log)))
            .with_child(Element::leaf(Recorder::new("c", &log)));
        root.set_rect(Rect::new(0, 0, 30, 10));

        let mut state = 0;
        let click = MouseClick::press(MouseButton::Left);

        // Nothing hovered yet
        root.mouse_click(click, &mut state);
        assert!(events(&log).is_empty());

        root.mouse_over(15, 5);
        root.mouse_click(click, &mut state);
        assert_eq!(events(&log), vec!["b:click"]);

        // A later hover in the same frame wins
        root.mouse_over(25, 5);
        root.mouse_click(click, &mut state);
        assert_eq!(events(&log), vec!["c:click"]);

        root.reset_debug();
        root.mouse_click(click, &mut state);
        assert!(events(&log).is_empty());
    }

    #[test]
    fn test_tick_and_paint_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut root: Element<u32> = Element::hbox()
            .with_widget(Recorder::new("root", &log))
            .with_child(Element::leaf(Recorder::new("first", &log)))
            .with_child(Element::leaf(Recorder::new("second", &log)));
        root.set_rect(Rect::new(0, 0, 10, 10));

        let mut state = 0;
        root.tick(&mut state);
        assert_eq!(state, 3);

        let mut list = DisplayList::new();
        root.paint(&mut PaintContext::new(&mut list, &state));

        assert_eq!(
            events(&log),
            vec!["root:tick", "first:tick", "second:tick", "root:paint", "first:paint", "second:paint"]
        );
    }

    #[test]
    fn test_enter_leave_only_on_tracking_elements() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut root: Element<u32> = Element::hbox()
            .with_child(Element::leaf(Recorder::new("tracked", &log)).tracking_mouse())
            .with_child(Element::leaf(Recorder::new("plain", &log)));
        root.set_rect(Rect::new(0, 0, 20, 10));

        let mut state = 0;
        for x in [5, 15] {
            root.reset_debug();
            root.reset_mouse(&mut state);
            root.mouse_over(x, 5);
        }
        root.reset_mouse(&mut state);

        assert_eq!(events(&log), vec!["tracked:enter", "tracked:leave"]);
    }

    #[test]
    fn test_debug_overlay_painted_for_hit_elements() {
        let mut root: Element<u32> = Element::hbox().with_child(Element::empty()).with_child(Element::empty());
        root.set_rect(Rect::new(0, 0, 20, 10));
        root.mouse_over(15, 5);

        let state = 0;
        let mut list = DisplayList::new();
        root.paint(&mut PaintContext::new(&mut list, &state));
        assert!(list.is_empty());

        root.paint(&mut PaintContext::new(&mut list, &state).with_debug_hits(true));
        // Root and the second child
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_add_child_to_leaf_is_dropped() {
        let drops = Rc::new(Cell::new(0));
        let mut leaf: Element<u32> = Element::empty();
        leaf.add_child(Element::leaf(DropCounter(Rc::clone(&drops))));
        assert!(leaf.children().is_empty());
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn test_teardown_drops_each_descendant_once() {
        let drops = Rc::new(Cell::new(0));
        let leaf = || Element::leaf(DropCounter(Rc::clone(&drops)));

        let mut root: Element<u32> = Element::vbox().with_widget(DropCounter(Rc::clone(&drops)));
        let mut depth = Element::hbox();
        for _ in 0..10 {
            depth = Element::vbox().with_child(depth).with_child(leaf());
        }
        root.add_child(depth);
        root.add_child(Element::grid(GridLayout::new(3, 3)).with_children((0..9).map(|_| leaf())));
        root.add_child(Element::hbox().with_widget(DropCounter(Rc::clone(&drops))).with_child(leaf()));
        root.set_rect(Rect::new(0, 0, 300, 300));

        assert_eq!(drops.get(), 0);
        drop(root);
        // 1 root widget + 10 nested leaves + 9 grid leaves + 1 hbox widget + 1 leaf
        assert_eq!(drops.get(), 22);
    }
}
