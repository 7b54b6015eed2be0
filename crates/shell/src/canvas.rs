//! Canvas widgets
//!
//! The document view with its freehand strokes, and the grip that resizes
//! the document.

use easel_render::{RenderColor, RenderRect};
use easel_ui::{MouseButton, MouseClick, PaintContext, Rect, Widget};

use crate::state::{Drag, EditorState};

/// Gap between the viewport corner and the page
pub const PAGE_MARGIN: i32 = 8;

const WORKSPACE_COLOR: RenderColor = RenderColor::rgb(197, 207, 223);
const PAGE_COLOR: RenderColor = RenderColor::white();
const PAGE_SHADOW_COLOR: RenderColor = RenderColor::new(0, 0, 0, 48);
const GRIP_COLOR: RenderColor = RenderColor::rgb(120, 120, 120);

/// Overlap of two rectangles, `None` when they don't touch
fn intersect(a: Rect, b: Rect) -> Option<Rect> {
    let x = a.x.max(b.x);
    let y = a.y.max(b.y);
    let right = a.right().min(b.right());
    let bottom = a.bottom().min(b.bottom());
    (right > x && bottom > y).then(|| Rect::new(x, y, right - x, bottom - y))
}

/// Scrollless view of the document at the current zoom
#[derive(Debug, Clone, Default)]
pub struct CanvasView {
    last_pointer: Option<(i32, i32)>,
}

impl CanvasView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Where the page lands inside the view, in window pixels
    pub fn page_rect(rect: Rect, state: &EditorState) -> Rect {
        Rect::new(
            rect.x + PAGE_MARGIN,
            rect.y + PAGE_MARGIN,
            state.to_screen(state.document.width),
            state.to_screen(state.document.height),
        )
    }

    /// Window point to document point
    pub fn document_point(rect: Rect, state: &EditorState, x: i32, y: i32) -> (i32, i32) {
        let page = CanvasView::page_rect(rect, state);
        (state.to_document(x - page.x), state.to_document(y - page.y))
    }

    fn screen_point(page: Rect, state: &EditorState, point: (i32, i32)) -> (f32, f32) {
        (
            (page.x + state.to_screen(point.0)) as f32,
            (page.y + state.to_screen(point.1)) as f32,
        )
    }
}

impl Widget<EditorState> for CanvasView {
    fn tick(&mut self, rect: Rect, state: &mut EditorState) {
        let point = state
            .pointer
            .filter(|&(x, y)| rect.contains(x, y))
            .map(|(x, y)| CanvasView::document_point(rect, state, x, y));

        state.doc_pointer = point.filter(|&(x, y)| state.document.contains(x, y));

        if state.drag == Some(Drag::Stroke) {
            // Strokes keep following the pointer outside the view
            if let Some((x, y)) = state.pointer {
                let point = CanvasView::document_point(rect, state, x, y);
                state.extend_stroke(point);
            }
        }
    }

    fn paint(&self, rect: Rect, ctx: &mut PaintContext<'_, EditorState>) {
        let state = ctx.state;
        ctx.list.fill_rect(RenderRect::from(rect), WORKSPACE_COLOR);

        let page = CanvasView::page_rect(rect, state);
        let shadow = Rect::new(page.x + 3, page.y + 3, page.w, page.h);
        if let Some(visible) = intersect(shadow, rect) {
            ctx.list.fill_rect(RenderRect::from(visible), PAGE_SHADOW_COLOR);
        }
        if let Some(visible) = intersect(page, rect) {
            ctx.list.fill_rect(RenderRect::from(visible), PAGE_COLOR);
        }

        let scale = state.zoom() as f32 / 100.0;
        for stroke in &state.document.strokes {
            let width = (stroke.width * scale).max(1.0);
            if let [only] = stroke.points.as_slice() {
                let (x, y) = CanvasView::screen_point(page, state, *only);
                let half = width / 2.0;
                ctx.list.fill_rect(RenderRect::new(x - half, y - half, width, width), stroke.color);
                continue;
            }
            for pair in stroke.points.windows(2) {
                let from = CanvasView::screen_point(page, state, pair[0]);
                let to = CanvasView::screen_point(page, state, pair[1]);
                ctx.list.line(from, to, width, stroke.color);
            }
        }
    }

    fn mouse_over(&mut self, _rect: Rect, x: i32, y: i32) {
        self.last_pointer = Some((x, y));
    }

    fn mouse_click(&mut self, rect: Rect, click: MouseClick, state: &mut EditorState) {
        if !click.is_press() || click.button != MouseButton::Left {
            return;
        }
        let Some((x, y)) = self.last_pointer else {
            return;
        };

        let point = CanvasView::document_point(rect, state, x, y);
        if !state.document.contains(point.0, point.1) {
            return;
        }

        if state.tool.draws() {
            log::trace!("Stroke started at {:?}", point);
            state.begin_stroke(point);
        } else {
            state.status = format!("{} is not available yet", state.tool.label());
        }
    }
}

/// Start and end of one painted ridge
type Segment = ((f32, f32), (f32, f32));

/// Corner handle dragging the document size
#[derive(Debug, Clone, Default)]
pub struct ResizeGrip {
    last_pointer: Option<(i32, i32)>,
    /// Ridges for the current geometry
    ridges: [Segment; 3],
}

impl ResizeGrip {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Widget<EditorState> for ResizeGrip {
    fn update(&mut self, rect: Rect) {
        // Three diagonal ridges in the bottom-right corner
        let right = rect.right() as f32 - 2.0;
        let bottom = rect.bottom() as f32 - 2.0;
        let size = (rect.w.min(rect.h) - 4).max(0) as f32;
        for (step, ridge) in self.ridges.iter_mut().enumerate() {
            let offset = size * (step + 1) as f32 / 3.0;
            *ridge = ((right - offset, bottom), (right, bottom - offset));
        }
    }

    fn tick(&mut self, _rect: Rect, state: &mut EditorState) {
        if let (Some(Drag::ResizeCanvas { .. }), Some(pointer)) = (state.drag, state.pointer) {
            state.resize_to(pointer);
        }
    }

    fn paint(&self, _rect: Rect, ctx: &mut PaintContext<'_, EditorState>) {
        for &(from, to) in &self.ridges {
            ctx.list.line(from, to, 1.0, GRIP_COLOR);
        }
    }

    fn mouse_over(&mut self, _rect: Rect, x: i32, y: i32) {
        self.last_pointer = Some((x, y));
    }

    fn mouse_click(&mut self, _rect: Rect, click: MouseClick, state: &mut EditorState) {
        if !click.is_press() || click.button != MouseButton::Left {
            return;
        }
        if let Some(origin) = self.last_pointer {
            log::debug!("Canvas resize from {}x{}", state.document.width, state.document.height);
            state.begin_resize(origin);
        }
    }
}

#[cfg(test)]
mod tests {
    use easel_render::{DisplayList, PaintCommand};
    use easel_ui::Element;

    use super::*;
    use crate::state::Tool;

    const VIEW: Rect = Rect::new(100, 50, 600, 400);

    #[test]
    fn test_document_point_follows_zoom() {
        let mut state = EditorState::new();
        assert_eq!(CanvasView::document_point(VIEW, &state, 108, 58), (0, 0));

        state.set_zoom(400);
        assert_eq!(CanvasView::page_rect(VIEW, &state), Rect::new(108, 58, 1920, 1280));
        assert_eq!(CanvasView::document_point(VIEW, &state, 120, 61), (3, 0));
    }

    #[test]
    fn test_stroke_follows_pointer_until_release() {
        let mut state = EditorState::new();
        let mut view = CanvasView::new();

        view.mouse_over(VIEW, 110, 60);
        state.pointer = Some((110, 60));
        view.mouse_click(VIEW, MouseClick::press(MouseButton::Left), &mut state);
        assert_eq!(state.drag, Some(Drag::Stroke));

        for (x, y) in [(110, 60), (120, 70), (130, 75)] {
            state.pointer = Some((x, y));
            view.tick(VIEW, &mut state);
        }
        state.end_drag();
        state.pointer = Some((200, 200));
        view.tick(VIEW, &mut state);

        assert_eq!(state.document.strokes.len(), 1);
        assert_eq!(state.document.strokes[0].points, vec![(2, 2), (12, 12), (22, 17)]);
        assert_eq!(state.doc_pointer, Some((92, 142)));
    }

    #[test]
    fn test_click_outside_page_does_nothing() {
        let mut state = EditorState::new();
        let mut view = CanvasView::new();

        // Inside the view, left of the page
        view.mouse_over(VIEW, 102, 60);
        view.mouse_click(VIEW, MouseClick::press(MouseButton::Left), &mut state);
        assert_eq!(state.drag, None);

        state.set_tool(Tool::Fill);
        view.mouse_over(VIEW, 150, 100);
        view.mouse_click(VIEW, MouseClick::press(MouseButton::Left), &mut state);
        assert_eq!(state.drag, None);
        assert_eq!(state.status, "Fill is not available yet");
    }

    #[test]
    fn test_page_is_clipped_to_view() {
        let mut state = EditorState::new();
        state.set_zoom(800);
        let mut list = DisplayList::new();
        CanvasView::new().paint(VIEW, &mut PaintContext::new(&mut list, &state));

        // Workspace, shadow, page
        assert_eq!(list.len(), 3);
        let expected = PaintCommand::FillRect {
            rect: RenderRect::new(108.0, 58.0, 592.0, 392.0),
            color: PAGE_COLOR,
        };
        assert_eq!(list.commands[2], expected);
    }

    #[test]
    fn test_grip_drag_resizes_document() {
        let mut state = EditorState::new();
        let mut grip = ResizeGrip::new();
        let rect = Rect::new(700, 450, 12, 12);

        grip.mouse_over(rect, 705, 455);
        grip.mouse_click(rect, MouseClick::press(MouseButton::Left), &mut state);

        state.pointer = Some((745, 435));
        grip.tick(rect, &mut state);
        assert_eq!((state.document.width, state.document.height), (520, 300));

        state.end_drag();
        state.pointer = Some((800, 800));
        grip.tick(rect, &mut state);
        assert_eq!((state.document.width, state.document.height), (520, 300));
    }

    #[test]
    fn test_grip_ridges_follow_geometry() {
        let state = EditorState::new();
        let mut grip = Element::leaf(ResizeGrip::new());
        grip.set_rect(Rect::new(700, 450, 12, 12));

        let mut list = DisplayList::new();
        grip.paint(&mut PaintContext::new(&mut list, &state));
        assert_eq!(list.len(), 3);
        let outer = PaintCommand::DrawLine {
            x1: 702.0,
            y1: 460.0,
            x2: 710.0,
            y2: 452.0,
            width: 1.0,
            color: GRIP_COLOR,
        };
        assert_eq!(list.commands[2], outer);

        grip.set_rect(Rect::new(0, 0, 6, 6));
        let mut list = DisplayList::new();
        grip.paint(&mut PaintContext::new(&mut list, &state));
        let PaintCommand::DrawLine { x1, y1, .. } = list.commands[0] else {
            panic!("expected a line");
        };
        assert!((x1 - (4.0 - 2.0 / 3.0)).abs() < 1e-4);
        assert_eq!(y1, 4.0);
    }
}
