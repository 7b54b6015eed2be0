//! Window chrome widgets
//!
//! Panels, labels, the menu bar entries and the status bar.

use easel_render::{RenderColor, RenderRect};
use easel_ui::{MouseClick, PaintContext, Rect, Widget};

use crate::state::EditorState;

/// Font size for chrome text
pub const CHROME_FONT_SIZE: f32 = 13.0;

/// Menu and status bar text
const TEXT_COLOR: RenderColor = RenderColor::rgb(30, 30, 30);

/// Menu entry under the pointer
const MENU_HOVER_COLOR: RenderColor = RenderColor::rgb(204, 228, 247);

/// Rough advance of one character at `size`, for centering without a font
fn approx_text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * 0.55
}

/// Top of a single text line vertically centered in `rect`
fn centered_text_y(rect: Rect, size: f32) -> f32 {
    rect.y as f32 + (rect.h as f32 - size) / 2.0
}

/// Which side of a panel gets a separator line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Top,
    Bottom,
    Right,
}

/// Solid background with an optional one-pixel separator
#[derive(Debug, Clone)]
pub struct Panel {
    color: RenderColor,
    separator: Option<(Side, RenderColor)>,
}

impl Panel {
    pub fn new(color: RenderColor) -> Self {
        Self { color, separator: None }
    }

    pub fn with_separator(mut self, side: Side, color: RenderColor) -> Self {
        self.separator = Some((side, color));
        self
    }
}

impl<S> Widget<S> for Panel {
    fn paint(&self, rect: Rect, ctx: &mut PaintContext<'_, S>) {
        ctx.list.fill_rect(RenderRect::from(rect), self.color);

        if let Some((side, color)) = self.separator {
            let line = match side {
                Side::Top => Rect::new(rect.x, rect.y, rect.w, 1),
                Side::Bottom => Rect::new(rect.x, rect.bottom() - 1, rect.w, 1),
                Side::Right => Rect::new(rect.right() - 1, rect.y, 1, rect.h),
            };
            ctx.list.fill_rect(RenderRect::from(line), color);
        }
    }
}

/// Static text
#[derive(Debug, Clone)]
pub struct Label {
    text: String,
    color: RenderColor,
    size: f32,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: TEXT_COLOR,
            size: CHROME_FONT_SIZE,
        }
    }

    pub fn with_color(mut self, color: RenderColor) -> Self {
        self.color = color;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl<S> Widget<S> for Label {
    fn paint(&self, rect: Rect, ctx: &mut PaintContext<'_, S>) {
        ctx.list.text(
            self.text.as_str(),
            rect.x as f32 + 4.0,
            centered_text_y(rect, self.size),
            self.color,
            self.size,
        );
    }
}

/// An entry of the menu bar
///
/// Menus have no actions; clicking one only reports it in the status bar.
#[derive(Debug, Clone)]
pub struct MenuEntry {
    label: &'static str,
    hovered: bool,
}

impl MenuEntry {
    pub fn new(label: &'static str) -> Self {
        Self { label, hovered: false }
    }
}

impl Widget<EditorState> for MenuEntry {
    fn paint(&self, rect: Rect, ctx: &mut PaintContext<'_, EditorState>) {
        if self.hovered {
            ctx.list.fill_rect(RenderRect::from(rect), MENU_HOVER_COLOR);
        }

        let text_x = rect.x as f32 + (rect.w as f32 - approx_text_width(self.label, CHROME_FONT_SIZE)) / 2.0;
        ctx.list.text(self.label, text_x, centered_text_y(rect, CHROME_FONT_SIZE), TEXT_COLOR, CHROME_FONT_SIZE);
    }

    fn mouse_click(&mut self, _rect: Rect, click: MouseClick, state: &mut EditorState) {
        if click.is_press() {
            state.status = format!("{} menu is not available yet", self.label);
        }
    }

    fn mouse_enter(&mut self, _state: &mut EditorState) {
        self.hovered = true;
    }

    fn mouse_leave(&mut self, _state: &mut EditorState) {
        self.hovered = false;
    }
}

/// Bottom line: pointer position, document size, zoom, tool and message
#[derive(Debug, Clone, Default)]
pub struct StatusBar;

impl StatusBar {
    /// Status fields, left to right
    pub fn fields(state: &EditorState) -> [String; 5] {
        let pointer = match state.doc_pointer {
            Some((x, y)) => format!("{}, {}px", x, y),
            None => String::new(),
        };
        [
            pointer,
            format!("{} x {}px", state.document.width, state.document.height),
            format!("{}%", state.zoom()),
            state.tool.label().to_string(),
            state.status.clone(),
        ]
    }
}

impl Widget<EditorState> for StatusBar {
    fn paint(&self, rect: Rect, ctx: &mut PaintContext<'_, EditorState>) {
        const FIELD_WIDTHS: [f32; 4] = [110.0, 130.0, 70.0, 90.0];

        let y = centered_text_y(rect, CHROME_FONT_SIZE);
        let mut x = rect.x as f32 + 8.0;
        let widths = FIELD_WIDTHS.iter().copied().chain(std::iter::once(f32::INFINITY));

        for (field, width) in StatusBar::fields(ctx.state).into_iter().zip(widths) {
            ctx.list.text(field, x, y, TEXT_COLOR, CHROME_FONT_SIZE);
            x += width;
        }
    }
}
