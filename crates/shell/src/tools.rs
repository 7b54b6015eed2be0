//! Shelf and palette widgets

use easel_render::{RenderColor, RenderRect};
use easel_ui::{MouseButton, MouseClick, PaintContext, Rect, Widget};

use crate::chrome::CHROME_FONT_SIZE;
use crate::state::{ColorRole, EditorState, Tool};
use crate::transition::{Fade, TimingFunction};

/// Hover highlight fade length
const HOVER_FADE_MS: f32 = 150.0;

const BUTTON_COLOR: RenderColor = RenderColor::rgb(240, 240, 240);
const BUTTON_HOVER_COLOR: RenderColor = RenderColor::rgb(204, 228, 247);
const BUTTON_PRESSED_COLOR: RenderColor = RenderColor::rgb(170, 200, 230);
const BUTTON_BORDER_COLOR: RenderColor = RenderColor::rgb(160, 160, 160);
const SELECTED_BORDER_COLOR: RenderColor = RenderColor::rgb(0, 120, 215);
const TEXT_COLOR: RenderColor = RenderColor::rgb(30, 30, 30);
const SWATCH_BORDER_COLOR: RenderColor = RenderColor::rgb(128, 128, 128);

/// Shelf button selecting a drawing tool
#[derive(Debug, Clone)]
pub struct ToolButton {
    tool: Tool,
    highlight: Fade,
}

impl ToolButton {
    pub fn new(tool: Tool) -> Self {
        Self {
            tool,
            highlight: Fade::new(0.0, HOVER_FADE_MS, TimingFunction::EaseOut),
        }
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Hover highlight strength, 0.0 to 1.0
    pub fn highlight(&self) -> f32 {
        self.highlight.value()
    }
}

impl Widget<EditorState> for ToolButton {
    fn tick(&mut self, _rect: Rect, _state: &mut EditorState) {
        self.highlight.tick();
    }

    fn paint(&self, rect: Rect, ctx: &mut PaintContext<'_, EditorState>) {
        let selected = ctx.state.tool == self.tool;
        let background = if selected {
            BUTTON_PRESSED_COLOR
        } else {
            BUTTON_COLOR.mix(BUTTON_HOVER_COLOR, self.highlight.value())
        };
        let border = if selected { SELECTED_BORDER_COLOR } else { BUTTON_BORDER_COLOR };

        let bounds = RenderRect::from(rect);
        ctx.list.fill_rect(bounds, background);
        ctx.list.stroke_rect(bounds, 1.0, border);

        let size = CHROME_FONT_SIZE - 2.0;
        ctx.list.text(
            self.tool.label(),
            rect.x as f32 + 4.0,
            rect.y as f32 + (rect.h as f32 - size) / 2.0,
            TEXT_COLOR,
            size,
        );
    }

    fn mouse_click(&mut self, _rect: Rect, click: MouseClick, state: &mut EditorState) {
        if click.is_press() && click.button == MouseButton::Left {
            state.set_tool(self.tool);
        }
    }

    fn mouse_enter(&mut self, _state: &mut EditorState) {
        self.highlight.retarget(1.0);
    }

    fn mouse_leave(&mut self, _state: &mut EditorState) {
        self.highlight.retarget(0.0);
    }
}

/// A palette color
///
/// Left click picks it as foreground, right click as background.
#[derive(Debug, Clone)]
pub struct Swatch {
    color: RenderColor,
}

impl Swatch {
    pub fn new(color: RenderColor) -> Self {
        Self { color }
    }

    pub fn color(&self) -> RenderColor {
        self.color
    }
}

impl Widget<EditorState> for Swatch {
    fn paint(&self, rect: Rect, ctx: &mut PaintContext<'_, EditorState>) {
        let bounds = RenderRect::from(rect);
        ctx.list.fill_rect(bounds, self.color);
        ctx.list.stroke_rect(bounds, 1.0, SWATCH_BORDER_COLOR);
    }

    fn mouse_click(&mut self, _rect: Rect, click: MouseClick, state: &mut EditorState) {
        if !click.is_press() {
            return;
        }
        match click.button {
            MouseButton::Left => state.set_color(ColorRole::Foreground, self.color),
            MouseButton::Right => state.set_color(ColorRole::Background, self.color),
            _ => {}
        }
    }
}

/// Foreground square over the background square; a click swaps them
#[derive(Debug, Clone, Default)]
pub struct ColorRoles;

impl ColorRoles {
    /// Background and foreground squares inside `rect`, in paint order
    fn squares(rect: Rect) -> (Rect, Rect) {
        let side = (rect.w.min(rect.h) * 2 / 3).max(1);
        let offset = side / 2;
        let x = rect.x + (rect.w - side - offset) / 2;
        let y = rect.y + (rect.h - side - offset) / 2;
        (
            Rect::new(x + offset, y + offset, side, side),
            Rect::new(x, y, side, side),
        )
    }
}

impl Widget<EditorState> for ColorRoles {
    fn paint(&self, rect: Rect, ctx: &mut PaintContext<'_, EditorState>) {
        let (back, front) = ColorRoles::squares(rect);
        for (square, color) in [(back, ctx.state.background), (front, ctx.state.foreground)] {
            let bounds = RenderRect::from(square);
            ctx.list.fill_rect(bounds, color);
            ctx.list.stroke_rect(bounds, 1.0, SWATCH_BORDER_COLOR);
        }
    }

    fn mouse_click(&mut self, _rect: Rect, click: MouseClick, state: &mut EditorState) {
        if click.is_press() {
            state.swap_colors();
        }
    }
}
