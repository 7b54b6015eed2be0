//! Display List
//!
//! Immediate-mode paint commands collected during a frame.

use crate::paint::{RenderColor, RenderRect};

/// A display list of paint commands
#[derive(Debug, Default, Clone)]
pub struct DisplayList {
    pub commands: Vec<PaintCommand>,
}

/// A paint command
#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    /// Fill a rectangle with a solid color
    FillRect {
        rect: RenderRect,
        color: RenderColor,
    },
    /// Draw text
    DrawText {
        text: String,
        x: f32,
        y: f32,
        color: RenderColor,
        font_size: f32,
    },
    /// Draw a border (outline of rectangle)
    DrawBorder {
        rect: RenderRect,
        widths: BorderWidths,
        color: RenderColor,
    },
    /// Draw a straight line segment
    DrawLine {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        width: f32,
        color: RenderColor,
    },
}

/// Border widths for all four sides
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BorderWidths {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl BorderWidths {
    /// Same width on every side
    pub fn uniform(width: f32) -> Self {
        Self {
            top: width,
            right: width,
            bottom: width,
            left: width,
        }
    }
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: PaintCommand) {
        self.commands.push(command);
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Push a filled rectangle, skipping transparent colors
    pub fn fill_rect(&mut self, rect: RenderRect, color: RenderColor) {
        if color.is_transparent() {
            return;
        }
        self.push(PaintCommand::FillRect { rect, color });
    }

    /// Push a border with the same width on every side
    pub fn stroke_rect(&mut self, rect: RenderRect, width: f32, color: RenderColor) {
        self.push(PaintCommand::DrawBorder {
            rect,
            widths: BorderWidths::uniform(width),
            color,
        });
    }

    /// Push a text run
    pub fn text(&mut self, text: impl Into<String>, x: f32, y: f32, color: RenderColor, font_size: f32) {
        let text = text.into();
        if text.is_empty() {
            return;
        }
        self.push(PaintCommand::DrawText {
            text,
            x,
            y,
            color,
            font_size,
        });
    }

    /// Push a line segment
    pub fn line(&mut self, from: (f32, f32), to: (f32, f32), width: f32, color: RenderColor) {
        self.push(PaintCommand::DrawLine {
            x1: from.0,
            y1: from.1,
            x2: to.0,
            y2: to.1,
            width,
            color,
        });
    }
}
