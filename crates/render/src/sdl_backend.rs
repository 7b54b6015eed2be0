//! SDL2 Render Backend
//!
//! Implements rendering using SDL2.

use sdl2::mouse::{Cursor, SystemCursor};
use sdl2::pixels::{Color as SdlColor, PixelFormatEnum};
use sdl2::rect::{Point as SdlPoint, Rect as SdlRect};
use sdl2::render::{BlendMode, Canvas, TextureCreator};
use sdl2::video::{Window, WindowContext};
use sdl2::Sdl;

use crate::display_list::{DisplayList, PaintCommand};
use crate::error::{RenderError, RenderResult};
use crate::font::FontCache;
use crate::paint::RenderColor;
use crate::RenderBackend;

/// Mouse cursor shapes used by the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorType {
    Arrow,
    Hand,
    Crosshair,
    ResizeDiagonal,
}

/// SDL2-based render backend
pub struct SdlBackend {
    // Cursors and textures must go before the context
    cursor_arrow: Cursor,
    cursor_hand: Cursor,
    cursor_crosshair: Cursor,
    cursor_resize: Cursor,
    font_cache: Option<FontCache>,
    texture_creator: TextureCreator<WindowContext>,
    canvas: Canvas<Window>,
    _sdl_context: Sdl,
    width: u32,
    height: u32,
}

impl SdlBackend {
    /// Create a new SDL backend with a window
    pub fn new(title: &str, width: u32, height: u32) -> RenderResult<Self> {
        let sdl_context = sdl2::init().map_err(RenderError::Init)?;
        let video_subsystem = sdl_context.video().map_err(RenderError::Init)?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .resizable()
            .build()
            .map_err(|e| RenderError::Window(e.to_string()))?;

        let mut canvas = window
            .into_canvas()
            .accelerated()
            .present_vsync()
            .build()
            .map_err(|e| RenderError::Canvas(e.to_string()))?;
        canvas.set_blend_mode(BlendMode::Blend);

        let texture_creator = canvas.texture_creator();

        let font_cache = match FontCache::from_system() {
            Ok(cache) => Some(cache),
            Err(e) => {
                log::warn!("{}; labels will not be drawn", e);
                None
            }
        };

        let cursor = |kind: SystemCursor| Cursor::from_system(kind).map_err(RenderError::Cursor);

        Ok(Self {
            cursor_arrow: cursor(SystemCursor::Arrow)?,
            cursor_hand: cursor(SystemCursor::Hand)?,
            cursor_crosshair: cursor(SystemCursor::Crosshair)?,
            cursor_resize: cursor(SystemCursor::SizeNWSE)?,
            font_cache,
            texture_creator,
            canvas,
            _sdl_context: sdl_context,
            width,
            height,
        })
    }

    /// Set the mouse cursor type
    pub fn set_cursor(&self, cursor_type: CursorType) {
        match cursor_type {
            CursorType::Arrow => self.cursor_arrow.set(),
            CursorType::Hand => self.cursor_hand.set(),
            CursorType::Crosshair => self.cursor_crosshair.set(),
            CursorType::ResizeDiagonal => self.cursor_resize.set(),
        }
    }

    /// Draw a filled rectangle
    fn draw_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: RenderColor) {
        if w == 0 || h == 0 {
            return;
        }
        self.canvas.set_draw_color(SdlColor::RGBA(color.r, color.g, color.b, color.a));
        let rect = SdlRect::new(x, y, w, h);
        let _ = self.canvas.fill_rect(rect);
    }

    /// Draw a line, thick lines are stamped with squares along the segment
    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, width: f32, color: RenderColor) {
        if width <= 1.0 {
            self.canvas.set_draw_color(SdlColor::RGBA(color.r, color.g, color.b, color.a));
            let _ = self.canvas.draw_line(
                SdlPoint::new(x1 as i32, y1 as i32),
                SdlPoint::new(x2 as i32, y2 as i32),
            );
            return;
        }

        let dx = x2 - x1;
        let dy = y2 - y1;
        let steps = dx.abs().max(dy.abs()).ceil().max(1.0) as i32;
        let half = width / 2.0;
        let size = width.round() as u32;
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            let x = x1 + dx * t - half;
            let y = y1 + dy * t - half;
            self.draw_rect(x.round() as i32, y.round() as i32, size, size, color);
        }
    }

    /// Draw text at a position
    fn draw_text(&mut self, text: &str, x: f32, y: f32, color: RenderColor, font_size: f32) {
        let Some(font_cache) = self.font_cache.as_mut() else {
            return;
        };

        let mut cursor_x = x as i32;
        let baseline_y = y as i32 + font_cache.ascent(font_size) as i32;

        // Pre-rasterize all glyphs and collect their data
        let glyphs: Vec<_> = text
            .chars()
            .map(|c| {
                let glyph = font_cache.rasterize(c, font_size);
                (
                    glyph.width,
                    glyph.height,
                    glyph.bitmap.clone(),
                    glyph.advance_width,
                    glyph.offset_x,
                    glyph.offset_y,
                )
            })
            .collect();

        for (width, height, bitmap, advance_width, offset_x, offset_y) in glyphs {
            if width > 0 && height > 0 {
                let glyph_x = cursor_x + offset_x;
                let glyph_y = baseline_y - offset_y - height as i32;
                self.draw_glyph_bitmap(&bitmap, width, height, glyph_x, glyph_y, color);
            }

            cursor_x += advance_width as i32;
        }
    }

    /// Draw a glyph bitmap at a position using texture blitting
    fn draw_glyph_bitmap(
        &mut self,
        bitmap: &[u8],
        width: u32,
        height: u32,
        x: i32,
        y: i32,
        color: RenderColor,
    ) {
        if width == 0 || height == 0 || bitmap.is_empty() {
            return;
        }

        let mut rgba_data = Vec::with_capacity((width * height * 4) as usize);
        for &alpha in bitmap.iter().take((width * height) as usize) {
            let blended_alpha = ((alpha as u32 * color.a as u32) / 255) as u8;
            rgba_data.push(color.r);
            rgba_data.push(color.g);
            rgba_data.push(color.b);
            rgba_data.push(blended_alpha);
        }

        let mut texture = match self.texture_creator.create_texture_streaming(
            PixelFormatEnum::RGBA32,
            width,
            height,
        ) {
            Ok(t) => t,
            Err(_) => return,
        };

        texture.set_blend_mode(BlendMode::Blend);

        let pitch = (width * 4) as usize;
        if texture.update(None, &rgba_data, pitch).is_err() {
            return;
        }

        let dst_rect = SdlRect::new(x, y, width, height);
        let _ = self.canvas.copy(&texture, None, dst_rect);
    }

    /// Draw a border (four rectangles)
    #[allow(clippy::too_many_arguments)]
    fn draw_border(
        &mut self,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        top: f32,
        right: f32,
        bottom: f32,
        left: f32,
        color: RenderColor,
    ) {
        let x = x as i32;
        let y = y as i32;
        let w = w.max(0.0) as u32;
        let h = h.max(0.0) as u32;

        if top > 0.0 {
            self.draw_rect(x, y, w, top as u32, color);
        }

        if bottom > 0.0 {
            self.draw_rect(x, y + h as i32 - bottom as i32, w, bottom as u32, color);
        }

        if left > 0.0 {
            self.draw_rect(x, y, left as u32, h, color);
        }

        if right > 0.0 {
            self.draw_rect(x + w as i32 - right as i32, y, right as u32, h, color);
        }
    }
}

impl RenderBackend for SdlBackend {
    fn clear(&mut self, color: RenderColor) {
        self.canvas.set_draw_color(SdlColor::RGBA(color.r, color.g, color.b, color.a));
        self.canvas.clear();
    }

    fn render(&mut self, display_list: &DisplayList) {
        for command in &display_list.commands {
            match command {
                PaintCommand::FillRect { rect, color } => {
                    // Degenerate rects come straight from layout, never drawn
                    if rect.width <= 0.0 || rect.height <= 0.0 {
                        continue;
                    }
                    self.draw_rect(
                        rect.x as i32,
                        rect.y as i32,
                        rect.width as u32,
                        rect.height as u32,
                        *color,
                    );
                }
                PaintCommand::DrawText { text, x, y, color, font_size } => {
                    self.draw_text(text, *x, *y, *color, *font_size);
                }
                PaintCommand::DrawBorder { rect, widths, color } => {
                    self.draw_border(
                        rect.x,
                        rect.y,
                        rect.width,
                        rect.height,
                        widths.top,
                        widths.right,
                        widths.bottom,
                        widths.left,
                        *color,
                    );
                }
                PaintCommand::DrawLine { x1, y1, x2, y2, width, color } => {
                    self.draw_line(*x1, *y1, *x2, *y2, *width, *color);
                }
            }
        }
    }

    fn present(&mut self) {
        self.canvas.present();
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}
