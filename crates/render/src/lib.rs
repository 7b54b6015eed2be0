//! Easel Render Engine
//!
//! Display lists, paint primitives and the SDL2 backend.

mod display_list;
mod error;
mod font;
mod paint;
mod sdl_backend;

pub use display_list::{BorderWidths, DisplayList, PaintCommand};
pub use error::{RenderError, RenderResult};
pub use font::{FontCache, GlyphData};
pub use paint::{RenderColor, RenderRect};
pub use sdl_backend::{CursorType, SdlBackend};

/// Trait for render backends
pub trait RenderBackend {
    /// Clear the screen with a color
    fn clear(&mut self, color: RenderColor);

    /// Execute a display list
    fn render(&mut self, display_list: &DisplayList);

    /// Present the rendered frame
    fn present(&mut self);

    /// Track a new window size
    fn resize(&mut self, width: u32, height: u32);

    /// Get the window width
    fn width(&self) -> u32;

    /// Get the window height
    fn height(&self) -> u32;
}
