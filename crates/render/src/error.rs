//! Render error types

use thiserror::Error;

/// Render result type
pub type RenderResult<T> = Result<T, RenderError>;

/// Render errors
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("SDL initialization failed: {0}")]
    Init(String),

    #[error("Failed to create window: {0}")]
    Window(String),

    #[error("Failed to create canvas: {0}")]
    Canvas(String),

    #[error("Failed to create cursor: {0}")]
    Cursor(String),

    #[error("Failed to read font {path}: {source}")]
    FontIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse font data: {0}")]
    FontParse(&'static str),

    #[error("No usable font found")]
    NoFont,
}
