//! Shell error types

use easel_render::RenderError;
use thiserror::Error;

/// Shell result type
pub type ShellResult<T> = Result<T, ShellError>;

/// Shell errors
#[derive(Debug, Error)]
pub enum ShellError {
    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("Invalid window size '{0}', expected WIDTHxHEIGHT")]
    BadSize(String),

    #[error("Window size must be positive, got {width}x{height}")]
    InvalidSize { width: i64, height: i64 },

    #[error("Failed to serialize layout: {0}")]
    Json(#[from] serde_json::Error),
}
