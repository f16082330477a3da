//! Studio error types

use placard_render::RenderError;
use thiserror::Error;

/// Studio operation result type
pub type StudioResult<T> = Result<T, StudioError>;

/// Studio errors
#[derive(Debug, Error)]
pub enum StudioError {
    #[error("Design text is empty")]
    EmptyText,

    #[error("{field} {value} is outside {min}..={max}")]
    OutOfRange {
        field: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },

    #[error("Unknown template '{0}'")]
    UnknownTemplate(String),

    #[error("Unknown font category '{0}'")]
    UnknownCategory(String),

    #[error("Invalid design file: {0}")]
    Design(#[from] serde_json::Error),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
