//! Render error types

use thiserror::Error;

/// Render operation result type
pub type RenderResult<T> = Result<T, RenderError>;

/// Rendering errors
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Invalid color '{0}'")]
    InvalidColor(String),

    #[error("Invalid alignment '{0}'")]
    InvalidAlignment(String),

    #[error("Invalid banner: {0}")]
    InvalidSpec(String),

    #[error("Failed to parse font {path}: {reason}")]
    FontParse { path: String, reason: String },

    #[error("Image encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
