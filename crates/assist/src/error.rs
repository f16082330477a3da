//! Assistant error types

use thiserror::Error;

/// Assistant operation result type
pub type AssistResult<T> = Result<T, AssistError>;

/// Errors talking to the text-generation API
#[derive(Debug, Error)]
pub enum AssistError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Timeout")]
    Timeout,

    #[error("HTTP error: {status}")]
    HttpError { status: u16 },

    #[error("Malformed response: {0}")]
    Decode(String),

    #[error("Response contained no usable text")]
    EmptyResponse,
}

impl From<reqwest::Error> for AssistError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AssistError::Timeout
        } else if err.is_connect() {
            AssistError::ConnectionError(err.to_string())
        } else if err.is_decode() {
            AssistError::Decode(err.to_string())
        } else {
            AssistError::RequestFailed(err.to_string())
        }
    }
}

impl From<url::ParseError> for AssistError {
    fn from(err: url::ParseError) -> Self {
        AssistError::InvalidUrl(err.to_string())
    }
}

impl From<serde_json::Error> for AssistError {
    fn from(err: serde_json::Error) -> Self {
        AssistError::Decode(err.to_string())
    }
}
