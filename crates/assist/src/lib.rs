//! Placard Assistant
//!
//! Text suggestions and design feedback, from a chat-completions API when a
//! credential is configured and from a static bank otherwise.

mod assistant;
mod bank;
mod client;
mod error;

pub use assistant::{AnyAssistant, Assistant, OfflineAssistant, RemoteAssistant, OFFLINE_FEEDBACK, UNAVAILABLE_FEEDBACK};
pub use bank::{fallback_suggestions, Category, SUGGESTION_COUNT};
pub use client::{
    ApiKey, ChatChoice, ChatClient, ChatMessage, ChatRequest, ChatResponse, ClientConfig, DEFAULT_API_BASE,
    DEFAULT_MODEL,
};
pub use error::{AssistError, AssistResult};

/// Suggestions for a prompt from the provider selected by `key`
pub async fn get_suggestions(prompt: &str, key: Option<ApiKey>) -> Vec<String> {
    AnyAssistant::from_credentials(key, ClientConfig::default())
        .suggestions(prompt)
        .await
}
