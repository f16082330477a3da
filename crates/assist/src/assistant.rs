//! Suggestion and feedback providers
//!
//! The remote provider calls the chat-completions API; the offline provider
//! answers from the static suggestion bank. Remote failures degrade to the
//! offline answers instead of surfacing errors.

use log::{info, warn};

use crate::bank::{fallback_suggestions, SUGGESTION_COUNT};
use crate::client::{ApiKey, ChatClient, ChatMessage, ClientConfig};
use crate::error::{AssistError, AssistResult};

const SUGGESTION_SYSTEM_PROMPT: &str = "You are a creative copywriter. Generate 3 short design text suggestions.";
const FEEDBACK_SYSTEM_PROMPT: &str = "You are a helpful design assistant. Provide brief, constructive feedback.";

const SUGGESTION_MAX_TOKENS: u32 = 50;
const SUGGESTION_TEMPERATURE: f32 = 0.7;
const FEEDBACK_MAX_TOKENS: u32 = 100;
const FEEDBACK_TEMPERATURE: f32 = 0.5;

/// Feedback text when no credential is configured
pub const OFFLINE_FEEDBACK: &str = "Tip: configure an API key to get AI-powered design feedback.";

/// Feedback text when the remote call fails
pub const UNAVAILABLE_FEEDBACK: &str = "AI feedback is currently unavailable. Try again later or check your API key.";

/// Source of text suggestions and design feedback
#[allow(async_fn_in_trait)]
pub trait Assistant {
    /// Short banner texts for a description
    async fn suggestions(&self, prompt: &str) -> Vec<String>;

    /// Free-form feedback on a design description
    async fn feedback(&self, prompt: &str) -> String;

    /// Whether answers come from a remote model
    fn is_remote(&self) -> bool;
}

/// Static-table-backed provider
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineAssistant;

impl Assistant for OfflineAssistant {
    async fn suggestions(&self, prompt: &str) -> Vec<String> {
        fallback_suggestions(prompt)
    }

    async fn feedback(&self, _prompt: &str) -> String {
        OFFLINE_FEEDBACK.to_string()
    }

    fn is_remote(&self) -> bool {
        false
    }
}

/// Chat-completions-backed provider
#[derive(Clone)]
pub struct RemoteAssistant {
    client: ChatClient,
}

impl RemoteAssistant {
    pub fn new(client: ChatClient) -> Self {
        Self { client }
    }

    /// Ask the model for suggestions, without falling back
    pub async fn try_suggestions(&self, prompt: &str) -> AssistResult<Vec<String>> {
        let request = self.client.request(
            vec![
                ChatMessage::system(SUGGESTION_SYSTEM_PROMPT),
                ChatMessage::user(format!("Generate design text about: {}", prompt)),
            ],
            SUGGESTION_MAX_TOKENS,
            SUGGESTION_COUNT as u32,
            SUGGESTION_TEMPERATURE,
        );

        let texts = self.client.complete(&request).await?.texts();
        if texts.is_empty() {
            return Err(AssistError::EmptyResponse);
        }
        Ok(texts)
    }

    /// Ask the model for feedback, without falling back
    pub async fn try_feedback(&self, prompt: &str) -> AssistResult<String> {
        let request = self.client.request(
            vec![ChatMessage::system(FEEDBACK_SYSTEM_PROMPT), ChatMessage::user(prompt)],
            FEEDBACK_MAX_TOKENS,
            1,
            FEEDBACK_TEMPERATURE,
        );

        self.client
            .complete(&request)
            .await?
            .texts()
            .into_iter()
            .next()
            .ok_or(AssistError::EmptyResponse)
    }
}

impl Assistant for RemoteAssistant {
    async fn suggestions(&self, prompt: &str) -> Vec<String> {
        match self.try_suggestions(prompt).await {
            Ok(texts) => texts,
            Err(e) => {
                warn!("Suggestion request failed, using fallback bank: {}", e);
                fallback_suggestions(prompt)
            }
        }
    }

    async fn feedback(&self, prompt: &str) -> String {
        match self.try_feedback(prompt).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Feedback request failed: {}", e);
                UNAVAILABLE_FEEDBACK.to_string()
            }
        }
    }

    fn is_remote(&self) -> bool {
        true
    }
}

/// Provider chosen by credential presence
#[derive(Clone)]
pub enum AnyAssistant {
    Remote(RemoteAssistant),
    Offline(OfflineAssistant),
}

impl AnyAssistant {
    /// Remote when a usable key is given, offline otherwise
    ///
    /// A client that cannot be constructed also selects the offline
    /// provider, with a warning.
    pub fn from_credentials(key: Option<ApiKey>, config: ClientConfig) -> Self {
        let Some(key) = key else {
            info!("No API key configured; using offline suggestions");
            return AnyAssistant::Offline(OfflineAssistant);
        };

        match ChatClient::with_config(key, config) {
            Ok(client) => AnyAssistant::Remote(RemoteAssistant::new(client)),
            Err(e) => {
                warn!("Cannot create API client, using offline suggestions: {}", e);
                AnyAssistant::Offline(OfflineAssistant)
            }
        }
    }
}

impl Assistant for AnyAssistant {
    async fn suggestions(&self, prompt: &str) -> Vec<String> {
        match self {
            AnyAssistant::Remote(a) => a.suggestions(prompt).await,
            AnyAssistant::Offline(a) => a.suggestions(prompt).await,
        }
    }

    async fn feedback(&self, prompt: &str) -> String {
        match self {
            AnyAssistant::Remote(a) => a.feedback(prompt).await,
            AnyAssistant::Offline(a) => a.feedback(prompt).await,
        }
    }

    fn is_remote(&self) -> bool {
        matches!(self, AnyAssistant::Remote(_))
    }
}
