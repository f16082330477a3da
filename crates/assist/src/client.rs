//! Chat-completions HTTP client

use std::fmt;
use std::time::Duration;

use log::{debug, info};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AssistError, AssistResult};

/// Default user agent string
const DEFAULT_USER_AGENT: &str = concat!("Placard/", env!("CARGO_PKG_VERSION"));

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1/";

/// Default chat model
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Default timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// API credential; never printed
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a key, rejecting blank strings
    pub fn new(key: impl Into<String>) -> Option<Self> {
        let key = key.into();
        let trimmed = key.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL; `chat/completions` is joined onto it
    pub api_base: String,
    /// Model name sent with every request
    pub model: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// A chat message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: Some(content.into()),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: Some(content.into()),
        }
    }
}

/// Chat-completions request body
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub n: u32,
    pub temperature: f32,
}

/// One completion choice
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
}

/// Chat-completions response body
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

impl ChatResponse {
    /// Trimmed, non-empty message texts in choice order
    pub fn texts(&self) -> Vec<String> {
        self.choices
            .iter()
            .filter_map(|c| c.message.content.as_deref())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// HTTP client for the chat-completions endpoint
#[derive(Clone)]
pub struct ChatClient {
    client: reqwest::Client,
    endpoint: Url,
    model: String,
    key: ApiKey,
}

impl ChatClient {
    /// Create a client with default settings
    pub fn new(key: ApiKey) -> AssistResult<Self> {
        Self::with_config(key, ClientConfig::default())
    }

    /// Create a client with custom configuration
    pub fn with_config(key: ApiKey, config: ClientConfig) -> AssistResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(DEFAULT_USER_AGENT));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AssistError::RequestFailed(e.to_string()))?;

        let endpoint = endpoint_url(&config.api_base)?;

        Ok(Self {
            client,
            endpoint,
            model: config.model,
            key,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Build a request for this client's model
    pub fn request(&self, messages: Vec<ChatMessage>, max_tokens: u32, n: u32, temperature: f32) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages,
            max_tokens,
            n,
            temperature,
        }
    }

    /// Send a chat-completions request
    pub async fn complete(&self, request: &ChatRequest) -> AssistResult<ChatResponse> {
        info!("POST {} (model {}, n={})", self.endpoint, request.model, request.n);

        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(self.key.expose())
            .json(request)
            .send()
            .await?;

        let status = response.status().as_u16();
        debug!("Response status: {}", status);

        if !response.status().is_success() {
            return Err(AssistError::HttpError { status });
        }

        let body = response.bytes().await?;
        debug!("Received {} bytes", body.len());

        Ok(serde_json::from_slice(&body)?)
    }
}

/// `chat/completions` under the configured base
fn endpoint_url(api_base: &str) -> AssistResult<Url> {
    let mut base = Url::parse(api_base)?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    Ok(base.join("chat/completions")?)
}
