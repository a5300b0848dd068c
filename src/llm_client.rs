//! LLM Client for OpenAI-compatible chat completions

use axum::body::Bytes;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Reasoning effort sent with every lookup.
pub const REASONING_EFFORT: &str = "none";

#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub reasoning_effort: String,
    pub messages: Vec<ChatMessage>,
}

impl ChatCompletionRequest {
    /// Single-turn request carrying one user message.
    pub fn single_user_message(model: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            reasoning_effort: REASONING_EFFORT.to_string(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: content.into(),
            }],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Raw upstream answer. The body is not interpreted here.
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    pub status: StatusCode,
    pub body: Bytes,
}

/// LLM client
#[derive(Debug, Clone)]
pub struct LlmClient {
    client: Client,
}

impl LlmClient {
    /// Client without a request timeout; the upstream decides how long a
    /// lookup takes.
    pub fn new() -> reqwest::Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self { client })
    }

    /// POST one chat completion request and return the status and body.
    pub async fn chat(
        &self,
        url: &str,
        api_key: &str,
        request: &ChatCompletionRequest,
    ) -> reqwest::Result<UpstreamReply> {
        debug!("Calling LLM: url={} model={}", url, request.model);

        let resp = self
            .client
            .post(url)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.bytes().await?;

        debug!("LLM response: status={} bytes={}", status, body.len());
        Ok(UpstreamReply { status, body })
    }
}
