//! LLM proxy for word-detail lookups.
//!
//! Resolves which key, endpoint and model a request uses, then makes the one
//! upstream call and classifies its outcome:
//! - caller's bearer token beats the server key
//! - request `apiUrl` beats the configured endpoint
//! - request `model` beats the configured default model, even when empty

use axum::body::Bytes;
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use serde::de::IgnoredAny;
use serde_json::{json, Value};
use tracing::error;

use crate::api::errors::{WordDetailError, UPSTREAM_FALLBACK_MESSAGE};
use crate::api::types::WordDetailRequest;
use crate::config::{non_empty, ProxyConfig};
use crate::llm_client::{ChatCompletionRequest, LlmClient};

/// Key, endpoint and model actually used for one request.
#[derive(Clone, PartialEq, Eq)]
pub struct UpstreamTarget {
    pub api_key: String,
    pub api_url: String,
    pub model: String,
}

impl std::fmt::Debug for UpstreamTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamTarget")
            .field("api_key", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .finish()
    }
}

impl UpstreamTarget {
    /// Apply request-over-config precedence. Fails only when no key is
    /// available from either side.
    pub fn resolve(
        config: &ProxyConfig,
        headers: &HeaderMap,
        request: &WordDetailRequest,
    ) -> Result<Self, WordDetailError> {
        let api_key = bearer_token(headers)
            .or_else(|| config.api_key.clone())
            .ok_or(WordDetailError::MissingCredential)?;

        let api_url =
            non_empty(request.api_url.clone()).unwrap_or_else(|| config.api_url.clone());
        let model = request
            .model
            .clone()
            .unwrap_or_else(|| config.default_model.clone());

        Ok(Self {
            api_key,
            api_url,
            model,
        })
    }
}

/// Key supplied by the caller in `Authorization`. The `Bearer ` prefix is
/// removed when present; an empty result counts as no key.
pub fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ").unwrap_or(value);
    non_empty(Some(token.to_string()))
}

/// Send the prompt upstream and return the body to relay on success.
pub async fn forward(
    client: &LlmClient,
    target: &UpstreamTarget,
    prompt: String,
) -> Result<Bytes, WordDetailError> {
    let request = ChatCompletionRequest::single_user_message(target.model.clone(), prompt);
    let reply = client
        .chat(&target.api_url, &target.api_key, &request)
        .await?;

    if !reply.status.is_success() {
        error!(
            status = %reply.status,
            body = %String::from_utf8_lossy(&reply.body),
            "AI API error (Word Detail)"
        );
        // Only a JSON error body is relayed with the upstream status.
        let body: Value = serde_json::from_slice(&reply.body)
            .map_err(|e| WordDetailError::Transport(e.to_string()))?;
        return Err(WordDetailError::Upstream {
            status: reply.status,
            error: upstream_error(&body),
        });
    }

    // Successful bodies are relayed untouched, but must at least be JSON.
    serde_json::from_slice::<IgnoredAny>(&reply.body)
        .map_err(|e| WordDetailError::Transport(e.to_string()))?;

    Ok(reply.body)
}

/// The upstream's own `error` member when it carries one, else the generic
/// lookup failure message.
fn upstream_error(body: &Value) -> Value {
    match body.get("error") {
        Some(err) if is_truthy(err) => err.clone(),
        _ => json!({ "message": UPSTREAM_FALLBACK_MESSAGE }),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::Array(_) | Value::Object(_) => true,
    }
}
