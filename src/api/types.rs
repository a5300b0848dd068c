//! Request and response bodies for the proxy endpoints.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Body of `POST /api/word-detail`.
///
/// `word`, `pos` and `sentence` are required by the handler but are kept
/// optional here so that a missing field yields the 400 envelope rather than a
/// deserialization failure. Every field also accepts non-string JSON: `null`,
/// `false` and `0` count as absent, other numbers and `true` are used as text,
/// arrays and objects as their JSON text.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordDetailRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub word: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub pos: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub sentence: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub furigana: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub romaji: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub model: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub api_url: Option<String>,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => None,
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => None,
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(true)) => Some("true".to_string()),
        Some(other) => Some(other.to_string()),
    })
}

/// Error body returned for every failure: `{ "error": { "message": ... } }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorEnvelope<E = ErrorMessage> {
    pub error: E,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorMessage {
    pub message: String,
}

impl ErrorEnvelope {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: ErrorMessage {
                message: message.into(),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub server_key_configured: bool,
}
