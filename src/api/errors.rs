//! Errors raised while serving a word-detail lookup and their HTTP mapping.

use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value;
use thiserror::Error;

use super::types::ErrorEnvelope;

pub const MISSING_KEY_MESSAGE: &str =
    "未提供API密钥，请在设置中配置API密钥或联系管理员配置服务器密钥";
pub const MISSING_PARAMS_MESSAGE: &str = "缺少必要的参数";
pub const UPSTREAM_FALLBACK_MESSAGE: &str = "获取词汇详情时出错";
pub const SERVER_FALLBACK_MESSAGE: &str = "服务器错误";

#[derive(Debug, Error)]
pub enum WordDetailError {
    #[error("{}", MISSING_KEY_MESSAGE)]
    MissingCredential,
    #[error("{}", MISSING_PARAMS_MESSAGE)]
    MissingRequiredField,
    /// Upstream answered with a non-2xx status. `error` is the upstream's own
    /// `error` member, or a fallback message object.
    #[error("upstream returned {status}")]
    Upstream { status: StatusCode, error: Value },
    #[error("{0}")]
    Transport(String),
    #[error("{0}")]
    InvalidRequest(String),
    /// Body could not be read, e.g. it exceeds the configured limit.
    #[error("{0}")]
    BodyRejected(#[from] BytesRejection),
}

impl WordDetailError {
    pub fn status(&self) -> StatusCode {
        match self {
            WordDetailError::MissingRequiredField => StatusCode::BAD_REQUEST,
            WordDetailError::Upstream { status, .. } => *status,
            WordDetailError::BodyRejected(rejection) => rejection.status(),
            WordDetailError::MissingCredential
            | WordDetailError::Transport(_)
            | WordDetailError::InvalidRequest(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<reqwest::Error> for WordDetailError {
    fn from(err: reqwest::Error) -> Self {
        WordDetailError::Transport(err.to_string())
    }
}

impl IntoResponse for WordDetailError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            WordDetailError::Upstream { error, .. } => {
                (status, Json(ErrorEnvelope { error })).into_response()
            }
            other => {
                let mut message = other.to_string();
                if message.is_empty() {
                    message = SERVER_FALLBACK_MESSAGE.to_string();
                }
                (status, Json(ErrorEnvelope::new(message))).into_response()
            }
        }
    }
}
