//! `POST /api/word-detail`
//!
//! Proxies one word lookup to the upstream chat completion API using either
//! the caller's bearer token or the server-held key.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use tracing::{debug, error, warn};

use crate::api::errors::WordDetailError;
use crate::api::llm::{build_detail_prompt, forward, UpstreamTarget, WordQuery};
use crate::api::state::ApiState;
use crate::api::types::WordDetailRequest;

pub async fn word_detail(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let result = match body {
        Ok(body) => lookup(&state, &headers, &body).await,
        Err(rejection) => Err(rejection.into()),
    };

    match result {
        Ok(upstream_body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            upstream_body,
        )
            .into_response(),
        Err(err) => {
            match &err {
                WordDetailError::MissingCredential
                | WordDetailError::MissingRequiredField
                | WordDetailError::BodyRejected(_) => {
                    warn!("Rejected word detail request: {}", err)
                }
                WordDetailError::Transport(_) | WordDetailError::InvalidRequest(_) => {
                    error!("Server error (Word Detail): {}", err)
                }
                // Already logged with the upstream body.
                WordDetailError::Upstream { .. } => {}
            }
            err.into_response()
        }
    }
}

async fn lookup(
    state: &ApiState,
    headers: &HeaderMap,
    body: &[u8],
) -> Result<Bytes, WordDetailError> {
    let request: WordDetailRequest = serde_json::from_slice(body)
        .map_err(|e| WordDetailError::InvalidRequest(e.to_string()))?;

    let target = UpstreamTarget::resolve(&state.config, headers, &request)?;

    let query = required_fields(&request)?;
    let prompt = build_detail_prompt(&query);

    debug!(
        word = query.word,
        model = %target.model,
        url = %target.api_url,
        "Forwarding word detail lookup"
    );

    forward(&state.llm, &target, prompt).await
}

fn required_fields(request: &WordDetailRequest) -> Result<WordQuery<'_>, WordDetailError> {
    match (
        present(&request.word),
        present(&request.pos),
        present(&request.sentence),
    ) {
        (Some(word), Some(pos), Some(sentence)) => Ok(WordQuery {
            word,
            pos,
            sentence,
            furigana: request.furigana.as_deref(),
            romaji: request.romaji.as_deref(),
        }),
        _ => Err(WordDetailError::MissingRequiredField),
    }
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}
