//! Public endpoints that need no credentials.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::api::state::ApiState;
use crate::api::types::HealthResponse;

pub async fn health(State(state): State<Arc<ApiState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        server_key_configured: state.config.has_server_key(),
    })
}
