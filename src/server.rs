//! HTTP server for the word-detail proxy
//!
//! Provides:
//! - `POST /api/word-detail`: LLM-backed word lookup
//! - `GET /health`: liveness probe

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::api::routes::{health, word_detail};
use crate::api::ApiState;
use crate::config::{ProxyConfig, ServerConfig};

/// Word-detail proxy server
pub struct WordDetailServer {
    config: ServerConfig,
    state: Arc<ApiState>,
}

impl WordDetailServer {
    pub fn new(config: ServerConfig, proxy: ProxyConfig) -> anyhow::Result<Self> {
        Ok(Self {
            config,
            state: Arc::new(ApiState::new(proxy)?),
        })
    }

    /// Create the router
    pub fn router(&self) -> Router {
        let router = Router::new()
            .route("/api/word-detail", post(word_detail))
            .route("/health", get(health))
            .with_state(self.state.clone());

        let router = match self.cors_layer() {
            Some(cors) => router.layer(cors),
            None => router,
        };

        router.layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(self.config.max_body_bytes)),
        )
    }

    fn cors_layer(&self) -> Option<CorsLayer> {
        if self.config.allowed_origins.is_empty() {
            return None;
        }

        let origins: Vec<HeaderValue> = self
            .config
            .allowed_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(v) => Some(v),
                Err(_) => {
                    warn!("Ignoring invalid CORS origin: {}", origin);
                    None
                }
            })
            .collect();

        Some(
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        )
    }

    /// Start the server and serve until Ctrl-C or SIGTERM
    pub async fn start(&self) -> anyhow::Result<()> {
        let addr = format!("{}:{}", self.config.host, self.config.port);
        let listener = tokio::net::TcpListener::bind(&addr).await?;

        info!("Word detail proxy listening on {}", addr);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Word detail proxy stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
