//! Word Detail Proxy
//!
//! Server-side proxy that explains a word of a Japanese sentence by asking an
//! OpenAI-compatible chat completion API. The server holds the API key so it
//! never reaches the browser; callers may still bring their own key, endpoint
//! and model.
//!
//! ## Module Structure
//!
//! - `config`: Start-up configuration (clap + environment)
//! - `api/`: REST API (request types, errors, prompt, proxy, routes)
//! - `llm_client`: Chat completion HTTP client
//! - `server`: Router assembly and serving

/// Start-up configuration
pub mod config;

/// REST API
pub mod api;

/// Chat completion HTTP client
pub mod llm_client;

/// HTTP server
pub mod server;

pub use api::{ApiState, WordDetailError, WordDetailRequest};
pub use config::{ProxyConfig, ServerArgs, ServerConfig, DEFAULT_API_URL, DEFAULT_MODEL};
pub use llm_client::{ChatCompletionRequest, ChatMessage, LlmClient};
pub use server::WordDetailServer;
