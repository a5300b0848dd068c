//! REST API implementation.

pub mod errors;
pub mod llm;
pub mod routes;
pub mod state;
pub mod types;

pub use errors::WordDetailError;
pub use state::ApiState;
pub use types::{ErrorEnvelope, ErrorMessage, HealthResponse, WordDetailRequest};
