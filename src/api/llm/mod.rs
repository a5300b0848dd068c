//! Upstream LLM plumbing for the word-detail endpoint.

pub mod prompt;
pub mod proxy;

pub use prompt::{build_detail_prompt, WordQuery};
pub use proxy::{bearer_token, forward, UpstreamTarget};
