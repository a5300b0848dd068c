//! API route handlers.
//!
//! - `word_detail`: LLM-backed word lookup proxy
//! - `public`: health check

pub mod public;
pub mod word_detail;

pub use public::health;
pub use word_detail::word_detail;
