//! API state and configuration.
//!
//! Contains the shared state used across all API endpoints. Nothing in it is
//! mutated after start-up.

use crate::config::ProxyConfig;
use crate::llm_client::LlmClient;

pub struct ApiState {
    pub config: ProxyConfig,
    pub llm: LlmClient,
}

impl ApiState {
    pub fn new(config: ProxyConfig) -> reqwest::Result<Self> {
        Ok(Self {
            config,
            llm: LlmClient::new()?,
        })
    }
}
