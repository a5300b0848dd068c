//! Proxy Configuration
//!
//! Process-wide settings read once at start-up:
//! - Default upstream credential and endpoint
//! - Default model identifier
//! - Listen address, CORS origins and request body limit
//!
//! Handlers receive these as an explicit [`ProxyConfig`] value and never read
//! the environment at request time.

use clap::Parser;

/// OpenAI-compatible chat completions endpoint used when neither the request
/// nor the environment names one.
pub const DEFAULT_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/openai/chat/completions";

/// Model used when the request does not name one.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-preview-05-20";

pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

/// Upstream defaults applied to every word-detail request.
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    /// Server-held API key. `None` when the operator configured none.
    pub api_key: Option<String>,
    pub api_url: String,
    pub default_model: String,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: DEFAULT_API_URL.to_string(),
            default_model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl ProxyConfig {
    /// Config with a server key; an empty key is treated as no key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = non_empty(Some(key.into()));
        self
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    pub fn with_default_model(mut self, model: impl Into<String>) -> Self {
        self.default_model = model.into();
        self
    }

    pub fn has_server_key(&self) -> bool {
        self.api_key.is_some()
    }
}

/// HTTP listener settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Origins allowed by CORS. Empty disables the CORS layer.
    pub allowed_origins: Vec<String>,
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            allowed_origins: Vec::new(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "word-detail-server")]
#[command(about = "Proxy for LLM-backed Japanese word lookups")]
pub struct ServerArgs {
    /// Default API key, used when the caller sends no bearer token
    #[arg(long, env = "API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Default chat completions endpoint
    #[arg(long, env = "API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Default model identifier
    #[arg(long, env = "MODEL_NAME", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Server host
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Server port
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Origins allowed to call the proxy from a browser (comma separated)
    #[arg(long = "allow-origin", env = "ALLOWED_ORIGINS", value_delimiter = ',')]
    pub allowed_origins: Vec<String>,

    /// Maximum accepted request body size
    #[arg(long, env = "MAX_BODY_BYTES", default_value_t = DEFAULT_MAX_BODY_BYTES)]
    pub max_body_bytes: usize,
}

impl ServerArgs {
    pub fn proxy_config(&self) -> ProxyConfig {
        let api_url = if self.api_url.trim().is_empty() {
            DEFAULT_API_URL.to_string()
        } else {
            self.api_url.clone()
        };

        ProxyConfig {
            api_key: non_empty(self.api_key.clone()),
            api_url,
            default_model: self.model.clone(),
        }
    }

    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            host: self.host.clone(),
            port: self.port,
            allowed_origins: self
                .allowed_origins
                .iter()
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect(),
            max_body_bytes: self.max_body_bytes,
        }
    }
}

/// Collapse empty strings to `None`.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const ENV_VARS: &[&str] = &[
        "API_KEY",
        "API_URL",
        "MODEL_NAME",
        "HOST",
        "PORT",
        "ALLOWED_ORIGINS",
        "MAX_BODY_BYTES",
    ];

    fn clear_env() {
        for var in ENV_VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_defaults_without_env() {
        clear_env();
        let args = ServerArgs::try_parse_from(["word-detail-server"]).unwrap();

        let proxy = args.proxy_config();
        assert!(proxy.api_key.is_none());
        assert_eq!(proxy.api_url, DEFAULT_API_URL);
        assert_eq!(proxy.default_model, DEFAULT_MODEL);

        let server = args.server_config();
        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 3000);
        assert!(server.allowed_origins.is_empty());
        assert_eq!(server.max_body_bytes, DEFAULT_MAX_BODY_BYTES);
    }

    #[test]
    #[serial]
    fn test_reads_key_and_url_from_env() {
        clear_env();
        std::env::set_var("API_KEY", "server-key");
        std::env::set_var("API_URL", "http://llm.internal/v1/chat/completions");

        let args = ServerArgs::try_parse_from(["word-detail-server"]).unwrap();
        let proxy = args.proxy_config();
        clear_env();

        assert_eq!(proxy.api_key.as_deref(), Some("server-key"));
        assert_eq!(proxy.api_url, "http://llm.internal/v1/chat/completions");
        assert!(proxy.has_server_key());
    }

    #[test]
    #[serial]
    fn test_empty_env_key_is_no_key() {
        clear_env();
        std::env::set_var("API_KEY", "");

        let args = ServerArgs::try_parse_from(["word-detail-server"]).unwrap();
        let proxy = args.proxy_config();
        clear_env();

        assert!(!proxy.has_server_key());
    }

    #[test]
    #[serial]
    fn test_flags_and_origin_list() {
        clear_env();
        let args = ServerArgs::try_parse_from([
            "word-detail-server",
            "--port",
            "8081",
            "--model",
            "gpt-4o-mini",
            "--allow-origin",
            "http://localhost:3000, https://reader.example.com",
        ])
        .unwrap();

        assert_eq!(args.proxy_config().default_model, "gpt-4o-mini");
        let server = args.server_config();
        assert_eq!(server.port, 8081);
        assert_eq!(
            server.allowed_origins,
            vec!["http://localhost:3000", "https://reader.example.com"]
        );
    }

    #[test]
    fn test_builder_ignores_empty_key() {
        let config = ProxyConfig::default().with_api_key("");
        assert!(!config.has_server_key());

        let config = ProxyConfig::default()
            .with_api_key("k")
            .with_api_url("http://x")
            .with_default_model("m");
        assert_eq!(config.api_key.as_deref(), Some("k"));
        assert_eq!(config.api_url, "http://x");
        assert_eq!(config.default_model, "m");
    }
}
