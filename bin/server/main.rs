//! Word Detail Proxy Server
//!
//! Runs the word-detail proxy as a standalone HTTP server.

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};
use word_detail_proxy::{ServerArgs, WordDetailServer};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("info,word_detail_proxy=debug")
            }),
        )
        .init();

    let args = ServerArgs::parse();
    let proxy = args.proxy_config();
    let server = args.server_config();

    info!(
        host = %server.host,
        port = server.port,
        api_url = %proxy.api_url,
        model = %proxy.default_model,
        server_key = proxy.has_server_key(),
        "Starting Word Detail Proxy"
    );
    if !proxy.has_server_key() {
        warn!("No API_KEY configured; callers must send their own bearer token");
    }

    WordDetailServer::new(server, proxy)?.start().await
}
