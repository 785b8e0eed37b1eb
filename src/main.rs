// src/main.rs
use anyhow::Context;
use kagi_mcp::{KagiClient, KagiConfig, KagiMcpService};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout carries the MCP protocol stream, so diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    // A missing API key is a fatal start-up error, not a per-call error
    let config = KagiConfig::from_env().context("failed to load Kagi configuration")?;

    tracing::info!("Starting Kagi MCP server");
    tracing::info!("  Endpoint: {}", config.base_url);
    tracing::info!("  Default summarizer engine: {}", config.default_engine);

    let client = KagiClient::new(&config)?;
    KagiMcpService::new(client).serve_stdio().await
}
