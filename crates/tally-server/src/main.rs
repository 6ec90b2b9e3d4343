use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tally_server::{app, ServerConfig};

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::parse();
    if config.token_secret == "secret" {
        tracing::warn!("running with the default token secret; set TALLY_TOKEN_SECRET");
    }

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    tracing::info!(addr = %config.bind, "listening");

    axum::serve(listener, app(&config))
        .await
        .context("server failed")?;

    Ok(())
}
