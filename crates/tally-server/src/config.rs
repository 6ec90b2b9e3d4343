use std::net::SocketAddr;
use std::time::Duration;

use clap::Parser;

/// Runtime configuration for the server binary.
///
/// Every flag also reads from the environment, so deployments can configure
/// the service without a command line.
#[derive(Debug, Clone, Parser)]
#[command(name = "tally-server", version, about = "Exact JSON numeric aggregation over HTTP")]
pub struct ServerConfig {
    /// Address to listen on.
    #[arg(long, env = "TALLY_BIND", default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,

    /// Shared secret used to sign and verify bearer tokens.
    #[arg(long, env = "TALLY_TOKEN_SECRET", default_value = "secret", hide_env_values = true)]
    pub token_secret: String,

    /// Lifetime of issued tokens, in seconds.
    #[arg(long, env = "TALLY_TOKEN_TTL_SECS", default_value_t = 3600)]
    pub token_ttl_secs: u64,
}

impl ServerConfig {
    pub fn token_ttl(&self) -> Duration {
        Duration::from_secs(self.token_ttl_secs)
    }
}
