use crate::server::ServerConfig;
use clap::{Parser, ValueEnum};
use std::net::SocketAddr;

/// Serve an in-memory account ledger over HTTP
#[derive(Parser, Debug)]
#[command(name = "account-ledger")]
#[command(about = "Serve an in-memory account ledger over HTTP", long_about = None)]
pub struct CliArgs {
    /// Socket address to listen on
    #[arg(
        long = "bind",
        value_name = "ADDR",
        default_value = "127.0.0.1:8000",
        help = "Socket address to listen on"
    )]
    pub bind: SocketAddr,

    /// Number of runtime worker threads
    #[arg(
        long = "workers",
        value_name = "COUNT",
        help = "Number of runtime worker threads (default: CPU cores)"
    )]
    pub workers: Option<usize>,

    /// Log output format
    #[arg(
        long = "log-format",
        value_name = "FORMAT",
        default_value = "pretty",
        help = "Log output format: 'pretty' for humans or 'json' for collectors"
    )]
    pub log_format: LogFormat,
}

/// Available log output formats
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl CliArgs {
    /// Create a ServerConfig from CLI arguments
    ///
    /// Missing values fall back to defaults; invalid values are replaced by
    /// defaults with a warning (see `ServerConfig::new`).
    pub fn to_server_config(&self) -> ServerConfig {
        let default = ServerConfig::default();
        ServerConfig::new(self.bind, self.workers.unwrap_or(default.workers))
    }
}
