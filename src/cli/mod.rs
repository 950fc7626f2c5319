//! CLI module for the occurrence explorer
//!
//! Provides subcommands for running the explorer in different modes:
//! - `serve`: API + static frontend combined
//! - `api`: API server only
//! - `search`: one-off occurrence search printed as JSON

pub mod api;
pub mod search;
pub mod serve;

use std::net::SocketAddr;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::infrastructure::logging;

/// Occurrence Explorer - species occurrences, country tallies and summaries
#[derive(Parser)]
#[command(name = "occurrence-explorer")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run API + static frontend on one port
    Serve,

    /// Run API server only
    Api,

    /// Run a single search and print the result
    Search(search::SearchArgs),
}

fn load_config() -> AppConfig {
    dotenvy::dotenv().ok();
    AppConfig::load().unwrap_or_default()
}

fn init_logging(config: &AppConfig) {
    logging::init_logging(&logging::LoggingConfig::from(&config.logging));
}

fn build_socket_addr(config: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    )))
}
