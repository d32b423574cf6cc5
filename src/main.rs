//! Hacker News story browser - Entry Point

use clap::Parser;
use hnsb::source::AlgoliaGateway;
use hnsb::storage::FileTermSlot;
use hnsb::{config, logging, session::SearchSession, view};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Hacker News story browser - search, sort, and page through stories
#[derive(Parser, Debug)]
#[command(name = "hnsb")]
#[command(version)]
#[command(about = "TUI search browser for Hacker News stories")]
pub struct Args {
    /// Search for this term immediately instead of the persisted one
    pub query: Option<String>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Search API base URL (overrides config)
    #[arg(long)]
    pub api_base_url: Option<String>,

    /// Path to the tracing log file (overrides config)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Full precedence chain: Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = config::load_config_with_precedence(args.config.clone())?;
        let merged = config::merge_config(config_file);
        let with_env = config::apply_env_overrides(merged);
        config::apply_cli_overrides(with_env, args.api_base_url.clone(), args.log_file.clone())
    };

    logging::init(&config.log_file_path)?;
    info!(config = ?config, "configuration loaded and resolved");

    let slot = FileTermSlot::new(&config.slot_path);
    let session = SearchSession::new(Box::new(slot));
    let gateway = AlgoliaGateway::new(
        &config.api_base_url,
        Duration::from_secs(config.request_timeout_secs),
    )?;

    view::run(session, Arc::new(gateway), args.query)?;

    Ok(())
}
