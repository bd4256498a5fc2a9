//! psplog library root.
//! Exposes the CLI parser, the high-level run() function and the pipeline
//! modules (reader, models, report).

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod logging;
pub mod models;
pub mod reader;
pub mod report;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(&cli.command, config_path),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, config_path),
        Commands::Generate { .. } => cli::commands::generate::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config_path = cli.config.clone().unwrap_or_else(Config::config_file);
    let cfg = Config::load_from(&config_path)?;
    tracing::debug!(path = %config_path.display(), "configuration loaded");

    dispatch(&cli, &cfg, &config_path)
}
