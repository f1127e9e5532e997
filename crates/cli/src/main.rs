//! # Umbra
//!
//! Host-rule dark mode engine: a global switch, blacklist/whitelist host
//! rules and an intensity factor decide per host whether the dark-mode
//! marker applies.

use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use umbra_domain::CliOverrides;

mod bootstrap;
mod commands;
mod di;

#[derive(Parser)]
#[command(name = "umbra")]
#[command(version)]
#[command(about = "Dark mode host rules from the command line")]
struct Cli {
    /// Config file path (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Settings file override
    #[arg(short, long, global = true)]
    storage: Option<PathBuf>,

    /// Log level override
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: commands::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        storage_path: cli.storage,
        log_level: cli.log_level,
    };
    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    let config_label = cli
        .config
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "default".to_string());
    info!(config_file = %config_label, "Configuration loaded");

    let repositories = di::Repositories::new(&config)?;
    let use_cases = di::UseCases::new(&repositories);

    commands::run(cli.command, &config, &repositories, &use_cases).await
}
