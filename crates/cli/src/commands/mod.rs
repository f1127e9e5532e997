mod hosts;
mod settings;
mod transfer;
mod watch;

use std::path::PathBuf;

use clap::{Subcommand, ValueEnum};
use umbra_domain::{Config, FilterMode};

use crate::di::{Repositories, UseCases};

#[derive(Subcommand)]
pub enum Command {
    /// Show the current settings and, optionally, a host's verdict
    Status {
        /// Host to evaluate against the rules
        #[arg(long)]
        host: Option<String>,
    },
    /// Enable dark mode globally
    On,
    /// Disable dark mode globally
    Off,
    /// Select the matching mode
    Mode {
        #[arg(value_enum)]
        mode: ModeArg,
    },
    /// Manage the excluded-host list (blacklist mode)
    Exclude {
        #[command(subcommand)]
        action: ListAction,
    },
    /// Manage the allowed-host list (whitelist mode)
    Allow {
        #[command(subcommand)]
        action: ListAction,
    },
    /// Toggle a site's entry on the active mode's list
    Toggle { host: String },
    /// Set the rendering intensity (0 to 1)
    Intensity { value: f64 },
    /// Export the settings profile as JSON
    Export {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Import a settings profile
    Import { file: PathBuf },
    /// Clear both host lists
    Clear {
        /// Skip the confirmation
        #[arg(long)]
        yes: bool,
    },
    /// Run a live page agent for a host until Ctrl-C
    Watch { host: String },
}

#[derive(Subcommand)]
pub enum ListAction {
    /// Add a host (bare host or URL)
    Add { host: String },
    /// Remove a host (exact entry only)
    Remove { host: String },
    /// Print the list
    List,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ModeArg {
    /// Apply everywhere except excluded hosts
    All,
    /// Apply only on allowed hosts
    Whitelist,
}

impl From<ModeArg> for FilterMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::All => FilterMode::All,
            ModeArg::Whitelist => FilterMode::Whitelist,
        }
    }
}

pub async fn run(
    command: Command,
    config: &Config,
    repositories: &Repositories,
    use_cases: &UseCases,
) -> anyhow::Result<()> {
    match command {
        Command::Status { host } => settings::status(use_cases, host.as_deref()).await,
        Command::On => settings::set_global(use_cases, true).await,
        Command::Off => settings::set_global(use_cases, false).await,
        Command::Mode { mode } => settings::set_mode(use_cases, mode.into()).await,
        Command::Intensity { value } => settings::set_intensity(use_cases, value).await,
        Command::Clear { yes } => settings::clear(use_cases, yes).await,
        Command::Exclude { action } => hosts::exclude(use_cases, action).await,
        Command::Allow { action } => hosts::allow(use_cases, action).await,
        Command::Toggle { host } => hosts::toggle(use_cases, &host).await,
        Command::Export { output } => transfer::export(use_cases, output.as_deref()).await,
        Command::Import { file } => transfer::import(use_cases, &file).await,
        Command::Watch { host } => watch::watch(&host, config, repositories).await,
    }
}
