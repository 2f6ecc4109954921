//! DeTT&CT Editor CLI
//!
//! Usage: dettect-editor <COMMAND>
//!
//! Commands:
//!   new        Write a new administration file skeleton
//!   check      Run health checks and save validation
//!   normalize  Load and re-save a file in canonical form

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use dettect_editor::logging::{init_logging, LogConfig};
use dettect_editor::EditorConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&LogConfig::from_verbosity(cli.verbose));

    let (config, warnings) = EditorConfig::discover(cli.config.as_deref())?;
    for warning in &warnings {
        tracing::warn!("{}", warning);
    }

    match cli.command {
        Commands::New {
            kind,
            domain,
            output,
        } => commands::new::cmd_new(kind, domain, output.as_deref(), &config, cli.json),
        Commands::Check { file } => commands::check::cmd_check(&file, cli.json),
        Commands::Normalize { file, output, diff } => {
            commands::normalize::cmd_normalize(&file, output.as_deref(), diff, &config, cli.json)
        }
    }
}
