use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dettect_editor::{AttackDomain, DocumentKind};

/// DeTT&CT Editor - create, check and normalize DeTT&CT administration files
#[derive(Parser, Debug)]
#[command(name = "dettect-editor")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: <config dir>/dettect-editor/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a new administration file skeleton
    New {
        /// File kind: data-sources, techniques or groups
        #[arg(value_parser = parse_kind)]
        kind: DocumentKind,

        /// ATT&CK domain (enterprise-attack, ics-attack, mobile-attack)
        #[arg(short, long, value_parser = parse_domain)]
        domain: Option<AttackDomain>,

        /// Output file (default: <collection>-new.yaml in the current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run health checks and save validation (exits non-zero on errors)
    Check {
        /// Administration file to check
        file: PathBuf,
    },

    /// Load and re-save a file in canonical form
    Normalize {
        /// Administration file to normalize
        file: PathBuf,

        /// Write the result here instead of over the input
        #[arg(short, long, conflicts_with = "diff")]
        output: Option<PathBuf>,

        /// Print a unified diff instead of writing
        #[arg(long)]
        diff: bool,
    },
}

/// Accepts the short names and the `file_type` values
fn parse_kind(s: &str) -> Result<DocumentKind, String> {
    match s {
        "data-sources" | "datasources" | "data_sources" => Ok(DocumentKind::DataSources),
        "techniques" => Ok(DocumentKind::Techniques),
        "groups" => Ok(DocumentKind::Groups),
        other => DocumentKind::from_file_type(other).ok_or_else(|| {
            format!(
                "unknown file kind '{}' (expected data-sources, techniques or groups)",
                other
            )
        }),
    }
}

fn parse_domain(s: &str) -> Result<AttackDomain, String> {
    AttackDomain::parse(s).ok_or_else(|| {
        let known: Vec<&str> = AttackDomain::ALL.iter().map(|d| d.as_str()).collect();
        format!("unknown domain '{}' (expected {})", s, known.join(", "))
    })
}
