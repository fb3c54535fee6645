//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Portico site navigation host
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: portico.toml)
    #[arg(short = 'C', long, global = true, default_value = "portico.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the effective route table and redirect policy
    #[command(visible_alias = "r")]
    Routes,

    /// Run navigation events through the shell, in order
    Visit {
        /// Paths to navigate to (e.g. /o-nas /unknown-path)
        #[arg(value_name = "PATH", required = true)]
        paths: Vec<String>,

        /// Dismiss the cookie banner after the first page
        #[arg(short, long)]
        accept_cookies: bool,
    },

    /// Show or acknowledge the cookie consent flag
    #[command(visible_alias = "c")]
    Consent {
        /// Acknowledge the cookie notice
        #[arg(short, long)]
        accept: bool,
    },

    /// Validate the configuration and exit
    Check,
}
