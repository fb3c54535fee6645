//! Portico - navigation host for the volunteer site.

mod cli;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use portico::config::SiteConfig;
use portico::window::{WindowFactory, WindowKind};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    portico::logger::set_verbose(cli.verbose);

    let config = SiteConfig::load(&cli.config)?;

    // One window per process, shared by the shell and the consent store.
    let window = WindowFactory::create(WindowKind::Headless {
        location: "/".to_string(),
        cookie_store: config.cookie_store(),
    })?;

    match cli.command {
        Commands::Routes => cli::routes::print_routes(&config),
        Commands::Visit {
            paths,
            accept_cookies,
        } => cli::visit::run_visit(&config, window, &paths, accept_cookies),
        Commands::Consent { accept } => cli::consent::run_consent(&config, window, accept),
        Commands::Check => cli::check::check_config(&config),
    }
}
