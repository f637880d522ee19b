//! CodeGuard CLI
//!
//! Validates the generated core skill bundle and, on request, mirrors it
//! into the installed Claude Code plugin cache.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::Cli;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let installed = if cli.verbose {
        logging::init_verbose()
    } else {
        logging::init()
    };
    if let Err(e) = installed {
        eprintln!("{}: failed to set up logging: {}", "warning".yellow().bold(), e);
    }

    let rules = commands::run_validate(&cli.source, cli.json)?;

    if cli.update_cache {
        commands::run_update_cache(&cli.source, cli.home.as_deref(), cli.json)?;
    } else {
        tracing::debug!(rules = rules.len(), "cache update not requested");
    }

    Ok(())
}
