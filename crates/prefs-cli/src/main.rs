//! JSHint enablement preferences CLI
//!
//! Lists and edits which resources of a project have JSHint enabled.

mod cli;
mod commands;
mod context;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{} {}", "warning:".yellow().bold(), e);
    }
    tracing::debug!("Verbose mode enabled");

    let Some(command) = cli.command else {
        // No command provided - show help hint
        println!("{} JSHint enablement preferences", "jshint-prefs".green().bold());
        println!();
        println!("Run {} for available commands.", "jshint-prefs --help".cyan());
        return Ok(());
    };

    let cwd = std::env::current_dir()?;
    let scope = context::resolve_scope(cli.project.as_deref(), cli.settings.as_deref(), &cwd)?;

    match command {
        Commands::List { json } => commands::run_list(scope, json),
        Commands::Include { paths } => commands::run_include(scope, &paths),
        Commands::Exclude { paths } => commands::run_exclude(scope, &paths),
        Commands::Check { path } => commands::run_check(scope, &path),
        Commands::Clear => commands::run_clear(scope),
        Commands::Where => commands::run_where(&scope),
    }
}
