//! xpress - Express project scaffolding
//!
//! Detects which conventional resources an Express project already has and
//! generates the missing ones from templates, asking before anything is
//! overwritten.

use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod common;
mod config;
mod error;
mod i18n;
mod inventory;
mod orchestrator;
mod resource;
mod session;
mod template;
mod ui;

#[cfg(test)]
mod test_fixtures;

use cli::{Cli, Commands};
use config::XpressConfig;
use error::Result;

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env("XPRESS_LOG").unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("xpress=debug")
        } else {
            EnvFilter::new("xpress=warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Resolve the working directory once; everything below receives it explicitly
fn resolve_root(workspace: Option<PathBuf>) -> Result<PathBuf> {
    let dir = match workspace {
        Some(dir) => dir,
        None => std::env::current_dir()
            .map_err(|e| error::fs::access_denied(Path::new("."), e))?,
    };
    dunce::canonicalize(&dir).map_err(|e| error::fs::access_denied(&dir, e))
}

fn load_config(cli: &Cli) -> Result<XpressConfig> {
    let root = resolve_root(cli.workspace.clone())?;
    let mut config = XpressConfig::load(root)?;
    if let Some(templates) = &cli.templates {
        config.template_dir = Some(templates.clone());
    }
    tracing::debug!(root = %config.root.display(), "workspace resolved");
    Ok(config)
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Version) => return commands::version::run(),
        Some(Commands::Completions(args)) => return commands::completions::run(args),
        _ => {}
    }

    let config = load_config(&cli)?;
    match cli.command {
        None | Some(Commands::Menu) => commands::menu::run(config),
        Some(Commands::Scan(args)) => commands::scan::run(config, args),
        Some(Commands::Init(args)) => commands::init::run(config, args),
        Some(Commands::Dockerfile(args)) => commands::dockerfile::run(config, args),
        Some(Commands::Lint(args)) => commands::lint::run(config, args),
        Some(Commands::Add(args)) => commands::add::run(config, args),
        Some(Commands::Version | Commands::Completions(_)) => Ok(()),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}
