//! CLI definitions using clap derive API
//!
//! Argument types live in submodules per command:
//! - scan: Scan command arguments
//! - init: Init command arguments
//! - generate: Dockerfile, lint and add command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod generate;
pub mod init;
pub mod scan;

pub use completions::CompletionsArgs;
pub use generate::{AddArgs, DockerfileArgs, LintArgs, LinterChoice, ModuleChoice};
pub use init::InitArgs;
pub use scan::ScanArgs;

/// xpress - Express project scaffolding
///
/// Detects the resources of an Express project and generates the missing ones.
#[derive(Parser, Debug)]
#[command(
    name = "xpress",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Interactive scaffolding for Express projects",
    long_about = "xpress inspects an Express project directory (package.json, Dockerfile, \
                  lint configs, models, controllers, routes) and generates missing resources \
                  from built-in templates, asking before it overwrites anything.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  xpress                                 \x1b[90m# Open the interactive menu\x1b[0m\n   \
                  xpress scan --json                     \x1b[90m# Print detected resources\x1b[0m\n   \
                  xpress init --name demo                \x1b[90m# Write package.json\x1b[0m\n   \
                  xpress dockerfile                      \x1b[90m# Dockerfile for the local node\x1b[0m\n   \
                  xpress lint prettier                   \x1b[90m# Add .prettierrc\x1b[0m\n   \
                  xpress add all User                    \x1b[90m# Model, controller and route\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Workspace directory (defaults to current directory)
    #[arg(long, short = 'w', global = true, env = "XPRESS_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// Directory with template files replacing the built-in ones
    #[arg(long, short = 't', global = true, env = "XPRESS_TEMPLATES")]
    pub templates: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive menu (default)
    Menu,

    /// Show detected resources
    Scan(ScanArgs),

    /// Write package.json
    Init(InitArgs),

    /// Generate a Dockerfile for the installed runtime
    Dockerfile(DockerfileArgs),

    /// Add a linter configuration
    Lint(LintArgs),

    /// Add a model, controller or route module
    Add(AddArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
