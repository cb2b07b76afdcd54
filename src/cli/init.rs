use clap::Parser;

/// Arguments for init command
///
/// Each flag replaces the default answer of the matching question.
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Use the directory name and defaults:\n    xpress init\n\n\
                  Set name and author:\n    xpress init --name api --author \"Ada\"\n\n\
                  Replace an existing package.json:\n    xpress init --name api -y")]
pub struct InitArgs {
    /// Project name (defaults to the workspace directory name)
    #[arg(long)]
    pub name: Option<String>,

    /// Project version (defaults to 1.0.0)
    #[arg(long = "pkg-version", value_name = "VERSION")]
    pub pkg_version: Option<String>,

    #[arg(long)]
    pub author: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    /// License identifier (defaults to MIT)
    #[arg(long)]
    pub license: Option<String>,

    /// Overwrite an existing package.json without asking
    #[arg(long, short = 'y')]
    pub yes: bool,
}
