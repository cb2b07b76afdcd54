use clap::{Parser, ValueEnum};

use crate::resource::{Linter, ModuleKind};

/// Arguments for dockerfile command
#[derive(Parser, Debug)]
pub struct DockerfileArgs {
    /// Runtime version to embed instead of asking the installed runtime
    #[arg(long, value_name = "VERSION")]
    pub runtime_version: Option<String>,

    /// Overwrite an existing Dockerfile without asking
    #[arg(long, short = 'y')]
    pub yes: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinterChoice {
    Prettier,
    Eslint,
}

impl From<LinterChoice> for Linter {
    fn from(choice: LinterChoice) -> Self {
        match choice {
            LinterChoice::Prettier => Linter::Prettier,
            LinterChoice::Eslint => Linter::Eslint,
        }
    }
}

/// Arguments for lint command
#[derive(Parser, Debug)]
pub struct LintArgs {
    pub linter: LinterChoice,

    /// Overwrite an existing config without asking
    #[arg(long, short = 'y')]
    pub yes: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModuleChoice {
    Model,
    Controller,
    Route,
    /// Model, controller and route of the same name
    All,
}

impl ModuleChoice {
    /// The single module kind, `None` for `all`
    pub fn kind(self) -> Option<ModuleKind> {
        match self {
            ModuleChoice::Model => Some(ModuleKind::Model),
            ModuleChoice::Controller => Some(ModuleKind::Controller),
            ModuleChoice::Route => Some(ModuleKind::Route),
            ModuleChoice::All => None,
        }
    }
}

/// Arguments for add command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Add a model:\n    xpress add model User\n\n\
                  Add model, controller and route, replacing existing files:\n    xpress add all User -y")]
pub struct AddArgs {
    pub kind: ModuleChoice,

    /// Module name, used as the file name
    pub name: String,

    /// Overwrite existing modules without asking
    #[arg(long, short = 'y')]
    pub yes: bool,
}
