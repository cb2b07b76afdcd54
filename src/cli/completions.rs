use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    xpress completions bash > ~/.bash_completion.d/xpress\n\n\
                  Generate zsh completions:\n    xpress completions zsh > ~/.zfunc/_xpress\n\n\
                  Generate fish completions:\n    xpress completions fish > ~/.config/fish/completions/xpress.fish")]
pub struct CompletionsArgs {
    /// Shell type
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
