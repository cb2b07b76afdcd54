use clap::Parser;

/// Arguments for scan command
#[derive(Parser, Debug)]
pub struct ScanArgs {
    /// Print the snapshot as JSON
    #[arg(long)]
    pub json: bool,
}
