//! Version command implementation

use crate::error::Result;
use crate::template::embedded::TEMPLATES;

/// Run version command
pub fn run() -> Result<()> {
    println!("xpress {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Minimum Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!("  Profile: {}", build_profile());
    println!("  Built-in templates: {}", TEMPLATES.len());

    Ok(())
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
