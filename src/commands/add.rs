//! Add command: generate resource modules
//!
//! Unlike the menu, an invalid name is fatal here.

use crate::cli::AddArgs;
use crate::config::XpressConfig;
use crate::error::Result;

/// Run add command
pub fn run(config: XpressConfig, args: AddArgs) -> Result<()> {
    super::one_shot(config, None, args.yes, |session| {
        match args.kind.kind() {
            Some(kind) => {
                session.add_module(kind, &args.name)?;
            }
            None => {
                session.add_all_modules(&args.name)?;
            }
        }
        Ok(())
    })
}
