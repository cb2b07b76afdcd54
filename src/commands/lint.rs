//! Lint command

use crate::cli::LintArgs;
use crate::config::XpressConfig;
use crate::error::Result;

/// Run lint command
pub fn run(config: XpressConfig, args: LintArgs) -> Result<()> {
    super::one_shot(config, None, args.yes, |session| {
        session.add_lint_config(args.linter.into())?;
        Ok(())
    })
}
