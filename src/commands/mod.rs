//! Command implementations for xpress CLI

pub mod add;
pub mod completions;
pub mod dockerfile;
pub mod init;
pub mod lint;
pub mod menu;
pub mod scan;
pub mod version;

use crate::config::XpressConfig;
use crate::error::Result;
use crate::session::{Context, Session};
use crate::ui::NonInteractivePrompter;

/// Run `action` in a silent session for a one-shot subcommand
///
/// Overwrite confirmations answer `assume_yes`.
fn one_shot<F>(
    config: XpressConfig,
    runtime_version: Option<String>,
    assume_yes: bool,
    action: F,
) -> Result<()>
where
    F: FnOnce(&mut Session<'_>) -> Result<()>,
{
    let ctx = Context::new(config, runtime_version)?;

    let mut ui = NonInteractivePrompter::new(assume_yes);
    let mut session = Session::open(&ctx, &mut ui)?;
    action(&mut session)
}
