//! Scan command: print the detected resources

use crate::cli::ScanArgs;
use crate::config::XpressConfig;
use crate::error::{Result, XpressError};
use crate::inventory;

/// Run scan command
pub fn run(config: XpressConfig, args: ScanArgs) -> Result<()> {
    if args.json {
        let snapshot = inventory::scan(&config)?;
        let json =
            serde_json::to_string_pretty(&snapshot).map_err(|e| XpressError::SerializeFailed {
                what: "resource snapshot".to_string(),
                reason: e.to_string(),
            })?;
        println!("{json}");
        return Ok(());
    }

    super::one_shot(config, None, false, |session| {
        session.show_resources();
        Ok(())
    })
}
