//! Dockerfile command

use crate::cli::DockerfileArgs;
use crate::config::XpressConfig;
use crate::error::Result;

/// Run dockerfile command
pub fn run(config: XpressConfig, args: DockerfileArgs) -> Result<()> {
    super::one_shot(config, args.runtime_version, args.yes, |session| {
        session.add_container_file()?;
        Ok(())
    })
}
