//! Init command: write package.json without prompting

use crate::cli::InitArgs;
use crate::config::XpressConfig;
use crate::error::Result;
use crate::session::ManifestDefaults;

/// Run init command
pub fn run(config: XpressConfig, args: InitArgs) -> Result<()> {
    let defaults = defaults_from(&config, &args);

    super::one_shot(config, None, args.yes, |session| {
        session.init_project(&defaults)?;
        Ok(())
    })
}

/// Project defaults with every given flag replacing its answer
fn defaults_from(config: &XpressConfig, args: &InitArgs) -> ManifestDefaults {
    let base = ManifestDefaults::for_project(config);
    let pick = |flag: &Option<String>, default: String| flag.clone().unwrap_or(default);

    ManifestDefaults {
        name: pick(&args.name, base.name),
        version: pick(&args.pkg_version, base.version),
        author: pick(&args.author, base.author),
        description: pick(&args.description, base.description),
        license: pick(&args.license, base.license),
    }
}
