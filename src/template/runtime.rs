//! Runtime version lookup for the container descriptor

use std::process::Command;

use crate::error::{Result, template::subprocess_failed};

/// Source of the active runtime's version string
pub trait RuntimeProbe {
    /// Raw version string as reported by the runtime (e.g. `v18.16.0`)
    fn version(&self) -> Result<String>;

    /// Human-readable description of the probe, used in error messages
    fn describe(&self) -> String;
}

/// Probe that runs `<program> --version`
#[derive(Debug, Clone)]
pub struct CommandProbe {
    program: String,
}

impl CommandProbe {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl RuntimeProbe for CommandProbe {
    fn version(&self) -> Result<String> {
        let command = self.describe();
        tracing::debug!(%command, "probing runtime version");

        let output = Command::new(&self.program)
            .arg("--version")
            .output()
            .map_err(|e| subprocess_failed(&command, e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let reason = if stderr.is_empty() {
                format!("exited with {}", output.status)
            } else {
                stderr
            };
            return Err(subprocess_failed(&command, reason));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    fn describe(&self) -> String {
        format!("{} --version", self.program)
    }
}

/// Probe returning a version supplied up front
#[derive(Debug, Clone)]
pub struct FixedVersion(pub String);

impl RuntimeProbe for FixedVersion {
    fn version(&self) -> Result<String> {
        Ok(self.0.clone())
    }

    fn describe(&self) -> String {
        format!("--runtime-version {}", self.0)
    }
}

/// Strip any leading non-numeric prefix: `v18.16.0` becomes `18.16.0`
pub fn strip_version_prefix(raw: &str) -> &str {
    raw.trim().trim_start_matches(|c: char| !c.is_ascii_digit())
}

/// Determine the numeric runtime version, failing when none can be found
pub fn resolve_version(probe: &dyn RuntimeProbe) -> Result<String> {
    let raw = probe.version()?;
    let version = strip_version_prefix(&raw);
    if version.is_empty() {
        return Err(subprocess_failed(
            probe.describe(),
            format!("no version number in '{raw}'"),
        ));
    }
    Ok(version.to_string())
}
