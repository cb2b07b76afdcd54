//! Project configuration
//!
//! The configuration is an explicit value: the workspace root plus the
//! detection and generation settings. It is resolved once by the command
//! layer and threaded into every inventory and render call.
//!
//! Settings can be overridden per project with an optional `xpress.yaml`:
//!
//! ```yaml
//! source_extensions: [js, ts]
//! entry_point: server.js
//! runtime: node
//! template_dir: ./my-templates
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, XpressError};

/// Project config filename
pub const CONFIG_FILE: &str = "xpress.yaml";

/// Settings read from `xpress.yaml`; every field is optional
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub source_extensions: Option<Vec<String>>,
    pub entry_point: Option<String>,
    pub runtime: Option<String>,
    pub template_dir: Option<PathBuf>,
}

impl ConfigFile {
    /// Parse configuration from YAML content
    pub fn from_yaml(path: &Path, content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| XpressError::ConfigParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}

/// Resolved configuration for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XpressConfig {
    /// Working directory every scan and write is relative to
    pub root: PathBuf,
    /// Extensions (without dot) that mark a file as a resource module
    pub source_extensions: Vec<String>,
    /// Entry point filename looked up in the root
    pub entry_point: String,
    /// Runtime executable probed for the container version
    pub runtime: String,
    /// Template directory overriding the embedded store
    pub template_dir: Option<PathBuf>,
}

impl XpressConfig {
    /// Configuration with built-in defaults for the given root
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            source_extensions: vec!["js".to_string()],
            entry_point: "index.js".to_string(),
            runtime: "node".to_string(),
            template_dir: None,
        }
    }

    /// Load configuration for a root, applying `xpress.yaml` when present
    ///
    /// A relative `template_dir` in the file is resolved against the root.
    pub fn load(root: impl Into<PathBuf>) -> Result<Self> {
        let mut config = Self::new(root);
        let path = config.root.join(CONFIG_FILE);

        if !path.is_file() {
            return Ok(config);
        }

        let content = fs::read_to_string(&path).map_err(|e| XpressError::ConfigReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        config.apply(ConfigFile::from_yaml(&path, &content)?);
        tracing::debug!(path = %path.display(), "loaded project configuration");

        Ok(config)
    }

    fn apply(&mut self, file: ConfigFile) {
        if let Some(extensions) = file.source_extensions {
            let normalized: Vec<String> = extensions
                .iter()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .filter(|ext| !ext.is_empty())
                .collect();
            if !normalized.is_empty() {
                self.source_extensions = normalized;
            }
        }
        if let Some(entry_point) = file.entry_point {
            self.entry_point = entry_point;
        }
        if let Some(runtime) = file.runtime {
            self.runtime = runtime;
        }
        if let Some(dir) = file.template_dir {
            self.template_dir = Some(if dir.is_absolute() {
                dir
            } else {
                self.root.join(dir)
            });
        }
    }

    /// Extension given to generated resource modules
    pub fn primary_extension(&self) -> &str {
        self.source_extensions
            .first()
            .map_or("js", String::as_str)
    }

    /// Directory listing name of the root, used as the default project name
    pub fn project_name(&self) -> String {
        self.root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}
