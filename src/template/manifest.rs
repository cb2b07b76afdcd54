//! Package manifest generation
//!
//! The manifest is serialized in a fixed field order with unset fields
//! omitted, pretty-printed, with a trailing newline.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::fs::write_atomic;
use crate::error::{Result, XpressError, fs::write_failed};

/// Manifest filename
pub const MANIFEST_FILE: &str = "package.json";

/// Project information written to `package.json`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageManifest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
}

impl PackageManifest {
    /// Pretty-printed JSON form
    pub fn to_json(&self) -> Result<String> {
        let mut json =
            serde_json::to_string_pretty(self).map_err(|e| XpressError::SerializeFailed {
                what: MANIFEST_FILE.to_string(),
                reason: e.to_string(),
            })?;
        json.push('\n');
        Ok(json)
    }

    /// Write the manifest to `target`
    pub fn write_to(&self, target: &Path) -> Result<()> {
        if target.is_dir() {
            return Err(write_failed(target, "target is a directory"));
        }
        write_atomic(target, self.to_json()?.as_bytes())
    }
}

/// Answer text kept as a manifest field; blank answers are dropped
pub fn non_empty(answer: impl Into<String>) -> Option<String> {
    let answer = answer.into();
    let trimmed = answer.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
