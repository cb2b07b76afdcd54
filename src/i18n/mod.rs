//! Localized display strings
//!
//! Every user-facing string goes through [`Locale`]. The table is embedded at
//! compile time from `locales/en.json`; lookups of unknown keys return the key
//! itself so a missing translation is visible but never fatal.

use std::collections::HashMap;

use crate::error::{Result, XpressError};

const EN: &str = include_str!("../../locales/en.json");

/// Key to display-string mapping
#[derive(Debug, Clone, Default)]
pub struct Locale {
    strings: HashMap<String, String>,
}

impl Locale {
    /// English table bundled with the binary
    pub fn embedded() -> Result<Self> {
        Self::from_json(EN)
    }

    /// Build a table from a flat JSON object of strings
    pub fn from_json(content: &str) -> Result<Self> {
        let strings: HashMap<String, String> =
            serde_json::from_str(content).map_err(|e| XpressError::LocaleParseFailed {
                reason: e.to_string(),
            })?;
        Ok(Self { strings })
    }

    /// Look up a display string
    pub fn t(&self, key: &str) -> String {
        self.strings
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    /// Look up a display string and fill its `{{param}}` placeholders
    ///
    /// Placeholders are filled in one pass over the looked-up text, so values
    /// are inserted verbatim. Unknown placeholders are left as they are.
    pub fn t_with(&self, key: &str, params: &[(&str, &str)]) -> String {
        let text = self.t(key);
        let mut out = String::with_capacity(text.len());
        let mut rest = text.as_str();

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            let filled = after.find("}}").and_then(|end| {
                let name = &after[..end];
                params
                    .iter()
                    .find(|(param, _)| *param == name)
                    .map(|(_, value)| (*value, end))
            });
            match filled {
                Some((value, end)) => {
                    out.push_str(value);
                    rest = &after[end + 2..];
                }
                None => {
                    out.push_str("{{");
                    rest = after;
                }
            }
        }
        out.push_str(rest);
        out
    }
}
