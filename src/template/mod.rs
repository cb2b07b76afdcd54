//! Template store and rendering
//!
//! Templates are static files addressed by name. The default store is
//! compiled into the binary (see [`embedded`]); a directory can replace it
//! with [`DirectoryTemplates`].
//!
//! ## Placeholders
//!
//! Placeholders are literal `{{name}}` strings. Substitution is a plain,
//! global, non-overlapping string replacement: tokens are never interpreted
//! as patterns and replaced values are never scanned again.

pub mod embedded;
pub mod manifest;
pub mod renderer;
pub mod runtime;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, template::not_found};

pub use embedded::EmbeddedTemplates;
pub use manifest::PackageManifest;
pub use renderer::TemplateRenderer;
pub use runtime::{CommandProbe, FixedVersion, RuntimeProbe};

/// Template rendered into the container descriptor
pub const DOCKERFILE_TEMPLATE: &str = "Dockerfile";

/// Token the container template carries for the runtime version
pub const VERSION_TOKEN: &str = "version";

/// Token resource module templates carry for the resource name
pub const NAME_TOKEN: &str = "name";

/// Read-only source of named templates
pub trait TemplateStore {
    /// Raw bytes of the named template
    fn load(&self, name: &str) -> Result<Vec<u8>>;
}

/// Templates read from a directory, one file per template name
#[derive(Debug, Clone)]
pub struct DirectoryTemplates {
    dir: PathBuf,
}

impl DirectoryTemplates {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl TemplateStore for DirectoryTemplates {
    fn load(&self, name: &str) -> Result<Vec<u8>> {
        // Only plain file names address templates.
        let is_plain = Path::new(name).file_name().is_some_and(|f| f == name);
        if !is_plain {
            return Err(not_found(name));
        }
        fs::read(self.dir.join(name)).map_err(|_| not_found(name))
    }
}

/// One rendering request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSubstitution {
    pub template_name: String,
    pub target_path: PathBuf,
    /// Literal text to replace, placeholder braces included
    pub token: String,
    pub value: String,
}

impl TemplateSubstitution {
    /// Request replacing the `{{token_name}}` placeholder of a template
    pub fn new(
        template_name: impl Into<String>,
        target_path: impl Into<PathBuf>,
        token_name: &str,
        value: impl Into<String>,
    ) -> Self {
        Self {
            template_name: template_name.into(),
            target_path: target_path.into(),
            token: placeholder(token_name),
            value: value.into(),
        }
    }
}

/// Placeholder text for a token name: `name` becomes `{{name}}`
pub fn placeholder(name: &str) -> String {
    format!("{{{{{name}}}}}")
}

/// Replace every literal occurrence of `token` in `content` with `value`
///
/// An empty token matches nothing.
pub fn substitute(content: &str, token: &str, value: &str) -> String {
    if token.is_empty() {
        return content.to_string();
    }
    content.replace(token, value)
}
