//! Resource kinds and the descriptors that drive overwrite decisions
//!
//! A **resource** is a conventional file xpress recognizes and can generate:
//! the package manifest, the container descriptor, a lint config, or a
//! model/controller/route module.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::XpressConfig;
use crate::error::{Result, XpressError};
use crate::i18n::Locale;
use crate::inventory::{CONTAINER_FILES, CONTROLLERS_DIR, MODELS_DIR, ROUTES_DIR, ResourceSnapshot};
use crate::template::manifest::MANIFEST_FILE;

/// Supported linters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Linter {
    Prettier,
    Eslint,
}

impl Linter {
    pub const ALL: [Linter; 2] = [Linter::Prettier, Linter::Eslint];

    /// Config file the linter reads, also the template name
    pub fn config_file(self) -> &'static str {
        match self {
            Linter::Prettier => ".prettierrc",
            Linter::Eslint => ".eslintrc.json",
        }
    }

    /// Locale key of the menu label
    pub fn label_key(self) -> &'static str {
        match self {
            Linter::Prettier => "linter.add.prettier",
            Linter::Eslint => "linter.add.eslint",
        }
    }
}

/// Module resource families living in their own directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleKind {
    Model,
    Controller,
    Route,
}

impl ModuleKind {
    pub const ALL: [ModuleKind; 3] = [ModuleKind::Model, ModuleKind::Controller, ModuleKind::Route];

    /// Directory the modules live in
    pub fn dir(self) -> &'static str {
        match self {
            ModuleKind::Model => MODELS_DIR,
            ModuleKind::Controller => CONTROLLERS_DIR,
            ModuleKind::Route => ROUTES_DIR,
        }
    }

    /// Template rendered for a new module
    pub fn template(self) -> &'static str {
        match self {
            ModuleKind::Model => "model.js",
            ModuleKind::Controller => "controller.js",
            ModuleKind::Route => "route.js",
        }
    }

    /// Locale key of the menu label
    pub fn label_key(self) -> &'static str {
        match self {
            ModuleKind::Model => "resource.add.model",
            ModuleKind::Controller => "resource.add.controller",
            ModuleKind::Route => "resource.add.route",
        }
    }

    fn message_key(self) -> &'static str {
        match self {
            ModuleKind::Model => "resource.model.message",
            ModuleKind::Controller => "resource.controller.message",
            ModuleKind::Route => "resource.route.message",
        }
    }

    /// Module basenames of this family in a snapshot
    pub fn names(self, snapshot: &ResourceSnapshot) -> &[String] {
        match self {
            ModuleKind::Model => &snapshot.models,
            ModuleKind::Controller => &snapshot.controllers,
            ModuleKind::Route => &snapshot.routes,
        }
    }
}

/// A resource xpress can generate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceKind {
    Manifest,
    ContainerFile,
    LintConfig(Linter),
    Module(ModuleKind, String),
}

impl ResourceKind {
    /// Whether the snapshot records this resource as present
    pub fn exists_in(&self, snapshot: &ResourceSnapshot) -> bool {
        match self {
            ResourceKind::Manifest => snapshot.has_package_manifest,
            ResourceKind::ContainerFile => snapshot.has_container_file,
            ResourceKind::LintConfig(linter) => snapshot
                .lint_configs
                .iter()
                .any(|f| f == linter.config_file()),
            ResourceKind::Module(kind, name) => kind.names(snapshot).iter().any(|n| n == name),
        }
    }

    /// Path the resource is generated at, relative to the workspace root
    pub fn relative_path(&self, config: &XpressConfig) -> PathBuf {
        match self {
            ResourceKind::Manifest => PathBuf::from(MANIFEST_FILE),
            ResourceKind::ContainerFile => PathBuf::from(container_file_name(config)),
            ResourceKind::LintConfig(linter) => PathBuf::from(linter.config_file()),
            ResourceKind::Module(kind, name) => PathBuf::from(kind.dir())
                .join(format!("{name}.{}", config.primary_extension())),
        }
    }

    fn message(&self, locale: &Locale) -> String {
        match self {
            ResourceKind::Manifest => locale.t("init.project.text"),
            ResourceKind::ContainerFile => locale.t("generate.dockerfile.message"),
            ResourceKind::LintConfig(linter) => {
                locale.t_with("linter.message", &[("file", linter.config_file())])
            }
            ResourceKind::Module(kind, name) => locale.t_with(kind.message_key(), &[("name", name.as_str())]),
        }
    }
}

/// Spelling of the container descriptor already present, else `Dockerfile`
fn container_file_name(config: &XpressConfig) -> &'static str {
    CONTAINER_FILES
        .iter()
        .copied()
        .find(|name| is_present(&config.root.join(name)))
        .unwrap_or(CONTAINER_FILES[0])
}

/// Any directory entry at `path`, dangling symlinks included
fn is_present(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

/// One resource's existence plus the message shown while generating it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceDescriptor {
    pub kind: ResourceKind,
    /// Display name, e.g. `package.json` or `models/User.js`
    pub name: String,
    pub exists: bool,
    pub prompt_message: String,
}

impl ResourceDescriptor {
    /// Describe `kind` as seen by `snapshot`
    ///
    /// The target path is also checked on disk, so an entry the snapshot
    /// missed (differing case, unusual links) still counts as existing.
    pub fn from_snapshot(
        kind: ResourceKind,
        snapshot: &ResourceSnapshot,
        config: &XpressConfig,
        locale: &Locale,
    ) -> Self {
        let relative = kind.relative_path(config);
        let exists = kind.exists_in(snapshot) || is_present(&config.root.join(&relative));
        let name = relative.to_string_lossy().replace('\\', "/");
        Self {
            exists,
            prompt_message: kind.message(locale),
            name,
            kind,
        }
    }
}

impl fmt::Display for ResourceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Check a user-supplied module name
///
/// Names become file names, so they must be non-empty single path segments.
pub fn validate_module_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    let invalid = trimmed.is_empty()
        || trimmed == "."
        || trimmed == ".."
        || trimmed.contains(['/', '\\'])
        || trimmed.chars().any(char::is_control);
    if invalid {
        return Err(XpressError::InvalidResourceName {
            name: name.to_string(),
        });
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module(kind: ModuleKind, name: &str) -> ResourceKind {
        ResourceKind::Module(kind, name.to_string())
    }

    fn snapshot() -> ResourceSnapshot {
        ResourceSnapshot {
            has_package_manifest: true,
            lint_configs: vec![".eslintrc.json".to_string()],
            has_lint_config: true,
            models: vec!["User".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_exists_in_snapshot() {
        let snapshot = snapshot();
        assert!(ResourceKind::Manifest.exists_in(&snapshot));
        assert!(!ResourceKind::ContainerFile.exists_in(&snapshot));
        assert!(ResourceKind::LintConfig(Linter::Eslint).exists_in(&snapshot));
        assert!(!ResourceKind::LintConfig(Linter::Prettier).exists_in(&snapshot));
        assert!(module(ModuleKind::Model, "User").exists_in(&snapshot));
        assert!(!module(ModuleKind::Controller, "User").exists_in(&snapshot));
        assert!(!module(ModuleKind::Model, "Post").exists_in(&snapshot));
    }

    #[test]
    fn test_relative_paths() {
        let mut config = XpressConfig::new("/work");
        assert_eq!(ResourceKind::Manifest.relative_path(&config), PathBuf::from("package.json"));
        assert_eq!(ResourceKind::ContainerFile.relative_path(&config), PathBuf::from("Dockerfile"));
        assert_eq!(
            module(ModuleKind::Route, "users").relative_path(&config),
            PathBuf::from("routes/users.js")
        );
        config.source_extensions = vec!["ts".to_string()];
        assert_eq!(
            module(ModuleKind::Model, "User").relative_path(&config),
            PathBuf::from("models/User.ts")
        );
    }

    #[test]
    fn test_descriptor_from_snapshot() {
        let locale = Locale::embedded().unwrap();
        let config = XpressConfig::new("/work");
        let descriptor =
            ResourceDescriptor::from_snapshot(module(ModuleKind::Model, "User"), &snapshot(), &config, &locale);
        assert!(descriptor.exists);
        assert_eq!(descriptor.name, "models/User.js");
        assert_eq!(descriptor.prompt_message, "Generating model User");
        assert_eq!(descriptor.to_string(), "models/User.js");
    }

    #[test]
    fn test_descriptor_checks_target_on_disk() {
        let temp = crate::test_fixtures::create_project(&["models/User.js"]);
        let locale = Locale::embedded().unwrap();
        let config = XpressConfig::new(temp.path());

        let descriptor = ResourceDescriptor::from_snapshot(
            module(ModuleKind::Model, "User"),
            &ResourceSnapshot::default(),
            &config,
            &locale,
        );
        assert!(descriptor.exists);
    }

    #[test]
    fn test_container_file_keeps_present_spelling() {
        let temp = crate::test_fixtures::create_project(&[]);
        let config = XpressConfig::new(temp.path());
        assert_eq!(ResourceKind::ContainerFile.relative_path(&config), PathBuf::from("Dockerfile"));

        crate::test_fixtures::write_file(temp.path(), "DockerFile", "FROM scratch\n");
        let locale = Locale::embedded().unwrap();
        let snapshot = ResourceSnapshot {
            has_container_file: true,
            ..Default::default()
        };
        let descriptor =
            ResourceDescriptor::from_snapshot(ResourceKind::ContainerFile, &snapshot, &config, &locale);
        assert!(descriptor.exists);
        assert!(descriptor.name.eq_ignore_ascii_case("dockerfile"));
        #[cfg(target_os = "linux")]
        assert_eq!(descriptor.name, "DockerFile");
    }

    #[test]
    fn test_validate_module_name() {
        assert_eq!(validate_module_name(" User ").unwrap(), "User");
        for bad in ["", "   ", "..", "a/b", "a\\b", "x\ny"] {
            assert!(
                matches!(
                    validate_module_name(bad),
                    Err(XpressError::InvalidResourceName { .. })
                ),
                "{bad:?} should be rejected"
            );
        }
    }
}
