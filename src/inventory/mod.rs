//! Resource detection for a project directory
//!
//! A scan looks at the immediate listing of the workspace root and one level
//! into the `models/`, `controllers/` and `routes/` directories. Scans are
//! read-only and always produce a fresh [`ResourceSnapshot`]; nothing is
//! cached between them.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::config::XpressConfig;
use crate::error::{
    Result,
    fs::{access_denied, directory_unreadable},
};
use crate::resource::Linter;
use crate::template::manifest::MANIFEST_FILE;

/// Environment file name
pub const ENV_FILE: &str = ".env";

/// Accepted spellings of the container descriptor
pub const CONTAINER_FILES: &[&str] = &["Dockerfile", "DockerFile"];

/// Directory holding model modules
pub const MODELS_DIR: &str = "models";

/// Directory holding controller modules
pub const CONTROLLERS_DIR: &str = "controllers";

/// Directory holding route modules
pub const ROUTES_DIR: &str = "routes";

/// Which conventional resources exist, as of one scan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResourceSnapshot {
    pub has_package_manifest: bool,
    pub has_env_file: bool,
    pub has_container_file: bool,
    pub has_lint_config: bool,
    /// Known lint config filenames present in the root
    pub lint_configs: Vec<String>,
    pub has_entry_point: bool,
    pub models: Vec<String>,
    pub controllers: Vec<String>,
    pub routes: Vec<String>,
}

impl ResourceSnapshot {
    /// Number of resources detected, modules counted individually
    pub fn resource_count(&self) -> usize {
        [
            self.has_package_manifest,
            self.has_env_file,
            self.has_container_file,
            self.has_entry_point,
        ]
        .iter()
        .filter(|present| **present)
        .count()
            + self.lint_configs.len()
            + self.models.len()
            + self.controllers.len()
            + self.routes.len()
    }
}

/// Entries of a directory, split by type
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirListing {
    pub files: Vec<String>,
    pub folders: Vec<String>,
}

/// Verify the current user can list and write the root directory
pub fn check_access(root: &Path) -> Result<()> {
    let metadata = fs::metadata(root).map_err(|e| access_denied(root, e))?;
    if !metadata.is_dir() {
        return Err(access_denied(root, "not a directory"));
    }

    fs::read_dir(root).map_err(|e| access_denied(root, e))?;
    // Anonymous file: removed on drop and never visible in a listing on
    // platforms that support unlinked temp files.
    tempfile::tempfile_in(root).map_err(|e| access_denied(root, e))?;

    Ok(())
}

/// Scan the configured root into a snapshot
pub fn scan(config: &XpressConfig) -> Result<ResourceSnapshot> {
    let root = config.root.as_path();
    check_access(root)?;

    let DirListing { files, folders } = list_directory(root)?;
    let has = |name: &str| files.iter().any(|f| f == name);

    let lint_configs: Vec<String> = Linter::ALL
        .iter()
        .map(|linter| linter.config_file())
        .filter(|&name| has(name))
        .map(str::to_string)
        .collect();

    let extensions = &config.source_extensions;
    let snapshot = ResourceSnapshot {
        has_package_manifest: has(MANIFEST_FILE),
        has_env_file: has(ENV_FILE),
        has_container_file: CONTAINER_FILES.iter().any(|&name| has(name)),
        has_lint_config: !lint_configs.is_empty(),
        lint_configs,
        has_entry_point: has(config.entry_point.as_str()),
        models: resource_files_of(root, &folders, MODELS_DIR, extensions)?,
        controllers: resource_files_of(root, &folders, CONTROLLERS_DIR, extensions)?,
        routes: resource_files_of(root, &folders, ROUTES_DIR, extensions)?,
    };

    tracing::debug!(
        root = %root.display(),
        models = snapshot.models.len(),
        controllers = snapshot.controllers.len(),
        routes = snapshot.routes.len(),
        "scanned resources"
    );

    Ok(snapshot)
}

/// List a directory's immediate entries, split into files and folders
///
/// Symbolic links are classified by what they point to; dangling links are
/// listed as files.
pub fn list_directory(dir: &Path) -> Result<DirListing> {
    let entries = fs::read_dir(dir).map_err(|e| directory_unreadable(dir, e))?;

    let mut listing = DirListing::default();
    for entry in entries {
        let entry = entry.map_err(|e| directory_unreadable(dir, e))?;
        let file_type = entry.file_type().map_err(|e| directory_unreadable(dir, e))?;
        let name = entry.file_name().to_string_lossy().into_owned();

        let is_dir = if file_type.is_symlink() {
            fs::metadata(entry.path()).is_ok_and(|m| m.is_dir())
        } else {
            file_type.is_dir()
        };

        if is_dir {
            listing.folders.push(name);
        } else {
            listing.files.push(name);
        }
    }

    Ok(listing)
}

/// Basenames of the source files directly inside `root/subdir`
///
/// Returns an empty list when `subdir` is not among `folders`. Files are kept
/// when their extension is in `extensions`; the extension is stripped and
/// the first occurrence of each basename is kept, in listing order.
pub fn resource_files_of(
    root: &Path,
    folders: &[String],
    subdir: &str,
    extensions: &[String],
) -> Result<Vec<String>> {
    if !folders.iter().any(|f| f == subdir) {
        return Ok(Vec::new());
    }

    let DirListing { files, .. } = list_directory(&root.join(subdir))?;

    let mut names: Vec<String> = Vec::new();
    for file in &files {
        let Some(stem) = source_stem(file, extensions) else {
            continue;
        };
        if !names.iter().any(|n| n == stem) {
            names.push(stem.to_string());
        }
    }

    Ok(names)
}

fn source_stem<'f>(file: &'f str, extensions: &[String]) -> Option<&'f str> {
    let path = Path::new(file);
    let ext = path.extension()?.to_str()?;
    if !extensions.iter().any(|allowed| allowed == ext) {
        return None;
    }
    path.file_stem()?.to_str()
}
