//! Common file system operations with unified error handling

use std::fs::{self, Permissions};
use std::io::Write;
use std::path::Path;

use crate::error::{Result, fs::write_failed};

/// Ensure parent directory exists for a path
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| write_failed(parent, e))?;
    }
    Ok(())
}

/// Write `contents` to `target`, replacing it in a single rename
///
/// The data goes to a temp file next to the target first, so readers see
/// either the previous content or the new content. The parent directory must
/// already exist. On Unix an existing target keeps its permissions.
pub fn write_atomic(target: &Path, contents: &[u8]) -> Result<()> {
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut builder = tempfile::Builder::new();
    builder.prefix(".xpress-");
    if let Some(permissions) = target_permissions(target) {
        builder.permissions(permissions);
    }

    let mut tmp = builder
        .tempfile_in(dir)
        .map_err(|e| write_failed(target, e))?;
    tmp.write_all(contents)
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(|e| write_failed(target, e))?;
    tmp.persist(target).map_err(|e| write_failed(target, e.error))?;

    Ok(())
}

#[cfg(unix)]
fn target_permissions(target: &Path) -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;

    match fs::metadata(target) {
        Ok(metadata) => Some(metadata.permissions()),
        Err(_) => Some(Permissions::from_mode(0o644)),
    }
}

#[cfg(not(unix))]
fn target_permissions(_target: &Path) -> Option<Permissions> {
    None
}
