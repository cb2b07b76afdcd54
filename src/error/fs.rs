//! File system errors

use std::path::Path;

use super::XpressError;

/// Creates an access error for the working directory
pub fn access_denied(path: &Path, reason: impl ToString) -> XpressError {
    XpressError::AccessDenied {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a listing error for a directory
pub fn directory_unreadable(path: &Path, reason: impl ToString) -> XpressError {
    XpressError::DirectoryUnreadable {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a write error carrying the underlying system message
pub fn write_failed(path: &Path, reason: impl ToString) -> XpressError {
    XpressError::WriteFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}
