//! Template store and runtime probe errors

use super::XpressError;

/// Creates a missing-template error
pub fn not_found(name: impl Into<String>) -> XpressError {
    XpressError::TemplateNotFound { name: name.into() }
}

/// Creates a runtime probe error
pub fn subprocess_failed(command: impl Into<String>, reason: impl ToString) -> XpressError {
    XpressError::SubprocessFailed {
        command: command.into(),
        reason: reason.to_string(),
    }
}
