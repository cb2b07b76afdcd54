//! Error types and handling for xpress
//!
//! Uses `thiserror` for error definitions and `miette` for diagnostics.
//!
//! Sub-modules hold convenience constructors by error domain:
//! - [`fs`]: access, listing and write errors
//! - [`template`]: template store and runtime probe errors

pub mod fs;
pub mod template;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for xpress operations
#[derive(Error, Diagnostic, Debug)]
pub enum XpressError {
    // File system errors
    #[error("Cannot access working directory '{path}': {reason}")]
    #[diagnostic(
        code(xpress::fs::access_denied),
        help("xpress needs read and write permission on the project directory")
    )]
    AccessDenied { path: String, reason: String },

    #[error("Failed to read directory '{path}': {reason}")]
    #[diagnostic(code(xpress::fs::directory_unreadable))]
    DirectoryUnreadable { path: String, reason: String },

    #[error("Failed to write file '{path}': {reason}")]
    #[diagnostic(code(xpress::fs::write_failed))]
    WriteFailed { path: String, reason: String },

    // Template errors
    #[error("Template '{name}' not found")]
    #[diagnostic(
        code(xpress::template::not_found),
        help("The template store is incomplete; check --templates or reinstall xpress")
    )]
    TemplateNotFound { name: String },

    #[error("Template '{name}' is not valid UTF-8 text")]
    #[diagnostic(code(xpress::template::decode_failed))]
    TemplateDecodeFailed { name: String },

    #[error("Failed to determine runtime version with '{command}': {reason}")]
    #[diagnostic(
        code(xpress::template::subprocess_failed),
        help("Make sure the runtime is installed and on PATH, or pass --runtime-version")
    )]
    SubprocessFailed { command: String, reason: String },

    // Configuration errors
    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(xpress::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file '{path}': {reason}")]
    #[diagnostic(code(xpress::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Failed to load locale table: {reason}")]
    #[diagnostic(code(xpress::i18n::parse_failed))]
    LocaleParseFailed { reason: String },

    #[error("Failed to serialize {what}: {reason}")]
    #[diagnostic(code(xpress::serialize::failed))]
    SerializeFailed { what: String, reason: String },

    // Resource errors
    #[error("Invalid resource name: '{name}'")]
    #[diagnostic(
        code(xpress::resource::invalid_name),
        help("Resource names must be non-empty and must not contain path separators")
    )]
    InvalidResourceName { name: String },

    // Terminal errors
    #[error("Prompt failed: {message}")]
    #[diagnostic(code(xpress::ui::prompt_failed))]
    PromptFailed { message: String },

    #[error("Operation interrupted")]
    #[diagnostic(code(xpress::ui::interrupted))]
    Interrupted,
}

impl XpressError {
    /// Exit code the process terminates with for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            XpressError::Interrupted => 130,
            _ => 1,
        }
    }
}

impl From<inquire::InquireError> for XpressError {
    fn from(err: inquire::InquireError) -> Self {
        match err {
            inquire::InquireError::OperationInterrupted => XpressError::Interrupted,
            other => XpressError::PromptFailed {
                message: other.to_string(),
            },
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, XpressError>;
