//! Error types for napp
//!
//! One error enum covers the whole scaffolding run: argument validation,
//! directory creation, template rendering and file writes. Every variant is
//! fatal; the CLI maps all of them to exit status 1.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for napp
#[derive(Debug, Error)]
pub enum NappError {
    // ========================================================================
    // Argument Errors
    // ========================================================================
    /// `init` was called without a project name
    #[error("Oops! No arguments received, wanted 1")]
    NoArguments,

    /// `init` was called with more than one positional argument
    #[error("Oops! Too many arguments: received {0}, wanted 1")]
    TooManyArguments(usize),

    /// The project name does not match `^[a-z0-9-]+$`
    #[error("Oops! Project name must be in the following format: <project-name> (got '{0}')")]
    InvalidProjectName(String),

    /// The session secret holds a character that would break `.env` quoting
    #[error("Oops! Session secret cannot contain {0:?}")]
    InvalidSessionSecret(char),

    // ========================================================================
    // Directory Errors
    // ========================================================================
    /// The project root already exists
    #[error("Oops! Directory already exists: {0}")]
    DirectoryExists(PathBuf),

    /// Directory creation failed
    #[error("Failed to create directory '{path}': {message}")]
    DirectoryCreate { path: PathBuf, message: String },

    // ========================================================================
    // File Errors
    // ========================================================================
    /// File write error
    #[error("Failed to write file '{path}': {message}")]
    FileWrite { path: PathBuf, message: String },

    /// Template rendering failed
    #[error("Template rendering failed for '{template}': {message}")]
    TemplateRender { template: String, message: String },
}

impl NappError {
    /// Create a directory creation error
    pub fn directory_create(path: impl Into<PathBuf>, err: &std::io::Error) -> Self {
        NappError::DirectoryCreate {
            path: path.into(),
            message: err.to_string(),
        }
    }

    /// Create a file write error
    pub fn file_write(path: impl Into<PathBuf>, err: &std::io::Error) -> Self {
        NappError::FileWrite {
            path: path.into(),
            message: err.to_string(),
        }
    }

    /// Create a template rendering error
    pub fn template_render(template: impl Into<String>, msg: impl Into<String>) -> Self {
        NappError::TemplateRender {
            template: template.into(),
            message: msg.into(),
        }
    }

    /// Check if this error came from validating the command line
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            NappError::NoArguments
                | NappError::TooManyArguments(_)
                | NappError::InvalidProjectName(_)
                | NappError::InvalidSessionSecret(_)
        )
    }
}

/// Result type alias using NappError
pub type NappResult<T> = Result<T, NappError>;

// ============================================================================
// Tests
// ============================================================================
