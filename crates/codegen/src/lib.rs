//! # napp Codegen
//!
//! Turns a validated [`ProjectRequest`](napp_core::ProjectRequest) into a Go,
//! HTMX and SQLite project on disk.
//!
//! ## Pipeline
//!
//! - **Template Store** ([`store`]): every embedded file body, keyed by output path
//! - **Renderer** ([`template`]): named `@{slot}` substitution
//! - **Generator** ([`generator`]): renders the store into a [`GeneratedProject`]
//! - **Materializer** ([`materializer`]): writes a [`GeneratedProject`] under a
//!   fresh root directory, removing it again if any write fails
//!

// ============================================================================
// Modules
// ============================================================================

pub mod context;
pub mod generator;
pub mod materializer;
pub mod store;
pub mod template;

// ============================================================================
// Re-exports
// ============================================================================

pub use context::GenerationContext;
pub use generator::{GenerationSummary, Generator, generate, generate_to_dir, summarize};
pub use materializer::write_project;

use std::path::PathBuf;

use napp_core::{NappError, NappResult, Validatable};

/// Value written for the cookie store secret unless configured otherwise.
pub const DEFAULT_SESSION_SECRET: &str = "secret";

/// Characters a session secret may not hold; `.env` writes it inside double quotes.
pub const SESSION_SECRET_FORBIDDEN: &[char] = &['"', '\\', '\r', '\n'];

// ============================================================================
// ScaffoldConfig
// ============================================================================

/// Configuration for the scaffolder
#[derive(Debug, Clone)]
pub struct ScaffoldConfig {
    /// Directory the project root is created in
    pub output_dir: PathBuf,

    /// Whether to write a `Makefile`
    pub include_makefile: bool,

    /// Whether to write a `Dockerfile`
    pub include_dockerfile: bool,

    /// Value for the cookie store secret in `.env`
    pub session_secret: String,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            include_makefile: true,
            include_dockerfile: true,
            session_secret: DEFAULT_SESSION_SECRET.to_string(),
        }
    }
}

impl ScaffoldConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output directory
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Skip the `Makefile`
    pub fn without_makefile(mut self) -> Self {
        self.include_makefile = false;
        self
    }

    /// Skip the `Dockerfile`
    pub fn without_dockerfile(mut self) -> Self {
        self.include_dockerfile = false;
        self
    }

    /// Set the cookie store secret written to `.env`
    pub fn with_session_secret(mut self, secret: impl Into<String>) -> Self {
        self.session_secret = secret.into();
        self
    }
}

impl Validatable for ScaffoldConfig {
    fn validate(&self) -> NappResult<()> {
        match self.session_secret.chars().find(|c| SESSION_SECRET_FORBIDDEN.contains(c)) {
            Some(c) => Err(NappError::InvalidSessionSecret(c)),
            None => Ok(()),
        }
    }
}

// ============================================================================
// GeneratedFile
// ============================================================================

/// Represents a single generated file
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    /// Relative path from the project root
    pub path: PathBuf,

    /// File content
    pub content: String,

    /// File type for categorization
    pub file_type: FileType,
}

impl GeneratedFile {
    /// Create a new generated file
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>, file_type: FileType) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            file_type,
        }
    }

    /// Create an empty placeholder database file
    pub fn database(path: impl Into<PathBuf>) -> Self {
        Self::new(path, String::new(), FileType::Database)
    }
}

/// Type of generated file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Go,
    Html,
    JavaScript,
    Css,
    Env,
    Config,
    Build,
    Database,
}

impl FileType {
    /// Static web assets served from `static/`
    pub fn is_asset(&self) -> bool {
        matches!(self, FileType::JavaScript | FileType::Css)
    }
}

// ============================================================================
// GeneratedProject
// ============================================================================

/// Collection of all generated files for a project
#[derive(Debug, Clone, Default)]
pub struct GeneratedProject {
    /// Project name (also the root directory name)
    pub name: String,

    /// Subdirectories to create before writing files
    pub directories: Vec<PathBuf>,

    /// All generated files
    pub files: Vec<GeneratedFile>,

    /// Warnings generated during generation
    pub warnings: Vec<String>,
}

impl GeneratedProject {
    /// Create a new generated project
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            directories: Vec::new(),
            files: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Add a subdirectory
    pub fn add_directory(&mut self, dir: impl Into<PathBuf>) {
        self.directories.push(dir.into());
    }

    /// Add a file to the project
    pub fn add_file(&mut self, file: GeneratedFile) {
        self.files.push(file);
    }

    /// Add a warning
    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// Get the number of files
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Check if there are any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Get files by type
    pub fn files_by_type(&self, file_type: FileType) -> Vec<&GeneratedFile> {
        self.files
            .iter()
            .filter(|f| f.file_type == file_type)
            .collect()
    }

    /// Find a file by its relative path
    pub fn file(&self, path: &str) -> Option<&GeneratedFile> {
        self.files.iter().find(|f| f.path.as_os_str() == path)
    }
}

// ============================================================================
// Tests
// ============================================================================
