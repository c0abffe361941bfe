//! # Template Store
//!
//! Every file body napp writes is embedded into the binary at compile time
//! with [`include_str!`] and listed once in [`TEMPLATES`], keyed by its output
//! path relative to the project root.
//!
//! Each entry declares the slots its body uses. The store tests check that the
//! declaration matches the body, so adding a placeholder to a template without
//! declaring it (or the other way round) fails the build's tests rather than
//! producing a half-rendered file.
//!
//! ## Adding a template
//!
//! 1. Put the body under `templates/`
//! 2. Add a [`TemplateEntry`] to [`TEMPLATES`]
//! 3. If it introduces a new slot, bind it in
//!    [`GenerationContext::vars`](crate::context::GenerationContext::vars)

use crate::FileType;
use crate::template::Template;

/// Subdirectories created under the project root before any file is written.
pub const SUBDIRECTORIES: &[&str] = &["cmd", "template", "static"];

// ============================================================================
// TemplateEntry
// ============================================================================

/// How an entry's body becomes file content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    /// Placeholders are substituted
    Rendered,
    /// Copied byte for byte
    Verbatim,
}

/// Files the user can switch off
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionalFile {
    Makefile,
    Dockerfile,
}

/// One embedded file
#[derive(Debug, Clone, Copy)]
pub struct TemplateEntry {
    /// Output path relative to the project root
    pub path: &'static str,

    /// Embedded body
    pub body: &'static str,

    /// Rendered or copied verbatim
    pub kind: TemplateKind,

    /// Slots the body uses (rendered entries only)
    pub slots: &'static [&'static str],

    /// File type for categorization
    pub file_type: FileType,

    /// Set when the file can be skipped through configuration
    pub optional: Option<OptionalFile>,
}

impl TemplateEntry {
    /// View the body as a [`Template`] named after the output path.
    pub fn template(&self) -> Template<'static> {
        Template::new(self.path, self.body)
    }
}

// ============================================================================
// Embedded bodies
// ============================================================================

pub mod embedded {
    pub const MAIN_GO: &str = include_str!("../templates/cmd/main.go.tmpl");
    pub const INDEX_HTML: &str = include_str!("../templates/template/index.html.tmpl");
    pub const DASHBOARD_HTML: &str = include_str!("../templates/template/dashboard.html.tmpl");
    pub const HX_JS: &str = include_str!("../templates/static/hx.js");
    pub const TWCOLORS_CSS: &str = include_str!("../templates/static/twcolors.min.css");
    pub const STYLES_CSS: &str = include_str!("../templates/static/styles.css");
    pub const GITIGNORE: &str = include_str!("../templates/gitignore.tmpl");
    pub const DOTENV: &str = include_str!("../templates/env.tmpl");
    pub const MAKEFILE: &str = include_str!("../templates/Makefile.tmpl");
    pub const DOCKERFILE: &str = include_str!("../templates/Dockerfile.tmpl");
}

/// All embedded files, in the order they are written.
pub const TEMPLATES: &[TemplateEntry] = &[
    TemplateEntry {
        path: "cmd/main.go",
        body: embedded::MAIN_GO,
        kind: TemplateKind::Rendered,
        slots: &["cookie_secret_env", "db_path_env"],
        file_type: FileType::Go,
        optional: None,
    },
    TemplateEntry {
        path: "template/index.html",
        body: embedded::INDEX_HTML,
        kind: TemplateKind::Rendered,
        slots: &["title"],
        file_type: FileType::Html,
        optional: None,
    },
    TemplateEntry {
        path: "template/dashboard.html",
        body: embedded::DASHBOARD_HTML,
        kind: TemplateKind::Rendered,
        slots: &["title"],
        file_type: FileType::Html,
        optional: None,
    },
    TemplateEntry {
        path: "static/hx.js",
        body: embedded::HX_JS,
        kind: TemplateKind::Verbatim,
        slots: &[],
        file_type: FileType::JavaScript,
        optional: None,
    },
    TemplateEntry {
        path: "static/twcolors.min.css",
        body: embedded::TWCOLORS_CSS,
        kind: TemplateKind::Verbatim,
        slots: &[],
        file_type: FileType::Css,
        optional: None,
    },
    TemplateEntry {
        path: "static/styles.css",
        body: embedded::STYLES_CSS,
        kind: TemplateKind::Verbatim,
        slots: &[],
        file_type: FileType::Css,
        optional: None,
    },
    TemplateEntry {
        path: ".gitignore",
        body: embedded::GITIGNORE,
        kind: TemplateKind::Rendered,
        slots: &["db_file", "env_file"],
        file_type: FileType::Config,
        optional: None,
    },
    TemplateEntry {
        path: ".env",
        body: embedded::DOTENV,
        kind: TemplateKind::Rendered,
        slots: &["cookie_secret_env", "db_file", "db_path_env", "session_secret"],
        file_type: FileType::Env,
        optional: None,
    },
    TemplateEntry {
        path: "Makefile",
        body: embedded::MAKEFILE,
        kind: TemplateKind::Rendered,
        slots: &["binary_name"],
        file_type: FileType::Build,
        optional: Some(OptionalFile::Makefile),
    },
    TemplateEntry {
        path: "Dockerfile",
        body: embedded::DOCKERFILE,
        kind: TemplateKind::Rendered,
        slots: &["binary_name"],
        file_type: FileType::Build,
        optional: Some(OptionalFile::Dockerfile),
    },
];

/// Look up an entry by output path.
pub fn entry(path: &str) -> Option<&'static TemplateEntry> {
    TEMPLATES.iter().find(|e| e.path == path)
}

// ============================================================================
// Tests
// ============================================================================
