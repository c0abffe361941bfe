//! # Generator
//!
//! The `Generator` is the top-level entry point. It takes a [`ProjectRequest`]
//! and a [`ScaffoldConfig`], builds a [`GenerationContext`], renders the
//! Template Store into a [`GeneratedProject`], and optionally hands that to the
//! Materializer.
//!
//! ## Pipeline
//!
//! ```text
//! ProjectRequest + ScaffoldConfig
//!         │
//!         ▼
//!   GenerationContext::new()
//!         │
//!         ├──► store::SUBDIRECTORIES          → directories
//!         ├──► store::TEMPLATES (rendered)    → Vec<GeneratedFile>
//!         ├──► <name>.db                      → empty GeneratedFile
//!         │
//!         ▼
//!   GeneratedProject { directories, files, warnings }
//!         │
//!         ▼
//!   materializer::write_project()   (generate_and_write only)
//! ```
//!
//! Rendering finishes before anything touches the disk, so a template error
//! never leaves a directory behind.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use napp_codegen::{Generator, ScaffoldConfig};
//! use napp_core::ProjectRequest;
//!
//! let request = ProjectRequest::new("my-app")?;
//! let config = ScaffoldConfig::new().with_output_dir("/tmp");
//!
//! let output = Generator::new(config).generate_and_write(&request)?;
//! println!("Generated {} files", output.file_count());
//! ```

use std::path::{Path, PathBuf};

use napp_core::{NappResult, ProjectRequest, Validatable};

use crate::context::GenerationContext;
use crate::materializer;
use crate::store::{self, TemplateKind};
use crate::{FileType, GeneratedFile, GeneratedProject, ScaffoldConfig};

// ============================================================================
// Generator
// ============================================================================

/// Top-level generator that orchestrates the scaffolding pipeline.
///
/// The `Generator` is stateless aside from its configuration.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: ScaffoldConfig,
}

impl Generator {
    /// Create a new generator with the given configuration.
    pub fn new(config: ScaffoldConfig) -> Self {
        Self { config }
    }

    /// Create a generator with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(ScaffoldConfig::default())
    }

    /// Get the current configuration.
    pub fn config(&self) -> &ScaffoldConfig {
        &self.config
    }

    /// Where the project root for `request` will be created.
    pub fn project_root(&self, request: &ProjectRequest) -> PathBuf {
        if self.config.output_dir == Path::new(".") {
            return PathBuf::from(request.name());
        }
        self.config.output_dir.join(request.name())
    }

    /// Render every file for `request` without touching the disk.
    ///
    /// # Steps
    ///
    /// 1. **Declare** the fixed subdirectories (`cmd`, `template`, `static`).
    /// 2. **Render** each Template Store entry the configuration includes;
    ///    verbatim entries are copied as-is.
    /// 3. **Add** the empty placeholder database file.
    /// 4. **Warn** when `.env` still carries the placeholder secret.
    ///
    /// # Errors
    ///
    /// Returns [`NappError::InvalidSessionSecret`](napp_core::NappError::InvalidSessionSecret)
    /// if the configured secret cannot be quoted in `.env`, and
    /// [`NappError::TemplateRender`](napp_core::NappError::TemplateRender)
    /// if a template refers to a slot with no value.
    pub fn generate(&self, request: &ProjectRequest) -> NappResult<GeneratedProject> {
        self.config.validate()?;

        let ctx = GenerationContext::new(request.clone(), self.config.clone());
        let vars = ctx.vars();
        let mut output = GeneratedProject::new(ctx.project_name());

        // ── 1. Directories ───────────────────────────────────────────────
        for dir in store::SUBDIRECTORIES {
            output.add_directory(*dir);
        }

        // ── 2. Templates ─────────────────────────────────────────────────
        for entry in store::TEMPLATES.iter().filter(|e| ctx.includes(e)) {
            let content = match entry.kind {
                TemplateKind::Rendered => entry.template().render(&vars)?,
                TemplateKind::Verbatim => entry.body.to_string(),
            };
            output.add_file(GeneratedFile::new(entry.path, content, entry.file_type));
        }

        // ── 3. Placeholder database ──────────────────────────────────────
        output.add_file(GeneratedFile::database(request.db_file_name()));

        // ── 4. Warnings ──────────────────────────────────────────────────
        if ctx.uses_placeholder_secret() {
            output.add_warning(format!(
                "{} is set to a placeholder value in .env; replace it before deploying.",
                request.cookie_secret_env(),
            ));
        }

        tracing::info!(
            files = output.file_count(),
            warnings = output.warnings.len(),
            project = %output.name,
            "generation complete",
        );

        Ok(output)
    }

    /// Generate and write the project under [`project_root`](Self::project_root).
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails, if the root already exists, or if
    /// any directory or file cannot be written. On a write failure the
    /// partially written root is removed.
    pub fn generate_and_write(&self, request: &ProjectRequest) -> NappResult<GeneratedProject> {
        let output = self.generate(request)?;
        let root = self.project_root(request);

        materializer::write_project(&output, &root)?;

        tracing::info!(
            root = %root.display(),
            files = output.file_count(),
            "files written to disk",
        );
        Ok(output)
    }
}

// ============================================================================
// Standalone convenience functions
// ============================================================================

/// Render a project using default configuration.
///
/// Shorthand for `Generator::with_defaults().generate(request)`.
pub fn generate(request: &ProjectRequest) -> NappResult<GeneratedProject> {
    Generator::with_defaults().generate(request)
}

/// Generate a project and write it inside `output_dir`.
pub fn generate_to_dir(
    request: &ProjectRequest,
    output_dir: impl Into<PathBuf>,
) -> NappResult<GeneratedProject> {
    let config = ScaffoldConfig::new().with_output_dir(output_dir);
    Generator::new(config).generate_and_write(request)
}

// ============================================================================
// GenerationSummary — human-readable report
// ============================================================================

/// A human-readable summary of a completed generation run.
#[derive(Debug, Clone)]
pub struct GenerationSummary {
    /// Project name.
    pub project_name: String,
    /// Total number of files generated.
    pub total_files: usize,
    /// Go source files.
    pub go_files: usize,
    /// HTML page templates.
    pub html_files: usize,
    /// Static assets (scripts and stylesheets).
    pub asset_files: usize,
    /// Everything else (env, ignore, build files, database).
    pub other_files: usize,
    /// Number of warnings.
    pub warning_count: usize,
    /// Total bytes of generated content.
    pub total_bytes: usize,
}

impl GenerationSummary {
    /// Build a summary from a generated project.
    pub fn from_project(project: &GeneratedProject) -> Self {
        let go_files = project.files_by_type(FileType::Go).len();
        let html_files = project.files_by_type(FileType::Html).len();
        let asset_files = project.files.iter().filter(|f| f.file_type.is_asset()).count();
        let other_files = project.file_count() - go_files - html_files - asset_files;
        let total_bytes: usize = project.files.iter().map(|f| f.content.len()).sum();

        Self {
            project_name: project.name.clone(),
            total_files: project.file_count(),
            go_files,
            html_files,
            asset_files,
            other_files,
            warning_count: project.warnings.len(),
            total_bytes,
        }
    }

    /// Format the summary as a human-readable string.
    pub fn display(&self) -> String {
        let mut out = String::with_capacity(512);

        out.push_str("╔══════════════════════════════════════════════════╗\n");
        out.push_str("║         Project Scaffolding Complete             ║\n");
        out.push_str("╠══════════════════════════════════════════════════╣\n");
        out.push_str(&format!("║  Project:     {:<35}║\n", self.project_name));
        out.push_str(&format!("║  Total Files: {:<35}║\n", self.total_files));
        out.push_str(&format!("║    Go:        {:<35}║\n", self.go_files));
        out.push_str(&format!("║    HTML:      {:<35}║\n", self.html_files));
        out.push_str(&format!("║    Assets:    {:<35}║\n", self.asset_files));
        out.push_str(&format!("║    Other:     {:<35}║\n", self.other_files));
        out.push_str(&format!("║  Warnings:    {:<35}║\n", self.warning_count));

        let size_str = if self.total_bytes < 1024 {
            format!("{} B", self.total_bytes)
        } else if self.total_bytes < 1024 * 1024 {
            format!("{:.1} KB", self.total_bytes as f64 / 1024.0)
        } else {
            format!("{:.1} MB", self.total_bytes as f64 / (1024.0 * 1024.0))
        };
        out.push_str(&format!("║  Total Size:  {:<35}║\n", size_str));
        out.push_str("╚══════════════════════════════════════════════════╝\n");

        out
    }
}

impl std::fmt::Display for GenerationSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Produce a [`GenerationSummary`] from a [`GeneratedProject`].
pub fn summarize(project: &GeneratedProject) -> GenerationSummary {
    GenerationSummary::from_project(project)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use napp_core::NappError;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;
    use walkdir::WalkDir;

    fn my_app() -> ProjectRequest {
        ProjectRequest::new("my-app").unwrap()
    }

    fn paths(output: &GeneratedProject) -> Vec<String> {
        output
            .files
            .iter()
            .map(|f| f.path.to_string_lossy().to_string())
            .collect()
    }

    // ── Generation ───────────────────────────────────────────────────────

    #[test]
    fn test_generate_full_file_set() {
        let output = generate(&my_app()).unwrap();

        assert_eq!(
            paths(&output),
            vec![
                "cmd/main.go",
                "template/index.html",
                "template/dashboard.html",
                "static/hx.js",
                "static/twcolors.min.css",
                "static/styles.css",
                ".gitignore",
                ".env",
                "Makefile",
                "Dockerfile",
                "my-app.db",
            ]
        );
        assert_eq!(
            output.directories,
            vec![PathBuf::from("cmd"), PathBuf::from("template"), PathBuf::from("static")]
        );
    }

    #[test]
    fn test_generate_without_optional_files() {
        let config = ScaffoldConfig::new().without_makefile().without_dockerfile();
        let output = Generator::new(config).generate(&my_app()).unwrap();

        let paths = paths(&output);
        assert!(!paths.iter().any(|p| p == "Makefile"));
        assert!(!paths.iter().any(|p| p == "Dockerfile"));
        assert_eq!(paths.len(), 9);
    }

    #[test]
    fn test_no_placeholders_survive_rendering() {
        let output = generate(&my_app()).unwrap();
        for file in &output.files {
            assert!(
                !file.content.contains("@{"),
                "unrendered placeholder in {}",
                file.path.display()
            );
        }
    }

    // ── Content ──────────────────────────────────────────────────────────

    #[test]
    fn test_main_go_env_names() {
        let output = generate(&my_app()).unwrap();
        let main = &output.file("cmd/main.go").unwrap().content;

        assert!(main.contains(r#"os.Getenv("MY_APP_COOKIE_STORE_SECRET")"#));
        assert!(main.contains(r#"os.Getenv("MY_APP_DB_PATH")"#));
        assert!(main.contains("package main"));
    }

    #[test]
    fn test_html_titles() {
        let output = generate(&my_app()).unwrap();

        let index = &output.file("template/index.html").unwrap().content;
        assert_eq!(index.matches("My App").count(), 4);
        assert!(index.contains("<title>My App</title>"));
        assert!(index.contains("{{ block \"index\" . }}"));

        let dashboard = &output.file("template/dashboard.html").unwrap().content;
        assert_eq!(dashboard.matches("My App").count(), 1);
    }

    #[test]
    fn test_env_file() {
        let output = generate(&my_app()).unwrap();
        let env = &output.file(".env").unwrap().content;

        assert_eq!(
            env.as_str(),
            "MY_APP_DB_PATH=\"my-app.db\"\nMY_APP_COOKIE_STORE_SECRET=\"secret\"\n"
        );
    }

    #[test]
    fn test_gitignore_file() {
        let output = generate(&my_app()).unwrap();
        let ignore = &output.file(".gitignore").unwrap().content;

        assert!(ignore.lines().any(|l| l == ".env"));
        assert!(ignore.lines().any(|l| l == "my-app.db"));
    }

    #[test]
    fn test_static_assets_are_verbatim() {
        let output = generate(&my_app()).unwrap();

        assert_eq!(
            output.file("static/styles.css").unwrap().content,
            store::embedded::STYLES_CSS
        );
        assert_eq!(output.file("static/hx.js").unwrap().content, store::embedded::HX_JS);
        assert_eq!(
            output.file("static/twcolors.min.css").unwrap().content,
            store::embedded::TWCOLORS_CSS
        );
    }

    #[test]
    fn test_build_files_use_binary_name() {
        let output = generate(&my_app()).unwrap();

        let dockerfile = &output.file("Dockerfile").unwrap().content;
        assert_eq!(dockerfile.matches("my-app").count(), 3);

        let makefile = &output.file("Makefile").unwrap().content;
        assert!(makefile.contains("BINARY_NAME=my-app"));
        assert!(makefile.contains("$(BINARY_NAME)"));
    }

    #[test]
    fn test_database_file_is_empty() {
        let output = generate(&my_app()).unwrap();
        let db = output.file("my-app.db").unwrap();
        assert!(db.content.is_empty());
        assert_eq!(db.file_type, FileType::Database);
    }

    // ── Warnings ─────────────────────────────────────────────────────────

    #[test]
    fn test_placeholder_secret_warning() {
        let output = generate(&my_app()).unwrap();
        assert!(output.warnings.iter().any(|w| w.contains("MY_APP_COOKIE_STORE_SECRET")));

        let config = ScaffoldConfig::new().with_session_secret("real-secret");
        let output = Generator::new(config).generate(&my_app()).unwrap();
        assert!(!output.has_warnings());
        assert!(output.file(".env").unwrap().content.contains("\"real-secret\""));
    }

    // ── Writing ──────────────────────────────────────────────────────────

    #[test]
    fn test_generate_to_dir_layout() {
        let tmp = TempDir::new().unwrap();
        generate_to_dir(&my_app(), tmp.path()).unwrap();

        let root = tmp.path().join("my-app");
        let mut found: Vec<String> = WalkDir::new(&root)
            .min_depth(1)
            .into_iter()
            .filter_map(Result::ok)
            .map(|e| {
                e.path()
                    .strip_prefix(&root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect();
        found.sort();

        let mut expected = vec![
            ".env",
            ".gitignore",
            "Dockerfile",
            "Makefile",
            "cmd",
            "cmd/main.go",
            "my-app.db",
            "static",
            "static/hx.js",
            "static/styles.css",
            "static/twcolors.min.css",
            "template",
            "template/dashboard.html",
            "template/index.html",
        ];
        expected.sort();
        assert_eq!(found, expected);

        let env = fs::read_to_string(root.join(".env")).unwrap();
        assert!(env.lines().any(|l| l == r#"MY_APP_DB_PATH="my-app.db""#));
    }

    #[test]
    fn test_second_run_fails_and_keeps_first_output() {
        let tmp = TempDir::new().unwrap();
        let generator = Generator::new(ScaffoldConfig::new().with_output_dir(tmp.path()));
        let root = generator.project_root(&my_app());

        generator.generate_and_write(&my_app()).unwrap();
        fs::write(root.join(".env"), "EDITED=1\n").unwrap();

        let err = generator.generate_and_write(&my_app()).unwrap_err();

        assert!(matches!(err, NappError::DirectoryExists(_)));
        assert_eq!(fs::read_to_string(root.join(".env")).unwrap(), "EDITED=1\n");
        assert!(root.join("my-app.db").is_file());
    }

    #[test]
    fn test_unquotable_secret_writes_nothing() {
        let tmp = TempDir::new().unwrap();
        let config = ScaffoldConfig::new()
            .with_output_dir(tmp.path())
            .with_session_secret("a\"\nEVIL=1");
        let generator = Generator::new(config);

        let err = generator.generate_and_write(&my_app()).unwrap_err();

        assert!(matches!(err, NappError::InvalidSessionSecret('"')));
        assert!(!generator.project_root(&my_app()).exists());
    }

    #[test]
    fn test_project_root() {
        let generator = Generator::new(ScaffoldConfig::new().with_output_dir("/srv"));
        assert_eq!(generator.project_root(&my_app()), PathBuf::from("/srv/my-app"));

        assert_eq!(Generator::with_defaults().project_root(&my_app()), PathBuf::from("my-app"));
    }

    // ── GenerationSummary ────────────────────────────────────────────────

    #[test]
    fn test_generation_summary() {
        let output = generate(&my_app()).unwrap();
        let summary = summarize(&output);

        assert_eq!(summary.project_name, "my-app");
        assert_eq!(summary.total_files, 11);
        assert_eq!(summary.go_files, 1);
        assert_eq!(summary.html_files, 2);
        assert_eq!(summary.asset_files, 3);
        assert_eq!(summary.other_files, 5);
        assert_eq!(summary.warning_count, 1);
        assert!(summary.total_bytes > 0);
    }

    #[test]
    fn test_generation_summary_display() {
        let output = generate(&my_app()).unwrap();
        let display = summarize(&output).to_string();

        assert!(display.contains("Project Scaffolding Complete"));
        assert!(display.contains("my-app"));
        assert!(display.contains("Total Files"));
        assert!(display.contains("KB"), "{display}");
    }

    #[test]
    fn test_generation_summary_bytes() {
        let mut output = GeneratedProject::new("tiny");
        output.add_file(GeneratedFile::new("a.css", "x".repeat(10), FileType::Css));

        let summary = GenerationSummary::from_project(&output);
        assert_eq!(summary.asset_files, 1);
        assert!(summary.display().contains("10 B"));
    }
}
