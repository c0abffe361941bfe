//! # Generation Context
//!
//! The `GenerationContext` holds everything the generator needs to turn the
//! Template Store into files: the validated [`ProjectRequest`] and the
//! [`ScaffoldConfig`]. Its main job is binding every template slot to a value.
//!
//! | slot                | value for `my-app`            |
//! |---------------------|-------------------------------|
//! | `binary_name`       | `my-app`                      |
//! | `title`             | `My App`                      |
//! | `cookie_secret_env` | `MY_APP_COOKIE_STORE_SECRET`  |
//! | `db_path_env`       | `MY_APP_DB_PATH`              |
//! | `db_file`           | `my-app.db`                   |
//! | `env_file`          | `.env`                        |
//! | `session_secret`    | `secret` (configurable)       |

use napp_core::ProjectRequest;

use crate::ScaffoldConfig;
use crate::store::{OptionalFile, TemplateEntry};
use crate::template::TemplateVars;

/// Name of the environment file written into the project root.
pub const ENV_FILE_NAME: &str = ".env";

// ============================================================================
// GenerationContext
// ============================================================================

/// Context carrying all information needed for generation.
#[derive(Debug, Clone)]
pub struct GenerationContext {
    /// The validated project request
    pub request: ProjectRequest,

    /// Scaffold configuration (output dir, optional files, …)
    pub config: ScaffoldConfig,
}

impl GenerationContext {
    /// Build a context from a request and configuration.
    pub fn new(request: ProjectRequest, config: ScaffoldConfig) -> Self {
        Self { request, config }
    }

    /// Build with default configuration (convenience for tests).
    pub fn with_defaults(request: ProjectRequest) -> Self {
        Self::new(request, ScaffoldConfig::default())
    }

    /// The project name.
    pub fn project_name(&self) -> &str {
        self.request.name()
    }

    /// Bind every slot used by the Template Store.
    pub fn vars(&self) -> TemplateVars {
        let request = &self.request;
        let mut vars = TemplateVars::new();

        vars.insert("binary_name", request.name().to_string());
        vars.insert("title", request.title_case());
        vars.insert("cookie_secret_env", request.cookie_secret_env());
        vars.insert("db_path_env", request.db_path_env());
        vars.insert("db_file", request.db_file_name());
        vars.insert("env_file", ENV_FILE_NAME.to_string());
        vars.insert("session_secret", self.config.session_secret.clone());

        vars
    }

    /// Whether `entry` should be written under the current configuration.
    pub fn includes(&self, entry: &TemplateEntry) -> bool {
        match entry.optional {
            None => true,
            Some(OptionalFile::Makefile) => self.config.include_makefile,
            Some(OptionalFile::Dockerfile) => self.config.include_dockerfile,
        }
    }

    /// Whether the `.env` secret is still the built-in placeholder.
    pub fn uses_placeholder_secret(&self) -> bool {
        self.config.session_secret == crate::DEFAULT_SESSION_SECRET
    }
}

// ============================================================================
// Tests
// ============================================================================
