//! Project request type and the derived name forms
//!
//! A [`ProjectRequest`] is built once from the command line and is immutable
//! afterwards. Every output file reads one of its derived forms:
//!
//! | form                 | `my-app`                     |
//! |----------------------|------------------------------|
//! | `name`               | `my-app`                     |
//! | `upper_snake_case`   | `MY_APP`                     |
//! | `title_case`         | `My App`                     |
//! | `db_file_name`       | `my-app.db`                  |
//! | `cookie_secret_env`  | `MY_APP_COOKIE_STORE_SECRET` |
//! | `db_path_env`        | `MY_APP_DB_PATH`             |

use std::sync::LazyLock;

use heck::ToTitleCase;
use regex::Regex;

use crate::error::{NappError, NappResult};
use crate::traits::Validatable;

/// Pattern every project name must match
pub const PROJECT_NAME_PATTERN: &str = r"^[a-z0-9-]+$";

/// Suffix of the cookie store secret environment variable
pub const COOKIE_SECRET_ENV_SUFFIX: &str = "_COOKIE_STORE_SECRET";

/// Suffix of the database path environment variable
pub const DB_PATH_ENV_SUFFIX: &str = "_DB_PATH";

/// Extension of the placeholder database file
pub const DB_FILE_EXTENSION: &str = ".db";

static PROJECT_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PROJECT_NAME_PATTERN).expect("project name pattern is valid"));

/// Check whether `name` is an acceptable project name
///
/// Only lowercase ASCII letters, digits and hyphens are allowed, and the
/// name must not be empty.
pub fn is_valid_project_name(name: &str) -> bool {
    PROJECT_NAME_RE.is_match(name)
}

/// Uppercase `s` and replace every hyphen with an underscore.
pub fn to_upper_snake_case(s: &str) -> String {
    s.to_uppercase().replace('-', "_")
}

/// Replace hyphens with spaces and capitalise each hyphen-delimited segment.
///
/// Empty segments are kept, so consecutive hyphens turn into consecutive
/// spaces.
pub fn to_title_case(s: &str) -> String {
    s.split('-')
        .map(|segment| segment.to_title_case())
        .collect::<Vec<_>>()
        .join(" ")
}

// ============================================================================
// ProjectRequest
// ============================================================================

/// A validated request to scaffold a project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRequest {
    name: String,
}

impl ProjectRequest {
    /// Create a request, rejecting names that do not match
    /// [`PROJECT_NAME_PATTERN`].
    pub fn new(name: impl Into<String>) -> NappResult<Self> {
        let request = Self { name: name.into() };
        request.validate()?;
        Ok(request)
    }

    /// The project name as given on the command line
    pub fn name(&self) -> &str {
        &self.name
    }

    /// `my-app` → `MY_APP`
    pub fn upper_snake_case(&self) -> String {
        to_upper_snake_case(&self.name)
    }

    /// `my-app` → `My App`
    pub fn title_case(&self) -> String {
        to_title_case(&self.name)
    }

    /// `my-app` → `my-app.db`
    pub fn db_file_name(&self) -> String {
        format!("{}{}", self.name.to_lowercase(), DB_FILE_EXTENSION)
    }

    /// `my-app` → `MY_APP_COOKIE_STORE_SECRET`
    pub fn cookie_secret_env(&self) -> String {
        format!("{}{}", self.upper_snake_case(), COOKIE_SECRET_ENV_SUFFIX)
    }

    /// `my-app` → `MY_APP_DB_PATH`
    pub fn db_path_env(&self) -> String {
        format!("{}{}", self.upper_snake_case(), DB_PATH_ENV_SUFFIX)
    }
}

impl Validatable for ProjectRequest {
    fn validate(&self) -> NappResult<()> {
        if !is_valid_project_name(&self.name) {
            return Err(NappError::InvalidProjectName(self.name.clone()));
        }
        Ok(())
    }
}

impl std::fmt::Display for ProjectRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_valid_project_names() {
        for name in ["my-app", "app", "a", "app2", "2fast", "-", "my--app", "web-2-go"] {
            assert!(is_valid_project_name(name), "{name} should be accepted");
        }
    }

    #[test]
    fn test_invalid_project_names() {
        for name in [
            "", "My-App", "MYAPP", "my_app", "my app", "my.app", "my/app", "app!", "café",
            "my-app\n", " my-app",
        ] {
            assert!(!is_valid_project_name(name), "{name:?} should be rejected");
        }
    }

    #[test]
    fn test_upper_snake_case() {
        assert_eq!(to_upper_snake_case("my-app"), "MY_APP");
        assert_eq!(to_upper_snake_case("app"), "APP");
        assert_eq!(to_upper_snake_case("my--app-2"), "MY__APP_2");
        assert_eq!(to_upper_snake_case("-app-"), "_APP_");
    }

    #[test]
    fn test_upper_snake_case_idempotent() {
        for name in ["my-app", "a-b-c", "web-2-go", "x"] {
            let once = to_upper_snake_case(name);
            assert_eq!(to_upper_snake_case(&once), once);
            assert!(!once.contains('-'));
        }
    }

    #[test]
    fn test_title_case() {
        assert_eq!(to_title_case("my-app"), "My App");
        assert_eq!(to_title_case("app"), "App");
        assert_eq!(to_title_case("my-cool-app"), "My Cool App");
        assert_eq!(to_title_case("web-2-go"), "Web 2 Go");
        assert_eq!(to_title_case("a--b"), "A  B");
    }

    #[test]
    fn test_title_case_keeps_segment_count() {
        for name in ["my-app", "a--b", "x-y-z", "single"] {
            let title = to_title_case(name);
            assert_eq!(title.split(' ').count(), name.split('-').count());
            assert_eq!(title.to_lowercase().replace(' ', "-"), name);
        }
    }

    #[test]
    fn test_project_request_derived_forms() {
        let request = ProjectRequest::new("my-app").unwrap();

        assert_eq!(request.name(), "my-app");
        assert_eq!(request.upper_snake_case(), "MY_APP");
        assert_eq!(request.title_case(), "My App");
        assert_eq!(request.db_file_name(), "my-app.db");
        assert_eq!(request.cookie_secret_env(), "MY_APP_COOKIE_STORE_SECRET");
        assert_eq!(request.db_path_env(), "MY_APP_DB_PATH");
        assert_eq!(request.to_string(), "my-app");
    }

    #[test]
    fn test_project_request_rejects_invalid_name() {
        let err = ProjectRequest::new("My_App").unwrap_err();
        assert!(matches!(err, NappError::InvalidProjectName(ref n) if n == "My_App"));

        assert!(ProjectRequest::new("").is_err());
    }

    #[test]
    fn test_project_request_is_valid() {
        let request = ProjectRequest::new("ok").unwrap();
        assert!(request.is_valid());
    }
}
