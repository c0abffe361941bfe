//! # napp Core
//!
//! Core types, traits, and error handling for napp.
//!
//! - **Types**: [`ProjectRequest`] and the derived forms of a project name
//! - **Traits**: [`Validatable`]
//! - **Errors**: unified error handling with [`NappError`] and [`NappResult`]
//!

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use error::{NappError, NappResult};
pub use traits::Validatable;
pub use types::{
    PROJECT_NAME_PATTERN, ProjectRequest, is_valid_project_name, to_title_case,
    to_upper_snake_case,
};
