//! Core traits for napp

use crate::error::NappResult;

// ============================================================================
// Validatable Trait
// ============================================================================

/// Trait for types that can be validated
///
/// Types implementing this trait can check their internal consistency
/// and return validation errors if the state is invalid.
///
/// # Example
///
/// ```rust,ignore
/// use napp_core::{NappError, NappResult, Validatable};
///
/// struct Slug(String);
///
/// impl Validatable for Slug {
///     fn validate(&self) -> NappResult<()> {
///         if self.0.is_empty() {
///             return Err(NappError::InvalidProjectName(self.0.clone()));
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Validatable {
    /// Validate the current state of the object
    ///
    /// Returns `Ok(())` if valid, or a `NappError` describing the problem.
    fn validate(&self) -> NappResult<()>;

    /// Check if the object is valid without returning error details
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}
