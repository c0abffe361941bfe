//! Argument validation for `napp init`

use napp_core::{NappError, NappResult, ProjectRequest};

/// Turn the positional arguments of `init` into a [`ProjectRequest`].
///
/// Exactly one argument is accepted and it must be a valid project name.
pub fn project_request_from_args(args: &[String]) -> NappResult<ProjectRequest> {
    match args {
        [] => Err(NappError::NoArguments),
        [name] => ProjectRequest::new(name.as_str()),
        more => Err(NappError::TooManyArguments(more.len())),
    }
}
