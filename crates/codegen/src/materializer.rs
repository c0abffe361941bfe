//! # Project Materializer
//!
//! Writes a [`GeneratedProject`] to disk under a root directory that must not
//! exist yet.
//!
//! 1. Create the root. An existing root is [`NappError::DirectoryExists`] and
//!    nothing on disk is touched.
//! 2. Create the project's subdirectories.
//! 3. Write every file in order.
//!
//! The first failure after step 1 aborts the run and removes the root created
//! in step 1, so a failed run never leaves a half-populated project behind.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use napp_core::{NappError, NappResult};

use crate::GeneratedProject;

/// Write `project` under `root`.
///
/// # Errors
///
/// - [`NappError::DirectoryExists`] if `root` already exists
/// - [`NappError::DirectoryCreate`] if `root` or a subdirectory cannot be created
/// - [`NappError::FileWrite`] if any file cannot be written
pub fn write_project(project: &GeneratedProject, root: &Path) -> NappResult<()> {
    create_root(root)?;

    if let Err(err) = populate(project, root) {
        remove_root(root);
        return Err(err);
    }

    tracing::debug!(root = %root.display(), files = project.file_count(), "project written");
    Ok(())
}

fn create_root(root: &Path) -> NappResult<()> {
    match fs::create_dir(root) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            Err(NappError::DirectoryExists(root.to_path_buf()))
        }
        Err(e) => Err(NappError::directory_create(root, &e)),
    }
}

fn populate(project: &GeneratedProject, root: &Path) -> NappResult<()> {
    for dir in &project.directories {
        let path = root.join(dir);
        fs::create_dir(&path).map_err(|e| NappError::directory_create(&path, &e))?;
        tracing::debug!(dir = %path.display(), "created directory");
    }

    for file in &project.files {
        let full_path = root.join(&file.path);

        // Files outside the declared subdirectories still get their parents
        if let Some(parent) = full_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)
                    .map_err(|e| NappError::directory_create(parent, &e))?;
            }
        }

        fs::write(&full_path, &file.content)
            .map_err(|e| NappError::file_write(&full_path, &e))?;
        tracing::debug!(
            path = %full_path.display(),
            bytes = file.content.len(),
            "wrote file",
        );
    }

    Ok(())
}

fn remove_root(root: &Path) {
    match fs::remove_dir_all(root) {
        Ok(()) => tracing::warn!(root = %root.display(), "removed partially written project"),
        Err(e) => tracing::warn!(
            root = %root.display(),
            error = %e,
            "could not remove partially written project",
        ),
    }
}

// ============================================================================
// Tests
// ============================================================================
