use git2::Repository;
use std::path::{Path, PathBuf};

use crate::error::{DocSyncError, Result};

/// Resolves the monorepo root that changelog paths are relative to.
///
/// An explicit root is used as-is. Otherwise the enclosing git repository is
/// discovered from the current directory or its parents.
///
/// # Returns
/// * `Ok(PathBuf)` - Repository root directory
/// * `Err` - If the explicit root is not a directory, or no work tree can be found
pub fn resolve_repo_root(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(root) if root.is_dir() => Ok(root.to_path_buf()),
        Some(root) => Err(DocSyncError::config(format!(
            "Repository root '{}' is not a directory",
            root.display()
        ))),
        None => discover_repo_root("."),
    }
}

/// Walks up from `start` to the work tree of the enclosing git repository.
pub fn discover_repo_root<P: AsRef<Path>>(start: P) -> Result<PathBuf> {
    let repo = Repository::discover(start.as_ref()).map_err(|e| {
        DocSyncError::repository(format!(
            "Not in a git repository ({}): {}",
            start.as_ref().display(),
            e.message()
        ))
    })?;

    let workdir = repo
        .workdir()
        .ok_or_else(|| DocSyncError::repository("Bare repository has no work tree"))?;

    Ok(workdir.to_path_buf())
}
