use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{DocSyncError, Result};
use crate::store::ChangelogStore;

/// Filesystem-backed store rooted at the repository root
#[derive(Debug, Clone)]
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FsStore { root: root.into() }
    }

    /// Relative paths are joined onto the root; absolute paths are used as given
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

impl ChangelogStore for FsStore {
    fn read_changelog(&self, path: &Path) -> Result<Option<String>> {
        let full_path = self.resolve(path);

        match fs::read(&full_path) {
            Ok(bytes) => {
                debug!(path = %full_path.display(), bytes = bytes.len(), "read changelog");
                // Stray non-UTF-8 bytes are content, not a read failure
                Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %full_path.display(), "changelog not found");
                Ok(None)
            }
            Err(e) => Err(DocSyncError::changelog_read(full_path, e)),
        }
    }
}
