use crate::error::{DocSyncError, Result};
use crate::store::ChangelogStore;
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};

/// Mock store for testing without touching the filesystem
pub struct MockStore {
    changelogs: HashMap<PathBuf, String>,
    unreadable: HashSet<PathBuf>,
}

impl MockStore {
    /// Create a new empty mock store
    pub fn new() -> Self {
        MockStore {
            changelogs: HashMap::new(),
            unreadable: HashSet::new(),
        }
    }

    /// Add changelog content at a path
    pub fn add_changelog(&mut self, path: impl Into<PathBuf>, text: impl Into<String>) {
        self.changelogs.insert(path.into(), text.into());
    }

    /// Make reads of a path fail as if permission were denied
    pub fn add_unreadable(&mut self, path: impl Into<PathBuf>) {
        self.unreadable.insert(path.into());
    }
}

impl Default for MockStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangelogStore for MockStore {
    fn read_changelog(&self, path: &Path) -> Result<Option<String>> {
        if self.unreadable.contains(path) {
            return Err(DocSyncError::changelog_read(
                path,
                io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
            ));
        }
        Ok(self.changelogs.get(path).cloned())
    }
}
