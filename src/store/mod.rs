//! Changelog storage abstraction layer
//!
//! The [ChangelogStore] trait separates "where changelog text comes from" from
//! the workflow that consumes it. Two implementations exist:
//!
//! - [fs::FsStore]: reads files relative to the repository root
//! - [mock::MockStore]: in-memory changelogs for testing
//!
//! A missing changelog is not an error: the package simply has nothing to
//! contribute this cycle. Any other read failure is.
//!
//! ```rust
//! # use docs_sync::store::{ChangelogStore, MockStore};
//! # use std::path::Path;
//! let mut store = MockStore::new();
//! store.add_changelog("packages/js/CHANGELOG.md", "## 1.0.0\n- Initial release");
//! assert!(store.read_changelog(Path::new("packages/js/CHANGELOG.md")).unwrap().is_some());
//! assert!(store.read_changelog(Path::new("packages/vue/CHANGELOG.md")).unwrap().is_none());
//! ```

pub mod fs;
pub mod mock;

pub use fs::FsStore;
pub use mock::MockStore;

use crate::error::Result;
use std::path::Path;

/// Read-only access to package changelogs
///
/// ## Error Handling
///
/// * `Ok(Some(text))` - changelog content
/// * `Ok(None)` - changelog does not exist
/// * `Err` - changelog exists but could not be read; implementations should
///   report this as [crate::error::DocSyncError::ChangelogRead]
pub trait ChangelogStore: Send + Sync {
    fn read_changelog(&self, path: &Path) -> Result<Option<String>>;
}
