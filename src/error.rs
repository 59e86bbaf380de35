use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for docs-sync operations
#[derive(Error, Debug)]
pub enum DocSyncError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Failed to read changelog '{}': {source}", .path.display())]
    ChangelogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in docs-sync
pub type Result<T> = std::result::Result<T, DocSyncError>;

impl DocSyncError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        DocSyncError::Config(msg.into())
    }

    /// Create a repository error with context
    pub fn repository(msg: impl Into<String>) -> Self {
        DocSyncError::Repository(msg.into())
    }

    /// Wrap a read failure with the changelog path it came from
    pub fn changelog_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DocSyncError::ChangelogRead {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DocSyncError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: DocSyncError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_changelog_read_names_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = DocSyncError::changelog_read("packages/react/CHANGELOG.md", io_err);
        let msg = err.to_string();
        assert!(msg.starts_with("Failed to read changelog"));
        assert!(msg.contains("packages/react/CHANGELOG.md"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_changelog_read_keeps_source() {
        use std::error::Error;

        let io_err = std::io::Error::new(std::io::ErrorKind::InvalidData, "bad utf-8");
        let err = DocSyncError::changelog_read("CHANGELOG.md", io_err);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (DocSyncError::config("x"), "Configuration error"),
            (DocSyncError::repository("x"), "Repository error"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }

    #[test]
    fn test_error_empty_messages() {
        for err in [DocSyncError::config(""), DocSyncError::repository("")] {
            // Even with empty message, the error type prefix should be present
            assert!(!err.to_string().is_empty());
        }
    }
}
