use std::fmt;
use std::path::PathBuf;

/// Reasons a package contributes nothing to the prompt.
/// These are non-fatal and only shown to the user in verbose mode.
#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    /// The configured changelog file does not exist
    MissingChangelog { package: String, path: PathBuf },
    /// The changelog has no version heading
    NoRelease { package: String },
    /// The newest release section is too short to be a real change
    TrivialRelease {
        package: String,
        version: String,
        length: usize,
        min_length: usize,
    },
}

impl SkipReason {
    pub fn package(&self) -> &str {
        match self {
            SkipReason::MissingChangelog { package, .. }
            | SkipReason::NoRelease { package }
            | SkipReason::TrivialRelease { package, .. } => package,
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingChangelog { package, path } => {
                write!(
                    f,
                    "Skipping '{}': changelog '{}' not found",
                    package,
                    path.display()
                )
            }
            SkipReason::NoRelease { package } => {
                write!(f, "Skipping '{}': no release heading found", package)
            }
            SkipReason::TrivialRelease {
                package,
                version,
                length,
                min_length,
            } => {
                write!(
                    f,
                    "Skipping '{}': release {} has no real content ({} < {} characters)",
                    package, version, length, min_length
                )
            }
        }
    }
}
