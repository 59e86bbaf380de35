//! User interface module.
//!
//! docs-sync is non-interactive, so this is formatting only; see [formatter].

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_configured_packages, display_error, display_releases, display_skip, display_status,
    display_success, format_package_line, format_release_summary,
};
