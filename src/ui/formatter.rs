//! Pure formatting functions for UI output.
//!
//! Everything is written to stderr: stdout is reserved for the prompt itself
//! when no output file is configured.

use console::style;

use crate::boundary::SkipReason;
use crate::config::PackageConfig;
use crate::domain::ReleaseSection;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().for_stderr(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    eprintln!("{} {}", style("✓").green().for_stderr(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow().for_stderr(), message);
}

/// Display why a package was skipped.
pub fn display_skip(reason: &SkipReason) {
    eprintln!("{} {}", style("-").dim().for_stderr(), reason);
}

/// Summary line for one extracted release, e.g. `react 4.87.0 (3 lines)`.
pub fn format_release_summary(release: &ReleaseSection) -> String {
    let lines = release.body.lines().count();
    let mut summary = format!(
        "{} {} ({} line{})",
        release.package,
        release.version,
        lines,
        if lines == 1 { "" } else { "s" }
    );
    if release.is_prerelease() {
        summary.push_str(" [pre-release]");
    }
    summary
}

/// Display the releases that made it into the prompt.
///
/// # Arguments
/// * `releases` - Extracted releases, in prompt order
pub fn display_releases(releases: &[ReleaseSection]) {
    eprintln!(
        "\n{}",
        style(format!("Found {} release(s) to document:", releases.len()))
            .bold()
            .for_stderr()
    );
    for release in releases {
        eprintln!("  - {}", format_release_summary(release));
    }
}

/// Line describing a configured package, e.g. `react (React): packages/react/CHANGELOG.md`.
pub fn format_package_line(package: &PackageConfig) -> String {
    match &package.flavor {
        Some(flavor) => format!(
            "{} ({}): {}",
            package.name,
            flavor,
            package.changelog.display()
        ),
        None => format!("{}: {}", package.name, package.changelog.display()),
    }
}

/// Display the packages configured for scanning.
pub fn display_configured_packages(packages: &[PackageConfig]) {
    eprintln!("{}", style("Configured packages:").bold().for_stderr());
    for package in packages {
        eprintln!("  - {}", format_package_line(package));
    }
}
