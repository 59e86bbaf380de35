//! Main workflow orchestration logic
//!
//! Scans every configured changelog, keeps the newest substantive release of
//! each, and writes the agent prompt and packages-info sidecar. Argument
//! parsing lives in main.rs; this module can be driven programmatically.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::boundary::SkipReason;
use crate::config::{Config, PackageConfig};
use crate::domain::{
    all_version_headings, extract_latest_release, latest_section, PackageInfo, ReleaseSection,
};
use crate::error::Result;
use crate::output;
use crate::prompt::{build_prompt, PromptEntry};
use crate::store::ChangelogStore;

/// Arguments for the generate workflow
///
/// Each field overrides the matching configuration value when set.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GenerateWorkflowArgs {
    /// Prompt file; stdout when neither this nor the config sets one
    pub output: Option<PathBuf>,

    /// Packages-info sidecar file
    pub packages_info: Option<PathBuf>,

    /// Triviality threshold override
    pub min_content_length: Option<usize>,
}

/// Releases found across all packages, plus the packages that were skipped
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Collected {
    pub entries: Vec<PromptEntry>,
    pub skipped: Vec<SkipReason>,
}

/// Result of a generate workflow run
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// Releases that went into the prompt, in configuration order
    pub releases: Vec<ReleaseSection>,

    pub skipped: Vec<SkipReason>,

    /// Generated prompt; `None` when there was nothing to do
    pub prompt: Option<String>,

    /// Prompt file written, if the prompt did not go to stdout
    pub prompt_path: Option<PathBuf>,

    /// Sidecar file written, if any
    pub packages_info_path: Option<PathBuf>,
}

impl WorkflowResult {
    pub fn nothing_to_do(&self) -> bool {
        self.releases.is_empty()
    }
}

/// Reads and extracts the newest release of each package, in order.
///
/// Missing changelogs, changelogs without a version heading, and trivial
/// releases are recorded as skips. A changelog that exists but cannot be read
/// aborts the scan.
pub fn collect_releases<S: ChangelogStore + ?Sized>(
    packages: &[PackageConfig],
    store: &S,
    min_content_length: usize,
) -> Result<Collected> {
    let mut collected = Collected::default();

    for package in packages {
        let Some(text) = store.read_changelog(&package.changelog)? else {
            collected.skipped.push(SkipReason::MissingChangelog {
                package: package.name.clone(),
                path: package.changelog.clone(),
            });
            continue;
        };

        match extract_latest_release(&text, &package.name, min_content_length) {
            Some(release) => {
                debug!(package = %package.name, version = %release.version, "extracted release");
                collected
                    .entries
                    .push(PromptEntry::new(release, package.flavor.clone()));
            }
            None => collected.skipped.push(classify_skip(package, &text, min_content_length)),
        }
    }

    Ok(collected)
}

/// Tells a changelog with no heading apart from one whose newest release is trivial.
fn classify_skip(package: &PackageConfig, text: &str, min_content_length: usize) -> SkipReason {
    debug!(
        package = %package.name,
        headings = all_version_headings(text).len(),
        "no usable release"
    );

    match latest_section(text) {
        None => SkipReason::NoRelease {
            package: package.name.clone(),
        },
        Some(section) => SkipReason::TrivialRelease {
            package: package.name.clone(),
            length: section.length(),
            version: section.version,
            min_length: min_content_length,
        },
    }
}

/// Main generate workflow
///
/// 1. Collect the newest release of every configured package
/// 2. Stop with nothing written if no package has one
/// 3. Build the prompt and write it to a file or stdout
/// 4. Write the packages-info sidecar if a path is configured
pub fn run_generate_workflow<S: ChangelogStore + ?Sized>(
    args: &GenerateWorkflowArgs,
    config: &Config,
    store: &S,
) -> Result<WorkflowResult> {
    let min_content_length = args
        .min_content_length
        .unwrap_or(config.extraction.min_content_length);
    let prompt_path = args.output.clone().or_else(|| config.output.prompt.clone());
    let packages_info_path = args
        .packages_info
        .clone()
        .or_else(|| config.output.packages_info.clone());

    let Collected { entries, skipped } =
        collect_releases(&config.packages, store, min_content_length)?;
    let releases: Vec<ReleaseSection> = entries.iter().map(|e| e.release.clone()).collect();

    if entries.is_empty() {
        info!(skipped = skipped.len(), "no releases to document");
        return Ok(WorkflowResult {
            releases,
            skipped,
            prompt: None,
            prompt_path: None,
            packages_info_path: None,
        });
    }

    let prompt = build_prompt(&entries);
    output::write_prompt(&prompt, prompt_path.as_deref())?;

    if let Some(path) = &packages_info_path {
        let infos: Vec<PackageInfo> = releases.iter().map(PackageInfo::from).collect();
        output::write_packages_info(&infos, path)?;
        debug!(path = %path.display(), "wrote packages info");
    }

    info!(releases = releases.len(), "generated documentation prompt");

    Ok(WorkflowResult {
        releases,
        skipped,
        prompt: Some(prompt),
        prompt_path,
        packages_info_path,
    })
}
