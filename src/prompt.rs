//! Prompt assembly for the documentation agent.
//!
//! The agent gets the package list, each package's newest changelog section
//! verbatim, and a fixed set of instructions. Interpreting the changelog is
//! left entirely to the agent.

use crate::domain::ReleaseSection;

/// Prompt template handed to the documentation agent.
pub const DOCS_UPDATE_PROMPT: &str = r####"# Documentation Update

New releases were published for the packages below. Update the documentation so it
matches the behavior described in each changelog.

## Packages

{package_list}

## Changelogs

{changelogs}

## Instructions

1. Locate the documentation for each package listed above. Each flavor has its own
   documentation variant; keep the variants consistent with each other where the
   change applies to more than one package.
2. For every new feature, option, or behavior change, update or add documentation
   and usage examples.
3. For deprecations and removals, mark or remove the affected documentation.
4. Follow the existing structure, tone, and formatting of the documentation.
5. Do not document anything that is not described in the changelogs above.
6. Leave the documentation untouched for purely internal changes such as dependency
   bumps, refactors, or test-only fixes.
"####;

/// A release together with the documentation flavor it belongs to
#[derive(Debug, Clone, PartialEq)]
pub struct PromptEntry {
    pub release: ReleaseSection,
    pub flavor: Option<String>,
}

impl PromptEntry {
    pub fn new(release: ReleaseSection, flavor: Option<String>) -> Self {
        PromptEntry { release, flavor }
    }
}

/// Builds the agent prompt. Entries appear in the order given.
pub fn build_prompt(entries: &[PromptEntry]) -> String {
    let package_list = entries
        .iter()
        .map(format_package_line)
        .collect::<Vec<_>>()
        .join("\n");

    let changelogs = entries
        .iter()
        .map(format_changelog_block)
        .collect::<Vec<_>>()
        .join("\n\n");

    // Changelogs go in last: their text must never be scanned for placeholders
    DOCS_UPDATE_PROMPT
        .replace("{package_list}", &package_list)
        .replace("{changelogs}", &changelogs)
}

fn format_package_line(entry: &PromptEntry) -> String {
    let release = &entry.release;
    let mut line = match &entry.flavor {
        Some(flavor) => format!("- {} ({}): {}", release.package, flavor, release.version),
        None => format!("- {}: {}", release.package, release.version),
    };
    if release.is_prerelease() {
        line.push_str(" [pre-release]");
    }
    line
}

fn format_changelog_block(entry: &PromptEntry) -> String {
    let release = &entry.release;
    let fence = fence_for(&release.body);
    format!(
        "### {} {}\n\n{}markdown\n{}\n{}",
        release.package, release.version, fence, release.body, fence
    )
}

/// A backtick fence longer than any backtick run inside `body`.
fn fence_for(body: &str) -> String {
    let mut longest = 0;
    let mut current = 0;
    for c in body.chars() {
        if c == '`' {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    "`".repeat((longest + 1).max(3))
}
