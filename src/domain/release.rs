use regex::Regex;
use std::sync::OnceLock;

/// Matches a markdown heading that opens a release: `## [1.2.3]`, `## 1.2.3`, `### [2.0.0-rc.1]`.
const VERSION_HEADING_PATTERN: &str =
    r"(?m)^#{1,6}[ \t]+\[?([0-9]+\.[0-9]+\.[0-9]+(?:-[0-9A-Za-z.]+)?)\]?";

fn version_heading_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(VERSION_HEADING_PATTERN).ok()).as_ref()
}

/// A version heading found in a changelog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionHeading {
    /// Byte offset of the start of the heading line
    pub offset: usize,
    pub version: String,
}

/// The newest release section of one package's changelog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseSection {
    pub package: String,
    pub version: String,
    /// Heading line plus everything up to the next heading, trimmed
    pub body: String,
}

impl ReleaseSection {
    /// Strict semver interpretation of the version, if it has one
    pub fn semver(&self) -> Option<semver::Version> {
        semver::Version::parse(&self.version).ok()
    }

    pub fn is_prerelease(&self) -> bool {
        match self.semver() {
            Some(v) => !v.pre.is_empty(),
            None => self.version.contains('-'),
        }
    }
}

/// The newest section of a changelog, before any triviality filtering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatestSection<'a> {
    pub version: String,
    /// Heading line plus everything up to the next heading, trimmed
    pub body: &'a str,
}

impl LatestSection<'_> {
    /// Length in characters, as compared against the content threshold
    pub fn length(&self) -> usize {
        self.body.chars().count()
    }
}

fn version_headings(text: &str) -> impl Iterator<Item = VersionHeading> + '_ {
    version_heading_regex()
        .into_iter()
        .flat_map(move |re| re.captures_iter(text))
        .filter_map(|captures| {
            let whole = captures.get(0)?;
            let version = captures.get(1)?;
            Some(VersionHeading {
                offset: whole.start(),
                version: version.as_str().to_string(),
            })
        })
}

/// Lists every version heading in order of appearance.
pub fn all_version_headings(text: &str) -> Vec<VersionHeading> {
    version_headings(text).collect()
}

/// Slices out the first version heading's section, up to the second heading or
/// the end of the text. `None` when the text has no version heading.
pub fn latest_section(text: &str) -> Option<LatestSection<'_>> {
    let mut headings = version_headings(text);

    let first = headings.next()?;
    let end = headings.next().map(|next| next.offset).unwrap_or(text.len());

    Some(LatestSection {
        version: first.version,
        body: text[first.offset..end].trim(),
    })
}

/// Extracts the first (newest) release section of a changelog.
///
/// Returns `None` when there is no heading at all, and also when the trimmed
/// section is shorter than `min_content_length` characters: a heading with no
/// real notes under it is nothing worth documenting.
///
/// # Example
/// ```
/// use docs_sync::domain::extract_latest_release;
///
/// let text = "## [2.1.0]\n- Added the `compact` option to tables\n## [2.0.0]\n- Initial\n";
/// let section = extract_latest_release(text, "react", 30).unwrap();
/// assert_eq!(section.version, "2.1.0");
/// assert!(!section.body.contains("2.0.0"));
/// ```
pub fn extract_latest_release(
    text: &str,
    package: &str,
    min_content_length: usize,
) -> Option<ReleaseSection> {
    let section = latest_section(text)?;
    if section.length() < min_content_length {
        return None;
    }

    Some(ReleaseSection {
        package: package.to_string(),
        version: section.version,
        body: section.body.to_string(),
    })
}
