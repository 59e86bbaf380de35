//! Domain logic - pure release extraction, independent of storage and output

pub mod package;
pub mod release;

pub use package::PackageInfo;
pub use release::{
    all_version_headings, extract_latest_release, latest_section, LatestSection, ReleaseSection,
    VersionHeading,
};
