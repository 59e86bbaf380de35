use serde::{Deserialize, Serialize};

use super::ReleaseSection;

/// One entry of the packages-info sidecar handed to downstream orchestration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageInfo {
    pub name: String,
    pub version: String,
}

impl From<&ReleaseSection> for PackageInfo {
    fn from(section: &ReleaseSection) -> Self {
        PackageInfo {
            name: section.package.clone(),
            version: section.version.clone(),
        }
    }
}
