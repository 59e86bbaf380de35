use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DocSyncError, Result};

/// Default minimum length of a release section before it counts as a real change.
pub const DEFAULT_MIN_CONTENT_LENGTH: usize = 30;

/// Represents the complete configuration for docs-sync.
///
/// Contains the monitored packages, extraction tuning, and output locations.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_packages")]
    pub packages: Vec<PackageConfig>,

    #[serde(default)]
    pub extraction: ExtractionConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// A package whose changelog is scanned for new releases.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PackageConfig {
    pub name: String,

    /// Changelog path, relative to the repository root
    pub changelog: PathBuf,

    /// Documentation variant this package corresponds to
    #[serde(default)]
    pub flavor: Option<String>,
}

impl PackageConfig {
    pub fn new(name: impl Into<String>, changelog: impl Into<PathBuf>) -> Self {
        PackageConfig {
            name: name.into(),
            changelog: changelog.into(),
            flavor: None,
        }
    }

    pub fn with_flavor(mut self, flavor: impl Into<String>) -> Self {
        self.flavor = Some(flavor.into());
        self
    }
}

/// Returns the default set of monitored packages.
fn default_packages() -> Vec<PackageConfig> {
    vec![
        PackageConfig::new("js", "packages/js/CHANGELOG.md").with_flavor("JavaScript"),
        PackageConfig::new("react", "packages/react/CHANGELOG.md").with_flavor("React"),
        PackageConfig::new("vue", "packages/vue/CHANGELOG.md").with_flavor("Vue"),
    ]
}

fn default_min_content_length() -> usize {
    DEFAULT_MIN_CONTENT_LENGTH
}

/// Configuration for latest-release extraction.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ExtractionConfig {
    /// Sections shorter than this (after trimming) are treated as bare version bumps
    #[serde(default = "default_min_content_length")]
    pub min_content_length: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        ExtractionConfig {
            min_content_length: default_min_content_length(),
        }
    }
}

/// Where generated artifacts go.
///
/// A missing `prompt` means stdout; a missing `packages_info` means the sidecar is not written.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub prompt: Option<PathBuf>,

    #[serde(default)]
    pub packages_info: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            packages: default_packages(),
            extraction: ExtractionConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `docsync.toml` in current directory
/// 3. `.docsync.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        read_config_file(Path::new(path))?
    } else if Path::new("./docsync.toml").exists() {
        read_config_file(Path::new("./docsync.toml"))?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".docsync.toml");
        if config_path.exists() {
            read_config_file(&config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}

/// Parses and validates configuration text.
pub fn parse_config(config_str: &str) -> Result<Config> {
    let config: Config =
        toml::from_str(config_str).map_err(|e| DocSyncError::config(e.to_string()))?;
    config.validate()?;
    Ok(config)
}

fn read_config_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        DocSyncError::config(format!("Cannot read '{}': {}", path.display(), e))
    })
}

impl Config {
    /// Rejects package lists that would make the prompt or sidecar ambiguous.
    pub fn validate(&self) -> Result<()> {
        let mut seen = std::collections::HashSet::new();
        for package in &self.packages {
            if package.name.trim().is_empty() {
                return Err(DocSyncError::config("Package name must not be empty"));
            }
            if !seen.insert(package.name.as_str()) {
                return Err(DocSyncError::config(format!(
                    "Package '{}' is configured more than once",
                    package.name
                )));
            }
        }
        Ok(())
    }
}
