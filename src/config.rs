use crate::domain::{PreReleaseType, TagPattern};
use crate::error::{Result, VersionBumpError};
use crate::manifest::DEFAULT_VERSION;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const CONFIG_FILE_NAME: &str = "versionbump.toml";

/// Represents the complete configuration for version-bump.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub manifest: ManifestConfig,

    #[serde(default)]
    pub git: GitConfig,

    #[serde(default)]
    pub prerelease: PreReleaseConfig,
}

fn default_manifest_path() -> PathBuf {
    PathBuf::from("composer.json")
}

fn default_version() -> String {
    DEFAULT_VERSION.to_string()
}

/// Where the version lives.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ManifestConfig {
    #[serde(default = "default_manifest_path")]
    pub path: PathBuf,

    /// Used when the manifest has no version field
    #[serde(default = "default_version")]
    pub default_version: String,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        ManifestConfig {
            path: default_manifest_path(),
            default_version: default_version(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_tag_pattern() -> String {
    "v{version}".to_string()
}

fn default_commit_message() -> String {
    "chore(release): bump version to {version}".to_string()
}

/// Configuration for the commit, tag and push steps.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GitConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_remote")]
    pub remote: String,

    #[serde(default = "default_tag_pattern")]
    pub tag_pattern: String,

    #[serde(default = "default_commit_message")]
    pub commit_message: String,

    /// Create annotated tags (`git tag -a`)
    #[serde(default = "default_true")]
    pub annotate: bool,

    #[serde(default = "default_true")]
    pub push: bool,
}

impl Default for GitConfig {
    fn default() -> Self {
        GitConfig {
            enabled: true,
            remote: default_remote(),
            tag_pattern: default_tag_pattern(),
            commit_message: default_commit_message(),
            annotate: true,
            push: true,
        }
    }
}

impl GitConfig {
    pub fn tag_pattern(&self) -> Result<TagPattern> {
        TagPattern::new(self.tag_pattern.clone())
    }

    /// Commit and annotation message for `version`
    pub fn commit_message(&self, version: &str) -> String {
        self.commit_message.replace("{version}", version)
    }
}

/// Pre-release label used by the `pre*` bump types.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct PreReleaseConfig {
    /// alpha, beta or rc; unset keeps the current label
    #[serde(default)]
    pub label: Option<String>,
}

impl PreReleaseConfig {
    pub fn label(&self) -> Result<Option<PreReleaseType>> {
        self.label.as_deref().map(PreReleaseType::parse).transpose()
    }
}

impl Config {
    /// Check that templates and labels are usable before any file is touched
    pub fn validate(&self) -> Result<()> {
        self.git.tag_pattern()?;
        self.prerelease.label()?;
        if self.git.remote.trim().is_empty() {
            return Err(VersionBumpError::config("git.remote must not be empty"));
        }
        Ok(())
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `versionbump.toml` in current directory
/// 3. `.versionbump.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read, parsed or validated
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let path = match config_path {
        Some(path) => Some(PathBuf::from(path)),
        None => discover_config_file(),
    };

    let config = match path {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            let contents = fs::read_to_string(&path).map_err(|e| {
                VersionBumpError::config(format!("Cannot read {}: {}", path.display(), e))
            })?;
            toml::from_str::<Config>(&contents)?
        }
        None => Config::default(),
    };

    config.validate()?;
    Ok(config)
}

fn discover_config_file() -> Option<PathBuf> {
    let local = Path::new(".").join(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }
    dirs::config_dir()
        .map(|dir| dir.join(format!(".{}", CONFIG_FILE_NAME)))
        .filter(|path| path.exists())
}
