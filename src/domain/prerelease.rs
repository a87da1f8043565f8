//! Pre-release identifiers for semantic versions
//!
//! A pre-release suffix is a label (alpha, beta, rc) with an optional
//! counter, rendered as `-beta` or `-beta.3`.

use crate::error::{Result, VersionBumpError};
use std::fmt;
use std::str::FromStr;

/// Pre-release label
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PreReleaseType {
    /// Alpha pre-release
    Alpha,
    /// Beta pre-release
    #[default]
    Beta,
    /// Release candidate
    ReleaseCandidate,
}

impl PreReleaseType {
    /// Parse a label supplied by the user
    ///
    /// Accepts: "alpha", "a", "beta", "b", "rc" (case-insensitive)
    pub fn parse(s: &str) -> Result<Self> {
        s.parse()
    }

    /// Canonical spelling used in version strings
    pub fn as_str(&self) -> &'static str {
        match self {
            PreReleaseType::Alpha => "alpha",
            PreReleaseType::Beta => "beta",
            PreReleaseType::ReleaseCandidate => "rc",
        }
    }
}

impl FromStr for PreReleaseType {
    type Err = VersionBumpError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "alpha" | "a" => Ok(PreReleaseType::Alpha),
            "beta" | "b" => Ok(PreReleaseType::Beta),
            "rc" => Ok(PreReleaseType::ReleaseCandidate),
            _ => Err(VersionBumpError::config(format!(
                "Invalid pre-release identifier: '{}' (expected alpha, beta or rc)",
                s
            ))),
        }
    }
}

impl fmt::Display for PreReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pre-release suffix with optional iteration number
///
/// # Examples
/// - "alpha" -> PreRelease { identifier: Alpha, iteration: None }
/// - "beta.1" -> PreRelease { identifier: Beta, iteration: Some(1) }
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreRelease {
    pub identifier: PreReleaseType,
    pub iteration: Option<u64>,
}

impl PreRelease {
    pub fn new(identifier: PreReleaseType, iteration: Option<u64>) -> Self {
        PreRelease {
            identifier,
            iteration,
        }
    }

    /// Start a fresh pre-release cycle: `<label>.0`
    pub fn start(identifier: PreReleaseType) -> Self {
        PreRelease::new(identifier, Some(0))
    }

    /// Increment the iteration number
    ///
    /// A missing iteration counts as 0, so `beta` becomes `beta.1`.
    /// Returns `None` if the counter would overflow.
    pub fn increment_iteration(&self) -> Option<Self> {
        let next = self.iteration.unwrap_or(0).checked_add(1)?;
        Some(PreRelease {
            identifier: self.identifier,
            iteration: Some(next),
        })
    }
}

impl fmt::Display for PreRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier)?;
        if let Some(iter) = self.iteration {
            write!(f, ".{}", iter)?;
        }
        Ok(())
    }
}
