use crate::domain::bump::BumpType;
use crate::domain::prerelease::{PreRelease, PreReleaseType};
use crate::error::{Result, VersionBumpError};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static VERSION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+)\.(\d+)\.(\d+)(?:-(alpha|beta|rc)(?:\.(\d+))?)?$")
        .expect("version pattern is a valid regex")
});

/// Semantic version representation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub pre_release: Option<PreRelease>,
}

impl Version {
    /// Create a new release version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            pre_release: None,
        }
    }

    /// Attach a pre-release suffix
    pub fn with_pre_release(mut self, pre_release: PreRelease) -> Self {
        self.pre_release = Some(pre_release);
        self
    }

    /// Parse `MAJOR.MINOR.PATCH[-LABEL[.NUMBER]]` where LABEL is alpha, beta or rc
    pub fn parse(input: &str) -> Result<Self> {
        let caps = VERSION_PATTERN
            .captures(input)
            .ok_or_else(|| VersionBumpError::malformed(input))?;

        let number = |idx: usize| -> Result<u64> {
            caps[idx]
                .parse::<u64>()
                .map_err(|_| VersionBumpError::malformed(input))
        };

        let major = number(1)?;
        let minor = number(2)?;
        let patch = number(3)?;

        let pre_release = match caps.get(4) {
            Some(label) => {
                let identifier = PreReleaseType::parse(label.as_str())
                    .map_err(|_| VersionBumpError::malformed(input))?;
                let iteration = match caps.get(5) {
                    Some(_) => Some(number(5)?),
                    None => None,
                };
                Some(PreRelease::new(identifier, iteration))
            }
            None => None,
        };

        Ok(Version {
            major,
            minor,
            patch,
            pre_release,
        })
    }

    /// Apply a bump keyword.
    ///
    /// `label` overrides the pre-release label; otherwise the existing label is
    /// kept, falling back to beta. Switching the label of a pre-release restarts
    /// its counter at 0. Returns `None` when a component would overflow.
    pub fn bump(&self, bump_type: BumpType, label: Option<PreReleaseType>) -> Option<Self> {
        let label = label
            .or_else(|| self.pre_release.map(|pr| pr.identifier))
            .unwrap_or_default();

        let bumped = match bump_type {
            BumpType::Patch => Version::new(self.major, self.minor, self.patch.checked_add(1)?),
            BumpType::Minor => Version::new(self.major, self.minor.checked_add(1)?, 0),
            BumpType::Major => Version::new(self.major.checked_add(1)?, 0, 0),
            BumpType::Prepatch => Version::new(self.major, self.minor, self.patch.checked_add(1)?)
                .with_pre_release(PreRelease::start(label)),
            BumpType::Preminor => Version::new(self.major, self.minor.checked_add(1)?, 0)
                .with_pre_release(PreRelease::start(label)),
            BumpType::Premajor => Version::new(self.major.checked_add(1)?, 0, 0)
                .with_pre_release(PreRelease::start(label)),
            BumpType::Prerelease => {
                let next = match self.pre_release {
                    Some(current) if current.identifier != label => PreRelease::start(label),
                    current => PreRelease::new(label, current.and_then(|pr| pr.iteration))
                        .increment_iteration()?,
                };
                Version::new(self.major, self.minor, self.patch).with_pre_release(next)
            }
        };

        Some(bumped)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre_release) = &self.pre_release {
            write!(f, "-{}", pre_release)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_parse() {
        let v = Version::parse("1.2.3").unwrap();
        assert_eq!(v, Version::new(1, 2, 3));
        assert_eq!(v.pre_release, None);
    }

    #[test]
    fn test_version_parse_pre_release_with_number() {
        let v = Version::parse("1.0.1-beta.4").unwrap();
        assert_eq!(
            v,
            Version::new(1, 0, 1).with_pre_release(PreRelease::new(PreReleaseType::Beta, Some(4)))
        );
    }

    #[test]
    fn test_version_parse_pre_release_without_number() {
        let v = Version::parse("2.0.0-rc").unwrap();
        let pr = v.pre_release.unwrap();
        assert_eq!(pr.identifier, PreReleaseType::ReleaseCandidate);
        assert_eq!(pr.iteration, None);
    }

    #[test]
    fn test_version_parse_leading_zeros_accepted() {
        let v = Version::parse("01.002.0003").unwrap();
        assert_eq!(v.to_string(), "1.2.3");
    }

    #[test]
    fn test_version_parse_invalid() {
        for input in [
            "",
            "abc",
            "1.2",
            "1.2.3.4",
            "v1.2.3",
            " 1.2.3",
            "1.2.3-",
            "1.2.3-dev",
            "1.2.3-beta.",
            "1.2.3-beta.x",
            "1.2.3-BETA.1",
            "1.2.3+build",
            "99999999999999999999.0.0",
        ] {
            let err = Version::parse(input).unwrap_err();
            assert!(
                matches!(err, VersionBumpError::MalformedVersion(ref s) if s == input),
                "expected malformed error for {:?}, got {:?}",
                input,
                err
            );
        }
    }

    #[test]
    fn test_version_bump_release_drops_suffix() {
        let v = Version::parse("1.2.3-alpha.2").unwrap();
        assert_eq!(v.bump(BumpType::Patch, None).unwrap().to_string(), "1.2.4");
        assert_eq!(v.bump(BumpType::Minor, None).unwrap().to_string(), "1.3.0");
        assert_eq!(v.bump(BumpType::Major, None).unwrap().to_string(), "2.0.0");
    }

    #[test]
    fn test_version_bump_pre_keeps_existing_label() {
        let v = Version::parse("1.2.3-rc.5").unwrap();
        assert_eq!(
            v.bump(BumpType::Prepatch, None).unwrap().to_string(),
            "1.2.4-rc.0"
        );
    }

    #[test]
    fn test_version_bump_label_override() {
        let v = Version::parse("1.2.3-rc.5").unwrap();
        assert_eq!(
            v.bump(BumpType::Preminor, Some(PreReleaseType::Alpha))
                .unwrap()
                .to_string(),
            "1.3.0-alpha.0"
        );
    }

    #[test]
    fn test_version_bump_overflow() {
        let v = Version::new(u64::MAX, 0, 0);
        assert!(v.bump(BumpType::Major, None).is_none());
        assert!(v.bump(BumpType::Minor, None).is_some());
    }

    #[test]
    fn test_version_display() {
        let v = Version::new(1, 2, 3).with_pre_release(PreRelease::start(PreReleaseType::Beta));
        assert_eq!(v.to_string(), "1.2.3-beta.0");
    }
}
