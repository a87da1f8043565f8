use crate::error::{Result, VersionBumpError};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

/// Literal versions accepted verbatim: optional `v` and one to four numeric groups.
static LITERAL_VERSION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^v?\d+(?:\.\d+){0,3}$").expect("literal version pattern is a valid regex")
});

/// Development branch markers accepted verbatim, e.g. `dev-main`.
static DEV_BRANCH_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^dev-.+$").expect("dev branch pattern is a valid regex"));

/// Which part of the version to increment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BumpType {
    Patch,
    Minor,
    Major,
    Prepatch,
    Preminor,
    Premajor,
    Prerelease,
}

impl BumpType {
    pub const ALL: [BumpType; 7] = [
        BumpType::Patch,
        BumpType::Minor,
        BumpType::Major,
        BumpType::Prepatch,
        BumpType::Preminor,
        BumpType::Premajor,
        BumpType::Prerelease,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BumpType::Patch => "patch",
            BumpType::Minor => "minor",
            BumpType::Major => "major",
            BumpType::Prepatch => "prepatch",
            BumpType::Preminor => "preminor",
            BumpType::Premajor => "premajor",
            BumpType::Prerelease => "prerelease",
        }
    }

    /// Comma separated list of all keywords, for help and error output
    pub fn keywords() -> String {
        BumpType::ALL
            .iter()
            .map(BumpType::name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for BumpType {
    type Err = VersionBumpError;

    fn from_str(s: &str) -> Result<Self> {
        BumpType::ALL
            .into_iter()
            .find(|bump| bump.name() == s)
            .ok_or_else(|| VersionBumpError::unknown_bump(s))
    }
}

impl fmt::Display for BumpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A requested bump: a keyword, or a literal version taken as-is
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BumpRequest {
    Keyword(BumpType),
    Literal(String),
}

impl BumpRequest {
    /// Whether `input` may be used verbatim as the new version
    pub fn is_literal(input: &str) -> bool {
        LITERAL_VERSION_PATTERN.is_match(input) || DEV_BRANCH_PATTERN.is_match(input)
    }
}

impl FromStr for BumpRequest {
    type Err = VersionBumpError;

    fn from_str(s: &str) -> Result<Self> {
        if let Ok(keyword) = s.parse::<BumpType>() {
            return Ok(BumpRequest::Keyword(keyword));
        }
        if BumpRequest::is_literal(s) {
            return Ok(BumpRequest::Literal(s.to_string()));
        }
        Err(VersionBumpError::unknown_bump(s))
    }
}

impl fmt::Display for BumpRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BumpRequest::Keyword(bump) => write!(f, "{}", bump),
            BumpRequest::Literal(version) => f.write_str(version),
        }
    }
}
