use thiserror::Error;

/// Unified error type for version-bump operations
#[derive(Error, Debug)]
pub enum VersionBumpError {
    #[error("Malformed version: '{0}'")]
    MalformedVersion(String),

    #[error("Unknown bump type: '{0}'")]
    UnknownBumpType(String),

    #[error("{0}")]
    Usage(String),

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Command failed: {0}")]
    Command(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Convenience type alias for Results in version-bump
pub type Result<T> = std::result::Result<T, VersionBumpError>;

impl VersionBumpError {
    /// Create a malformed version error naming the offending input
    pub fn malformed(input: impl Into<String>) -> Self {
        VersionBumpError::MalformedVersion(input.into())
    }

    /// Create an unknown bump type error naming the offending input
    pub fn unknown_bump(input: impl Into<String>) -> Self {
        VersionBumpError::UnknownBumpType(input.into())
    }

    /// Create an error for invalid command-line usage
    pub fn usage(msg: impl Into<String>) -> Self {
        VersionBumpError::Usage(msg.into())
    }

    /// Create a manifest error with context
    pub fn manifest(msg: impl Into<String>) -> Self {
        VersionBumpError::Manifest(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        VersionBumpError::Config(msg.into())
    }

    /// Create a command error with context
    pub fn command(msg: impl Into<String>) -> Self {
        VersionBumpError::Command(msg.into())
    }
}
