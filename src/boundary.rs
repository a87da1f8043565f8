use std::fmt;
use std::path::PathBuf;

/// Non-fatal conditions around the bump that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// Manifest had no usable version field; the default was bumped instead
    MissingVersion {
        manifest: PathBuf,
        default_version: String,
    },
    /// The `git` binary could not be run
    GitUnavailable { reason: String },
    /// The working directory is not inside a git repository
    NotARepository { path: PathBuf },
    /// HEAD is detached, so the push goes to `HEAD` on the remote
    DetachedHead { remote: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::MissingVersion {
                manifest,
                default_version,
            } => write!(
                f,
                "No version field in {}, starting from {}",
                manifest.display(),
                default_version
            ),
            BoundaryWarning::GitUnavailable { reason } => {
                if reason.is_empty() {
                    write!(f, "Git is not available, skipping git operations")
                } else {
                    write!(
                        f,
                        "Git is not available ({}), skipping git operations",
                        reason
                    )
                }
            }
            BoundaryWarning::NotARepository { path } => write!(
                f,
                "'{}' is not inside a git repository, skipping git operations",
                path.display()
            ),
            BoundaryWarning::DetachedHead { remote } => write!(
                f,
                "HEAD is detached; pushing HEAD to remote '{}'",
                remote
            ),
        }
    }
}
