//! Git operations abstraction layer
//!
//! Git is driven through the [CommandRunner] trait so the release steps can
//! be exercised without a real `git` binary:
//!
//! - [runner::SystemRunner]: spawns processes with `std::process::Command`
//! - [mock::MockRunner]: records invocations and fails on demand (tests)
//!
//! Repository inspection (is this a repository, which branch is checked out)
//! goes through `git2` in [repository::Git2Repository].
//!
//! The release itself is a fixed, ordered [pipeline] of steps. A failed step is
//! reported and the next one still runs.

pub mod mock;
pub mod pipeline;
pub mod repository;
pub mod runner;

pub use mock::MockRunner;
pub use pipeline::{run_release_steps, ReleasePlan, ReleaseStep, StepOutcome, StepReport};
pub use repository::Git2Repository;
pub use runner::SystemRunner;

use crate::error::Result;
use std::path::Path;
use tracing::debug;

/// Captured result of a finished process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` if terminated by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success() -> Self {
        CommandOutput {
            code: Some(0),
            stdout: String::new(),
            stderr: String::new(),
        }
    }

    pub fn failure(code: i32, stderr: impl Into<String>) -> Self {
        CommandOutput {
            code: Some(code),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs external commands
///
/// ## Error Handling
///
/// `Err` means the process could not be spawned at all. A process that ran and
/// exited non-zero is `Ok` with a non-success [CommandOutput].
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args` inside `cwd` and wait for it to finish
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> Result<CommandOutput>;
}

/// Result of probing for git before running release steps
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitAvailability {
    Available,
    /// The `git` binary is missing or broken
    Unavailable(String),
    /// `git` works but the directory is not inside a repository
    NotARepository(String),
}

/// Check that git can be used in `dir`
pub fn probe(runner: &dyn CommandRunner, dir: &Path) -> GitAvailability {
    match runner.run("git", &["--version".to_string()], dir) {
        Ok(output) if output.is_success() => {
            debug!(version = %output.stdout.trim(), "git is available");
        }
        Ok(output) => return GitAvailability::Unavailable(output.stderr.trim().to_string()),
        Err(e) => return GitAvailability::Unavailable(e.to_string()),
    }

    match Git2Repository::open(dir) {
        Ok(_) => GitAvailability::Available,
        Err(e) => GitAvailability::NotARepository(e.to_string()),
    }
}
