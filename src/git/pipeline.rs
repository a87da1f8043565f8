//! The release steps run after the manifest has been written
//!
//! Steps always run in the same order: stage, commit, tag, push. Each one is
//! attempted regardless of how the previous one went.

use crate::domain::BranchContext;
use crate::git::CommandRunner;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// One named git invocation of the release
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseStep {
    Stage,
    Commit,
    Tag,
    Push,
}

impl ReleaseStep {
    pub const ORDER: [ReleaseStep; 4] = [
        ReleaseStep::Stage,
        ReleaseStep::Commit,
        ReleaseStep::Tag,
        ReleaseStep::Push,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ReleaseStep::Stage => "stage",
            ReleaseStep::Commit => "commit",
            ReleaseStep::Tag => "tag",
            ReleaseStep::Push => "push",
        }
    }
}

impl fmt::Display for ReleaseStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything the release steps need to know
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleasePlan {
    pub manifest_path: PathBuf,
    pub tag: String,
    pub message: String,
    pub remote: String,
    pub branch: BranchContext,
    pub annotate: bool,
    pub push: bool,
}

impl ReleasePlan {
    /// Git arguments for a step, or `None` if the step is disabled
    pub fn args(&self, step: ReleaseStep) -> Option<Vec<String>> {
        let args = match step {
            ReleaseStep::Stage => vec![
                "add".to_string(),
                self.manifest_path.to_string_lossy().into_owned(),
            ],
            ReleaseStep::Commit => vec!["commit".to_string(), "-m".to_string(), self.message.clone()],
            ReleaseStep::Tag if self.annotate => vec![
                "tag".to_string(),
                "-a".to_string(),
                self.tag.clone(),
                "-m".to_string(),
                self.message.clone(),
            ],
            ReleaseStep::Tag => vec!["tag".to_string(), self.tag.clone()],
            ReleaseStep::Push if !self.push => return None,
            ReleaseStep::Push => vec![
                "push".to_string(),
                self.remote.clone(),
                self.branch.push_target().to_string(),
                "--tags".to_string(),
            ],
        };
        Some(args)
    }
}

/// How a step ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Succeeded,
    Failed(String),
    Skipped,
}

/// Outcome of one step together with the command line that was run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    pub step: ReleaseStep,
    pub command: String,
    pub outcome: StepOutcome,
}

impl StepReport {
    pub fn is_failure(&self) -> bool {
        matches!(self.outcome, StepOutcome::Failed(_))
    }
}

/// Run every release step in order inside `dir`, collecting one report per step
pub fn run_release_steps(
    runner: &dyn CommandRunner,
    dir: &Path,
    plan: &ReleasePlan,
) -> Vec<StepReport> {
    ReleaseStep::ORDER
        .iter()
        .map(|&step| run_step(runner, dir, plan, step))
        .collect()
}

fn run_step(
    runner: &dyn CommandRunner,
    dir: &Path,
    plan: &ReleasePlan,
    step: ReleaseStep,
) -> StepReport {
    let Some(args) = plan.args(step) else {
        info!(%step, "step disabled");
        return StepReport {
            step,
            command: String::new(),
            outcome: StepOutcome::Skipped,
        };
    };

    let command = format!("git {}", args.join(" "));
    let outcome = match runner.run("git", &args, dir) {
        Ok(output) if output.is_success() => {
            info!(%step, %command, "step succeeded");
            StepOutcome::Succeeded
        }
        Ok(output) => {
            let reason = match output.stderr.trim() {
                "" => format!("exit code {}", output.code.unwrap_or(-1)),
                stderr => stderr.to_string(),
            };
            warn!(%step, %command, %reason, "step failed");
            StepOutcome::Failed(reason)
        }
        Err(e) => {
            warn!(%step, %command, error = %e, "step could not run");
            StepOutcome::Failed(e.to_string())
        }
    };

    StepReport {
        step,
        command,
        outcome,
    }
}
