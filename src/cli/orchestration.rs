//! Main workflow orchestration logic
//!
//! Reads the manifest, computes the next version, writes it back and runs the
//! release steps. Collaborators (command runner, output sink) are passed in so
//! the workflow can be driven from tests without a terminal or a git binary.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::boundary::BoundaryWarning;
use crate::config::Config;
use crate::domain::{BranchContext, BumpType, PreReleaseType};
use crate::error::{Result, VersionBumpError};
use crate::git::{self, CommandRunner, Git2Repository, GitAvailability, ReleasePlan, StepReport};
use crate::manifest::{Manifest, VersionSource};
use crate::ui::OutputSink;
use crate::version::bump_with_label;

/// Arguments for the version workflow
///
/// Mirrors the CLI Args but in a format suitable for orchestration logic.
/// `None` fields fall back to the configuration.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VersionWorkflowArgs {
    /// Bump keyword or literal version
    pub bump_type: Option<String>,

    /// Directory the manifest path is relative to and git runs in
    pub working_dir: PathBuf,

    pub manifest_path: Option<PathBuf>,

    /// Print the current version and stop
    pub show: bool,

    pub no_git: bool,

    /// Compute the new version without writing or running git
    pub dry_run: bool,

    /// Pre-release label for the `pre*` bump types
    pub preid: Option<String>,

    /// Commit message template, `{version}` is replaced
    pub message: Option<String>,

    pub remote: Option<String>,
}

/// What the workflow did
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// Version found in the manifest (or the default)
    pub current_version: String,

    /// Version written, `None` for `--show`
    pub new_version: Option<String>,

    /// Whether the manifest file was rewritten
    pub written: bool,

    /// One report per release step; empty when git was skipped
    pub steps: Vec<StepReport>,
}

impl WorkflowResult {
    pub fn failed_steps(&self) -> usize {
        self.steps.iter().filter(|s| s.is_failure()).count()
    }
}

/// Main version workflow
///
/// 1. Load the manifest and read its version (defaulting when missing)
/// 2. Compute the new version
/// 3. Write the manifest
/// 4. Probe git and run the release steps
///
/// # Returns
///
/// The versions involved and the per-step git outcomes. Git step failures are
/// reported in the result, not as an error.
pub fn run_version_workflow(
    args: &VersionWorkflowArgs,
    config: &Config,
    runner: &dyn CommandRunner,
    sink: &dyn OutputSink,
) -> Result<WorkflowResult> {
    let manifest_path = args
        .manifest_path
        .clone()
        .unwrap_or_else(|| config.manifest.path.clone());
    let mut manifest = Manifest::load(args.working_dir.join(&manifest_path))?;

    let (current_version, source) = manifest.version_or(&config.manifest.default_version)?;
    if source == VersionSource::Defaulted {
        sink.warning(&BoundaryWarning::MissingVersion {
            manifest: manifest_path.clone(),
            default_version: current_version.clone(),
        });
    }

    if args.show {
        sink.success(&format!("Current version: {}", current_version));
        return Ok(WorkflowResult {
            current_version,
            new_version: None,
            written: false,
            steps: Vec::new(),
        });
    }

    let bump_type = args.bump_type.as_deref().ok_or_else(|| {
        VersionBumpError::usage(format!(
            "Please specify a version type ({})",
            BumpType::keywords()
        ))
    })?;

    let label = match args.preid.as_deref() {
        Some(preid) => Some(PreReleaseType::parse(preid).map_err(|_| {
            VersionBumpError::usage(format!(
                "Invalid --preid '{}' (expected alpha, beta or rc)",
                preid
            ))
        })?),
        None => config.prerelease.label()?,
    };

    let new_version = bump_with_label(&current_version, bump_type, label)?;
    sink.version_change(&current_version, &new_version);

    if args.dry_run {
        sink.status("Dry run: manifest not written, git operations skipped");
        return Ok(WorkflowResult {
            current_version,
            new_version: Some(new_version),
            written: false,
            steps: Vec::new(),
        });
    }

    manifest.set_version(&new_version);
    manifest.save()?;
    sink.success(&format!("Version updated to: {}", new_version));

    let steps = if args.no_git {
        sink.status("Skipping Git operations (--no-git used).");
        Vec::new()
    } else if !config.git.enabled {
        sink.status("Skipping Git operations (git.enabled = false in config).");
        Vec::new()
    } else {
        release(args, config, runner, sink, &manifest_path, &new_version)?
    };

    Ok(WorkflowResult {
        current_version,
        new_version: Some(new_version),
        written: true,
        steps,
    })
}

fn release(
    args: &VersionWorkflowArgs,
    config: &Config,
    runner: &dyn CommandRunner,
    sink: &dyn OutputSink,
    manifest_path: &Path,
    new_version: &str,
) -> Result<Vec<StepReport>> {
    let dir = &args.working_dir;

    match git::probe(runner, dir) {
        GitAvailability::Available => {}
        GitAvailability::Unavailable(reason) => {
            sink.warning(&BoundaryWarning::GitUnavailable { reason });
            return Ok(Vec::new());
        }
        GitAvailability::NotARepository(reason) => {
            debug!(%reason, "repository discovery failed");
            sink.warning(&BoundaryWarning::NotARepository { path: dir.clone() });
            return Ok(Vec::new());
        }
    }

    let remote = args
        .remote
        .clone()
        .unwrap_or_else(|| config.git.remote.clone());

    let branch = Git2Repository::open(dir)
        .and_then(|repo| repo.current_branch())
        .unwrap_or_else(|e| {
            debug!(error = %e, "could not determine current branch");
            BranchContext::detached()
        });
    if branch.is_detached() && config.git.push {
        sink.warning(&BoundaryWarning::DetachedHead {
            remote: remote.clone(),
        });
    }

    let message = match &args.message {
        Some(template) => template.replace("{version}", new_version),
        None => config.git.commit_message(new_version),
    };

    let plan = ReleasePlan {
        manifest_path: manifest_path.to_path_buf(),
        tag: config.git.tag_pattern()?.format(new_version),
        message,
        remote,
        branch,
        annotate: config.git.annotate,
        push: config.git.push,
    };
    info!(tag = %plan.tag, branch = plan.branch.push_target(), "running release steps");

    let steps = git::run_release_steps(runner, dir, &plan);
    for report in &steps {
        sink.step(report);
    }
    Ok(steps)
}
