use crate::error::{Result, VersionBumpError};
use crate::git::{CommandOutput, CommandRunner};
use std::path::Path;
use std::process::Command;
use tracing::trace;

/// Runs commands as child processes
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> Result<CommandOutput> {
        trace!(program, ?args, cwd = %cwd.display(), "spawning");

        let output = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .output()
            .map_err(|e| VersionBumpError::command(format!("Failed to execute {}: {}", program, e)))?;

        Ok(CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
