use crate::error::{Result, VersionBumpError};
use crate::git::{CommandOutput, CommandRunner};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

/// Mock runner for testing without spawning processes
///
/// Every command succeeds unless registered with [MockRunner::fail_on] or
/// [MockRunner::unspawnable]. Invocations are recorded as `"program arg1 arg2"`.
#[derive(Debug, Default)]
pub struct MockRunner {
    failures: HashMap<String, String>,
    unspawnable: Vec<String>,
    calls: Mutex<Vec<String>>,
}

impl MockRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `command` exit with status 1 and the given stderr
    pub fn fail_on(mut self, command: impl Into<String>, stderr: impl Into<String>) -> Self {
        self.failures.insert(command.into(), stderr.into());
        self
    }

    /// Make `program` fail to spawn
    pub fn unspawnable(mut self, program: impl Into<String>) -> Self {
        self.unspawnable.push(program.into());
        self
    }

    /// Commands run so far, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, program: &str, args: &[String], _cwd: &Path) -> Result<CommandOutput> {
        let line = std::iter::once(program.to_string())
            .chain(args.iter().cloned())
            .collect::<Vec<_>>()
            .join(" ");

        if let Ok(mut calls) = self.calls.lock() {
            calls.push(line.clone());
        }

        if self.unspawnable.iter().any(|p| p == program) {
            return Err(VersionBumpError::command(format!(
                "Failed to execute {}: not found",
                program
            )));
        }

        match self.failures.get(&line) {
            Some(stderr) => Ok(CommandOutput::failure(1, stderr.clone())),
            None => Ok(CommandOutput::success()),
        }
    }
}
