//! User interface module - the output sink and its formatting.
//!
//! Separates concerns:
//! - `formatter` - Formatting and printing functions
//! - This module - The [OutputSink] the workflow reports through

use std::sync::Mutex;

use crate::boundary::BoundaryWarning;
use crate::git::StepReport;

pub mod formatter;

pub use formatter::{
    display_boundary_warning, display_error, display_status, display_step_report,
    display_success, display_version_change, format_step_report,
};

/// Destination for everything the workflow tells the user.
pub trait OutputSink {
    fn status(&self, message: &str);
    fn success(&self, message: &str);
    fn warning(&self, warning: &BoundaryWarning);
    fn version_change(&self, old_version: &str, new_version: &str);
    fn step(&self, report: &StepReport);
}

/// Prints to the terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl OutputSink for ConsoleSink {
    fn status(&self, message: &str) {
        display_status(message);
    }

    fn success(&self, message: &str) {
        display_success(message);
    }

    fn warning(&self, warning: &BoundaryWarning) {
        display_boundary_warning(warning);
    }

    fn version_change(&self, old_version: &str, new_version: &str) {
        display_version_change(old_version, new_version);
    }

    fn step(&self, report: &StepReport) {
        display_step_report(report);
    }
}

/// Keeps every message as plain text, for tests.
#[derive(Debug, Default)]
pub struct RecordingSink {
    lines: Mutex<Vec<String>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }

    fn push(&self, line: String) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line);
        }
    }
}

impl OutputSink for RecordingSink {
    fn status(&self, message: &str) {
        self.push(format!("status: {}", message));
    }

    fn success(&self, message: &str) {
        self.push(format!("success: {}", message));
    }

    fn warning(&self, warning: &BoundaryWarning) {
        self.push(format!("warning: {}", warning));
    }

    fn version_change(&self, old_version: &str, new_version: &str) {
        self.push(format!("version: {} -> {}", old_version, new_version));
    }

    fn step(&self, report: &StepReport) {
        self.push(format!("step: {}", format_step_report(report)));
    }
}
