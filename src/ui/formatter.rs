//! Pure formatting functions for UI output.
//!
//! The `format_*` functions build the text, the `display_*` functions print it.

use crate::boundary::BoundaryWarning;
use crate::git::{StepOutcome, StepReport};
use console::style;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Display the version change, e.g. `1.2.3 -> 1.2.4`.
pub fn display_version_change(old_version: &str, new_version: &str) {
    println!(
        "\n{}\n  From: {}\n  To:   {}",
        style("Version Change:").bold(),
        style(old_version).red(),
        style(new_version).green()
    );
}

/// Plain-text line for a release step.
///
/// # Example
/// ```ignore
/// "commit: git commit -m ... (failed: nothing to commit)"
/// ```
pub fn format_step_report(report: &StepReport) -> String {
    match &report.outcome {
        StepOutcome::Succeeded => format!("{}: {}", report.step, report.command),
        StepOutcome::Failed(reason) => {
            format!("{}: {} (failed: {})", report.step, report.command, reason)
        }
        StepOutcome::Skipped => format!("{}: skipped", report.step),
    }
}

/// Display one release step result: success in green, failure in red.
pub fn display_step_report(report: &StepReport) {
    let line = format_step_report(report);
    match report.outcome {
        StepOutcome::Succeeded => display_success(&line),
        StepOutcome::Failed(_) => eprintln!("{} {}", style("✗").red(), line),
        StepOutcome::Skipped => display_status(&line),
    }
}
