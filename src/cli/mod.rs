//! Command-line workflow, separated from argument parsing in `main.rs`

pub mod orchestration;

pub use orchestration::{run_version_workflow, VersionWorkflowArgs, WorkflowResult};
