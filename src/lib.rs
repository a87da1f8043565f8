pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod logging;
pub mod manifest;
pub mod ui;
pub mod version;

pub use error::{Result, VersionBumpError};
pub use version::{bump, bump_with_label};
