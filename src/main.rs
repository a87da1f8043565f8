use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser};

use version_bump::cli::{run_version_workflow, VersionWorkflowArgs};
use version_bump::config;
use version_bump::git::SystemRunner;
use version_bump::logging;
use version_bump::ui::{self, ConsoleSink};

#[derive(clap::Parser)]
#[command(
    name = "version-bump",
    version,
    about = "Bump the version like npm version, then commit and tag the release"
)]
struct Args {
    #[arg(
        value_name = "TYPE",
        help = "patch, minor, major, prepatch, preminor, premajor, prerelease, or an explicit version"
    )]
    bump_type: Option<String>,

    #[arg(long, help = "Skip Git commit and tag")]
    no_git: bool,

    #[arg(long, help = "Show the current version")]
    show: bool,

    #[arg(long, help = "Preview the new version without writing anything")]
    dry_run: bool,

    #[arg(long, value_name = "LABEL", help = "Pre-release label: alpha, beta or rc")]
    preid: Option<String>,

    #[arg(long, value_name = "PATH", help = "Manifest file holding the version")]
    manifest: Option<PathBuf>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(
        short,
        long,
        help = "Commit message, {version} is replaced with the new version"
    )]
    message: Option<String>,

    #[arg(long, help = "Remote to push the release to")]
    remote: Option<String>,

    #[arg(short, long, action = ArgAction::Count, help = "Increase log verbosity")]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    logging::setup(logging::level_from_verbosity(args.verbose))?;

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let workflow_args = VersionWorkflowArgs {
        bump_type: args.bump_type,
        working_dir: PathBuf::from("."),
        manifest_path: args.manifest,
        show: args.show,
        no_git: args.no_git,
        dry_run: args.dry_run,
        preid: args.preid,
        message: args.message,
        remote: args.remote,
    };

    match run_version_workflow(&workflow_args, &config, &SystemRunner, &ConsoleSink) {
        Ok(result) => {
            let failed = result.failed_steps();
            if failed > 0 {
                ui::display_status(&format!(
                    "{} git step(s) failed; the manifest was still updated",
                    failed
                ));
            }
            Ok(())
        }
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }
}
