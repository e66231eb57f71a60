// crates/fix_calendar_permissions/src/config.rs

use std::path::PathBuf;

use calendar_permission_keys::DEFAULT_PROJECT_FILE;
use clap::Parser;
use pbxproj_patcher::PatchOptions;

/// Adds the calendar usage descriptions to every build configuration of the Trendy Xcode project.
#[derive(Parser, Debug)]
#[command(name = "fix_calendar_permissions", version)]
struct Cli {
    /// Path to the project descriptor.
    #[arg(long, env = "PBXPROJ_PATH", default_value = DEFAULT_PROJECT_FILE)]
    project_file: PathBuf,

    /// Do not insert the keys again where they already follow the anchor.
    #[arg(long)]
    skip_already_patched: bool,

    /// Enable verbose logging.
    #[arg(long)]
    verbose: bool,
}

/// Runtime configuration composed from CLI + environment.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub project_file: PathBuf,
    pub skip_already_patched: bool,
    pub verbose: bool,
}

impl AppConfig {
    pub fn from_args() -> Self {
        Cli::parse().into()
    }

    pub fn patch_options(&self) -> PatchOptions {
        PatchOptions {
            skip_already_patched: self.skip_already_patched,
        }
    }
}

impl From<Cli> for AppConfig {
    fn from(cli: Cli) -> Self {
        Self {
            project_file: cli.project_file,
            skip_already_patched: cli.skip_already_patched,
            verbose: cli.verbose,
        }
    }
}
