use std::process::ExitCode;

use anyhow::{Context, Result};
use calendar_permission_keys::{ADDED_KEY_NAMES, ANCHOR_KEY};
use pbxproj_patcher::{apply_permission_patch, PatchError, PatchReport};

mod config;

use config::AppConfig;

fn main() -> ExitCode {
    let config = AppConfig::from_args();
    init_logging(config.verbose);
    log::debug!("configuration: {:?}", config);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let reported = err
                .downcast_ref::<PatchError>()
                .is_some_and(|patch_err| !patch_err.is_io_failure());
            if !reported {
                eprintln!("Error: {:#}", err);
            }
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn run(config: &AppConfig) -> Result<()> {
    println!("Fixing calendar permissions for the Trendy app");
    println!("--------------------------------------------------");

    let report = apply_permission_patch(&config.project_file, config.patch_options())
        .inspect_err(print_failure)
        .with_context(|| format!("failed to patch {}", config.project_file.display()))?;

    print_success(&report);
    Ok(())
}

fn print_success(report: &PatchReport) {
    println!("Created backup at: {}", report.backup_path.display());
    if report.inserted == 0 {
        println!(
            "Calendar permissions already present in {} build configuration(s); nothing to do.",
            report.matched
        );
        return;
    }
    println!(
        "Added calendar permissions to {} build configuration(s)",
        report.inserted
    );
    println!("\nAdded keys:");
    for key in ADDED_KEY_NAMES {
        println!("   - {}", key);
    }

    println!("--------------------------------------------------");
    println!("Success! Calendar permissions have been added to the project.");
    println!("\nNext steps:");
    println!("   1. Open trendy.xcodeproj in Xcode");
    println!("   2. Clean the build folder (Cmd+Shift+K)");
    println!("   3. Build and run the app");
    println!("   4. The calendar permission dialog should now appear when importing events");
    println!("\nTip: If you still don't see the permission dialog:");
    println!("   - Delete the app from the simulator/device");
    println!("   - Clean build folder again");
    println!("   - Rebuild and reinstall the app");
}

fn print_failure(err: &PatchError) {
    match err {
        PatchError::NotFound { path } => {
            eprintln!("Error: Could not find {}", path.display());
            eprintln!("   Please run this tool from the project root directory.");
        }
        PatchError::NoMatch { .. } => {
            eprintln!("Could not find the expected pattern in the project file.");
            eprintln!("   No build configuration sets {}.", ANCHOR_KEY);
            eprintln!("   The project structure might be different than expected.");
            eprintln!("\nFailed to add calendar permissions.");
        }
        _ => eprintln!("Failed to add calendar permissions."),
    }
    if let Some(backup_path) = err.backup_path() {
        println!("Created backup at: {}", backup_path.display());
        eprintln!("   The backup file has been preserved.");
    }
}
