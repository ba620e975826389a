//! escomp: configuration and validation core for an ES-DE second-screen companion.
//!
//! Resolves the companion's filesystem locations from the storage root and
//! user overrides, selects the active ambient-music folder, and validates
//! the seven companion scripts ES-DE must have installed.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

use app::commands::{doctor, paths, prefs};
use domain::scripts::{InvalidReason, ScriptStatus, TOTAL_SCRIPT_COUNT, ValidationOutcome};
use domain::PathSet;
use services::{FilePreferenceStore, FilesystemScriptSource};

pub use app::commands::doctor::{DoctorOptions, DoctorOutcome};
pub use app::commands::paths::PathReportEntry;
pub use domain::{AppError, MusicSource, StorageRoot, SystemId, should_cross_fade};

/// Preference file location, fixed under the storage root.
const PREFS_FILE: &str = "Companion/preferences.toml";

fn open_prefs(root: &StorageRoot) -> Result<FilePreferenceStore, AppError> {
    FilePreferenceStore::load(root.join(PREFS_FILE))
}

/// Validate the installed companion scripts and print a per-script report.
pub fn doctor(root: &StorageRoot, options: DoctorOptions) -> Result<DoctorOutcome, AppError> {
    let prefs = open_prefs(root)?;
    let set = PathSet::compute(root, &prefs);
    let outcome = doctor::execute(set.scripts, FilesystemScriptSource, &options);

    match &outcome.outcome {
        ValidationOutcome::Complete(report) => {
            for (name, status) in report.entries() {
                match status {
                    ScriptStatus::Valid => println!("✅ {name}"),
                    ScriptStatus::Missing => println!("❌ {name}: missing"),
                    ScriptStatus::Invalid(InvalidReason::OutdatedShebang) => {
                        println!("⚠️ {name}: outdated interpreter line; reinstall the current script bundle")
                    }
                    ScriptStatus::Invalid(InvalidReason::UnexpectedShebang) => {
                        println!("❌ {name}: unexpected interpreter line")
                    }
                }
            }
            if report.all_valid() {
                println!("✅ All {TOTAL_SCRIPT_COUNT} companion scripts are valid");
            } else {
                eprintln!("Some companion scripts need attention");
            }
        }
        ValidationOutcome::TimedOut => {
            eprintln!("Validation did not finish in time; storage may still be mounting. Try again.")
        }
    }
    Ok(outcome)
}

/// Print every resolved filesystem location, marking user overrides.
pub fn show_paths(root: &StorageRoot) -> Result<(), AppError> {
    let prefs = open_prefs(root)?;
    for entry in paths::execute(root, &prefs) {
        let marker = if entry.overridden { " (override)" } else { "" };
        println!("{}: {}{}", entry.name, entry.path.display(), marker);
    }
    Ok(())
}

/// Read one preference (or its compiled-in default) by key.
pub fn pref_get(root: &StorageRoot, key: &str) -> Result<String, AppError> {
    prefs::get(&open_prefs(root)?, key)
}

/// Parse and persist one preference by key.
pub fn pref_set(root: &StorageRoot, key: &str, value: &str) -> Result<(), AppError> {
    let mut store = open_prefs(root)?;
    prefs::set(&mut store, key, value)
}

/// Drop every stored preference, returning all keys to their defaults.
pub fn pref_reset(root: &StorageRoot) -> Result<(), AppError> {
    let mut store = open_prefs(root)?;
    prefs::reset(&mut store)
}
