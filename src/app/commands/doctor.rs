//! Companion script health check with retry on timeout.

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use crate::domain::scripts::{SCRIPT_VALIDATION_BUDGET, ValidationOutcome};
use crate::domain::storage::SD_MOUNT_RETRY_DELAYS;
use crate::ports::ScriptSource;
use crate::services::script_validator;

#[derive(Debug, Clone)]
pub struct DoctorOptions {
    /// Wall-clock budget for a single validation attempt.
    pub budget: Duration,
    /// Sleep schedule between timed-out attempts; its length caps the retries.
    pub retry_delays: Vec<Duration>,
}

impl Default for DoctorOptions {
    fn default() -> Self {
        Self { budget: SCRIPT_VALIDATION_BUDGET, retry_delays: SD_MOUNT_RETRY_DELAYS.to_vec() }
    }
}

#[derive(Debug, Clone)]
pub struct DoctorOutcome {
    pub outcome: ValidationOutcome,
    pub exit_code: i32,
}

/// Validate the script set, retrying timed-out passes on the assumption that
/// removable storage was still mounting. A pass that completes is final.
pub fn execute<S>(scripts_dir: PathBuf, source: S, options: &DoctorOptions) -> DoctorOutcome
where
    S: ScriptSource + Clone + Send + 'static,
{
    let mut outcome =
        script_validator::validate_with_budget(scripts_dir.clone(), source.clone(), options.budget);
    for delay in &options.retry_delays {
        if outcome != ValidationOutcome::TimedOut {
            break;
        }
        thread::sleep(*delay);
        outcome = script_validator::validate_with_budget(
            scripts_dir.clone(),
            source.clone(),
            options.budget,
        );
    }

    let exit_code = match &outcome {
        ValidationOutcome::Complete(report) if report.all_valid() => 0,
        ValidationOutcome::Complete(_) => 1,
        ValidationOutcome::TimedOut => 2,
    };
    DoctorOutcome { outcome, exit_code }
}
