//! Budgeted validation of the companion script set.

use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crate::domain::scripts::{
    SCRIPT_NAMES, ScriptStatus, TOTAL_SCRIPT_COUNT, ValidationOutcome, ValidationReport,
    classify_first_line,
};
use crate::ports::ScriptSource;

/// Classify every script in the manifest. Read-only: an existence check and
/// a first-line read per script, nothing else.
pub fn validate<S: ScriptSource>(scripts_dir: &Path, source: &S) -> ValidationReport {
    let statuses: [ScriptStatus; TOTAL_SCRIPT_COUNT] = std::array::from_fn(|i| {
        let path = scripts_dir.join(SCRIPT_NAMES[i]);
        if !source.exists(&path) {
            return ScriptStatus::Missing;
        }
        match source.first_line(&path) {
            Ok(line) => classify_first_line(line.as_deref()),
            // A file that vanished or cannot be opened mid-scan counts as absent.
            Err(_) => ScriptStatus::Missing,
        }
    });
    ValidationReport::new(statuses)
}

/// Run a full validation pass under a wall-clock budget.
///
/// A pass that does not finish in time yields [`ValidationOutcome::TimedOut`]
/// with no per-script results at all; partial success is never reported. The
/// abandoned worker thread only ever reads, so cancellation leaves the
/// filesystem untouched.
pub fn validate_with_budget<S>(
    scripts_dir: PathBuf,
    source: S,
    budget: Duration,
) -> ValidationOutcome
where
    S: ScriptSource + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let _ = tx.send(validate(&scripts_dir, &source));
    });
    match rx.recv_timeout(budget) {
        Ok(report) => ValidationOutcome::Complete(report),
        Err(_) => ValidationOutcome::TimedOut,
    }
}
