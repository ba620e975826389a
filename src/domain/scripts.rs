//! The companion script manifest and validation outcomes.
//!
//! ES-DE invokes one shell script per navigation/lifecycle event; each script
//! writes a status file the companion watches. Validation only ever reads.

use std::time::Duration;

use serde::Serialize;

/// Number of companion scripts ES-DE must have installed. The type of
/// [`SCRIPT_NAMES`] keeps the name list and this count in lock-step.
pub const TOTAL_SCRIPT_COUNT: usize = 7;

/// The fixed companion script filenames, in reporting order.
pub const SCRIPT_NAMES: [&str; TOTAL_SCRIPT_COUNT] = [
    "game-select.sh",
    "system-select.sh",
    "game-start.sh",
    "game-end.sh",
    "screensaver-start.sh",
    "screensaver-end.sh",
    "screensaver-game-select.sh",
];

/// Interpreter line current script bundles start with.
pub const EXPECTED_SHEBANG: &str = "#!/system/bin/sh";

/// Interpreter line from pre-0.3 bundles, recognized separately so the UI
/// can tell the user to reinstall rather than show a generic failure.
pub const DEPRECATED_SHEBANG: &str = "#!/bin/sh";

/// Wall-clock budget for one full validation pass over all seven scripts.
pub const SCRIPT_VALIDATION_BUDGET: Duration = Duration::from_secs(5);

/// Why a present script failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InvalidReason {
    /// First line is the deprecated interpreter.
    OutdatedShebang,
    /// First line matches neither recognized interpreter.
    UnexpectedShebang,
}

/// Terminal validation state for a single script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScriptStatus {
    Missing,
    Valid,
    Invalid(InvalidReason),
}

/// Classify a script by its first line, `None` meaning an empty file.
pub fn classify_first_line(first_line: Option<&str>) -> ScriptStatus {
    match first_line {
        Some(line) if line == EXPECTED_SHEBANG => ScriptStatus::Valid,
        Some(line) if line == DEPRECATED_SHEBANG => ScriptStatus::Invalid(InvalidReason::OutdatedShebang),
        _ => ScriptStatus::Invalid(InvalidReason::UnexpectedShebang),
    }
}

/// Per-script states for all seven companion scripts, in manifest order.
///
/// A report always covers the full manifest; partial reports cannot be
/// constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    entries: [(&'static str, ScriptStatus); TOTAL_SCRIPT_COUNT],
}

impl ValidationReport {
    pub fn new(statuses: [ScriptStatus; TOTAL_SCRIPT_COUNT]) -> Self {
        Self { entries: std::array::from_fn(|i| (SCRIPT_NAMES[i], statuses[i])) }
    }

    pub fn entries(&self) -> impl Iterator<Item = (&'static str, ScriptStatus)> + '_ {
        self.entries.iter().copied()
    }

    pub fn status_of(&self, name: &str) -> Option<ScriptStatus> {
        self.entries.iter().find(|(n, _)| *n == name).map(|(_, s)| *s)
    }

    pub fn all_valid(&self) -> bool {
        self.entries.iter().all(|(_, status)| *status == ScriptStatus::Valid)
    }
}

/// Result of a budgeted validation run: a complete report or nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ValidationOutcome {
    Complete(ValidationReport),
    /// The pass did not finish inside the budget. State is unknown, not
    /// invalid; callers retry instead of surfacing a permanent failure.
    TimedOut,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_interpreter_lines() {
        assert_eq!(classify_first_line(Some(EXPECTED_SHEBANG)), ScriptStatus::Valid);
        assert_eq!(
            classify_first_line(Some(DEPRECATED_SHEBANG)),
            ScriptStatus::Invalid(InvalidReason::OutdatedShebang)
        );
        assert_eq!(
            classify_first_line(Some("#!/usr/bin/env bash")),
            ScriptStatus::Invalid(InvalidReason::UnexpectedShebang)
        );
        assert_eq!(
            classify_first_line(None),
            ScriptStatus::Invalid(InvalidReason::UnexpectedShebang)
        );
    }

    #[test]
    fn report_covers_manifest_in_order() {
        let report = ValidationReport::new([ScriptStatus::Valid; TOTAL_SCRIPT_COUNT]);
        let names: Vec<_> = report.entries().map(|(name, _)| name).collect();
        assert_eq!(names, SCRIPT_NAMES);
        assert!(report.all_valid());
    }

    #[test]
    fn one_missing_script_fails_the_aggregate() {
        let mut statuses = [ScriptStatus::Valid; TOTAL_SCRIPT_COUNT];
        statuses[3] = ScriptStatus::Missing;
        let report = ValidationReport::new(statuses);

        assert!(!report.all_valid());
        assert_eq!(report.status_of("game-end.sh"), Some(ScriptStatus::Missing));
        assert_eq!(report.status_of("game-select.sh"), Some(ScriptStatus::Valid));
    }
}
