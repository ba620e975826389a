//! Fixed filenames the companion watches under the logs directory.
//!
//! Each companion script writes exactly one piece of state into one of these
//! files; the file watcher registers the logs directory once at startup,
//! which is why that directory can never be relocated (see
//! [`super::paths::logs_dir`]).

pub const LOG_FILE_COUNT: usize = 15;

/// Every status file the companion scripts produce, one state item each.
pub const LOG_FILES: [&str; LOG_FILE_COUNT] = [
    "selected_system.log",
    "selected_game_name.log",
    "selected_game_file.log",
    "selected_game_system.log",
    "game_start_name.log",
    "game_start_file.log",
    "game_start_system.log",
    "game_end_name.log",
    "game_end_file.log",
    "game_end_system.log",
    "screensaver_start.log",
    "screensaver_end.log",
    "screensaver_game_name.log",
    "screensaver_game_file.log",
    "screensaver_game_system.log",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_filenames_are_unique() {
        let mut names = LOG_FILES.to_vec();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), LOG_FILE_COUNT);
    }
}
