//! Shared testing utilities for escomp CLI tests.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use escomp::domain::scripts::SCRIPT_NAMES;
use tempfile::TempDir;

/// Testing harness providing an isolated storage root for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated storage root.
    pub fn new() -> Self {
        Self { root: TempDir::new().expect("Failed to create temp storage root") }
    }

    /// Absolute path of the emulated storage root.
    pub fn storage_root(&self) -> &Path {
        self.root.path()
    }

    /// Default scripts directory under the storage root.
    pub fn scripts_dir(&self) -> PathBuf {
        self.storage_root().join("ES-DE/scripts")
    }

    /// Write all seven companion scripts with the given first line.
    pub fn install_scripts(&self, first_line: &str) {
        for name in SCRIPT_NAMES {
            self.write_script(name, first_line);
        }
    }

    /// Write a single script with the given first line.
    pub fn write_script(&self, name: &str, first_line: &str) {
        let dir = self.scripts_dir();
        fs::create_dir_all(&dir).expect("Failed to create scripts directory");
        fs::write(dir.join(name), format!("{first_line}\necho \"$1\" > \"$2\"\n"))
            .expect("Failed to write script");
    }

    /// Remove a single script.
    pub fn remove_script(&self, name: &str) {
        fs::remove_file(self.scripts_dir().join(name)).expect("Failed to remove script");
    }

    /// Build a command for invoking the compiled `escomp` binary against
    /// this storage root.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("escomp").expect("Failed to locate escomp binary");
        cmd.arg("--storage-root").arg(self.storage_root());
        cmd.env_remove("ESCOMP_STORAGE_ROOT");
        cmd
    }
}
