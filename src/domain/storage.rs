use std::path::{Path, PathBuf};
use std::time::Duration;

use super::AppError;

/// Progressive backoff applied when removable storage is not ready yet,
/// e.g. between retries of a timed-out script validation pass.
pub const SD_MOUNT_RETRY_DELAYS: [Duration; 3] =
    [Duration::from_millis(250), Duration::from_secs(1), Duration::from_secs(2)];

/// Root of the removable/external storage ES-DE lives on.
///
/// Supplied by the platform at startup and immutable for the process
/// lifetime; every default location is a descendant of this path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageRoot(PathBuf);

impl StorageRoot {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, AppError> {
        let root = root.into();
        if root.as_os_str().is_empty() {
            return Err(AppError::EmptyStorageRoot);
        }
        Ok(Self(root))
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    pub fn join(&self, suffix: &str) -> PathBuf {
        self.0.join(suffix)
    }
}
