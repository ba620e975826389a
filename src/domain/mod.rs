pub mod error;
pub mod logs;
pub mod media;
pub mod music;
pub mod paths;
pub mod preferences;
pub mod scripts;
pub mod storage;

pub use error::AppError;
pub use music::{MusicSource, SystemId, should_cross_fade};
pub use paths::{OverridablePath, PathSet, logs_dir, resolve};
pub use scripts::{
    DEPRECATED_SHEBANG, EXPECTED_SHEBANG, InvalidReason, SCRIPT_NAMES, SCRIPT_VALIDATION_BUDGET,
    ScriptStatus, TOTAL_SCRIPT_COUNT, ValidationOutcome, ValidationReport,
};
pub use storage::{SD_MOUNT_RETRY_DELAYS, StorageRoot};
