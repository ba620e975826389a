mod filesystem_scripts;
mod memory_preferences;
mod preferences_file;
pub mod script_validator;

pub use filesystem_scripts::FilesystemScriptSource;
pub use memory_preferences::MemoryPreferenceStore;
pub use preferences_file::FilePreferenceStore;
pub use script_validator::{validate, validate_with_budget};
