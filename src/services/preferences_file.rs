use std::fs;
use std::path::PathBuf;

use toml::{Table, Value};

use crate::domain::AppError;
use crate::ports::PreferenceStore;

/// Preference store persisted as a flat TOML table.
///
/// Absent keys mean "use the compiled-in default"; a full reset simply
/// empties the table. Every write saves immediately.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
    values: Table,
}

impl FilePreferenceStore {
    /// Load the store, starting empty when the file does not exist yet.
    pub fn load(path: PathBuf) -> Result<Self, AppError> {
        let values = if path.exists() {
            let content = fs::read_to_string(&path)?;
            content
                .parse::<Table>()
                .map_err(|err| AppError::MalformedPreferences(err.to_string()))?
        } else {
            Table::new()
        };
        Ok(Self { path, values })
    }

    fn save(&self) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, self.values.to_string())?;
        Ok(())
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get_string(&self, key: &str, default: &str) -> String {
        self.values
            .get(key)
            .and_then(Value::as_str)
            .map_or_else(|| default.to_string(), str::to_string)
    }

    fn set_string(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        self.values.insert(key.to_string(), Value::String(value.to_string()));
        self.save()
    }

    fn get_bool(&self, key: &str, default: bool) -> bool {
        self.values.get(key).and_then(Value::as_bool).unwrap_or(default)
    }

    fn set_bool(&mut self, key: &str, value: bool) -> Result<(), AppError> {
        self.values.insert(key.to_string(), Value::Boolean(value));
        self.save()
    }

    fn get_u64(&self, key: &str, default: u64) -> u64 {
        self.values
            .get(key)
            .and_then(Value::as_integer)
            .and_then(|v| u64::try_from(v).ok())
            .unwrap_or(default)
    }

    fn set_u64(&mut self, key: &str, value: u64) -> Result<(), AppError> {
        let value = i64::try_from(value).map_err(|_| AppError::InvalidPreferenceValue {
            key: key.to_string(),
            value: value.to_string(),
            expected: "a value that fits in 63 bits",
        })?;
        self.values.insert(key.to_string(), Value::Integer(value));
        self.save()
    }

    fn reset(&mut self) -> Result<(), AppError> {
        self.values.clear();
        self.save()
    }
}
