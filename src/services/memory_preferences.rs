use toml::{Table, Value};

use crate::domain::AppError;
use crate::ports::PreferenceStore;

/// In-memory preference store for tests and embedding hosts that bring
/// their own persistence.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    values: Table,
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get_string(&self, key: &str, default: &str) -> String {
        self.values
            .get(key)
            .and_then(Value::as_str)
            .map_or_else(|| default.to_string(), str::to_string)
    }

    fn set_string(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        self.values.insert(key.to_string(), Value::String(value.to_string()));
        Ok(())
    }

    fn get_bool(&self, key: &str, default: bool) -> bool {
        self.values.get(key).and_then(Value::as_bool).unwrap_or(default)
    }

    fn set_bool(&mut self, key: &str, value: bool) -> Result<(), AppError> {
        self.values.insert(key.to_string(), Value::Boolean(value));
        Ok(())
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
        Ok(())
    }

    fn reset(&mut self) -> Result<(), AppError> {
        self.values.clear();
        Ok(())
    }
}
