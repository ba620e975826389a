use crate::domain::AppError;

/// Key→value lookup with typed defaults, persisted by the platform.
///
/// Reads are infallible and fall back to the supplied default when the key
/// is unset or holds a value of the wrong type. Writes persist immediately.
/// The storage encoding is the adapter's business.
pub trait PreferenceStore {
    fn get_string(&self, key: &str, default: &str) -> String;
    fn set_string(&mut self, key: &str, value: &str) -> Result<(), AppError>;

    fn get_bool(&self, key: &str, default: bool) -> bool;
    fn set_bool(&mut self, key: &str, value: bool) -> Result<(), AppError>;

    fn get_u64(&self, key: &str, default: u64) -> u64;
    fn set_u64(&mut self, key: &str, value: u64) -> Result<(), AppError>;

    /// Drop every stored entry, returning all keys to their defaults.
    fn reset(&mut self) -> Result<(), AppError>;
}
