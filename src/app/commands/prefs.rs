//! Typed access to the closed preference table.

use crate::domain::AppError;
use crate::domain::preferences::{self, PrefDefault};
use crate::ports::PreferenceStore;

/// Read one preference, rendered as a string, falling back to its default.
pub fn get(store: &dyn PreferenceStore, key: &str) -> Result<String, AppError> {
    match preferences::default_for(key) {
        Some(PrefDefault::Text(default)) => Ok(store.get_string(key, default)),
        Some(PrefDefault::Flag(default)) => Ok(store.get_bool(key, default).to_string()),
        Some(PrefDefault::Millis(default)) => Ok(store.get_u64(key, default).to_string()),
        None => Err(unknown_key(key)),
    }
}

/// Parse and persist one preference according to its declared type.
pub fn set(store: &mut dyn PreferenceStore, key: &str, value: &str) -> Result<(), AppError> {
    match preferences::default_for(key) {
        Some(PrefDefault::Text(_)) => store.set_string(key, value),
        Some(PrefDefault::Flag(_)) => {
            let parsed = value.parse::<bool>().map_err(|_| AppError::InvalidPreferenceValue {
                key: key.to_string(),
                value: value.to_string(),
                expected: "true or false",
            })?;
            store.set_bool(key, parsed)
        }
        Some(PrefDefault::Millis(_)) => {
            let parsed = value.parse::<u64>().map_err(|_| AppError::InvalidPreferenceValue {
                key: key.to_string(),
                value: value.to_string(),
                expected: "a duration in milliseconds",
            })?;
            store.set_u64(key, parsed)
        }
        None => Err(unknown_key(key)),
    }
}

/// Drop every stored preference, returning all keys to their defaults.
pub fn reset(store: &mut dyn PreferenceStore) -> Result<(), AppError> {
    store.reset()
}

fn unknown_key(key: &str) -> AppError {
    AppError::UnknownPreferenceKey {
        key: key.to_string(),
        available: preferences::known_keys().collect::<Vec<_>>().join(", "),
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::preferences::{KEY_CROSSFADE_MS, KEY_MUSIC_ENABLED, KEY_SCRIPTS_PATH};
    use crate::services::MemoryPreferenceStore;

    use super::*;

    #[test]
    fn get_serves_defaults_until_set() {
        let mut store = MemoryPreferenceStore::default();
        assert_eq!(get(&store, KEY_CROSSFADE_MS).unwrap(), "2000");

        set(&mut store, KEY_CROSSFADE_MS, "750").unwrap();
        assert_eq!(get(&store, KEY_CROSSFADE_MS).unwrap(), "750");
    }

    #[test]
    fn set_parses_by_declared_type() {
        let mut store = MemoryPreferenceStore::default();
        set(&mut store, KEY_MUSIC_ENABLED, "false").unwrap();
        assert_eq!(get(&store, KEY_MUSIC_ENABLED).unwrap(), "false");

        let err = set(&mut store, KEY_MUSIC_ENABLED, "maybe").unwrap_err();
        assert!(matches!(err, AppError::InvalidPreferenceValue { .. }));
    }

    #[test]
    fn unknown_keys_are_rejected_with_the_valid_set() {
        let mut store = MemoryPreferenceStore::default();
        let err = set(&mut store, "logs_path", "/tmp/logs").unwrap_err();
        match err {
            AppError::UnknownPreferenceKey { available, .. } => {
                assert!(available.contains(KEY_SCRIPTS_PATH));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn reset_returns_every_key_to_its_default() {
        let mut store = MemoryPreferenceStore::default();
        set(&mut store, KEY_MUSIC_ENABLED, "false").unwrap();
        reset(&mut store).unwrap();
        assert_eq!(get(&store, KEY_MUSIC_ENABLED).unwrap(), "true");
    }
}
