//! Ambient music source selection and the cross-fade policy.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::AppError;

/// Validated ES-DE system identifier, used as a folder name under `systems/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SystemId(String);

impl SystemId {
    pub fn new(id: &str) -> Result<Self, AppError> {
        if id.is_empty() || id.contains('/') || id.contains('\\') || id == "." || id == ".." {
            return Err(AppError::InvalidSystemId(id.to_string()));
        }
        Ok(Self(id.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Which folder of ambient music is active.
///
/// Equality is structural: any two `Generic` values are equal, and `System`
/// values compare by id. The enum is closed; a new case cannot be added
/// without every match below failing to compile.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MusicSource {
    /// The root music folder.
    Generic,
    /// The per-system subfolder `systems/<id>`.
    System(SystemId),
}

impl MusicSource {
    /// Build a `System` source, validating the id.
    pub fn system(id: &str) -> Result<Self, AppError> {
        Ok(MusicSource::System(SystemId::new(id)?))
    }

    /// Folder this source plays from, under the music base path.
    pub fn resolve(&self, base: &Path) -> PathBuf {
        match self {
            MusicSource::Generic => base.to_path_buf(),
            MusicSource::System(id) => base.join("systems").join(id.as_str()),
        }
    }

    /// Apply the fallback rule: a `System` source whose folder is absent
    /// degrades to `Generic`.
    ///
    /// Cross-fade decisions must compare effective sources, never requested
    /// ones: falling back from a missing system folder while already playing
    /// `Generic` is not a source change.
    pub fn effective<F>(self, base: &Path, folder_exists: F) -> MusicSource
    where
        F: Fn(&Path) -> bool,
    {
        match &self {
            MusicSource::Generic => MusicSource::Generic,
            MusicSource::System(_) => {
                if folder_exists(&self.resolve(base)) {
                    self
                } else {
                    MusicSource::Generic
                }
            }
        }
    }
}

/// The playback layer cross-fades exactly when the effective source changes;
/// an unchanged source keeps playing uninterrupted.
pub fn should_cross_fade(previous: &MusicSource, next: &MusicSource) -> bool {
    previous != next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn system(id: &str) -> MusicSource {
        MusicSource::system(id).unwrap()
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(MusicSource::Generic, MusicSource::Generic);
        assert_eq!(system("snes"), system("snes"));
        assert_ne!(system("snes"), system("nes"));
        assert_ne!(system("snes"), MusicSource::Generic);
    }

    #[test]
    fn cross_fade_only_on_source_change() {
        assert!(!should_cross_fade(&MusicSource::Generic, &MusicSource::Generic));
        assert!(!should_cross_fade(&system("snes"), &system("snes")));
        assert!(should_cross_fade(&system("snes"), &system("nes")));
        assert!(should_cross_fade(&MusicSource::Generic, &system("snes")));
    }

    #[test]
    fn resolves_generic_to_base_and_system_to_subfolder() {
        let base = Path::new("/music");
        assert_eq!(MusicSource::Generic.resolve(base), PathBuf::from("/music"));
        assert_eq!(system("snes").resolve(base), PathBuf::from("/music/systems/snes"));
    }

    #[test]
    fn missing_system_folder_degrades_to_generic() {
        let base = Path::new("/music");
        assert_eq!(system("snes").effective(base, |_| false), MusicSource::Generic);
        assert_eq!(system("snes").effective(base, |_| true), system("snes"));
        assert_eq!(MusicSource::Generic.effective(base, |_| false), MusicSource::Generic);
    }

    #[test]
    fn fallback_asymmetry_on_effective_sources() {
        let base = Path::new("/music");
        let absent = |_: &Path| false;

        // Already playing Generic, requested system folder missing: no fade.
        let next = system("snes").effective(base, absent);
        assert!(!should_cross_fade(&MusicSource::Generic, &next));

        // Playing a real system folder, next one missing: fade to Generic.
        let next = system("nes").effective(base, absent);
        assert!(should_cross_fade(&system("snes"), &next));
    }

    #[test]
    fn rejects_malformed_system_ids() {
        for id in ["", "a/b", "a\\b", ".", ".."] {
            assert!(matches!(SystemId::new(id), Err(AppError::InvalidSystemId(_))), "{id}");
        }
    }
}
