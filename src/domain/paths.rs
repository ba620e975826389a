//! Canonical filesystem locations derived from the storage root.
//!
//! Resolution is pure string work: no existence checks happen here, because
//! removable storage may not be mounted when a path is first asked for.
//! Callers probe lazily before use.

use std::path::PathBuf;

use super::preferences;
use super::storage::StorageRoot;
use crate::ports::PreferenceStore;

const LOGS_SUFFIX: &str = "Companion/logs";

/// Logical names for the locations a user may point elsewhere.
///
/// The logs directory is not part of this enumeration: the file watcher
/// registers it once and cannot follow a relocation, so no override for it
/// can exist anywhere in the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverridablePath {
    Scripts,
    Media,
    SystemImages,
    SystemLogos,
}

impl OverridablePath {
    pub const ALL: [OverridablePath; 4] = [
        OverridablePath::Scripts,
        OverridablePath::Media,
        OverridablePath::SystemImages,
        OverridablePath::SystemLogos,
    ];

    /// Fixed suffix appended to the storage root when no override is set.
    pub fn default_suffix(self) -> &'static str {
        match self {
            OverridablePath::Scripts => "ES-DE/scripts",
            OverridablePath::Media => "ES-DE/downloaded_media",
            OverridablePath::SystemImages => "Companion/system_images",
            OverridablePath::SystemLogos => "Companion/system_logos",
        }
    }

    /// Preference key holding the user override for this location.
    pub fn pref_key(self) -> &'static str {
        match self {
            OverridablePath::Scripts => preferences::KEY_SCRIPTS_PATH,
            OverridablePath::Media => preferences::KEY_MEDIA_PATH,
            OverridablePath::SystemImages => preferences::KEY_SYSTEM_IMAGES_PATH,
            OverridablePath::SystemLogos => preferences::KEY_SYSTEM_LOGOS_PATH,
        }
    }

    /// Display name used in reports.
    pub fn name(self) -> &'static str {
        match self {
            OverridablePath::Scripts => "scripts",
            OverridablePath::Media => "media",
            OverridablePath::SystemImages => "system-images",
            OverridablePath::SystemLogos => "system-logos",
        }
    }
}

/// Resolve an overridable location. A non-empty override wins verbatim; an
/// absent or empty one falls back to the computed default under the root.
pub fn resolve(root: &StorageRoot, path: OverridablePath, override_value: Option<&str>) -> PathBuf {
    match override_value {
        Some(value) if !value.is_empty() => PathBuf::from(value),
        _ => root.join(path.default_suffix()),
    }
}

/// The event-log directory. Takes no override parameter on purpose; see
/// [`OverridablePath`].
pub fn logs_dir(root: &StorageRoot) -> PathBuf {
    root.join(LOGS_SUFFIX)
}

/// Snapshot of every resolved location.
///
/// Recomputed from the preference store on each query so a stale snapshot
/// never outlives a single call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSet {
    pub scripts: PathBuf,
    pub media: PathBuf,
    pub system_images: PathBuf,
    pub system_logos: PathBuf,
    pub logs: PathBuf,
}

impl PathSet {
    pub fn compute(root: &StorageRoot, prefs: &dyn PreferenceStore) -> Self {
        let resolved = |path: OverridablePath| {
            let value = prefs.get_string(path.pref_key(), "");
            resolve(root, path, Some(&value))
        };
        Self {
            scripts: resolved(OverridablePath::Scripts),
            media: resolved(OverridablePath::Media),
            system_images: resolved(OverridablePath::SystemImages),
            system_logos: resolved(OverridablePath::SystemLogos),
            logs: logs_dir(root),
        }
    }
}
