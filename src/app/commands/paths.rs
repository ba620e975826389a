//! Report of every resolved filesystem location.

use std::path::PathBuf;

use crate::domain::paths::{OverridablePath, PathSet};
use crate::domain::storage::StorageRoot;
use crate::ports::PreferenceStore;

/// One resolved location with its override provenance.
#[derive(Debug, Clone)]
pub struct PathReportEntry {
    pub name: &'static str,
    pub path: PathBuf,
    pub overridden: bool,
}

pub fn execute(root: &StorageRoot, prefs: &dyn PreferenceStore) -> Vec<PathReportEntry> {
    let set = PathSet::compute(root, prefs);
    let overridden =
        |path: OverridablePath| !prefs.get_string(path.pref_key(), "").is_empty();

    vec![
        PathReportEntry {
            name: OverridablePath::Scripts.name(),
            path: set.scripts,
            overridden: overridden(OverridablePath::Scripts),
        },
        PathReportEntry {
            name: OverridablePath::Media.name(),
            path: set.media,
            overridden: overridden(OverridablePath::Media),
        },
        PathReportEntry {
            name: OverridablePath::SystemImages.name(),
            path: set.system_images,
            overridden: overridden(OverridablePath::SystemImages),
        },
        PathReportEntry {
            name: OverridablePath::SystemLogos.name(),
            path: set.system_logos,
            overridden: overridden(OverridablePath::SystemLogos),
        },
        // Logs can never carry an override; see domain::paths::logs_dir.
        PathReportEntry { name: "logs", path: set.logs, overridden: false },
    ]
}

#[cfg(test)]
mod tests {
    use crate::domain::preferences::KEY_SYSTEM_LOGOS_PATH;
    use crate::services::MemoryPreferenceStore;

    use super::*;

    #[test]
    fn reports_all_five_locations_marking_overrides() {
        let root = StorageRoot::new("/storage/emulated/0").unwrap();
        let mut prefs = MemoryPreferenceStore::default();
        prefs.set_string(KEY_SYSTEM_LOGOS_PATH, "/mnt/usb/logos").unwrap();

        let report = execute(&root, &prefs);
        assert_eq!(report.len(), 5);

        let logos = report.iter().find(|e| e.name == "system-logos").unwrap();
        assert!(logos.overridden);
        assert_eq!(logos.path, PathBuf::from("/mnt/usb/logos"));

        let logs = report.iter().find(|e| e.name == "logs").unwrap();
        assert!(!logs.overridden);
        assert_eq!(logs.path, PathBuf::from("/storage/emulated/0/Companion/logs"));
    }
}
