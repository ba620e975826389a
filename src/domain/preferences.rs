//! The closed table of user-configurable options and their defaults.
//!
//! The table is data: components look their overrides up here, the `prefs`
//! command validates keys against it, and nothing outside this module may add
//! a key at runtime. There is deliberately no key for the logs path.

pub const KEY_SCRIPTS_PATH: &str = "scripts_path";
pub const KEY_MEDIA_PATH: &str = "media_path";
pub const KEY_SYSTEM_IMAGES_PATH: &str = "system_images_path";
pub const KEY_SYSTEM_LOGOS_PATH: &str = "system_logos_path";
pub const KEY_VIDEO_ENABLED: &str = "video_enabled";
pub const KEY_MUSIC_ENABLED: &str = "music_enabled";
pub const KEY_MUSIC_PER_SYSTEM: &str = "music_per_system";
pub const KEY_CROSSFADE_MS: &str = "crossfade_ms";
pub const KEY_SETUP_COMPLETE: &str = "setup_complete";
pub const KEY_TUTORIAL_SHOWN: &str = "tutorial_shown";

/// Compiled-in default for one preference key. An empty `Text` default on a
/// path key means "use the computed location under the storage root".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefDefault {
    Text(&'static str),
    Flag(bool),
    Millis(u64),
}

pub const PREF_TABLE: [(&str, PrefDefault); 10] = [
    (KEY_SCRIPTS_PATH, PrefDefault::Text("")),
    (KEY_MEDIA_PATH, PrefDefault::Text("")),
    (KEY_SYSTEM_IMAGES_PATH, PrefDefault::Text("")),
    (KEY_SYSTEM_LOGOS_PATH, PrefDefault::Text("")),
    (KEY_VIDEO_ENABLED, PrefDefault::Flag(true)),
    (KEY_MUSIC_ENABLED, PrefDefault::Flag(true)),
    (KEY_MUSIC_PER_SYSTEM, PrefDefault::Flag(true)),
    (KEY_CROSSFADE_MS, PrefDefault::Millis(2000)),
    (KEY_SETUP_COMPLETE, PrefDefault::Flag(false)),
    (KEY_TUTORIAL_SHOWN, PrefDefault::Flag(false)),
];

/// Default for a key, or `None` when the key is not in the table.
pub fn default_for(key: &str) -> Option<PrefDefault> {
    PREF_TABLE.iter().find(|(k, _)| *k == key).map(|(_, d)| *d)
}

/// Every key in table order.
pub fn known_keys() -> impl Iterator<Item = &'static str> {
    PREF_TABLE.iter().map(|(k, _)| *k)
}
