//! File-extension allow-lists used to classify files under the media paths.
//!
//! Exposed as data for the media-resolution layer; comparison is ASCII
//! case-insensitive because scrapers are inconsistent about casing.

use std::path::Path;

pub const VIDEO_EXTENSIONS: [&str; 5] = ["mp4", "mkv", "webm", "avi", "mov"];
pub const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "webp", "gif"];
pub const AUDIO_EXTENSIONS: [&str; 5] = ["mp3", "ogg", "flac", "wav", "m4a"];

fn has_extension_in(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|allowed| allowed.eq_ignore_ascii_case(ext)))
}

pub fn is_video_file(path: &Path) -> bool {
    has_extension_in(path, &VIDEO_EXTENSIONS)
}

pub fn is_image_file(path: &Path) -> bool {
    has_extension_in(path, &IMAGE_EXTENSIONS)
}

pub fn is_audio_file(path: &Path) -> bool {
    has_extension_in(path, &AUDIO_EXTENSIONS)
}
