pub mod doctor;
pub mod paths;
pub mod prefs;
