mod preference_store;
mod script_source;

pub use preference_store::PreferenceStore;
pub use script_source::ScriptSource;
