//! NSUserDefaults persistence.

pub mod preferences;

pub use preferences::{load_preferences, prefs_get_bool, prefs_set_bool};
