//! Persistence of preferences to NSUserDefaults.

use crate::model::constants::*;
use crate::model::Preferences;
use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, nil, nsstring_id};

/// Reads a boolean from NSUserDefaults, returns default if not set.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn prefs_get_bool(key: &str, default: bool) -> bool {
    let ud: id = msg_send![get_class("NSUserDefaults"), standardUserDefaults];
    let k = nsstring_id(key);
    let obj: id = msg_send![ud, objectForKey: k];
    if obj == nil {
        default
    } else {
        msg_send![ud, boolForKey: k]
    }
}

/// Saves a boolean to NSUserDefaults.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn prefs_set_bool(key: &str, val: bool) {
    let ud: id = msg_send![get_class("NSUserDefaults"), standardUserDefaults];
    let k = nsstring_id(key);
    let _: () = msg_send![ud, setBool: val, forKey: k];
}

/// Loads all preferences from NSUserDefaults.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn load_preferences() -> Preferences {
    Preferences {
        show_milliseconds: prefs_get_bool(PREF_SHOW_MILLISECONDS, DEFAULT_SHOW_MILLISECONDS),
        start_on_launch: prefs_get_bool(PREF_START_ON_LAUNCH, DEFAULT_START_ON_LAUNCH),
        always_on_top: prefs_get_bool(PREF_ALWAYS_ON_TOP, DEFAULT_ALWAYS_ON_TOP),
    }
}
