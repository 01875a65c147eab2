//! User preferences (pure Rust, no FFI).
//!
//! Three boolean flags, persisted to NSUserDefaults by
//! `platform::macos::storage` and read at startup.

use super::constants::*;

/// Boolean preferences backing the settings panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preferences {
    /// Show the truncated tenths digit (`HH:MM:SS:T`) in the status bar.
    pub show_milliseconds: bool,
    /// Start the stopwatch immediately at launch.
    pub start_on_launch: bool,
    /// Float the settings window above normal windows. Host-UI only; the
    /// engine never reads this.
    pub always_on_top: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            show_milliseconds: DEFAULT_SHOW_MILLISECONDS,
            start_on_launch: DEFAULT_START_ON_LAUNCH,
            always_on_top: DEFAULT_ALWAYS_ON_TOP,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_all_off() {
        let prefs = Preferences::default();
        assert!(!prefs.show_milliseconds);
        assert!(!prefs.start_on_launch);
        assert!(!prefs.always_on_top);
    }
}
