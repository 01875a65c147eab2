//! Configuration constants and default values.
//!
//! This module contains all application constants including the tick cadence,
//! NSUserDefaults keys, and the zero display strings.

// === Timing ===

/// Recurring display-refresh interval in seconds while the stopwatch runs.
pub const TICK_INTERVAL: f64 = 0.01;

// === NSUserDefaults Keys ===

/// Key for the sub-second display preference.
pub const PREF_SHOW_MILLISECONDS: &str = "showMilliseconds";

/// Key for the start-on-launch preference.
pub const PREF_START_ON_LAUNCH: &str = "startOnLaunch";

/// Key for the always-on-top preference (settings window only).
pub const PREF_ALWAYS_ON_TOP: &str = "alwaysOnTop";

// === Preference Defaults ===

/// Sub-second digit hidden by default.
pub const DEFAULT_SHOW_MILLISECONDS: bool = false;

/// Stopwatch starts paused by default.
pub const DEFAULT_START_ON_LAUNCH: bool = false;

/// Settings window behaves as a normal window by default.
pub const DEFAULT_ALWAYS_ON_TOP: bool = false;

// === Display ===

/// Zero display without the tenths digit.
pub const ZERO_DISPLAY: &str = "00:00:00";

/// Zero display with the tenths digit.
pub const ZERO_DISPLAY_TENTHS: &str = "00:00:00:0";
