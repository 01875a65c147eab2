//! Application domain model.
//!
//! This module contains pure business logic (no FFI dependencies):
//! the stopwatch engine, its controller, preferences and constants.
//!
//! Platform-specific persistence is in `platform::macos::storage`.

pub mod constants;
pub mod controller;
pub mod prefs;
pub mod stopwatch;

pub use constants::*;
pub use controller::{Notifier, StopwatchController, TickScheduler};
pub use prefs::Preferences;
pub use stopwatch::{format_elapsed, Stopwatch, Transition};
