//! Settings window module.

pub mod window;

pub use window::{close_settings_window, open_settings_window};
