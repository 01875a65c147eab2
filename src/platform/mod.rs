//! Platform-specific implementations.
//!
//! Only macOS is supported: the status bar item, NSTimer tick source,
//! NSUserDefaults storage and the settings window all live here.

#[cfg(target_os = "macos")]
pub mod macos;

#[cfg(target_os = "macos")]
pub use macos::*;
