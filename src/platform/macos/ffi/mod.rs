//! FFI bindings for macOS.
//!
//! The objc2 bridge lives in [`bridge`]; the CoreFoundation clock used as
//! the stopwatch time source is declared here.

pub mod bridge;

#[link(name = "CoreFoundation", kind = "framework")]
extern "C" {
    /// Seconds since the CoreFoundation reference date. This is the `now`
    /// fed to every stopwatch operation, sampled once per tick or event.
    pub fn CFAbsoluteTimeGetCurrent() -> f64;
}

/// NSFloatingWindowLevel, used when the always-on-top preference is set.
pub fn floating_window_level() -> i64 {
    3
}

/// NSNormalWindowLevel.
pub fn normal_window_level() -> i64 {
    0
}
