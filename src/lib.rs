#![allow(unexpected_cfgs)] // Silence cfg warnings from objc macros

//! Menu-bar stopwatch for macOS.
//!
//! `model` and `events` are pure Rust and compile (and test) on any OS.
//! Everything that touches AppKit lives under `platform` behind
//! `cfg(target_os = "macos")`.

pub mod events;
pub mod model;

#[cfg(target_os = "macos")]
pub mod platform;

#[cfg(target_os = "macos")]
pub mod macos_main;

// Re-export the core types for convenience
pub use events::{AppEvent, EventBus, EventPublisher};
pub use model::{format_elapsed, Preferences, Stopwatch, StopwatchController};
