//! macOS-specific implementation using Cocoa/AppKit via objc2.
//!
//! - FFI bindings (objc2 bridge, CoreFoundation clock)
//! - App services (tick timer, transition sounds)
//! - Event dispatcher
//! - Notification observers (activation, termination)
//! - Storage (NSUserDefaults persistence)
//! - UI (status item, host object, settings window)

pub mod app;
pub mod ffi;
pub mod handlers;
pub mod input;
pub mod storage;
pub mod ui;

// Re-export commonly used items
pub use app::*;
pub use ffi::bridge;
pub use handlers::*;
pub use storage::*;
pub use ui::*;
