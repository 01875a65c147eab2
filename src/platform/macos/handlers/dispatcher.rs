//! Event dispatcher for handling application events.
//!
//! The dispatcher drains the event bus and executes the corresponding
//! actions. Producers (status button, menu items, observers) all run on the
//! main thread and call [`dispatch_events`] right after publishing, so every
//! stopwatch mutation happens on the same serialized context. The clock is
//! sampled once per event.

use tracing::{debug, info};

use crate::events::{drain_events, AppEvent};
use crate::platform::macos::ffi::bridge::{id, msg_send, nil, NSApp};
use crate::platform::macos::ffi::CFAbsoluteTimeGetCurrent;
use crate::platform::macos::ui::{open_settings_window, with_controller};

/// Drain all pending events from the global bus and execute them.
///
/// # Safety
/// Must be called from the main thread; `host` must be a valid host object.
pub unsafe fn dispatch_events(host: id) {
    for event in drain_events() {
        debug!(event = event.description(), "dispatching");
        dispatch_single_event(host, &event);
    }
}

/// # Safety
/// Must be called from the main thread; `host` must be a valid host object.
unsafe fn dispatch_single_event(host: id, event: &AppEvent) {
    let now = CFAbsoluteTimeGetCurrent();

    match event {
        AppEvent::ToggleStopwatch => {
            with_controller(host, |c| c.toggle(now));
        }

        AppEvent::ResetStopwatch => {
            with_controller(host, |c| c.reset(now));
        }

        AppEvent::OpenSettings => {
            open_settings_window(host);
        }

        AppEvent::RequestQuit => {
            terminate_app(host);
        }

        AppEvent::AppActivated => {
            with_controller(host, |c| c.app_activated(now));
        }

        AppEvent::AppDeactivated => {
            with_controller(host, |c| c.app_deactivated(now));
        }

        AppEvent::SettingsClosed => {
            with_controller(host, |c| c.refresh(now));
        }
    }
}

/// Cancel the tick source, then let AppKit tear the process down.
///
/// # Safety
/// Must be called from the main thread; `host` must be a valid host object.
unsafe fn terminate_app(host: id) {
    with_controller(host, |c| c.shutdown());
    info!("quit requested, terminating");
    let app = NSApp();
    let _: () = msg_send![app, terminate: nil];
}
