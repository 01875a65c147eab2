//! macOS entry point: builds the status item and wires the controller.

use anyhow::Result;
use tracing::info;

use crate::events::{publish, AppEvent};
use crate::model::StopwatchController;
use crate::platform::macos::app::{SystemSound, TickTimer};
use crate::platform::macos::ffi::bridge::{autoreleasepool, id, msg_send, NSApp};
use crate::platform::macos::handlers::dispatch_events;
use crate::platform::macos::input::{install_activation_observers, install_termination_observer};
use crate::platform::macos::storage::load_preferences;
use crate::platform::macos::ui::{
    attach_controller, create_host, install_status_bar, set_status_title,
};

/// Build the UI and hand control to the AppKit run loop. Returns only if
/// setup fails; a normal quit terminates the process from within `run`.
pub fn run() -> Result<()> {
    autoreleasepool(|| unsafe {
        let app = NSApp();
        // NSApplicationActivationPolicyAccessory = 1: menu-bar only, no Dock
        // icon or app switcher entry.
        let _: bool = msg_send![app, setActivationPolicy: 1i64];

        let prefs = load_preferences();
        info!(
            show_milliseconds = prefs.show_milliseconds,
            start_on_launch = prefs.start_on_launch,
            always_on_top = prefs.always_on_top,
            "loaded preferences"
        );

        let host = create_host();
        let button = install_status_bar(host)?;

        let mut controller = StopwatchController::new(
            Box::new(TickTimer::new(host)),
            prefs.show_milliseconds,
        );
        controller.subscribe(Box::new(move |text| unsafe {
            set_status_title(button, text);
        }));
        controller.set_notifier(Box::new(SystemSound));
        attach_controller(host, controller);

        install_activation_observers(host);
        install_termination_observer(host);

        if prefs.start_on_launch {
            publish(AppEvent::ToggleStopwatch);
            dispatch_events(host);
        }

        info!("entering run loop");
        let _: () = msg_send![app, run];
        Ok(())
    })
}
