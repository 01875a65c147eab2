//! Settings window.
//!
//! A small modal panel with one checkbox per preference. Changes take
//! effect immediately and persist through NSUserDefaults.

use std::sync::atomic::{AtomicBool, Ordering};

use block2::RcBlock;

use crate::events::{publish, AppEvent};
use crate::platform::macos::ffi::bridge::{
    get_class, id, msg_send, nil, nsstring_id, sel, NSApp, NSEventMask, NSPoint, NSRect, NSSize,
    NSWindowStyleMask, ObjectExt, Sel, NO, YES,
};
use crate::platform::macos::ffi::{floating_window_level, normal_window_level};
use crate::platform::macos::handlers::dispatch_events;
use crate::platform::macos::storage::load_preferences;

/// Guard to prevent multiple settings windows
static SETTINGS_OPENING: AtomicBool = AtomicBool::new(false);

/// Create a switch-style checkbox wired to a host action.
unsafe fn make_checkbox(host: id, x: f64, y: f64, title: &str, on: bool, action: Sel) -> id {
    let checkbox: id = msg_send![get_class("NSButton"), alloc];
    let checkbox: id = msg_send![
        checkbox,
        initWithFrame: NSRect::new(NSPoint::new(x, y), NSSize::new(300.0, 24.0))
    ];
    // NSButtonTypeSwitch = 3
    let _: () = msg_send![checkbox, setButtonType: 3u64];
    let _: () = msg_send![checkbox, setTitle: nsstring_id(title)];
    let _: () = msg_send![checkbox, setState: if on { 1i64 } else { 0i64 }];
    let _: () = msg_send![checkbox, setTarget: host];
    let _: () = msg_send![checkbox, setAction: action];
    checkbox
}

/// Create and run the settings window modally.
///
/// # Safety
/// - `host` must be a valid, non-null host object.
/// - Must be called from main thread with valid autorelease pool.
pub unsafe fn open_settings_window(host: id) {
    // Atomic guard: only one settings window can be opening at a time
    let was_false = SETTINGS_OPENING
        .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
        .is_ok();

    if !was_false {
        return;
    }

    let prefs = load_preferences();

    let w = 340.0;
    let h = 210.0;

    let style = NSWindowStyleMask::Titled | NSWindowStyleMask::Closable;

    let settings: id = msg_send![get_class("NSWindow"), alloc];
    let settings: id = msg_send![
        settings,
        initWithContentRect: NSRect::new(NSPoint::new(0.0, 0.0), NSSize::new(w, h)),
        styleMask: style,
        backing: 2u64,  // NSBackingStoreBuffered
        defer: NO
    ];
    let _: () = msg_send![settings, setTitle: nsstring_id("Timely Settings")];
    let _: () = msg_send![settings, center];

    let level = if prefs.always_on_top {
        floating_window_level()
    } else {
        normal_window_level()
    };
    let _: () = msg_send![settings, setLevel: level];

    let content: id = msg_send![settings, contentView];

    let cb_millis = make_checkbox(
        host,
        20.0,
        h - 60.0,
        "Show milliseconds",
        prefs.show_milliseconds,
        sel!(showMillisecondsChanged:),
    );
    let _: () = msg_send![content, addSubview: cb_millis];

    let cb_launch = make_checkbox(
        host,
        20.0,
        h - 95.0,
        "Start timer on launch",
        prefs.start_on_launch,
        sel!(startOnLaunchChanged:),
    );
    let _: () = msg_send![content, addSubview: cb_launch];

    let cb_on_top = make_checkbox(
        host,
        20.0,
        h - 130.0,
        "Keep this window on top",
        prefs.always_on_top,
        sel!(alwaysOnTopChanged:),
    );
    let _: () = msg_send![content, addSubview: cb_on_top];

    // Close button (default, responds to Return)
    let close_button: id = msg_send![get_class("NSButton"), alloc];
    let close_button: id = msg_send![
        close_button,
        initWithFrame: NSRect::new(NSPoint::new(w - 110.0, 16.0), NSSize::new(90.0, 30.0))
    ];
    let _: () = msg_send![close_button, setTitle: nsstring_id("Close")];
    // NSBezelStyleRounded = 1
    let _: () = msg_send![close_button, setBezelStyle: 1u64];
    let _: () = msg_send![close_button, setKeyEquivalent: nsstring_id("\r")];
    let _: () = msg_send![close_button, setTarget: host];
    let _: () = msg_send![close_button, setAction: sel!(closeSettings:)];
    let _: () = msg_send![content, addSubview: close_button];

    (*host).store_ivar::<id>("_settingsWindow", settings);

    // Escape also closes the panel
    let key_block = RcBlock::new(move |event: id| -> id {
        unsafe {
            let keycode: u16 = msg_send![event, keyCode];
            if keycode == 53 {
                // 53 = Escape - stop modal
                let app: id = NSApp();
                let _: () = msg_send![app, stopModal];
                return nil;
            }
        }
        event
    });
    let key_mon: id = msg_send![
        get_class("NSEvent"),
        addLocalMonitorForEventsMatchingMask: NSEventMask::KeyDown,
        handler: &*key_block
    ];

    // Force activation and show window, then run modal
    let app: id = NSApp();
    let _: () = msg_send![app, activateIgnoringOtherApps: YES];
    let _: () = msg_send![settings, makeKeyAndOrderFront: nil];

    let _modal_result: i64 = msg_send![app, runModalForWindow: settings];

    // Modal ended - clean up
    let _: () = msg_send![get_class("NSEvent"), removeMonitor: key_mon];
    let _: () = msg_send![settings, orderOut: nil];
    (*host).store_ivar::<id>("_settingsWindow", nil);

    // Reset atomic guard
    SETTINGS_OPENING.store(false, Ordering::SeqCst);

    publish(AppEvent::SettingsClosed);
    dispatch_events(host);
}

/// Close the settings window by stopping the modal.
///
/// Cleanup happens in `open_settings_window` after the modal returns.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn close_settings_window(_host: id) {
    let app: id = NSApp();
    let _: () = msg_send![app, stopModal];
}
