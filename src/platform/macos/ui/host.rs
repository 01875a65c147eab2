//! Host object for the status item.
//!
//! Registers an NSObject subclass that AppKit can target: it receives the
//! tick timer callback, status-button clicks, menu selections and settings
//! actions. The object owns the [`StopwatchController`] (boxed behind a raw
//! ivar), replacing the app-delegate-style global state the original design
//! would suggest. Every callback runs on the main thread; each publishes an
//! event and immediately drains the bus.

use std::ffi::c_void;

use objc2::runtime::{AnyClass, AnyObject, ClassBuilder, Sel};
use objc2::sel;

use crate::events::{publish, AppEvent};
use crate::model::constants::{PREF_ALWAYS_ON_TOP, PREF_SHOW_MILLISECONDS, PREF_START_ON_LAUNCH};
use crate::model::StopwatchController;
use crate::platform::macos::ffi::bridge::{id, msg_send, nil, NSApp, NSEventType, ObjectExt};
use crate::platform::macos::ffi::{
    floating_window_level, normal_window_level, CFAbsoluteTimeGetCurrent,
};
use crate::platform::macos::handlers::dispatch_events;
use crate::platform::macos::storage::prefs_set_bool;
use crate::platform::macos::ui::settings::close_settings_window;
use crate::platform::macos::ui::status_bar::show_status_menu;

/// Register the host class and create an instance.
///
/// # Safety
/// Must be called from the main thread.
pub unsafe fn create_host() -> id {
    let class_name = c"TimelyStatusHost";
    let host_class = if let Some(cls) = AnyClass::get(class_name) {
        cls
    } else {
        let superclass = AnyClass::get(c"NSObject").unwrap();
        let mut builder = ClassBuilder::new(class_name, superclass).unwrap();

        register_ivars(&mut builder);
        register_methods(&mut builder);

        builder.register()
    };

    let host: id = msg_send![host_class, new];
    initialize_host_ivars(host);
    host
}

unsafe fn register_ivars(builder: &mut ClassBuilder) {
    // Boxed StopwatchController, attached after the status item exists
    builder.add_ivar::<*mut c_void>(c"_controller");

    // Status bar refs
    builder.add_ivar::<id>(c"_statusItem");
    builder.add_ivar::<id>(c"_statusButton");
    builder.add_ivar::<id>(c"_statusMenu");

    // Settings UI refs
    builder.add_ivar::<id>(c"_settingsWindow");
}

unsafe fn register_methods(builder: &mut ClassBuilder) {
    // Tick source callback
    builder.add_method(
        sel!(tickFired:),
        tick_fired as unsafe extern "C-unwind" fn(_, _, _),
    );

    // Status button clicks
    builder.add_method(
        sel!(statusItemClicked:),
        status_item_clicked as unsafe extern "C-unwind" fn(_, _, _),
    );

    // Status menu actions
    builder.add_method(
        sel!(menuToggle:),
        menu_toggle as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(menuReset:),
        menu_reset as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(menuSettings:),
        menu_settings as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(menuQuit:),
        menu_quit as unsafe extern "C-unwind" fn(_, _, _),
    );

    // Settings panel actions
    builder.add_method(
        sel!(showMillisecondsChanged:),
        show_milliseconds_changed as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(startOnLaunchChanged:),
        start_on_launch_changed as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(alwaysOnTopChanged:),
        always_on_top_changed as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(closeSettings:),
        close_settings as unsafe extern "C-unwind" fn(_, _, _),
    );
}

unsafe fn initialize_host_ivars(host: id) {
    (*host).store_ivar::<*mut c_void>("_controller", std::ptr::null_mut());
    (*host).store_ivar::<id>("_statusItem", nil);
    (*host).store_ivar::<id>("_statusButton", nil);
    (*host).store_ivar::<id>("_statusMenu", nil);
    (*host).store_ivar::<id>("_settingsWindow", nil);
}

/// Hand ownership of the controller to the host object.
///
/// # Safety
/// `host` must be a valid host object without an attached controller.
pub unsafe fn attach_controller(host: id, controller: StopwatchController) {
    let boxed = Box::new(controller);
    (*host).store_ivar::<*mut c_void>("_controller", Box::into_raw(boxed) as *mut c_void);
}

/// Run a closure against the host's controller, if attached.
///
/// # Safety
/// Must be called from the main thread; `host` must be a valid host object.
/// The closure must not re-enter `with_controller` for the same host.
pub unsafe fn with_controller<R>(
    host: id,
    f: impl FnOnce(&mut StopwatchController) -> R,
) -> Option<R> {
    let ptr = *(*host).load_ivar::<*mut c_void>("_controller") as *mut StopwatchController;
    if ptr.is_null() {
        None
    } else {
        Some(f(&mut *ptr))
    }
}

// ===== Tick source =====

unsafe extern "C-unwind" fn tick_fired(this: &mut AnyObject, _cmd: Sel, _timer: id) {
    let host = this as *mut _ as id;
    let now = CFAbsoluteTimeGetCurrent();
    with_controller(host, |c| c.tick(now));
}

// ===== Status button =====

unsafe extern "C-unwind" fn status_item_clicked(this: &mut AnyObject, _cmd: Sel, _sender: id) {
    let host = this as *mut _ as id;

    let app = NSApp();
    let event: id = msg_send![app, currentEvent];
    if event != nil {
        let event_type: NSEventType = msg_send![event, r#type];
        if event_type == NSEventType::RightMouseUp {
            show_status_menu(host);
            return;
        }

        let clicks: i64 = msg_send![event, clickCount];
        if clicks >= 2 {
            // A double click delivers a click-count-1 event first, which
            // toggles; reset supersedes it (pause + zero) either way.
            publish(AppEvent::ResetStopwatch);
            dispatch_events(host);
            return;
        }
    }

    publish(AppEvent::ToggleStopwatch);
    dispatch_events(host);
}

// ===== Status menu =====

unsafe extern "C-unwind" fn menu_toggle(this: &mut AnyObject, _cmd: Sel, _sender: id) {
    let host = this as *mut _ as id;
    publish(AppEvent::ToggleStopwatch);
    dispatch_events(host);
}

unsafe extern "C-unwind" fn menu_reset(this: &mut AnyObject, _cmd: Sel, _sender: id) {
    let host = this as *mut _ as id;
    publish(AppEvent::ResetStopwatch);
    dispatch_events(host);
}

unsafe extern "C-unwind" fn menu_settings(this: &mut AnyObject, _cmd: Sel, _sender: id) {
    let host = this as *mut _ as id;
    publish(AppEvent::OpenSettings);
    dispatch_events(host);
}

unsafe extern "C-unwind" fn menu_quit(this: &mut AnyObject, _cmd: Sel, _sender: id) {
    let host = this as *mut _ as id;
    publish(AppEvent::RequestQuit);
    dispatch_events(host);
}

// ===== Settings panel =====

unsafe fn checkbox_on(sender: id) -> bool {
    // NSControlStateValueOn = 1
    let state: i64 = msg_send![sender, state];
    state == 1
}

unsafe extern "C-unwind" fn show_milliseconds_changed(this: &mut AnyObject, _cmd: Sel, sender: id) {
    let host = this as *mut _ as id;
    let on = checkbox_on(sender);
    prefs_set_bool(PREF_SHOW_MILLISECONDS, on);

    let now = CFAbsoluteTimeGetCurrent();
    with_controller(host, |c| c.set_show_tenths(on, now));
}

unsafe extern "C-unwind" fn start_on_launch_changed(_this: &mut AnyObject, _cmd: Sel, sender: id) {
    // Takes effect on the next launch; nothing to update live.
    prefs_set_bool(PREF_START_ON_LAUNCH, checkbox_on(sender));
}

unsafe extern "C-unwind" fn always_on_top_changed(this: &mut AnyObject, _cmd: Sel, sender: id) {
    let on = checkbox_on(sender);
    prefs_set_bool(PREF_ALWAYS_ON_TOP, on);

    let window: id = *this.load_ivar::<id>("_settingsWindow");
    if window != nil {
        let level = if on {
            floating_window_level()
        } else {
            normal_window_level()
        };
        let _: () = msg_send![window, setLevel: level];
    }
}

unsafe extern "C-unwind" fn close_settings(this: &mut AnyObject, _cmd: Sel, _sender: id) {
    let host = this as *mut _ as id;
    close_settings_window(host);
}
