//! Notification-center observers for app lifecycle events.
//!
//! Activation and deactivation are delivered to the stopwatch as explicit
//! events on the main thread, through the same bus/dispatcher path as user
//! actions; the termination observer cancels the outstanding tick so no
//! callback fires after teardown.

use block2::RcBlock;

use crate::events::{publish, AppEvent};
use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, nil};
use crate::platform::macos::handlers::dispatch_events;
use crate::platform::macos::ui::with_controller;

/// Observe application activation and deactivation.
///
/// # Safety
/// - `host` must be a valid, non-null host object for the app's lifetime.
/// - Must be called from main thread with valid autorelease pool.
pub unsafe fn install_activation_observers(host: id) {
    let center: id = msg_send![get_class("NSNotificationCenter"), defaultCenter];
    let queue: id = nil; // main thread

    let add_obs = |name_cstr: &std::ffi::CStr, event: AppEvent| {
        let name: id = msg_send![get_class("NSString"), stringWithUTF8String: name_cstr.as_ptr()];
        let block = RcBlock::new(move |_note: id| {
            publish(event.clone());
            unsafe {
                dispatch_events(host);
            }
        });
        let _: id = msg_send![
            center,
            addObserverForName: name,
            object: nil,
            queue: queue,
            usingBlock: &*block
        ];
    };

    add_obs(
        c"NSApplicationDidBecomeActiveNotification",
        AppEvent::AppActivated,
    );
    add_obs(
        c"NSApplicationDidResignActiveNotification",
        AppEvent::AppDeactivated,
    );
}

/// Cancel the tick source when the application terminates.
///
/// # Safety
/// - `host` must be a valid, non-null host object for the app's lifetime.
/// - Must be called from main thread with valid autorelease pool.
pub unsafe fn install_termination_observer(host: id) {
    let center: id = msg_send![get_class("NSNotificationCenter"), defaultCenter];

    let block = RcBlock::new(move |_note: id| unsafe {
        with_controller(host, |c| c.shutdown());
    });

    let name: id = msg_send![
        get_class("NSString"),
        stringWithUTF8String: c"NSApplicationWillTerminateNotification".as_ptr()
    ];
    let _: id = msg_send![
        center,
        addObserverForName: name,
        object: nil,
        queue: nil,
        usingBlock: &*block
    ];
}
