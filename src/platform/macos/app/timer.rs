//! Periodic tick source backed by NSTimer.
//!
//! The timer fires `tickFired:` on the host object every 10 ms while the
//! stopwatch runs. It is added to the run loop in common modes so the
//! display keeps refreshing while the status-bar menu is open.

use crate::model::constants::TICK_INTERVAL;
use crate::model::TickScheduler;
use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, nil, nsstring_id, sel, YES};

/// Owns the recurring NSTimer for one host object.
///
/// Main-thread only: created, scheduled and cancelled on the main run loop.
pub struct TickTimer {
    target: id,
    timer: id,
}

impl TickTimer {
    /// # Safety
    /// `target` must be a valid host object responding to `tickFired:` for
    /// as long as this scheduler lives.
    pub unsafe fn new(target: id) -> Self {
        Self { target, timer: nil }
    }
}

impl TickScheduler for TickTimer {
    fn schedule(&mut self) {
        // Idempotent: a live timer stays as is.
        if self.timer != nil {
            return;
        }
        unsafe {
            let timer: id = msg_send![
                get_class("NSTimer"),
                timerWithTimeInterval: TICK_INTERVAL,
                target: self.target,
                selector: sel!(tickFired:),
                userInfo: nil,
                repeats: YES
            ];
            // Common modes keep the timer firing during modal menus; the run
            // loop retains the timer until it is invalidated.
            let run_loop: id = msg_send![get_class("NSRunLoop"), currentRunLoop];
            let common_modes = nsstring_id("kCFRunLoopCommonModes");
            let _: () = msg_send![run_loop, addTimer: timer, forMode: common_modes];
            self.timer = timer;
        }
    }

    fn cancel(&mut self) {
        if self.timer == nil {
            return;
        }
        unsafe {
            let _: () = msg_send![self.timer, invalidate];
        }
        self.timer = nil;
    }
}
