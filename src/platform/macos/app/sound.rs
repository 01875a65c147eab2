//! Transition sounds via NSSound.
//!
//! Implements the controller's notify hook with short system sounds on
//! start and pause. A missing sound degrades to silence.

use crate::model::Notifier;
use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, nil, nsstring_id};

/// Plays named system sounds on stopwatch transitions.
pub struct SystemSound;

impl Notifier for SystemSound {
    fn started(&mut self) {
        play_named("Tink");
    }

    fn paused(&mut self) {
        play_named("Bottle");
    }
}

fn play_named(name: &str) {
    unsafe {
        let sound: id = msg_send![get_class("NSSound"), soundNamed: nsstring_id(name)];
        if sound != nil {
            let _: bool = msg_send![sound, play];
        }
    }
}
