//! Status bar (menu bar) item showing the elapsed time.
//!
//! The item's title is the stopwatch display. A left click toggles, a
//! double click resets, and a right click pops the dropdown menu with:
//! - Start / Pause
//! - Reset
//! - Settings...
//! - Quit Timely

use anyhow::{bail, Result};

use crate::model::constants::ZERO_DISPLAY;
use crate::platform::macos::ffi::bridge::{
    get_class, id, msg_send, nil, nsstring, nsstring_id, sel, NSEventMask, ObjectExt,
};

/// Install the status bar item and wire it to the host object.
///
/// Returns the item's button so the display sink can update its title.
///
/// # Safety
/// Must be called from the main thread, after the app is initialized.
pub unsafe fn install_status_bar(host: id) -> Result<id> {
    let status_bar: id = msg_send![get_class("NSStatusBar"), systemStatusBar];

    // NSVariableStatusItemLength = -1.0
    let status_item: id = msg_send![status_bar, statusItemWithLength: -1.0f64];

    // Keep a strong reference so it doesn't get deallocated
    let _: id = msg_send![status_item, retain];

    let button: id = msg_send![status_item, button];
    if button == nil {
        bail!("status item has no button");
    }

    let _: () = msg_send![button, setTitle: nsstring_id(ZERO_DISPLAY)];
    let _: () = msg_send![button, setTarget: host];
    let _: () = msg_send![button, setAction: sel!(statusItemClicked:)];

    // Deliver both left and right mouse-up so a right click can reach the
    // action handler and pop the menu.
    let mask = NSEventMask::LeftMouseUp | NSEventMask::RightMouseUp;
    let _: i64 = msg_send![button, sendActionOn: mask];

    // The menu is NOT set on the item permanently: that would swallow left
    // clicks. It is attached only while popping it for a right click.
    let menu = create_status_menu(host);
    let _: id = msg_send![menu, retain];

    (*host).store_ivar::<id>("_statusItem", status_item);
    (*host).store_ivar::<id>("_statusButton", button);
    (*host).store_ivar::<id>("_statusMenu", menu);

    Ok(button)
}

/// Create the dropdown menu for the status bar item.
unsafe fn create_status_menu(host: id) -> id {
    let menu: id = msg_send![get_class("NSMenu"), alloc];
    let menu: id = msg_send![menu, init];

    // Start / Pause item (space)
    let toggle_item: id = msg_send![get_class("NSMenuItem"), alloc];
    let toggle_item: id = msg_send![
        toggle_item,
        initWithTitle: nsstring_id("Start / Pause"),
        action: sel!(menuToggle:),
        keyEquivalent: nsstring_id(" ")
    ];
    let _: () = msg_send![toggle_item, setTarget: host];
    let _: () = msg_send![menu, addItem: toggle_item];

    // Reset item
    let reset_item: id = msg_send![get_class("NSMenuItem"), alloc];
    let reset_item: id = msg_send![
        reset_item,
        initWithTitle: nsstring_id("Reset"),
        action: sel!(menuReset:),
        keyEquivalent: nsstring_id("r")
    ];
    let _: () = msg_send![reset_item, setTarget: host];
    let _: () = msg_send![menu, addItem: reset_item];

    // Separator
    let separator: id = msg_send![get_class("NSMenuItem"), separatorItem];
    let _: () = msg_send![menu, addItem: separator];

    // Settings item
    let settings_item: id = msg_send![get_class("NSMenuItem"), alloc];
    let settings_item: id = msg_send![
        settings_item,
        initWithTitle: nsstring_id("Settings..."),
        action: sel!(menuSettings:),
        keyEquivalent: nsstring_id(",")
    ];
    let _: () = msg_send![settings_item, setTarget: host];
    let _: () = msg_send![menu, addItem: settings_item];

    // Separator
    let separator2: id = msg_send![get_class("NSMenuItem"), separatorItem];
    let _: () = msg_send![menu, addItem: separator2];

    // Quit item (no shortcut - direct quit without confirmation)
    let quit_item: id = msg_send![get_class("NSMenuItem"), alloc];
    let quit_item: id = msg_send![
        quit_item,
        initWithTitle: nsstring_id("Quit Timely"),
        action: sel!(menuQuit:),
        keyEquivalent: nsstring_id("q")
    ];
    let _: () = msg_send![quit_item, setTarget: host];
    let _: () = msg_send![menu, addItem: quit_item];

    menu
}

/// Pop the dropdown menu under the status item.
///
/// # Safety
/// Must be called from the main thread with a valid host object.
pub unsafe fn show_status_menu(host: id) {
    let status_item: id = *(*host).load_ivar::<id>("_statusItem");
    let menu: id = *(*host).load_ivar::<id>("_statusMenu");
    let button: id = *(*host).load_ivar::<id>("_statusButton");
    if status_item == nil || menu == nil || button == nil {
        return;
    }

    // Attach the menu just long enough for the synthesized click to track
    // it, then detach so plain left clicks keep reaching the action.
    let _: () = msg_send![status_item, setMenu: menu];
    let _: () = msg_send![button, performClick: nil];
    let _: () = msg_send![status_item, setMenu: nil];
}

/// Replace the status button title with the given display string.
///
/// # Safety
/// Must be called from the main thread; `button` must be the status button.
pub unsafe fn set_status_title(button: id, text: &str) {
    if button == nil {
        return;
    }
    let title = nsstring(text);
    let _: () = msg_send![button, setTitle: &*title];
}
