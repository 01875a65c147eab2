//! Thin bridge over the objc2 ecosystem.
//!
//! Gives the UI code the loosely-typed `id` vocabulary AppKit glue wants,
//! plus small helpers for NSString creation, class lookup and ivar access.

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]

pub use objc2::rc::Retained;
pub use objc2::runtime::{AnyClass, AnyObject, Bool, Sel};
pub use objc2::{class, msg_send, sel};

pub use objc2_foundation::{NSPoint, NSRect, NSSize, NSString};

pub use objc2_app_kit::{NSEventMask, NSEventType, NSWindowStyleMask};

/// Objective-C object pointer. Prefer typed pointers where the type is
/// statically known; `id` is for the dynamic AppKit plumbing.
pub type id = *mut AnyObject;

/// Null object pointer.
pub const nil: id = std::ptr::null_mut();

/// Objective-C BOOL constants (u8, not Rust bool).
pub const YES: Bool = Bool::YES;
pub const NO: Bool = Bool::NO;

/// Get the shared NSApplication instance.
#[inline]
#[allow(non_snake_case)]
pub fn NSApp() -> id {
    unsafe { msg_send![class!(NSApplication), sharedApplication] }
}

/// Create a retained NSString from a Rust string slice.
#[inline]
pub fn nsstring(s: &str) -> Retained<NSString> {
    NSString::from_str(s)
}

/// Create an NSString and return it as a raw id pointer.
///
/// The returned pointer is retained; for the app-lifetime strings this crate
/// passes to AppKit (titles, key equivalents) that leak is intentional.
#[inline]
pub fn nsstring_id(s: &str) -> id {
    Retained::into_raw(NSString::from_str(s)) as id
}

/// Get a class by name, panicking if not found.
#[inline]
pub fn get_class(name: &str) -> &'static AnyClass {
    let c_name = std::ffi::CString::new(name).expect("Invalid class name");
    AnyClass::get(&c_name).unwrap_or_else(|| panic!("Class '{}' not found", name))
}

use objc2::encode::Encode;

/// Extension trait for accessing instance variables on `AnyObject`.
pub trait ObjectExt {
    /// Load a reference to an instance variable.
    ///
    /// # Safety
    /// The ivar must exist with type T; UI objects are main-thread only.
    unsafe fn load_ivar<T: Encode>(&self, name: &str) -> &T;

    /// Store a value in an instance variable.
    ///
    /// # Safety
    /// The ivar must exist with type T; UI objects are main-thread only.
    unsafe fn store_ivar<T: Encode>(&mut self, name: &str, value: T);
}

impl ObjectExt for AnyObject {
    unsafe fn load_ivar<T: Encode>(&self, name: &str) -> &T {
        let c_name = std::ffi::CString::new(name).unwrap();
        let ivar = self
            .class()
            .instance_variable(&c_name)
            .unwrap_or_else(|| panic!("ivar '{}' not found", name));
        ivar.load::<T>(self)
    }

    unsafe fn store_ivar<T: Encode>(&mut self, name: &str, value: T) {
        let c_name = std::ffi::CString::new(name).unwrap();
        let ivar = self
            .class()
            .instance_variable(&c_name)
            .unwrap_or_else(|| panic!("ivar '{}' not found", name));
        *ivar.load_mut::<T>(self) = value;
    }
}

/// Run a closure within an autorelease pool.
#[inline]
pub fn autoreleasepool<R, F: FnOnce() -> R>(f: F) -> R {
    unsafe {
        let pool: id = msg_send![get_class("NSAutoreleasePool"), new];
        let result = f();
        let _: () = msg_send![pool, drain];
        result
    }
}
