//! Main-thread event dispatch.

pub mod dispatcher;

pub use dispatcher::dispatch_events;
