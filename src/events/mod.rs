//! Event system for decoupled inter-module communication.
//!
//! A simple publish/drain mechanism over std `mpsc` channels:
//!
//! ```text
//! status button / menu / observers ──publish()──▶ EventBus
//!                                                    │ drain_events()
//!                                                    ▼
//!                                               Dispatcher (main thread)
//! ```
//!
//! Producers never execute actions themselves; they publish an [`AppEvent`]
//! and the dispatcher runs the corresponding action on the main thread,
//! keeping every stopwatch mutation on one serialized context.
//!
//! - [`types`]: event definitions (`AppEvent` enum)
//! - [`bus`]: `EventBus` and `EventPublisher`
//! - [`global`]: static access functions

pub mod bus;
pub mod global;
pub mod types;

pub use bus::{EventBus, EventPublisher};
pub use global::{drain_events, init_event_bus, publish, publisher};
pub use types::AppEvent;
