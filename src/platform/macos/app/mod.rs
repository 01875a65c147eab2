//! App services: the tick timer and transition sounds.

pub mod sound;
pub mod timer;

pub use sound::SystemSound;
pub use timer::TickTimer;
