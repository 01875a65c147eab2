//! System event observers.

pub mod observers;

pub use observers::{install_activation_observers, install_termination_observer};
