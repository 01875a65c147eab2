//! UI components: host object, status bar item, settings window.

pub mod host;
pub mod settings;
pub mod status_bar;

pub use host::{attach_controller, create_host, with_controller};
pub use settings::{close_settings_window, open_settings_window};
pub use status_bar::{install_status_bar, set_status_title, show_status_menu};
