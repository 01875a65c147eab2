//! Application events for inter-module communication.
//!
//! These events represent high-level actions that can be published by any
//! module (status-item clicks, menu items, notification observers) and
//! handled by the event dispatcher. Pure Rust, no FFI, fully testable.

/// Application-level events for decoupled communication between modules.
///
/// Events flow from producers (status bar button, menu, observers) through
/// the EventBus to the dispatcher, which executes the appropriate actions on
/// the main thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    // === User Actions ===
    /// Start the stopwatch if paused, pause it if running (single click,
    /// menu item, space key equivalent).
    ToggleStopwatch,

    /// Pause and zero the stopwatch (double click, menu item).
    ResetStopwatch,

    /// Open the settings panel.
    OpenSettings,

    /// Quit the application.
    RequestQuit,

    // === Host Lifecycle Events ===
    /// The application became active.
    AppActivated,

    /// The application resigned active.
    AppDeactivated,

    /// The settings panel was closed by the user.
    SettingsClosed,
}

impl AppEvent {
    /// Returns true if handling this event reads the clock, i.e. it can
    /// change or re-render the elapsed time.
    pub fn touches_stopwatch(&self) -> bool {
        matches!(
            self,
            AppEvent::ToggleStopwatch
                | AppEvent::ResetStopwatch
                | AppEvent::AppActivated
                | AppEvent::AppDeactivated
                | AppEvent::SettingsClosed
        )
    }

    /// Human-readable description used in debug logging.
    pub fn description(&self) -> &'static str {
        match self {
            AppEvent::ToggleStopwatch => "Toggle start/pause",
            AppEvent::ResetStopwatch => "Reset stopwatch",
            AppEvent::OpenSettings => "Open settings panel",
            AppEvent::RequestQuit => "Quit application",
            AppEvent::AppActivated => "Application became active",
            AppEvent::AppDeactivated => "Application resigned active",
            AppEvent::SettingsClosed => "Settings panel closed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stopwatch_events_touch_the_stopwatch() {
        assert!(AppEvent::ToggleStopwatch.touches_stopwatch());
        assert!(AppEvent::ResetStopwatch.touches_stopwatch());
        assert!(AppEvent::AppActivated.touches_stopwatch());
        assert!(AppEvent::AppDeactivated.touches_stopwatch());
        assert!(AppEvent::SettingsClosed.touches_stopwatch());
    }

    #[test]
    fn window_and_quit_events_do_not() {
        assert!(!AppEvent::OpenSettings.touches_stopwatch());
        assert!(!AppEvent::RequestQuit.touches_stopwatch());
    }

    #[test]
    fn all_events_have_descriptions() {
        let events = [
            AppEvent::ToggleStopwatch,
            AppEvent::ResetStopwatch,
            AppEvent::OpenSettings,
            AppEvent::RequestQuit,
            AppEvent::AppActivated,
            AppEvent::AppDeactivated,
            AppEvent::SettingsClosed,
        ];
        for event in events {
            assert!(!event.description().is_empty());
        }
    }

    #[test]
    fn event_equality_and_clone() {
        let event = AppEvent::ToggleStopwatch;
        assert_eq!(event, event.clone());
        assert_ne!(AppEvent::ToggleStopwatch, AppEvent::ResetStopwatch);
    }
}
