//! Stopwatch engine (pure Rust, no FFI).
//!
//! The engine is an elapsed-time accumulator with two states, Running and
//! Paused. Time is injected as `now` (seconds on a wall-clock scale, e.g.
//! CFAbsoluteTime) so every operation is deterministic and testable without
//! a real clock.

/// Outcome of a [`Stopwatch::toggle`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The stopwatch went from Paused to Running.
    Started,
    /// The stopwatch went from Running to Paused.
    Paused,
}

/// Elapsed-time accumulator driven by start/pause/reset transitions.
///
/// Invariant: the displayed elapsed time is `accumulated` when paused and
/// `now - start_epoch` when running; it is never negative and never decreases
/// while running.
#[derive(Debug, Clone, PartialEq)]
pub struct Stopwatch {
    running: bool,
    /// Wall-clock instant corresponding to zero elapsed time for the current
    /// run segment. `Some` iff running.
    start_epoch: Option<f64>,
    /// Elapsed seconds accrued across prior run segments.
    accumulated: f64,
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

impl Stopwatch {
    /// A paused stopwatch with zero accumulated time.
    pub fn new() -> Self {
        Self {
            running: false,
            start_epoch: None,
            accumulated: 0.0,
        }
    }

    /// Whether the stopwatch is actively accumulating time.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Elapsed seconds accrued across completed run segments.
    pub fn accumulated(&self) -> f64 {
        self.accumulated
    }

    /// Begin (or resume) accumulating time.
    ///
    /// Backdates the epoch by the accumulated time so resuming preserves
    /// prior elapsed time. Returns `false` (no-op) if already running, so a
    /// caller can avoid re-registering the tick source.
    pub fn start(&mut self, now: f64) -> bool {
        if self.running {
            return false;
        }
        self.start_epoch = Some(now - self.accumulated);
        self.running = true;
        true
    }

    /// Stop accumulating, folding the current segment into `accumulated`.
    ///
    /// Returns `false` (no-op) if already paused.
    pub fn pause(&mut self, now: f64) -> bool {
        if !self.running {
            return false;
        }
        self.accumulated = self.segment_elapsed(now);
        self.start_epoch = None;
        self.running = false;
        true
    }

    /// Pause and zero the accumulator. Returns `true` if the stopwatch was
    /// running (the caller must cancel its tick source in that case).
    pub fn reset(&mut self, now: f64) -> bool {
        let was_running = self.pause(now);
        self.accumulated = 0.0;
        was_running
    }

    /// Pause if running, start otherwise.
    pub fn toggle(&mut self, now: f64) -> Transition {
        if self.running {
            self.pause(now);
            Transition::Paused
        } else {
            self.start(now);
            Transition::Started
        }
    }

    /// Current elapsed seconds. Pure, no side effects.
    pub fn current_elapsed(&self, now: f64) -> f64 {
        if self.running {
            self.segment_elapsed(now)
        } else {
            self.accumulated
        }
    }

    fn segment_elapsed(&self, now: f64) -> f64 {
        match self.start_epoch {
            // Clamp so a skewed clock can never drive the display backwards
            // past what was already accrued, nor below zero.
            Some(epoch) => (now - epoch).max(self.accumulated).max(0.0),
            None => self.accumulated,
        }
    }
}

/// Render elapsed seconds as `HH:MM:SS`, or `HH:MM:SS:T` with a single
/// truncated tenths digit when `show_tenths` is set.
///
/// Hours, minutes and seconds come from integer division/modulo on whole
/// seconds; the tenths digit is truncated from the fractional remainder, not
/// rounded (59.99 renders as `00:00:59:9`).
pub fn format_elapsed(seconds: f64, show_tenths: bool) -> String {
    let total = seconds.max(0.0);
    let whole = total as u64;
    let hours = whole / 3600;
    let minutes = (whole % 3600) / 60;
    let secs = whole % 60;
    if show_tenths {
        let tenths = ((total - whole as f64) * 10.0) as u64 % 10;
        format!("{:02}:{:02}:{:02}:{}", hours, minutes, secs, tenths)
    } else {
        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn starts_paused_and_zeroed() {
        let sw = Stopwatch::new();
        assert!(!sw.is_running());
        assert!(approx_eq(sw.current_elapsed(1000.0), 0.0));
    }

    #[test]
    fn elapsed_is_zero_right_after_start() {
        let mut sw = Stopwatch::new();
        sw.start(500.0);
        assert!(approx_eq(sw.current_elapsed(500.0), 0.0));
    }

    #[test]
    fn start_backdates_epoch_by_accumulated_time() {
        let mut sw = Stopwatch::new();
        sw.start(10.0);
        sw.pause(13.5);
        sw.start(100.0);
        assert!(approx_eq(sw.current_elapsed(100.0), 3.5));
        assert!(approx_eq(sw.current_elapsed(102.0), 5.5));
    }

    #[test]
    fn start_twice_is_a_noop() {
        let mut sw = Stopwatch::new();
        assert!(sw.start(10.0));
        assert!(!sw.start(20.0));
        // The second call must not move the epoch.
        assert!(approx_eq(sw.current_elapsed(25.0), 15.0));
    }

    #[test]
    fn pause_when_paused_is_a_noop() {
        let mut sw = Stopwatch::new();
        assert!(!sw.pause(10.0));
        assert!(approx_eq(sw.current_elapsed(10.0), 0.0));
    }

    #[test]
    fn reset_zeroes_regardless_of_state() {
        let mut sw = Stopwatch::new();
        sw.start(0.0);
        assert!(sw.reset(7.0));
        assert!(!sw.is_running());
        assert!(approx_eq(sw.accumulated(), 0.0));

        // Reset from Paused too.
        sw.start(10.0);
        sw.pause(12.0);
        assert!(!sw.reset(13.0));
        assert!(approx_eq(sw.current_elapsed(13.0), 0.0));
    }

    #[test]
    fn toggle_alternates_states() {
        let mut sw = Stopwatch::new();
        assert_eq!(sw.toggle(0.0), Transition::Started);
        assert!(sw.is_running());
        assert_eq!(sw.toggle(2.5), Transition::Paused);
        assert!(!sw.is_running());
        assert!(approx_eq(sw.accumulated(), 2.5));
    }

    #[test]
    fn elapsed_never_goes_backwards_on_clock_skew() {
        let mut sw = Stopwatch::new();
        sw.start(10.0);
        sw.pause(15.0);
        sw.start(20.0);
        // Clock jumped back before the resume instant.
        assert!(sw.current_elapsed(14.0) >= 5.0);
        sw.pause(14.0);
        assert!(sw.accumulated() >= 5.0);
    }

    #[test]
    fn format_whole_hours_minutes_seconds() {
        assert_eq!(format_elapsed(3661.05, false), "01:01:01");
        assert_eq!(format_elapsed(3661.05, true), "01:01:01:0");
    }

    #[test]
    fn format_truncates_tenths_digit() {
        assert_eq!(format_elapsed(59.99, true), "00:00:59:9");
        assert_eq!(format_elapsed(0.09, true), "00:00:00:0");
    }

    #[test]
    fn format_clamps_negative_input_to_zero() {
        assert_eq!(format_elapsed(-1.0, false), "00:00:00");
        assert_eq!(format_elapsed(-1.0, true), "00:00:00:0");
    }

    #[test]
    fn format_zero_matches_constants() {
        use crate::model::constants::{ZERO_DISPLAY, ZERO_DISPLAY_TENTHS};
        assert_eq!(format_elapsed(0.0, false), ZERO_DISPLAY);
        assert_eq!(format_elapsed(0.0, true), ZERO_DISPLAY_TENTHS);
    }
}
