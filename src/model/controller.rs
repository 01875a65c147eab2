//! Stopwatch controller: the single owner of stopwatch state.
//!
//! The controller wires the pure [`Stopwatch`](super::stopwatch::Stopwatch)
//! to its host through three explicit seams, replacing the app-delegate-style
//! global object the original design would suggest:
//!
//! - [`TickScheduler`]: host-provided start/stop of the recurring 10 ms
//!   display tick. Both calls must be idempotent.
//! - [`Notifier`]: optional hook for host side effects on transitions
//!   (a short sound on start/pause). The engine never plays audio itself.
//! - Display sinks: registered callbacks receiving the formatted elapsed
//!   time after every transition and every tick.
//!
//! All methods take `now` explicitly and must be called from one serialized
//! execution context (on macOS, the main run loop).

use tracing::debug;

use super::stopwatch::{format_elapsed, Stopwatch};

/// Host-provided control over the periodic tick source.
///
/// `schedule` is called when the stopwatch starts and again on app
/// re-activation while running; `cancel` on pause, reset and shutdown.
/// Implementations must tolerate repeated calls in either state.
pub trait TickScheduler {
    fn schedule(&mut self);
    fn cancel(&mut self);
}

/// Optional hook for transition side effects owned by the host.
pub trait Notifier {
    fn started(&mut self);
    fn paused(&mut self);
}

/// Callback receiving the freshly formatted elapsed-time string.
pub type DisplaySink = Box<dyn FnMut(&str)>;

/// Owns the stopwatch state and pushes display updates to subscribers.
pub struct StopwatchController {
    watch: Stopwatch,
    scheduler: Box<dyn TickScheduler>,
    notifier: Option<Box<dyn Notifier>>,
    sinks: Vec<DisplaySink>,
    show_tenths: bool,
}

impl StopwatchController {
    pub fn new(scheduler: Box<dyn TickScheduler>, show_tenths: bool) -> Self {
        Self {
            watch: Stopwatch::new(),
            scheduler,
            notifier: None,
            sinks: Vec::new(),
            show_tenths,
        }
    }

    /// Register a display sink. It receives the current display immediately
    /// so a freshly created status item shows `00:00:00` without waiting for
    /// a tick.
    pub fn subscribe(&mut self, mut sink: DisplaySink) {
        sink(&self.display(self.watch.accumulated()));
        self.sinks.push(sink);
    }

    pub fn set_notifier(&mut self, notifier: Box<dyn Notifier>) {
        self.notifier = Some(notifier);
    }

    pub fn is_running(&self) -> bool {
        self.watch.is_running()
    }

    pub fn elapsed(&self, now: f64) -> f64 {
        self.watch.current_elapsed(now)
    }

    /// Start accumulating. No-op if already running; the tick source is only
    /// scheduled on an actual transition so it is never double-registered.
    pub fn start(&mut self, now: f64) {
        if !self.watch.start(now) {
            return;
        }
        debug!(now, "stopwatch started");
        self.scheduler.schedule();
        if let Some(n) = self.notifier.as_mut() {
            n.started();
        }
        self.publish(now);
    }

    /// Pause accumulation and cancel the tick source. No-op if paused.
    pub fn pause(&mut self, now: f64) {
        if !self.watch.pause(now) {
            return;
        }
        debug!(now, accumulated = self.watch.accumulated(), "stopwatch paused");
        self.scheduler.cancel();
        if let Some(n) = self.notifier.as_mut() {
            n.paused();
        }
        self.publish(now);
    }

    /// Pause and zero the accumulator; the zero display is pushed
    /// immediately.
    pub fn reset(&mut self, now: f64) {
        if self.watch.reset(now) {
            self.scheduler.cancel();
        }
        debug!(now, "stopwatch reset");
        self.publish(now);
    }

    /// Pause if running, start otherwise.
    pub fn toggle(&mut self, now: f64) {
        if self.watch.is_running() {
            self.pause(now);
        } else {
            self.start(now);
        }
    }

    /// Periodic display refresh while running.
    pub fn tick(&mut self, now: f64) {
        self.publish(now);
    }

    /// Re-push the current display (e.g. after the settings panel closes).
    pub fn refresh(&mut self, now: f64) {
        self.publish(now);
    }

    /// Flip the sub-second digit and re-render at once.
    pub fn set_show_tenths(&mut self, show_tenths: bool, now: f64) {
        self.show_tenths = show_tenths;
        self.publish(now);
    }

    /// The app became active. The stopwatch state is untouched; the tick
    /// source is re-armed if running, in case the host dropped it.
    pub fn app_activated(&mut self, now: f64) {
        if self.watch.is_running() {
            self.scheduler.schedule();
        }
        self.publish(now);
    }

    /// The app resigned active. The stopwatch keeps timing in the
    /// background; only the display refresh continues via the tick source.
    pub fn app_deactivated(&mut self, _now: f64) {}

    /// Cancel any outstanding tick before process exit so no callback fires
    /// after teardown. The state itself is not persisted.
    pub fn shutdown(&mut self) {
        debug!("stopwatch shutting down");
        self.scheduler.cancel();
    }

    fn display(&self, elapsed: f64) -> String {
        format_elapsed(elapsed, self.show_tenths)
    }

    fn publish(&mut self, now: f64) {
        let text = self.display(self.watch.current_elapsed(now));
        for sink in self.sinks.iter_mut() {
            sink(&text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records schedule/cancel calls so idempotence is observable.
    #[derive(Default)]
    struct FakeScheduler {
        calls: Rc<RefCell<Vec<&'static str>>>,
    }

    impl TickScheduler for FakeScheduler {
        fn schedule(&mut self) {
            self.calls.borrow_mut().push("schedule");
        }
        fn cancel(&mut self) {
            self.calls.borrow_mut().push("cancel");
        }
    }

    fn controller_with_spy() -> (StopwatchController, Rc<RefCell<Vec<&'static str>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let scheduler = FakeScheduler { calls: calls.clone() };
        (StopwatchController::new(Box::new(scheduler), false), calls)
    }

    #[test]
    fn start_schedules_tick_once() {
        let (mut ctrl, calls) = controller_with_spy();
        ctrl.start(10.0);
        ctrl.start(11.0);
        assert_eq!(calls.borrow().as_slice(), ["schedule"]);
    }

    #[test]
    fn pause_cancels_tick() {
        let (mut ctrl, calls) = controller_with_spy();
        ctrl.start(10.0);
        ctrl.pause(12.0);
        assert_eq!(calls.borrow().as_slice(), ["schedule", "cancel"]);
        assert!((ctrl.elapsed(12.0) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn reset_from_paused_does_not_touch_scheduler() {
        let (mut ctrl, calls) = controller_with_spy();
        ctrl.reset(5.0);
        assert!(calls.borrow().is_empty());
        assert!(!ctrl.is_running());
    }

    #[test]
    fn subscriber_gets_initial_zero_display() {
        let (mut ctrl, _calls) = controller_with_spy();
        let seen = Rc::new(RefCell::new(Vec::<String>::new()));
        let seen2 = seen.clone();
        ctrl.subscribe(Box::new(move |s| seen2.borrow_mut().push(s.to_string())));
        assert_eq!(seen.borrow().as_slice(), ["00:00:00"]);
    }

    #[test]
    fn transitions_and_ticks_push_display_updates() {
        let (mut ctrl, _calls) = controller_with_spy();
        let seen = Rc::new(RefCell::new(Vec::<String>::new()));
        let seen2 = seen.clone();
        ctrl.subscribe(Box::new(move |s| seen2.borrow_mut().push(s.to_string())));

        ctrl.start(100.0);
        ctrl.tick(101.25);
        ctrl.pause(102.0);
        assert_eq!(
            seen.borrow().as_slice(),
            ["00:00:00", "00:00:00", "00:00:01", "00:00:02"]
        );
    }

    #[test]
    fn show_tenths_flip_rerenders_immediately() {
        let (mut ctrl, _calls) = controller_with_spy();
        let seen = Rc::new(RefCell::new(Vec::<String>::new()));
        let seen2 = seen.clone();
        ctrl.subscribe(Box::new(move |s| seen2.borrow_mut().push(s.to_string())));

        ctrl.set_show_tenths(true, 0.0);
        assert_eq!(seen.borrow().last().unwrap(), "00:00:00:0");
    }

    #[test]
    fn activation_rearms_tick_only_while_running() {
        let (mut ctrl, calls) = controller_with_spy();
        ctrl.app_activated(1.0);
        assert!(calls.borrow().is_empty());

        ctrl.start(2.0);
        ctrl.app_activated(3.0);
        assert_eq!(calls.borrow().as_slice(), ["schedule", "schedule"]);
    }

    #[test]
    fn deactivation_keeps_the_stopwatch_running() {
        let (mut ctrl, _calls) = controller_with_spy();
        ctrl.start(0.0);
        ctrl.app_deactivated(5.0);
        assert!(ctrl.is_running());
        assert!((ctrl.elapsed(10.0) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn shutdown_cancels_outstanding_tick() {
        let (mut ctrl, calls) = controller_with_spy();
        ctrl.start(0.0);
        ctrl.shutdown();
        assert_eq!(calls.borrow().as_slice(), ["schedule", "cancel"]);
    }
}
