//! Tests for the controller wiring: tick scheduling, display sinks,
//! transition sounds and the event-bus dispatch path, all with fakes.

use std::cell::RefCell;
use std::rc::Rc;

use timely::model::{Notifier, TickScheduler};
use timely::{AppEvent, EventBus, StopwatchController};

/// Tick scheduler that records whether a tick source is armed.
#[derive(Default)]
struct FakeScheduler {
    armed: Rc<RefCell<bool>>,
}

impl TickScheduler for FakeScheduler {
    fn schedule(&mut self) {
        *self.armed.borrow_mut() = true;
    }
    fn cancel(&mut self) {
        *self.armed.borrow_mut() = false;
    }
}

/// Notifier that records transition sounds in order.
#[derive(Default)]
struct FakeNotifier {
    sounds: Rc<RefCell<Vec<&'static str>>>,
}

impl Notifier for FakeNotifier {
    fn started(&mut self) {
        self.sounds.borrow_mut().push("start");
    }
    fn paused(&mut self) {
        self.sounds.borrow_mut().push("pause");
    }
}

struct Harness {
    ctrl: StopwatchController,
    armed: Rc<RefCell<bool>>,
    sounds: Rc<RefCell<Vec<&'static str>>>,
    titles: Rc<RefCell<Vec<String>>>,
}

fn harness(show_tenths: bool) -> Harness {
    let armed = Rc::new(RefCell::new(false));
    let sounds = Rc::new(RefCell::new(Vec::new()));
    let titles = Rc::new(RefCell::new(Vec::new()));

    let mut ctrl = StopwatchController::new(
        Box::new(FakeScheduler { armed: armed.clone() }),
        show_tenths,
    );
    ctrl.set_notifier(Box::new(FakeNotifier { sounds: sounds.clone() }));
    let sink_titles = titles.clone();
    ctrl.subscribe(Box::new(move |s| sink_titles.borrow_mut().push(s.to_string())));

    Harness { ctrl, armed, sounds, titles }
}

// === Tick Source Tests ===

#[test]
fn tick_source_tracks_running_state() {
    let mut h = harness(false);
    assert!(!*h.armed.borrow());

    h.ctrl.start(0.0);
    assert!(*h.armed.borrow());

    h.ctrl.pause(1.0);
    assert!(!*h.armed.borrow());
}

#[test]
fn reset_while_running_disarms_the_tick_source() {
    let mut h = harness(false);
    h.ctrl.start(0.0);
    h.ctrl.reset(2.0);
    assert!(!*h.armed.borrow());
    assert!(!h.ctrl.is_running());
}

#[test]
fn shutdown_disarms_the_tick_source() {
    let mut h = harness(false);
    h.ctrl.start(0.0);
    h.ctrl.shutdown();
    assert!(!*h.armed.borrow());
}

// === Notifier Tests ===

#[test]
fn transitions_play_sounds_in_order() {
    let mut h = harness(false);
    h.ctrl.toggle(0.0);
    h.ctrl.toggle(1.0);
    h.ctrl.toggle(2.0);
    assert_eq!(h.sounds.borrow().as_slice(), ["start", "pause", "start"]);
}

#[test]
fn reset_and_ticks_are_silent() {
    let mut h = harness(false);
    h.ctrl.start(0.0);
    h.ctrl.tick(0.5);
    h.ctrl.reset(1.0);
    assert_eq!(h.sounds.borrow().as_slice(), ["start"]);
}

#[test]
fn redundant_start_is_silent() {
    let mut h = harness(false);
    h.ctrl.start(0.0);
    h.ctrl.start(1.0);
    assert_eq!(h.sounds.borrow().as_slice(), ["start"]);
}

// === Display Tests ===

#[test]
fn status_title_follows_a_session() {
    let mut h = harness(false);
    h.ctrl.start(1000.0);
    h.ctrl.tick(1001.0);
    h.ctrl.tick(1002.6);
    h.ctrl.pause(1003.0);
    h.ctrl.reset(1010.0);

    assert_eq!(
        h.titles.borrow().as_slice(),
        ["00:00:00", "00:00:00", "00:00:01", "00:00:02", "00:00:03", "00:00:00"]
    );
}

#[test]
fn tenths_digit_appears_when_enabled() {
    let mut h = harness(true);
    h.ctrl.start(0.0);
    h.ctrl.tick(0.35);
    assert_eq!(h.titles.borrow().last().unwrap(), "00:00:00:3");
}

#[test]
fn double_click_semantics_end_paused_at_zero() {
    // A double click delivers a toggle (click count 1) before the reset
    // (click count 2); the net result must be paused at zero either way.
    for initially_running in [false, true] {
        let mut h = harness(false);
        if initially_running {
            h.ctrl.start(0.0);
        }
        h.ctrl.toggle(5.0);
        h.ctrl.reset(5.0);
        assert!(!h.ctrl.is_running());
        assert_eq!(h.titles.borrow().last().unwrap(), "00:00:00");
    }
}

// === Event Bus Dispatch Tests ===

/// Drains the bus and applies each event the way the main-thread
/// dispatcher does, with an injected clock.
fn pump(bus: &EventBus, ctrl: &mut StopwatchController, now: f64) {
    for event in bus.drain() {
        match event {
            AppEvent::ToggleStopwatch => ctrl.toggle(now),
            AppEvent::ResetStopwatch => ctrl.reset(now),
            AppEvent::AppActivated => ctrl.app_activated(now),
            AppEvent::AppDeactivated => ctrl.app_deactivated(now),
            AppEvent::SettingsClosed => ctrl.refresh(now),
            AppEvent::OpenSettings | AppEvent::RequestQuit => {}
        }
    }
}

#[test]
fn events_drive_the_controller_in_publish_order() {
    let bus = EventBus::new();
    let publisher = bus.publisher();
    let mut h = harness(false);

    publisher.publish(AppEvent::ToggleStopwatch);
    pump(&bus, &mut h.ctrl, 0.0);
    assert!(h.ctrl.is_running());

    publisher.publish(AppEvent::ToggleStopwatch);
    publisher.publish(AppEvent::ToggleStopwatch);
    pump(&bus, &mut h.ctrl, 4.0);
    assert!(h.ctrl.is_running());
    assert!((h.ctrl.elapsed(4.0) - 4.0).abs() < 1e-9);

    publisher.publish(AppEvent::ResetStopwatch);
    pump(&bus, &mut h.ctrl, 5.0);
    assert!(!h.ctrl.is_running());
    assert!((h.ctrl.elapsed(9.0)).abs() < 1e-9);
}

#[test]
fn deactivate_then_activate_keeps_time_and_rearms_tick() {
    let bus = EventBus::new();
    let publisher = bus.publisher();
    let mut h = harness(false);

    h.ctrl.start(0.0);
    publisher.publish(AppEvent::AppDeactivated);
    pump(&bus, &mut h.ctrl, 10.0);
    assert!(h.ctrl.is_running());

    publisher.publish(AppEvent::AppActivated);
    pump(&bus, &mut h.ctrl, 30.0);
    assert!(*h.armed.borrow());
    assert_eq!(h.titles.borrow().last().unwrap(), "00:00:30");
}

#[test]
fn settings_close_rerenders_without_mutating_state() {
    let bus = EventBus::new();
    let publisher = bus.publisher();
    let mut h = harness(false);

    h.ctrl.start(0.0);
    h.ctrl.pause(2.0);

    publisher.publish(AppEvent::SettingsClosed);
    pump(&bus, &mut h.ctrl, 60.0);
    assert!(!h.ctrl.is_running());
    assert_eq!(h.titles.borrow().last().unwrap(), "00:00:02");
}
