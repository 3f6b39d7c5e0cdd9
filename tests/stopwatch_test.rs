//! Stopwatch state machine tests on a hand-driven clock.

use pendulum_lab::clock::ManualClock;
use pendulum_lab::stopwatch::{format_elapsed, Stopwatch, StopwatchState};

fn stopwatch() -> (Stopwatch<ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    (Stopwatch::new(clock.clone()), clock)
}

#[test]
fn test_full_button_sequence() {
    let (mut sw, clock) = stopwatch();
    assert_eq!(sw.state(), StopwatchState::Idle);

    sw.start();
    assert_eq!(sw.state(), StopwatchState::Running);
    clock.advance_millis(14_200);

    sw.stop();
    assert_eq!(sw.state(), StopwatchState::Paused);
    assert_eq!(sw.elapsed_millis(), 14_200);

    sw.start();
    clock.advance_millis(800);
    sw.stop();
    assert_eq!(sw.elapsed_millis(), 15_000);

    sw.reset();
    assert_eq!(sw.state(), StopwatchState::Idle);
    assert_eq!(sw.elapsed_millis(), 0);
}

#[test]
fn test_stop_matches_last_live_read() {
    let (mut sw, clock) = stopwatch();

    sw.start();
    clock.advance_millis(733);
    let live = sw.elapsed_millis();
    sw.stop();

    assert_eq!(sw.elapsed_millis(), live);
}

#[test]
fn test_elapsed_never_decreases_in_a_segment() {
    let (mut sw, clock) = stopwatch();
    sw.start();

    let mut last = 0;
    for step in [1_u64, 7, 3, 10, 2, 100] {
        clock.advance_millis(step);
        let now = sw.elapsed_millis();
        assert!(now >= last, "elapsed went backwards: {now} < {last}");
        last = now;
    }
}

#[test]
fn test_banked_time_only_grows_across_cycles() {
    let (mut sw, clock) = stopwatch();
    let mut banked = 0;

    for _ in 0..5 {
        sw.start();
        clock.advance_millis(100);
        sw.stop();
        let now = sw.elapsed_millis();
        assert!(now > banked);
        banked = now;
    }
    assert_eq!(banked, 500);
}

#[test]
fn test_illegal_transitions_are_silent_noops() {
    let (mut sw, clock) = stopwatch();

    // Idle: stop and reset do nothing
    sw.stop();
    sw.reset();
    sw.reset();
    assert_eq!(sw.state(), StopwatchState::Idle);

    sw.start();
    clock.advance_millis(250);

    // Running: start and reset do nothing, time keeps counting
    sw.start();
    sw.reset();
    assert_eq!(sw.state(), StopwatchState::Running);
    assert_eq!(sw.elapsed_millis(), 250);

    sw.stop();
    sw.stop();
    assert_eq!(sw.elapsed_millis(), 250);
}

#[test]
fn test_paused_time_is_not_counted() {
    let (mut sw, clock) = stopwatch();

    sw.start();
    clock.advance_millis(1000);
    sw.stop();

    clock.advance_millis(60_000);
    assert_eq!(sw.elapsed_millis(), 1000);
}

#[test]
fn test_display_callback_receives_formattable_samples() {
    let (mut sw, clock) = stopwatch();
    let display = std::rc::Rc::new(std::cell::RefCell::new(String::new()));

    let sink = display.clone();
    sw.set_display(move |ms| *sink.borrow_mut() = format_elapsed(ms));

    sw.start();
    sw.sample();
    assert_eq!(*display.borrow(), "00:00.00");

    clock.advance_millis(61_234);
    sw.sample();
    assert_eq!(*display.borrow(), "01:01.23");
}

#[test]
fn test_format_elapsed_reference_values() {
    assert_eq!(format_elapsed(0), "00:00.00");
    assert_eq!(format_elapsed(61_234), "01:01.23");
    assert_eq!(format_elapsed(599_990), "09:59.99");
    assert_eq!(format_elapsed(3_600_000), "60:00.00");
}
