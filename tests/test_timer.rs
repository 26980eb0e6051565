use std::time::{Duration, Instant};

use flappy_bird::timer::*;

const STEP: Duration = Duration::from_millis(16);

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn stopped_timer_owes_nothing() {
    let mut timer = FrameTimer::new();
    let now = Instant::now();
    assert!(!timer.is_running());
    assert!(!timer.is_paused());
    assert_eq!(timer.ticks_at(now), Duration::ZERO);
    assert_eq!(timer.due_steps_at(now + ms(500), STEP), 0);
    assert_eq!(timer.ticks(), Duration::ZERO);
}

#[test]
fn whole_steps_are_handed_out_once() {
    let t0 = Instant::now();
    let mut timer = FrameTimer::new();
    timer.start_at(t0);

    // 50ms holds three 16ms steps with 2ms left over.
    assert_eq!(timer.due_steps_at(t0 + ms(50), STEP), 3);
    assert_eq!(timer.due_steps_at(t0 + ms(50), STEP), 0);
    // The leftover carries into the next frame.
    assert_eq!(timer.due_steps_at(t0 + ms(64), STEP), 1);
}

#[test]
fn paused_timer_freezes() {
    let t0 = Instant::now();
    let mut timer = FrameTimer::new();
    timer.start_at(t0);
    timer.pause_at(t0 + ms(100));

    assert!(timer.is_paused());
    assert_eq!(timer.ticks_at(t0 + ms(900)), ms(100));
    assert_eq!(timer.ticks(), ms(100));
    assert_eq!(timer.due_steps_at(t0 + ms(900), STEP), 0);
}

#[test]
fn time_spent_paused_is_excluded() {
    let t0 = Instant::now();
    let mut timer = FrameTimer::new();
    timer.start_at(t0);
    timer.pause_at(t0 + ms(100));
    timer.unpause_at(t0 + ms(1_100));

    assert!(!timer.is_paused());
    assert_eq!(timer.ticks_at(t0 + ms(1_132)), ms(132));
}

#[test]
fn toggle_pause_flips_state() {
    let t0 = Instant::now();
    let mut timer = FrameTimer::new();
    timer.start_at(t0);

    timer.toggle_pause_at(t0 + ms(10));
    assert!(timer.is_paused());
    timer.toggle_pause_at(t0 + ms(40));
    assert!(!timer.is_paused());
    assert_eq!(timer.ticks_at(t0 + ms(50)), ms(20));
}

#[test]
fn stall_backlog_is_capped_and_dropped() {
    let t0 = Instant::now();
    let mut timer = FrameTimer::new();
    timer.start_at(t0);

    assert_eq!(timer.due_steps_at(t0 + ms(10_000), STEP), MAX_CATCH_UP_STEPS);
    assert_eq!(timer.due_steps_at(t0 + ms(10_000), STEP), 0);
}

#[test]
fn restart_resets_consumed_time() {
    let t0 = Instant::now();
    let mut timer = FrameTimer::new();
    timer.start_at(t0);
    assert_eq!(timer.due_steps_at(t0 + ms(48), STEP), 3);

    let t1 = t0 + ms(48);
    timer.start_at(t1);
    assert_eq!(timer.due_steps_at(t1 + ms(32), STEP), 2);

    timer.stop();
    assert!(!timer.is_running());
    assert_eq!(timer.due_steps_at(t1 + ms(5_000), STEP), 0);
}

#[test]
fn zero_step_never_advances() {
    let t0 = Instant::now();
    let mut timer = FrameTimer::new();
    timer.start_at(t0);
    assert_eq!(timer.due_steps_at(t0 + ms(100), Duration::ZERO), 0);
}
