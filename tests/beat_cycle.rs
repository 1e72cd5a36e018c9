//! Integration tests for the beat scheduling pipeline — clock intervals,
//! cycle ordering, cancellation, and tempo rebuilds, driven with injected
//! instants so no wall-clock sleeping is needed.

use std::time::{Duration, Instant};

use assert_approx_eq::assert_approx_eq;

use quickstep::clock::{BeatClock, ClockState, BEATS_PER_CYCLE};

#[test]
fn interval_matches_60000_over_bpm_across_slider_range() {
    for bpm in 60..=180 {
        let clock = BeatClock::new(f64::from(bpm));
        let expected_ms = 60_000.0 / f64::from(bpm);
        assert_approx_eq!(clock.interval().as_secs_f64() * 1000.0, expected_ms, 1e-6);
    }
}

#[test]
fn long_run_never_leaves_beat_range() {
    let mut clock = BeatClock::new(180.0);
    let t0 = Instant::now();
    clock.start(t0);
    let mut now = t0;
    let mut prev = clock.current_beat();
    for _ in 0..10_000 {
        now += clock.interval();
        let tick = clock.poll(now).expect("tick due at every interval");
        assert!((1..=BEATS_PER_CYCLE).contains(&tick.beat));
        let expected = (prev % BEATS_PER_CYCLE) + 1;
        assert_eq!(tick.beat, expected, "beat skipped");
        prev = tick.beat;
    }
}

#[test]
fn cycle_is_1234_repeating() {
    let mut clock = BeatClock::new(120.0);
    let t0 = Instant::now();
    clock.start(t0);
    let mut now = t0;
    let beats: Vec<u8> = (0..12)
        .map(|_| {
            now += Duration::from_millis(500);
            clock.poll(now).unwrap().beat
        })
        .collect();
    assert_eq!(beats, [2, 3, 4, 1, 2, 3, 4, 1, 2, 3, 4, 1]);
}

#[test]
fn stop_cancels_pending_deadline() {
    let mut clock = BeatClock::new(120.0);
    let t0 = Instant::now();
    clock.start(t0);
    // A tick is already due, but stop wins.
    let late = t0 + Duration::from_secs(3);
    clock.stop();
    assert!(clock.poll(late).is_none());
    assert_eq!(clock.state(), ClockState::Stopped);
    assert_eq!(clock.current_beat(), 1);
}

#[test]
fn stop_start_cycle_resumes_from_current_beat() {
    let mut clock = BeatClock::new(120.0);
    let t0 = Instant::now();
    clock.start(t0);
    let t1 = t0 + Duration::from_millis(500);
    assert_eq!(clock.poll(t1).unwrap().beat, 2);

    clock.stop();
    let t2 = t1 + Duration::from_secs(10);
    clock.start(t2);
    // The cycle picks up where it paused, one full interval later.
    assert!(clock.poll(t2).is_none());
    assert_eq!(clock.poll(t2 + Duration::from_millis(500)).unwrap().beat, 3);
}

#[test]
fn stall_gap_is_absorbed_without_catchup() {
    let mut clock = BeatClock::new(120.0);
    let t0 = Instant::now();
    clock.start(t0);

    // Host froze for two seconds (four intervals).
    let resumed = t0 + Duration::from_secs(2);
    assert_eq!(clock.poll(resumed).unwrap().beat, 2);
    // No queued ticks: the next one is a full interval after resume.
    assert!(clock.poll(resumed + Duration::from_millis(499)).is_none());
    assert_eq!(
        clock.poll(resumed + Duration::from_millis(500)).unwrap().beat,
        3
    );
}

#[test]
fn tempo_change_applies_on_next_tick() {
    let mut clock = BeatClock::new(60.0);
    let t0 = Instant::now();
    clock.start(t0);

    // First tick at the old interval.
    let t1 = t0 + Duration::from_secs(1);
    assert!(clock.poll(t1).is_some());

    // Speed up; next tick comes at the new interval measured from the change.
    clock.set_bpm(120.0, t1);
    assert!(clock.poll(t1 + Duration::from_millis(499)).is_none());
    assert!(clock.poll(t1 + Duration::from_millis(500)).is_some());
}

#[test]
fn fractional_bpm_interval_is_real_valued() {
    let clock = BeatClock::new(92.5);
    assert_approx_eq!(clock.interval().as_secs_f64(), 60.0 / 92.5, 1e-9);
}
