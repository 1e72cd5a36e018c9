//! Beat clock — a cancellable, wall-clock-driven 4-beat scheduler.
//!
//! The clock owns a single armed deadline. It is polled from the UI event
//! loop with the current `Instant`; when the deadline has passed it yields
//! exactly one [`Tick`] and re-arms from `now`. A stall in the host loop
//! therefore produces a longer real-world gap, never a burst of queued
//! catch-up ticks. Stopping clears the deadline, so no tick can ever fire
//! after `stop()` returns.

use std::time::{Duration, Instant};

/// Beats per cycle — the clock counts 1,2,3,4 and wraps.
pub const BEATS_PER_CYCLE: u8 = 4;

/// Clock run state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockState {
    Stopped,
    Running,
}

/// One advancement of the beat cycle. Each tick also requests a tone
/// from the caller's emitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    /// The beat just entered, in `1..=4`.
    pub beat: u8,
}

/// The beat scheduler. Tempo changes and restarts tear the deadline down
/// and rebuild it rather than adjusting a live timer.
#[derive(Debug)]
pub struct BeatClock {
    bpm: f64,
    state: ClockState,
    beat: u8,
    deadline: Option<Instant>,
}

impl BeatClock {
    /// Create a stopped clock on beat 1.
    ///
    /// `bpm` must be positive and finite; invalid values fall back to 120.
    /// Range clamping (60–180 for the UI sliders) is the caller's concern —
    /// the clock itself accepts any positive tempo, fractional included.
    pub fn new(bpm: f64) -> Self {
        let bpm = if bpm.is_finite() && bpm > 0.0 { bpm } else { 120.0 };
        Self {
            bpm,
            state: ClockState::Stopped,
            beat: 1,
            deadline: None,
        }
    }

    /// Interval between ticks: `60000 / bpm` milliseconds, real-valued.
    pub fn interval(&self) -> Duration {
        Duration::from_secs_f64(60.0 / self.bpm)
    }

    /// Current tempo.
    pub fn bpm(&self) -> f64 {
        self.bpm
    }

    /// Current beat, in `1..=4`.
    pub fn current_beat(&self) -> u8 {
        self.beat
    }

    /// Clock run state.
    pub fn state(&self) -> ClockState {
        self.state
    }

    /// Whether the clock is running.
    pub fn is_running(&self) -> bool {
        self.state == ClockState::Running
    }

    /// Start the clock: the first tick is due one interval from `now`.
    ///
    /// Starting while already running rebuilds the deadline, so only one
    /// timer is ever armed — no duplicate tick streams.
    pub fn start(&mut self, now: Instant) {
        self.state = ClockState::Running;
        self.deadline = Some(now + self.interval());
    }

    /// Stop the clock and clear the armed deadline. Idempotent.
    pub fn stop(&mut self) {
        self.state = ClockState::Stopped;
        self.deadline = None;
    }

    /// Change tempo. While running, the deadline is rebuilt from `now` at
    /// the new interval; the change takes effect on the next tick.
    ///
    /// Non-finite or non-positive values are ignored.
    pub fn set_bpm(&mut self, bpm: f64, now: Instant) {
        if !(bpm.is_finite() && bpm > 0.0) {
            return;
        }
        self.bpm = bpm;
        if self.state == ClockState::Running {
            self.deadline = Some(now + self.interval());
        }
    }

    /// Poll the clock. Yields at most one tick per call: if the deadline
    /// has passed, the beat advances (`(beat % 4) + 1`, wrapping 4→1) and
    /// the next deadline is armed from `now`.
    pub fn poll(&mut self, now: Instant) -> Option<Tick> {
        if self.state != ClockState::Running {
            return None;
        }
        let due = self.deadline?;
        if now < due {
            return None;
        }
        self.beat = (self.beat % BEATS_PER_CYCLE) + 1;
        self.deadline = Some(now + self.interval());
        Some(Tick { beat: self.beat })
    }
}
