//! Tone voice — sine oscillator with an exponential decay envelope.

use std::f64::consts::TAU;

/// Envelope length in seconds. The voice self-terminates at the end.
pub const DECAY_SECS: f64 = 0.1;

/// Gain ratio reached at the end of the decay window (near-silence).
const DECAY_TARGET_RATIO: f64 = 0.1;

/// One independent, self-terminating tone.
///
/// The gain ramps exponentially from its initial value down to
/// `gain * DECAY_TARGET_RATIO` over [`DECAY_SECS`], then the voice is
/// finished. Each strike gets its own voice, so overlapping tones never
/// share envelope or phase state.
#[derive(Debug, Clone)]
pub struct Voice {
    phase: f64,
    phase_inc: f64,
    gain: f64,
    decay_mul: f64,
    samples_left: u32,
}

impl Voice {
    /// Start a voice at the given frequency and initial gain.
    pub fn new(freq: f64, gain: f64, sample_rate: u32) -> Self {
        let total_samples = (DECAY_SECS * sample_rate as f64).round().max(1.0);
        Self {
            phase: 0.0,
            phase_inc: freq / sample_rate as f64,
            gain,
            decay_mul: DECAY_TARGET_RATIO.powf(1.0 / total_samples),
            samples_left: total_samples as u32,
        }
    }

    /// Render the next mono sample. Returns 0.0 once finished.
    pub fn next_sample(&mut self) -> f32 {
        if self.samples_left == 0 {
            return 0.0;
        }
        let sample = (self.phase * TAU).sin() * self.gain;
        self.phase = (self.phase + self.phase_inc).fract();
        self.gain *= self.decay_mul;
        self.samples_left -= 1;
        sample as f32
    }

    /// Whether the decay window has elapsed.
    pub fn is_finished(&self) -> bool {
        self.samples_left == 0
    }
}
