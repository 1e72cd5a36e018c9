//! Audio callback — runs on the cpal audio thread.
//!
//! Drains tone commands from the ring buffer, mixes the live voices into
//! the output buffer, and drops voices whose decay window has elapsed.

use ringbuf::traits::Consumer;
use ringbuf::HeapCons;

use super::command::ToneCommand;
use super::voice::Voice;

/// Upper bound on simultaneously sounding voices. With a 100 ms decay this
/// is only reachable at absurd tempos; further strikes are dropped.
const MAX_VOICES: usize = 32;

/// State that lives on the audio thread. Accessed only from the cpal callback.
pub struct ToneCallback {
    consumer: HeapCons<ToneCommand>,
    voices: Vec<Voice>,
    channels: u16,
    sample_rate: u32,
}

impl ToneCallback {
    /// Create a new callback with the given ring buffer consumer.
    pub fn new(consumer: HeapCons<ToneCommand>, channels: u16, sample_rate: u32) -> Self {
        Self {
            consumer,
            voices: Vec::with_capacity(MAX_VOICES),
            channels,
            sample_rate,
        }
    }

    /// Called by cpal for each output block. Fills `output` with interleaved
    /// samples; every channel carries the same mono mix.
    pub fn process(&mut self, output: &mut [f32]) {
        while let Some(cmd) = self.consumer.try_pop() {
            match cmd {
                ToneCommand::Strike { freq, gain } => {
                    if self.voices.len() < MAX_VOICES {
                        self.voices.push(Voice::new(freq, gain, self.sample_rate));
                    }
                }
                ToneCommand::Hush => self.voices.clear(),
            }
        }

        let channels = self.channels as usize;
        for frame in output.chunks_mut(channels) {
            let mut mix = 0.0f32;
            for voice in self.voices.iter_mut() {
                mix += voice.next_sample();
            }
            let mix = mix.clamp(-1.0, 1.0);
            for sample in frame.iter_mut() {
                *sample = mix;
            }
        }

        self.voices.retain(|v| !v.is_finished());
    }

    /// Number of currently sounding voices.
    pub fn voice_count(&self) -> usize {
        self.voices.len()
    }

    /// Sample rate of the stream.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }
}
