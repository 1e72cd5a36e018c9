//! Tone emitter — cpal output stream, lock-free command queue, per-strike voices.
//!
//! The UI thread never touches audio buffers. Each metronome tick pushes a
//! [`ToneCommand::Strike`] into a lock-free ring buffer; the cpal callback
//! drains it and spawns an independent [`voice::Voice`] per strike, so
//! overlapping tones never disturb each other's envelope state.
//!
//! Device acquisition is lazy (first `emit`) and fails soft: if the output
//! device cannot be opened, the emitter goes permanently silent for the
//! session and the failure is surfaced exactly once.

pub mod callback;
pub mod command;
pub mod voice;

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use ringbuf::{
    traits::{Producer, Split},
    HeapRb,
};

pub use command::ToneCommand;

use callback::ToneCallback;

/// Ring buffer capacity (number of commands).
const RING_BUFFER_CAPACITY: usize = 64;

/// Fixed tone pitch — A4.
pub const TONE_FREQ_HZ: f64 = 440.0;

/// Initial tone gain; decays to near-silence over [`voice::DECAY_SECS`].
pub const TONE_GAIN: f64 = 0.1;

/// Audio errors. All are non-fatal: the explorer degrades to silence.
#[derive(Debug)]
pub enum AudioError {
    /// No audio output device found.
    NoOutputDevice,
    /// Failed to query device configuration.
    DeviceConfig(String),
    /// Failed to build the audio stream.
    StreamBuild(String),
    /// Failed to start the audio stream.
    StreamPlay(String),
    /// Tone command ring buffer is full — ticks arriving faster than the
    /// audio thread drains them.
    QueueFull,
}

impl std::fmt::Display for AudioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AudioError::NoOutputDevice => write!(f, "no audio output device found"),
            AudioError::DeviceConfig(e) => write!(f, "device config error: {e}"),
            AudioError::StreamBuild(e) => write!(f, "stream build error: {e}"),
            AudioError::StreamPlay(e) => write!(f, "stream play error: {e}"),
            AudioError::QueueFull => write!(f, "tone command ring buffer is full"),
        }
    }
}

impl std::error::Error for AudioError {}

/// Owns the cpal stream and the command producer. Dropping the engine
/// releases the stream and with it the audio device.
struct ToneEngine {
    _stream: cpal::Stream,
    producer: ringbuf::HeapProd<ToneCommand>,
    device_name: String,
    sample_rate: u32,
}

impl ToneEngine {
    /// Open the default output device and start the stream.
    fn start() -> Result<Self, AudioError> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or(AudioError::NoOutputDevice)?;
        let device_name = device.name().unwrap_or_else(|_| "unknown".to_string());

        let config = device
            .default_output_config()
            .map_err(|e| AudioError::DeviceConfig(e.to_string()))?;
        let sample_rate = config.sample_rate().0;
        let channels = config.channels();

        let rb = HeapRb::<ToneCommand>::new(RING_BUFFER_CAPACITY);
        let (producer, consumer) = rb.split();
        let mut tone_callback = ToneCallback::new(consumer, channels, sample_rate);

        let stream_config = cpal::StreamConfig {
            channels,
            sample_rate: cpal::SampleRate(sample_rate),
            buffer_size: cpal::BufferSize::Default,
        };

        let err_fn = |err: cpal::StreamError| {
            eprintln!("audio stream error: {err}");
        };

        let stream = device
            .build_output_stream(
                &stream_config,
                move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                    tone_callback.process(data);
                },
                err_fn,
                None,
            )
            .map_err(|e| AudioError::StreamBuild(e.to_string()))?;

        stream
            .play()
            .map_err(|e| AudioError::StreamPlay(e.to_string()))?;

        Ok(Self {
            _stream: stream,
            producer,
            device_name,
            sample_rate,
        })
    }

    fn push(&mut self, cmd: ToneCommand) -> Result<(), AudioError> {
        self.producer.try_push(cmd).map_err(|_| AudioError::QueueFull)
    }
}

/// Fire-and-forget tone source for the beat clock.
///
/// `emit()` returns immediately; tone decay and voice teardown happen on
/// the audio thread. After a failed device acquisition every subsequent
/// `emit()` is a no-op.
pub struct ToneEmitter {
    engine: Option<ToneEngine>,
    device_failed: bool,
    pending_error: Option<AudioError>,
}

impl ToneEmitter {
    /// Create an emitter. The device is not touched until the first `emit`.
    pub fn new() -> Self {
        Self {
            engine: None,
            device_failed: false,
            pending_error: None,
        }
    }

    /// Request one short tone: fixed 440 Hz pitch, gain 0.1 decaying to
    /// near-silence over 100 ms.
    pub fn emit(&mut self) {
        if self.device_failed {
            return;
        }
        if self.engine.is_none() {
            match ToneEngine::start() {
                Ok(engine) => self.engine = Some(engine),
                Err(e) => {
                    self.device_failed = true;
                    self.report(e);
                    return;
                }
            }
        }
        if let Some(engine) = self.engine.as_mut() {
            if let Err(e) = engine.push(ToneCommand::Strike {
                freq: TONE_FREQ_HZ,
                gain: TONE_GAIN,
            }) {
                // Dropped tone, not a dropped beat: report and carry on.
                self.report(e);
            }
        }
    }

    /// Cut all sounding voices immediately (playback stopped).
    pub fn hush(&mut self) {
        if let Some(engine) = self.engine.as_mut() {
            let _ = engine.push(ToneCommand::Hush);
        }
    }

    /// Take the pending error, if any. Each failure is surfaced at most
    /// once; callers poll this after `emit`.
    pub fn take_error(&mut self) -> Option<AudioError> {
        self.pending_error.take()
    }

    /// Whether device acquisition failed and the emitter is permanently
    /// silent for this session.
    pub fn is_silent(&self) -> bool {
        self.device_failed
    }

    /// Name of the acquired output device, if any.
    pub fn device_name(&self) -> Option<&str> {
        self.engine.as_ref().map(|e| e.device_name.as_str())
    }

    /// Sample rate of the open stream, if any.
    pub fn sample_rate(&self) -> Option<u32> {
        self.engine.as_ref().map(|e| e.sample_rate)
    }

    fn report(&mut self, e: AudioError) {
        if self.pending_error.is_none() {
            self.pending_error = Some(e);
        }
    }
}

impl Default for ToneEmitter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_emitter_has_no_engine_or_error() {
        let mut emitter = ToneEmitter::new();
        assert!(!emitter.is_silent());
        assert!(emitter.device_name().is_none());
        assert!(emitter.take_error().is_none());
    }

    #[test]
    fn failed_device_makes_emit_a_noop() {
        let mut emitter = ToneEmitter {
            engine: None,
            device_failed: true,
            pending_error: Some(AudioError::NoOutputDevice),
        };
        // First failure is surfaced once...
        assert!(emitter.take_error().is_some());
        // ...then emit neither retries nor re-reports.
        emitter.emit();
        emitter.emit();
        assert!(emitter.take_error().is_none());
        assert!(emitter.is_silent());
        assert!(emitter.device_name().is_none());
    }

    #[test]
    fn report_keeps_first_error() {
        let mut emitter = ToneEmitter::new();
        emitter.report(AudioError::NoOutputDevice);
        emitter.report(AudioError::QueueFull);
        assert!(matches!(
            emitter.take_error(),
            Some(AudioError::NoOutputDevice)
        ));
        assert!(emitter.take_error().is_none());
    }

    #[test]
    fn hush_without_engine_is_a_noop() {
        let mut emitter = ToneEmitter::new();
        emitter.hush();
        assert!(emitter.take_error().is_none());
    }

    #[test]
    #[ignore] // Requires audio device — run manually with `cargo test -- --ignored`
    fn emit_acquires_device_lazily() {
        let mut emitter = ToneEmitter::new();
        assert!(emitter.device_name().is_none());
        emitter.emit();
        if !emitter.is_silent() {
            assert!(emitter.device_name().is_some());
            assert!(emitter.sample_rate().unwrap() > 0);
        }
    }

    #[test]
    fn audio_error_display() {
        assert_eq!(
            AudioError::NoOutputDevice.to_string(),
            "no audio output device found"
        );
        assert_eq!(
            AudioError::QueueFull.to_string(),
            "tone command ring buffer is full"
        );
        assert_eq!(
            AudioError::DeviceConfig("boom".into()).to_string(),
            "device config error: boom"
        );
    }
}
