//! Commands sent from the UI thread to the audio thread via ring buffer.

/// Commands sent from the UI thread to the audio thread via ring buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToneCommand {
    /// Start one self-terminating tone voice.
    Strike { freq: f64, gain: f64 },

    /// Drop all sounding voices immediately.
    Hush,
}
