//! Status bar — playback, tempo, beat, genre, and audio device state.

/// Audio device state shown at the right of the status bar.
#[derive(Debug, Clone, PartialEq)]
pub enum AudioStatus {
    /// Device not yet acquired (acquisition is lazy).
    Idle,
    /// Stream open on the named device.
    Connected(String),
    /// Device acquisition failed; silent for the session.
    Failed,
    /// Tones suppressed by the user.
    Muted,
}

/// Status information for the bottom bar.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusInfo {
    pub bpm: f64,
    pub beat: u8,
    pub is_playing: bool,
    pub genre_name: String,
    pub intensity: u8,
    pub audio: AudioStatus,
    /// One-shot warning surfaced from the tone emitter, kept until replaced.
    pub warning: Option<String>,
}

impl StatusInfo {
    /// Playback indicator text.
    pub fn playback_display(&self) -> &str {
        if self.is_playing {
            "PLAY"
        } else {
            "STOP"
        }
    }

    /// Beat position as "beat/4".
    pub fn beat_display(&self) -> String {
        format!("{}/4", self.beat)
    }

    /// Audio indicator text, device names truncated to fit the bar.
    pub fn audio_display(&self) -> String {
        match &self.audio {
            AudioStatus::Idle => "AUDIO IDLE".to_string(),
            AudioStatus::Connected(name) => {
                let char_count = name.chars().count();
                if char_count > 12 {
                    let mut t: String = name.chars().take(11).collect();
                    t.push('\u{2026}');
                    t
                } else {
                    name.clone()
                }
            }
            AudioStatus::Failed => "NO AUDIO".to_string(),
            AudioStatus::Muted => "MUTED".to_string(),
        }
    }
}

impl Default for StatusInfo {
    fn default() -> Self {
        Self {
            bpm: 120.0,
            beat: 1,
            is_playing: false,
            genre_name: String::new(),
            intensity: 70,
            audio: AudioStatus::Idle,
            warning: None,
        }
    }
}
