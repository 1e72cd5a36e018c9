//! Movement analysis — pure phrase selection and practice-guide derivation.
//!
//! Everything here is a pure function of `(tempo, intensity, genre)`:
//! no state, no persistence. Thresholds follow the analysis panel text:
//! tempo bands at 100 and 140 BPM, intensity bands at 50 and 80.

use crate::catalog::GenreRecord;

/// How many suggested moves make it into the style-focus list.
const STYLE_FOCUS_LEN: usize = 3;

/// Movement quality, selected by tempo band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementQuality {
    /// Below 100 BPM.
    ControlledPrecise,
    /// 100–139 BPM.
    BalancedFlowing,
    /// 140 BPM and above.
    QuickEnergetic,
}

impl MovementQuality {
    /// Classify a tempo.
    pub fn from_tempo(tempo_bpm: f64) -> Self {
        if tempo_bpm < 100.0 {
            MovementQuality::ControlledPrecise
        } else if tempo_bpm < 140.0 {
            MovementQuality::BalancedFlowing
        } else {
            MovementQuality::QuickEnergetic
        }
    }

    /// Display phrase for the analysis panel.
    pub fn phrase(self) -> &'static str {
        match self {
            MovementQuality::ControlledPrecise => "controlled, precise movements",
            MovementQuality::BalancedFlowing => "balanced, flowing movements",
            MovementQuality::QuickEnergetic => "quick, energetic movements",
        }
    }
}

/// Expression character, selected by intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expression {
    /// Below 50.
    Subtle,
    /// 50 and above.
    Powerful,
}

impl Expression {
    /// Classify an intensity level (0–100).
    pub fn from_intensity(intensity: u8) -> Self {
        if intensity < 50 {
            Expression::Subtle
        } else {
            Expression::Powerful
        }
    }

    /// Display phrase for the analysis panel.
    pub fn phrase(self) -> &'static str {
        match self {
            Expression::Subtle => "subtle",
            Expression::Powerful => "powerful",
        }
    }
}

/// Skill classification by intensity, each with a fixed focus list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillLevel {
    /// Below 50.
    Beginner,
    /// 50–79.
    Intermediate,
    /// 80 and above.
    Advanced,
}

impl SkillLevel {
    /// Classify an intensity level (0–100).
    pub fn from_intensity(intensity: u8) -> Self {
        if intensity < 50 {
            SkillLevel::Beginner
        } else if intensity < 80 {
            SkillLevel::Intermediate
        } else {
            SkillLevel::Advanced
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
        }
    }

    /// The fixed three-item training focus for this level.
    pub fn focus(self) -> [&'static str; 3] {
        match self {
            SkillLevel::Beginner => [
                "Master basic steps and positions",
                "Build foundational strength",
                "Focus on proper technique",
            ],
            SkillLevel::Intermediate => [
                "Combine multiple movements",
                "Add style variations",
                "Improve movement quality",
            ],
            SkillLevel::Advanced => [
                "Complex movement combinations",
                "Advanced technical elements",
                "Performance-level expression",
            ],
        }
    }
}

/// Tempo-band practice recommendations. Re-derived from the tempo on its
/// own — deliberately not shared with [`MovementQuality`] even though the
/// band boundaries coincide.
pub fn tempo_recommendations(tempo_bpm: f64) -> [&'static str; 3] {
    if tempo_bpm < 100.0 {
        [
            "Focus on precision and form",
            "Practice slow, controlled movements",
            "Work on balance and posture",
        ]
    } else if tempo_bpm < 140.0 {
        [
            "Balance speed and control",
            "Work on fluid movements",
            "Practice dynamic expressions",
        ]
    } else {
        [
            "Maintain form at higher speeds",
            "Practice quick transitions",
            "Focus on stamina and control",
        ]
    }
}

/// The structured practice guide for the detail panel.
#[derive(Debug, Clone, PartialEq)]
pub struct PracticeGuide {
    /// Tempo-band phrase set.
    pub tempo_recommendations: [&'static str; 3],
    /// Tempo is below the genre's recommended minimum.
    pub below_min: bool,
    /// Tempo is above the genre's recommended maximum.
    pub above_max: bool,
    /// Skill classification from intensity.
    pub skill: SkillLevel,
    /// First (at most) three suggested moves of the genre.
    pub style_focus: Vec<String>,
}

/// Derive the practice guide for a genre at the given tempo and intensity.
pub fn practice_guide(tempo_bpm: f64, intensity: u8, genre: &GenreRecord) -> PracticeGuide {
    PracticeGuide {
        tempo_recommendations: tempo_recommendations(tempo_bpm),
        below_min: tempo_bpm < genre.tempo_range.min,
        above_max: tempo_bpm > genre.tempo_range.max,
        skill: SkillLevel::from_intensity(intensity),
        style_focus: genre
            .suggested_moves
            .iter()
            .take(STYLE_FOCUS_LEN)
            .cloned()
            .collect(),
    }
}
