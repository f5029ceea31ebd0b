//! Caffeine / L-theanine reference scales
//!
//! Ratio categories, the stimulation and relaxation scales (both on the 0-10
//! catalog scale) and the effect hints attached to each compound profile.

use crate::utils::ThresholdBucket;
use serde::{Deserialize, Serialize};

pub const THEANINE_DOMINANT: &str = "Theanine Dominant (≥2.0)";
pub const THEANINE_LEANING: &str = "Theanine Leaning (1.5-2.0)";
pub const BALANCED: &str = "Balanced (0.8-1.5)";
pub const CAFFEINE_LEANING: &str = "Caffeine Leaning (0.5-0.8)";
pub const CAFFEINE_DOMINANT: &str = "Caffeine Dominant (<0.5)";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundScales {
    /// L-theanine : caffeine ratio categories
    pub ratio: Vec<ThresholdBucket>,
    /// Caffeine → stimulation level
    pub stimulation: Vec<ThresholdBucket>,
    /// L-theanine → relaxation level
    pub relaxation: Vec<ThresholdBucket>,
    /// L-theanine at or above which "High" stimulation reads "Moderate-High"
    pub high_smoothing_theanine: f64,
    /// L-theanine at or above which "Very High" stimulation reads "High"
    pub very_high_smoothing_theanine: f64,
    pub profile_effects: Vec<ProfileEffects>,
}

/// Effect hints for one named compound profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileEffects {
    pub profile: String,
    pub hints: Vec<String>,
}

impl CompoundScales {
    pub fn effects_for(&self, profile: &str) -> &[String] {
        self.profile_effects
            .iter()
            .find(|p| p.profile == profile)
            .map(|p| p.hints.as_slice())
            .unwrap_or(&[])
    }
}

/// Six-step 0-10 scale shared by stimulation and relaxation.
fn level_scale() -> Vec<ThresholdBucket> {
    vec![
        ThresholdBucket::new("None", 0.0, Some(1.0)),
        ThresholdBucket::new("Very Low", 1.0, Some(2.5)),
        ThresholdBucket::new("Low", 2.5, Some(4.5)),
        ThresholdBucket::new("Moderate", 4.5, Some(6.5)),
        ThresholdBucket::new("High", 6.5, Some(8.0)),
        ThresholdBucket::new("Very High", 8.0, None),
    ]
}

static PROFILE_EFFECTS: &[(&str, &[&str])] = &[
    ("Calm & Meditative", &["deep relaxation", "meditative calm"]),
    ("Gentle & Soothing", &["soothing", "gentle unwinding"]),
    ("Calm Focus", &["calm focus", "steady attention"]),
    ("Focused Calm", &["focused calm", "sustained concentration"]),
    ("Relaxed Clarity", &["relaxed clarity"]),
    ("Energized Focus", &["energized focus", "sustained energy"]),
    ("Balanced Alertness", &["balanced alertness"]),
    ("Mellow Balance", &["mellow", "easygoing"]),
    ("Bright & Energizing", &["bright energy", "uplifting"]),
    ("Gently Uplifting", &["gentle lift"]),
    ("Intense & Sharp", &["intense energy", "sharp alertness"]),
    ("Brisk & Alert", &["brisk alertness"]),
    ("Light Lift", &["light lift"]),
];

pub fn builtin() -> CompoundScales {
    CompoundScales {
        ratio: vec![
            ThresholdBucket::new(CAFFEINE_DOMINANT, 0.0, Some(0.5)),
            ThresholdBucket::new(CAFFEINE_LEANING, 0.5, Some(0.8)),
            ThresholdBucket::new(BALANCED, 0.8, Some(1.5)),
            ThresholdBucket::new(THEANINE_LEANING, 1.5, Some(2.0)),
            ThresholdBucket::new(THEANINE_DOMINANT, 2.0, None),
        ],
        stimulation: level_scale(),
        relaxation: level_scale(),
        high_smoothing_theanine: 5.5,
        very_high_smoothing_theanine: 7.5,
        profile_effects: PROFILE_EFFECTS
            .iter()
            .map(|(profile, hints)| ProfileEffects {
                profile: profile.to_string(),
                hints: super::strings(hints),
            })
            .collect(),
    }
}
