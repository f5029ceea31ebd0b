//! Compound Calculator
//!
//! Buckets the L-theanine : caffeine ratio, caffeine-driven stimulation and
//! L-theanine-driven relaxation, then resolves the three into a named
//! compound profile.
//!
//! Stimulation is "smoothed" one step down when L-theanine is high enough to
//! temper it:
//!   - High      → Moderate-High  (L-theanine ≥ 5.5)
//!   - Very High → High           (L-theanine ≥ 7.5)

use super::{finite, Analysis, NOT_AVAILABLE};
use crate::reference::compounds::{
    CompoundScales, BALANCED, CAFFEINE_DOMINANT, CAFFEINE_LEANING, THEANINE_DOMINANT, THEANINE_LEANING,
};
use crate::types::Tea;
use crate::utils::levels::{LEVEL_HIGH, LEVEL_LOW, LEVEL_MODERATE};
use crate::utils::{categorize, level_or, OrderedSet, UNKNOWN};
use serde::{Deserialize, Serialize};

pub const NO_COMPOUND_DATA: &str = "No significant caffeine or L-theanine data available.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundAnalysis {
    /// L-theanine / caffeine, 0 when caffeine is 0 or absent
    pub ratio: f64,
    pub ratio_category: String,
    pub stimulation_level: String,
    pub relaxation_level: String,
    pub compound_profile: String,
    pub effect_hints: OrderedSet,
    pub description: String,
}

impl CompoundAnalysis {
    pub fn no_data() -> Self {
        Self {
            ratio: 0.0,
            ratio_category: NOT_AVAILABLE.to_string(),
            stimulation_level: NOT_AVAILABLE.to_string(),
            relaxation_level: NOT_AVAILABLE.to_string(),
            compound_profile: NOT_AVAILABLE.to_string(),
            effect_hints: OrderedSet::new(),
            description: NO_COMPOUND_DATA.to_string(),
        }
    }

    pub fn has_data(&self) -> bool {
        self.compound_profile != NOT_AVAILABLE
    }
}

impl Analysis for CompoundAnalysis {
    fn description(&self) -> &str {
        &self.description
    }

    fn to_flat(&self) -> Vec<(&'static str, String)> {
        vec![
            ("ratio", format!("{:.2}", self.ratio)),
            ("ratio_category", self.ratio_category.clone()),
            ("stimulation_level", self.stimulation_level.clone()),
            ("relaxation_level", self.relaxation_level.clone()),
            ("compound_profile", self.compound_profile.clone()),
            ("effect_hints", self.effect_hints.joined()),
            ("description", self.description.clone()),
        ]
    }
}

pub struct CompoundCalculator<'a> {
    scales: &'a CompoundScales,
}

impl<'a> CompoundCalculator<'a> {
    pub fn new(scales: &'a CompoundScales) -> Self {
        Self { scales }
    }

    pub fn analyze(&self, tea: &Tea) -> CompoundAnalysis {
        let caffeine = finite(tea.caffeine_level);
        let theanine = finite(tea.l_theanine_level);

        let present = |v: Option<f64>| v.map_or(false, |v| v != 0.0);
        if !present(caffeine) && !present(theanine) {
            return CompoundAnalysis::no_data();
        }

        let ratio = match caffeine {
            Some(c) if c != 0.0 => theanine.unwrap_or(0.0) / c,
            _ => 0.0,
        };
        let ratio_category = categorize(Some(ratio), &self.scales.ratio).to_string();
        let stimulation_level = self.stimulation(caffeine, theanine);
        let relaxation_level = categorize(theanine, &self.scales.relaxation).to_string();

        let compound_profile = profile_for(&ratio_category, &stimulation_level, &relaxation_level).to_string();
        let effect_hints: OrderedSet = self
            .scales
            .effects_for(&compound_profile)
            .iter()
            .map(String::as_str)
            .collect();

        let mut description = format!(
            "{} profile: {} L-theanine to caffeine ratio ({:.2}) with {} stimulation and {} relaxation.",
            compound_profile, ratio_category, ratio, stimulation_level, relaxation_level
        );
        if !effect_hints.is_empty() {
            description.push_str(&format!(" Expect {}.", effect_hints.joined()));
        }

        CompoundAnalysis {
            ratio,
            ratio_category,
            stimulation_level,
            relaxation_level,
            compound_profile,
            effect_hints,
            description,
        }
    }

    fn stimulation(&self, caffeine: Option<f64>, theanine: Option<f64>) -> String {
        let label = categorize(caffeine, &self.scales.stimulation);
        let theanine = theanine.unwrap_or(0.0);
        match label {
            "High" if theanine >= self.scales.high_smoothing_theanine => "Moderate-High".to_string(),
            "Very High" if theanine >= self.scales.very_high_smoothing_theanine => "High".to_string(),
            other => other.to_string(),
        }
    }
}

/// Decision table keyed on ratio category.
fn profile_for(ratio_category: &str, stimulation: &str, relaxation: &str) -> &'static str {
    let stim = level_or(stimulation, 0);
    let relax = level_or(relaxation, 0);

    match ratio_category {
        THEANINE_DOMINANT => {
            if relax >= LEVEL_HIGH {
                "Calm & Meditative"
            } else if stim <= LEVEL_LOW {
                "Gentle & Soothing"
            } else {
                "Calm Focus"
            }
        }
        THEANINE_LEANING => {
            if stim >= LEVEL_MODERATE {
                "Focused Calm"
            } else {
                "Relaxed Clarity"
            }
        }
        BALANCED => {
            if stim >= LEVEL_HIGH && relax >= LEVEL_HIGH {
                "Energized Focus"
            } else if stim >= LEVEL_MODERATE {
                "Balanced Alertness"
            } else {
                "Mellow Balance"
            }
        }
        CAFFEINE_LEANING => {
            if stim >= LEVEL_HIGH {
                "Bright & Energizing"
            } else {
                "Gently Uplifting"
            }
        }
        CAFFEINE_DOMINANT => {
            if stim >= LEVEL_HIGH {
                "Intense & Sharp"
            } else if stim == LEVEL_MODERATE {
                "Brisk & Alert"
            } else {
                "Light Lift"
            }
        }
        _ => UNKNOWN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::compounds;
    use approx::assert_relative_eq;

    fn tea(caffeine: Option<f64>, theanine: Option<f64>) -> Tea {
        Tea {
            caffeine_level: caffeine,
            l_theanine_level: theanine,
            ..Tea::new("test")
        }
    }

    // ---- Scenario Tests ----

    #[test]
    fn test_caffeine_dominant_very_high() {
        let scales = compounds::builtin();
        let analysis = CompoundCalculator::new(&scales).analyze(&tea(Some(8.0), Some(2.0)));

        assert_relative_eq!(analysis.ratio, 0.25);
        assert_eq!(analysis.ratio_category, CAFFEINE_DOMINANT);
        assert_eq!(analysis.stimulation_level, "Very High");
        assert_eq!(analysis.compound_profile, "Intense & Sharp");
        assert!(analysis.effect_hints.contains("sharp alertness"));
    }

    #[test]
    fn test_no_data() {
        let scales = compounds::builtin();
        let calc = CompoundCalculator::new(&scales);

        for input in [tea(Some(0.0), Some(0.0)), tea(None, None), tea(Some(f64::NAN), None)] {
            let analysis = calc.analyze(&input);
            assert_eq!(analysis.description, NO_COMPOUND_DATA);
            assert_eq!(analysis.ratio_category, NOT_AVAILABLE);
            assert!(!analysis.has_data());
        }
    }

    // ---- Smoothing Tests ----

    #[test]
    fn test_stimulation_smoothing() {
        let scales = compounds::builtin();
        let calc = CompoundCalculator::new(&scales);

        assert_eq!(calc.analyze(&tea(Some(7.0), Some(5.0))).stimulation_level, "High");
        assert_eq!(calc.analyze(&tea(Some(7.0), Some(5.5))).stimulation_level, "Moderate-High");
        assert_eq!(calc.analyze(&tea(Some(9.0), Some(7.4))).stimulation_level, "Very High");
        assert_eq!(calc.analyze(&tea(Some(9.0), Some(7.5))).stimulation_level, "High");
    }

    // ---- Decision Table Tests ----

    #[test]
    fn test_theanine_dominant_branches() {
        let scales = compounds::builtin();
        let calc = CompoundCalculator::new(&scales);

        // ratio 3.5, relaxation High
        assert_eq!(calc.analyze(&tea(Some(2.0), Some(7.0))).compound_profile, "Calm & Meditative");
        // ratio 2.5, relaxation Moderate, stimulation Very Low
        assert_eq!(calc.analyze(&tea(Some(2.0), Some(5.0))).compound_profile, "Gentle & Soothing");
        // theanine without caffeine falls to ratio 0
        assert_eq!(calc.analyze(&tea(None, Some(6.0))).ratio_category, CAFFEINE_DOMINANT);
    }

    #[test]
    fn test_balanced_branches() {
        let scales = compounds::builtin();
        let calc = CompoundCalculator::new(&scales);

        // 7 / 7: stimulation smoothed to Moderate-High (3), relaxation High
        assert_eq!(calc.analyze(&tea(Some(7.0), Some(7.0))).compound_profile, "Balanced Alertness");
        // 9 / 9: Very High smoothed to High, relaxation Very High
        assert_eq!(calc.analyze(&tea(Some(9.0), Some(9.0))).compound_profile, "Energized Focus");
        assert_eq!(calc.analyze(&tea(Some(2.0), Some(2.0))).compound_profile, "Mellow Balance");
    }

    #[test]
    fn test_caffeine_dominant_moderate() {
        let scales = compounds::builtin();
        let analysis = CompoundCalculator::new(&scales).analyze(&tea(Some(5.0), Some(1.0)));
        assert_eq!(analysis.compound_profile, "Brisk & Alert");
    }

    #[test]
    fn test_repeatable() {
        let scales = compounds::builtin();
        let calc = CompoundCalculator::new(&scales);
        let input = tea(Some(6.0), Some(7.0));
        assert_eq!(calc.analyze(&input), calc.analyze(&input));
    }
}
