//! Processing Calculator
//!
//! Aggregates the impact records of every recognized processing method.
//!
//! Aggregation rules:
//!   - roast level: first roast pattern (table order) found in any method tag
//!   - flavor impacts, compound notes: ordered union
//!   - body impact, alertness modifier: last recognized method defining one
//!   - energetic tendency: mean of {-1, 0, 1} over methods defining one,
//!     overridden outright by oxidation (≥ 70 warming, [0, 15) cooling)
//!
//! Last-writer-wins depends on the catalog's method order; that order is
//! preserved as given.

use super::{finite, Analysis};
use crate::reference::processing::{ProcessingTables, Tendency};
use crate::types::Tea;
use crate::utils::{categorize, OrderedSet};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const NO_ROAST: &str = "None";
pub const NO_PROCESSING_DATA: &str = "No processing information available.";

/// Tendency mean above which the result is warming (below the negation, cooling).
const TENDENCY_CUTOFF: f64 = 0.3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingAnalysis {
    pub roast_level: String,
    pub oxidation_category: String,
    pub flavor_impacts: OrderedSet,
    pub body_impact: Option<String>,
    pub energetic_tendency: Tendency,
    pub alertness_modifier: Option<String>,
    pub compound_notes: OrderedSet,
    pub recognized_methods: Vec<String>,
    pub unrecognized_methods: Vec<String>,
    pub description: String,
}

impl ProcessingAnalysis {
    pub fn no_data() -> Self {
        Self {
            roast_level: NO_ROAST.to_string(),
            oxidation_category: crate::utils::UNKNOWN.to_string(),
            flavor_impacts: OrderedSet::new(),
            body_impact: None,
            energetic_tendency: Tendency::Neutral,
            alertness_modifier: None,
            compound_notes: OrderedSet::new(),
            recognized_methods: Vec::new(),
            unrecognized_methods: Vec::new(),
            description: NO_PROCESSING_DATA.to_string(),
        }
    }
}

impl Analysis for ProcessingAnalysis {
    fn description(&self) -> &str {
        &self.description
    }

    fn to_flat(&self) -> Vec<(&'static str, String)> {
        vec![
            ("roast_level", self.roast_level.clone()),
            ("oxidation_category", self.oxidation_category.clone()),
            ("flavor_impacts", self.flavor_impacts.joined()),
            ("body_impact", self.body_impact.clone().unwrap_or_default()),
            ("energetic_tendency", self.energetic_tendency.as_str().to_string()),
            ("alertness_modifier", self.alertness_modifier.clone().unwrap_or_default()),
            ("compound_notes", self.compound_notes.joined()),
            ("recognized_methods", self.recognized_methods.join(", ")),
            ("unrecognized_methods", self.unrecognized_methods.join(", ")),
            ("description", self.description.clone()),
        ]
    }
}

pub struct ProcessingCalculator<'a> {
    tables: &'a ProcessingTables,
}

impl<'a> ProcessingCalculator<'a> {
    pub fn new(tables: &'a ProcessingTables) -> Self {
        Self { tables }
    }

    pub fn analyze(&self, tea: &Tea) -> ProcessingAnalysis {
        let Some(processing) = &tea.processing else {
            return ProcessingAnalysis::no_data();
        };
        let oxidation = finite(processing.oxidation_level);
        if processing.methods.is_empty() && oxidation.is_none() {
            return ProcessingAnalysis::no_data();
        }

        let roast_level = self.roast_level(&processing.methods);
        let oxidation_category = categorize(oxidation, &self.tables.oxidation).to_string();

        let mut flavor_impacts = OrderedSet::new();
        let mut compound_notes = OrderedSet::new();
        let mut body_impact = None;
        let mut alertness_modifier = None;
        let mut recognized_methods = Vec::new();
        let mut unrecognized_methods = Vec::new();
        let mut tendency_sum = 0.0;
        let mut tendency_count = 0usize;

        for tag in &processing.methods {
            let Some(method) = self.tables.method(tag) else {
                debug!("Unrecognized processing method '{}'", tag);
                unrecognized_methods.push(tag.clone());
                continue;
            };
            recognized_methods.push(method.key.clone());

            flavor_impacts.extend(&method.flavor_impacts);
            compound_notes.extend(&method.compound_notes);
            if let Some(body) = &method.body_impact {
                body_impact = Some(body.clone());
            }
            if let Some(alertness) = &method.alertness_modifier {
                alertness_modifier = Some(alertness.clone());
            }
            if let Some(tendency) = method.energetic_tendency {
                tendency_sum += tendency.value();
                tendency_count += 1;
            }
        }

        let averaged = if tendency_count == 0 {
            Tendency::Neutral
        } else {
            let mean = tendency_sum / tendency_count as f64;
            if mean > TENDENCY_CUTOFF {
                Tendency::Warming
            } else if mean < -TENDENCY_CUTOFF {
                Tendency::Cooling
            } else {
                Tendency::Neutral
            }
        };
        let energetic_tendency = match oxidation {
            Some(ox) if ox >= self.tables.warming_oxidation => Tendency::Warming,
            Some(ox) if (0.0..self.tables.cooling_oxidation).contains(&ox) => Tendency::Cooling,
            _ => averaged,
        };

        let description = describe(
            &roast_level,
            &oxidation_category,
            energetic_tendency,
            body_impact.as_deref(),
            &flavor_impacts,
        );

        ProcessingAnalysis {
            roast_level,
            oxidation_category,
            flavor_impacts,
            body_impact,
            energetic_tendency,
            alertness_modifier,
            compound_notes,
            recognized_methods,
            unrecognized_methods,
            description,
        }
    }

    /// First roast level (table order) with a pattern inside any method tag.
    fn roast_level(&self, methods: &[String]) -> String {
        let lowered: Vec<String> = methods.iter().map(|m| m.trim().to_lowercase()).collect();
        self.tables
            .roast_patterns
            .iter()
            .find(|roast| {
                roast
                    .patterns
                    .iter()
                    .any(|p| lowered.iter().any(|m| m.contains(p.as_str())))
            })
            .map(|roast| roast.level.clone())
            .unwrap_or_else(|| NO_ROAST.to_string())
    }
}

fn describe(
    roast: &str,
    oxidation: &str,
    tendency: Tendency,
    body: Option<&str>,
    flavors: &OrderedSet,
) -> String {
    let mut parts = Vec::new();
    if roast != NO_ROAST {
        parts.push(format!("{} roast", roast));
    }
    if oxidation != crate::utils::UNKNOWN {
        parts.push(oxidation.to_lowercase());
    }
    if let Some(body) = body {
        parts.push(format!("{} body", body));
    }

    let mut text = if parts.is_empty() {
        format!("Energetically {}.", tendency.as_str())
    } else {
        format!("{}; energetically {}.", capitalize(&parts.join(", ")), tendency.as_str())
    };
    if !flavors.is_empty() {
        text.push_str(&format!(" Processing brings out {} notes.", flavors.joined()));
    }
    text
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::processing;
    use crate::types::Processing;

    fn tea(methods: &[&str], oxidation: Option<f64>) -> Tea {
        Tea {
            processing: Some(Processing {
                methods: methods.iter().map(|m| m.to_string()).collect(),
                oxidation_level: oxidation,
            }),
            ..Tea::new("test")
        }
    }

    // ---- Roast Level Tests ----

    #[test]
    fn test_charcoal_checked_before_heavy() {
        let tables = processing::builtin();
        let analysis = ProcessingCalculator::new(&tables).analyze(&tea(&["charcoal-heavy-roast"], None));
        assert_eq!(analysis.roast_level, "Charcoal");
        assert_eq!(analysis.unrecognized_methods, vec!["charcoal-heavy-roast"]);
    }

    #[test]
    fn test_roast_levels() {
        let tables = processing::builtin();
        let calc = ProcessingCalculator::new(&tables);
        assert_eq!(calc.analyze(&tea(&["rolled", "Medium Roast"], None)).roast_level, "Medium");
        assert_eq!(calc.analyze(&tea(&["roasted"], None)).roast_level, "Roast");
        assert_eq!(calc.analyze(&tea(&["steamed"], None)).roast_level, NO_ROAST);
    }

    // ---- Aggregation Tests ----

    #[test]
    fn test_union_and_last_writer_wins() {
        let tables = processing::builtin();
        let calc = ProcessingCalculator::new(&tables);

        let analysis = calc.analyze(&tea(&["shade-grown", "steamed"], None));
        assert_eq!(analysis.body_impact.as_deref(), Some("light"));
        assert_eq!(analysis.alertness_modifier.as_deref(), Some("calm focus"));
        // "marine" appears in both records but once in the union
        assert_eq!(
            analysis.flavor_impacts.as_slice(),
            &["umami", "marine", "sweet", "grassy", "bright green"]
        );

        // Order is load-bearing for body impact
        let reversed = calc.analyze(&tea(&["steamed", "shade-grown"], None));
        assert_eq!(reversed.body_impact.as_deref(), Some("silky"));
    }

    #[test]
    fn test_method_keys_case_insensitive() {
        let tables = processing::builtin();
        let analysis = ProcessingCalculator::new(&tables).analyze(&tea(&["  Oxidized "], None));
        assert_eq!(analysis.recognized_methods, vec!["oxidized"]);
        assert!(analysis.unrecognized_methods.is_empty());
    }

    // ---- Tendency Tests ----

    #[test]
    fn test_tendency_average() {
        let tables = processing::builtin();
        let calc = ProcessingCalculator::new(&tables);

        // -1, 0 → mean -0.5
        assert_eq!(calc.analyze(&tea(&["steamed", "pan-fired"], None)).energetic_tendency, Tendency::Cooling);
        // -1, 1 → mean 0
        assert_eq!(calc.analyze(&tea(&["steamed", "smoked"], None)).energetic_tendency, Tendency::Neutral);
        // 1, 0, 0 → mean 0.33
        assert_eq!(
            calc.analyze(&tea(&["smoked", "pan-fired", "withered"], None)).energetic_tendency,
            Tendency::Warming
        );
    }

    #[test]
    fn test_oxidation_overrides_tendency() {
        let tables = processing::builtin();
        let calc = ProcessingCalculator::new(&tables);

        let analysis = calc.analyze(&tea(&["steamed"], Some(85.0)));
        assert_eq!(analysis.energetic_tendency, Tendency::Warming);
        assert_eq!(analysis.oxidation_category, "Heavily Oxidized");

        let analysis = calc.analyze(&tea(&["smoked"], Some(5.0)));
        assert_eq!(analysis.energetic_tendency, Tendency::Cooling);

        let analysis = calc.analyze(&tea(&["smoked"], Some(40.0)));
        assert_eq!(analysis.energetic_tendency, Tendency::Warming);
    }

    #[test]
    fn test_no_data() {
        let tables = processing::builtin();
        let calc = ProcessingCalculator::new(&tables);
        assert_eq!(calc.analyze(&Tea::new("bare")), ProcessingAnalysis::no_data());
        assert_eq!(calc.analyze(&tea(&[], None)).description, NO_PROCESSING_DATA);
    }
}
