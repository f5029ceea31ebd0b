//! Tea-type Calculator
//!
//! Looks up the baseline record for the tea's primary type, trying the
//! exact name, then an alias, then a substring ("Green Tea" → Green), all
//! case-insensitive.

use super::Analysis;
use crate::reference::TeaTypeBaseline;
use crate::types::Tea;
use crate::utils::UNKNOWN;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeaTypeAnalysis {
    pub primary_type: String,
    pub typical_caffeine: String,
    pub dominant_flavor_categories: Vec<String>,
    pub seasonal_tendency: Vec<String>,
    pub base_activity_hints: Vec<String>,
    pub description: String,
}

impl TeaTypeAnalysis {
    pub fn unknown() -> Self {
        Self {
            primary_type: UNKNOWN.to_string(),
            typical_caffeine: UNKNOWN.to_string(),
            dominant_flavor_categories: Vec::new(),
            seasonal_tendency: Vec::new(),
            base_activity_hints: Vec::new(),
            description: "Tea type not recognized.".to_string(),
        }
    }

    fn from_baseline(baseline: &TeaTypeBaseline) -> Self {
        let mut description = format!(
            "{} tea with typically {} caffeine",
            baseline.name,
            baseline.typical_caffeine.to_lowercase()
        );
        if !baseline.dominant_flavor_categories.is_empty() {
            description.push_str(&format!(
                ", usually {}",
                baseline.dominant_flavor_categories.join(", ").to_lowercase()
            ));
        }
        description.push('.');

        Self {
            primary_type: baseline.name.clone(),
            typical_caffeine: baseline.typical_caffeine.clone(),
            dominant_flavor_categories: baseline.dominant_flavor_categories.clone(),
            seasonal_tendency: baseline.seasonal_tendency.clone(),
            base_activity_hints: baseline.base_activity_hints.clone(),
            description,
        }
    }
}

impl Analysis for TeaTypeAnalysis {
    fn description(&self) -> &str {
        &self.description
    }

    fn to_flat(&self) -> Vec<(&'static str, String)> {
        vec![
            ("primary_type", self.primary_type.clone()),
            ("typical_caffeine", self.typical_caffeine.clone()),
            ("dominant_flavor_categories", self.dominant_flavor_categories.join(", ")),
            ("seasonal_tendency", self.seasonal_tendency.join(", ")),
            ("base_activity_hints", self.base_activity_hints.join(", ")),
            ("description", self.description.clone()),
        ]
    }
}

pub struct TeaTypeCalculator<'a> {
    baselines: &'a [TeaTypeBaseline],
}

impl<'a> TeaTypeCalculator<'a> {
    pub fn new(baselines: &'a [TeaTypeBaseline]) -> Self {
        Self { baselines }
    }

    pub fn analyze(&self, tea: &Tea) -> TeaTypeAnalysis {
        let Some(tea_type) = tea.tea_type.as_deref().map(str::trim).filter(|t| !t.is_empty()) else {
            return TeaTypeAnalysis::unknown();
        };

        match self.resolve(tea_type) {
            Some(baseline) => TeaTypeAnalysis::from_baseline(baseline),
            None => {
                debug!("Unrecognized tea type '{}'", tea_type);
                TeaTypeAnalysis::unknown()
            }
        }
    }

    pub fn resolve(&self, tea_type: &str) -> Option<&'a TeaTypeBaseline> {
        let key = tea_type.trim().to_lowercase();
        let baselines = self.baselines;

        baselines
            .iter()
            .find(|b| b.name.to_lowercase() == key)
            .or_else(|| baselines.iter().find(|b| b.aliases.iter().any(|a| *a == key)))
            .or_else(|| {
                baselines.iter().find(|b| {
                    key.contains(&b.name.to_lowercase()) || b.aliases.iter().any(|a| key.contains(a.as_str()))
                })
            })
    }
}
