//! Flavor Calculator
//!
//! Resolves each flavor note against the flavor wheel, in order:
//!   1. exact sub-category key ("jasmine")
//!   2. associated flavor of a sub-category ("bergamot" → citrus)
//!   3. top-category name ("Floral")
//!
//! Intensity comes from the number of distinct notes: ≤ 2 Subtle,
//! ≤ 4 Moderate, otherwise Pronounced.

use super::Analysis;
use crate::reference::flavors::{FlavorHints, FlavorNote, FlavorWheel};
use crate::types::Tea;
use crate::utils::{OrderedSet, UNKNOWN};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const NO_FLAVOR_DATA: &str = "No flavor profile available.";

/// One flavor note resolved against the wheel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlavorMatch {
    pub note: String,
    pub category: String,
    /// `None` when the note named the top category itself
    pub subcategory: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlavorAnalysis {
    pub matches: Vec<FlavorMatch>,
    pub unmatched_notes: Vec<String>,
    pub primary_categories: OrderedSet,
    pub broad_categories: OrderedSet,
    pub intensity: String,
    pub food_pairings: OrderedSet,
    pub seasonal_affinities: OrderedSet,
    pub activity_hints: OrderedSet,
    pub description: String,
}

impl FlavorAnalysis {
    pub fn no_data() -> Self {
        Self {
            matches: Vec::new(),
            unmatched_notes: Vec::new(),
            primary_categories: OrderedSet::new(),
            broad_categories: OrderedSet::new(),
            intensity: UNKNOWN.to_string(),
            food_pairings: OrderedSet::new(),
            seasonal_affinities: OrderedSet::new(),
            activity_hints: OrderedSet::new(),
            description: NO_FLAVOR_DATA.to_string(),
        }
    }
}

impl Analysis for FlavorAnalysis {
    fn description(&self) -> &str {
        &self.description
    }

    fn to_flat(&self) -> Vec<(&'static str, String)> {
        let matched: Vec<&str> = self.matches.iter().map(|m| m.note.as_str()).collect();
        vec![
            ("matched_notes", matched.join(", ")),
            ("unmatched_notes", self.unmatched_notes.join(", ")),
            ("primary_categories", self.primary_categories.joined()),
            ("broad_categories", self.broad_categories.joined()),
            ("intensity", self.intensity.clone()),
            ("food_pairings", self.food_pairings.joined()),
            ("seasonal_affinities", self.seasonal_affinities.joined()),
            ("activity_hints", self.activity_hints.joined()),
            ("description", self.description.clone()),
        ]
    }
}

pub fn intensity_for(distinct_notes: usize) -> &'static str {
    match distinct_notes {
        0..=2 => "Subtle",
        3..=4 => "Moderate",
        _ => "Pronounced",
    }
}

pub struct FlavorCalculator<'a> {
    wheel: &'a FlavorWheel,
}

impl<'a> FlavorCalculator<'a> {
    pub fn new(wheel: &'a FlavorWheel) -> Self {
        Self { wheel }
    }

    pub fn analyze(&self, tea: &Tea) -> FlavorAnalysis {
        // Distinct notes, first spelling kept
        let mut seen = FxHashSet::default();
        let notes: Vec<&str> = tea
            .flavor_profile
            .iter()
            .map(|n| n.trim())
            .filter(|n| !n.is_empty() && seen.insert(n.to_lowercase()))
            .collect();
        if notes.is_empty() {
            return FlavorAnalysis::no_data();
        }

        let mut matches = Vec::new();
        let mut unmatched_notes = Vec::new();
        let mut primary_categories = OrderedSet::new();
        let mut broad_categories = OrderedSet::new();
        let mut food_pairings = OrderedSet::new();
        let mut seasonal_affinities = OrderedSet::new();
        let mut activity_hints = OrderedSet::new();

        for note in &notes {
            let key = note.to_lowercase();
            self.add_broad_categories(&key, &mut broad_categories);

            let Some((flavor_match, hints)) = self.lookup(note, &key) else {
                debug!("Flavor note '{}' not on the wheel", note);
                unmatched_notes.push(note.to_string());
                continue;
            };

            primary_categories.insert(&flavor_match.category);
            if let Some(sub) = &flavor_match.subcategory {
                self.add_broad_categories(sub, &mut broad_categories);
            }
            food_pairings.extend(&hints.food_pairings);
            seasonal_affinities.extend(&hints.seasonal_affinity);
            activity_hints.extend(&hints.activities);
            matches.push(flavor_match);
        }

        let intensity = intensity_for(notes.len()).to_string();
        let description = describe(&intensity, &notes, &primary_categories, &broad_categories);

        FlavorAnalysis {
            matches,
            unmatched_notes,
            primary_categories,
            broad_categories,
            intensity,
            food_pairings,
            seasonal_affinities,
            activity_hints,
            description,
        }
    }

    fn lookup(&self, note: &str, key: &str) -> Option<(FlavorMatch, &'a FlavorHints)> {
        let wheel = self.wheel;
        let find_sub = move |pred: &dyn Fn(&FlavorNote) -> bool| {
            wheel
                .categories
                .iter()
                .find_map(|cat| cat.subcategories.iter().find(|&s| pred(s)).map(|s| (cat, s)))
        };

        let by_key = find_sub(&|s: &FlavorNote| s.key == key);
        let by_association = || find_sub(&|s: &FlavorNote| s.associated.iter().any(|a| a == key));
        if let Some((cat, sub)) = by_key.or_else(by_association) {
            return Some((
                FlavorMatch {
                    note: note.to_string(),
                    category: cat.name.clone(),
                    subcategory: Some(sub.key.clone()),
                },
                &sub.hints,
            ));
        }

        wheel
            .categories
            .iter()
            .find(|cat| cat.name.to_lowercase() == key)
            .map(|cat| {
                (
                    FlavorMatch {
                        note: note.to_string(),
                        category: cat.name.clone(),
                        subcategory: None,
                    },
                    &cat.hints,
                )
            })
    }

    fn add_broad_categories(&self, text: &str, out: &mut OrderedSet) {
        for broad in &self.wheel.broad_categories {
            if broad.keywords.iter().any(|k| text.contains(k.as_str())) {
                out.insert(&broad.name);
            }
        }
    }
}

fn describe(intensity: &str, notes: &[&str], primary: &OrderedSet, broad: &OrderedSet) -> String {
    let mut text = format!("{} flavor profile of {}", intensity, notes.join(", "));
    if !broad.is_empty() {
        text.push_str(&format!(", reading as {}", broad.joined()));
    } else if !primary.is_empty() {
        text.push_str(&format!(", centered on {}", primary.joined()));
    }
    text.push('.');
    text
}
