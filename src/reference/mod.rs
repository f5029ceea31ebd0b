//! Static reference tables
//!
//! All lookup data consumed by calculators and matchers, gathered into one
//! immutable `ReferenceTables` record. The built-in tables are hand-authored
//! in the submodules; a full replacement can be loaded from JSON.
//!
//! Tables are built once per process (`ReferenceTables::shared`) and only ever
//! read afterwards, so any number of profiling calls may share them across
//! threads.

pub mod candidates;
pub mod climate;
pub mod compounds;
pub mod flavors;
pub mod processing;
pub mod tea_types;

pub use candidates::{CandidateRegistry, CandidateTables, SeasonAlias};
pub use climate::{ClimateBucket, ClimateTables, Region, SeasonalProfile};
pub use compounds::{CompoundScales, ProfileEffects};
pub use flavors::{BroadCategory, FlavorCategory, FlavorHints, FlavorNote, FlavorWheel};
pub use processing::{ProcessingMethod, ProcessingTables, RoastPattern, Tendency};
pub use tea_types::TeaTypeBaseline;

use crate::config::ConfigError;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceTables {
    pub compounds: CompoundScales,
    pub processing: ProcessingTables,
    pub climate: ClimateTables,
    pub flavors: FlavorWheel,
    pub tea_types: Vec<TeaTypeBaseline>,
    pub candidates: CandidateTables,
}

/// A table entry naming a candidate its domain registry does not know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryMismatch {
    pub domain: &'static str,
    /// Where the name was found
    pub source: String,
    pub name: String,
}

static SHARED: Lazy<ReferenceTables> = Lazy::new(ReferenceTables::builtin);

impl ReferenceTables {
    pub fn builtin() -> Self {
        Self {
            compounds: compounds::builtin(),
            processing: processing::builtin(),
            climate: climate::builtin(),
            flavors: flavors::builtin(),
            tea_types: tea_types::builtin(),
            candidates: candidates::builtin(),
        }
    }

    /// Process-wide built-in tables, constructed on first use.
    pub fn shared() -> &'static ReferenceTables {
        &SHARED
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let tables: ReferenceTables = serde_json::from_str(json)?;
        for mismatch in tables.validate() {
            tracing::warn!(
                "Reference table {} entry '{}' names unknown {} candidate",
                mismatch.source,
                mismatch.name,
                mismatch.domain
            );
        }
        Ok(tables)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// Every hint, grouping or ordering name that its domain registry does
    /// not contain. Adjustments to such names would be silently dropped.
    pub fn validate(&self) -> Vec<RegistryMismatch> {
        let cands = &self.candidates;
        let mut issues = Vec::new();

        let mut check = |domain: &'static str, registry: &CandidateRegistry, source: String, name: &str| {
            if !registry.contains(name) {
                issues.push(RegistryMismatch {
                    domain,
                    source,
                    name: name.to_string(),
                });
            }
        };

        for (domain, registry) in [
            ("season", &cands.seasons),
            ("time", &cands.times),
            ("activity", &cands.activities),
            ("food", &cands.foods),
        ] {
            for name in registry.unregistered_names() {
                check(domain, registry, format!("{} groups/ordering", domain), &name);
            }
        }

        for alias in &cands.season_aliases {
            for season in &alias.seasons {
                check("season", &cands.seasons, format!("season alias '{}'", alias.alias), season);
            }
        }

        let mut check_hints = |source: String, hints: &FlavorHints| {
            for food in &hints.food_pairings {
                check("food", &cands.foods, source.clone(), food);
            }
            for season in &hints.seasonal_affinity {
                if cands.resolve_season(season).is_empty() {
                    check("season", &cands.seasons, source.clone(), season);
                }
            }
            for activity in &hints.activities {
                check("activity", &cands.activities, source.clone(), activity);
            }
        };

        for category in &self.flavors.categories {
            check_hints(format!("flavor category '{}'", category.name), &category.hints);
            for note in &category.subcategories {
                check_hints(format!("flavor note '{}'", note.key), &note.hints);
            }
        }

        for baseline in &self.tea_types {
            let source = format!("tea type '{}'", baseline.name);
            for season in &baseline.seasonal_tendency {
                if cands.resolve_season(season).is_empty() {
                    check("season", &cands.seasons, source.clone(), season);
                }
            }
            for activity in &baseline.base_activity_hints {
                check("activity", &cands.activities, source.clone(), activity);
            }
        }

        for profile in &self.climate.seasonal_profiles {
            check("season", &cands.seasons, "seasonal profiles".to_string(), &profile.season);
        }
        for season in &self.climate.harvest_calendar {
            check("season", &cands.seasons, "harvest calendar".to_string(), season);
        }

        issues
    }
}

pub(crate) fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
