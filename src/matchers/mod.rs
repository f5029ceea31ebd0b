//! Recommendation matchers
//!
//! Every matcher follows the same pipeline:
//! 1. Seed a `ScoreMap` with the domain's registered candidates
//! 2. Apply its hand-authored rule table to the upstream analyses
//! 3. Normalize to 0-100
//! 4. Select recommendations and build clusters and/or cyclic ranges
//!
//! Matchers differ only in the analyses they read, their rule tables and
//! which grouping step they run.

pub mod activity;
pub mod food;
pub mod season;
pub mod time;

pub use activity::ActivityMatcher;
pub use food::FoodMatcher;
pub use season::SeasonMatcher;
pub use time::TimeMatcher;

use crate::scoring::{Cluster, CyclicRange, NormalizedMap, RecommendationList, ScoreMap};
use serde::{Deserialize, Serialize};

/// Output of one matcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Full normalized score map, registry order
    pub normalized: NormalizedMap,
    pub recommendations: RecommendationList,
    /// Activity and food only
    pub clusters: Vec<Cluster>,
    /// Season and time only
    pub ranges: Vec<CyclicRange>,
    /// Season only: simplified four-season aggregate
    pub legacy: Option<Vec<(String, u32)>>,
}

impl MatchResult {
    pub fn recommended_names(&self) -> Vec<&str> {
        self.recommendations.names()
    }
}

/// Score adjustments keyed by a condition label.
pub(crate) type RuleTable = &'static [(&'static str, &'static [(&'static str, f64)])];

/// Apply the row of `table` whose key equals `key`, if any. Returns whether a
/// row matched.
pub(crate) fn apply_keyed(map: &mut ScoreMap, table: RuleTable, key: &str) -> bool {
    match table.iter().find(|(k, _)| *k == key) {
        Some((_, adjustments)) => {
            map.apply(adjustments, 1.0);
            true
        }
        None => false,
    }
}

/// Add `delta` to every named candidate.
pub(crate) fn boost_all<I, S>(map: &mut ScoreMap, names: I, delta: f64)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for name in names {
        map.adjust(name.as_ref(), delta);
    }
}

/// Adjustment targets in `rows` that `registry` does not contain.
#[cfg(test)]
pub(crate) fn unregistered_targets<I>(rows: I, registry: &crate::reference::CandidateRegistry) -> Vec<&'static str>
where
    I: IntoIterator<Item = &'static [(&'static str, f64)]>,
{
    rows.into_iter()
        .flat_map(|row| row.iter().map(|(name, _)| *name))
        .filter(|name| !registry.contains(name))
        .collect()
}

/// Adjustment rows of a keyed rule table.
#[cfg(test)]
pub(crate) fn rows(table: RuleTable) -> impl Iterator<Item = &'static [(&'static str, f64)]> {
    table.iter().map(|(_, adjustments)| *adjustments)
}

#[cfg(test)]
mod tests {
    use super::*;

    static TABLE: &[(&str, &[(&str, f64)])] = &[
        ("warm", &[("Winter", 10.0), ("Summer", -5.0)]),
        ("cool", &[("Summer", 10.0)]),
    ];

    #[test]
    fn test_apply_keyed() {
        let mut map = ScoreMap::initialize(&["Summer", "Winter"], 50.0);
        assert!(apply_keyed(&mut map, TABLE, "warm"));
        assert!(!apply_keyed(&mut map, TABLE, "neutral"));
        assert_eq!(map.get("Winter"), Some(60.0));
        assert_eq!(map.get("Summer"), Some(45.0));
    }

    #[test]
    fn test_unregistered_targets() {
        let tables = crate::reference::ReferenceTables::builtin();
        let missing = unregistered_targets(rows(TABLE), &tables.candidates.seasons);
        assert!(missing.is_empty());

        static TYPO: RuleTable = &[("warm", &[("Wintr", 5.0), ("Summer", 1.0)])];
        assert_eq!(unregistered_targets(rows(TYPO), &tables.candidates.seasons), vec!["Wintr"]);
    }

    #[test]
    fn test_boost_all_skips_unknown() {
        let mut map = ScoreMap::initialize(&["Summer", "Winter"], 50.0);
        boost_all(&mut map, ["Summer", "Monsoon"], 8.0);
        assert_eq!(map.get("Summer"), Some(58.0));
        assert_eq!(map.len(), 2);
    }
}
