//! Score Map & Normalizer
//!
//! A `ScoreMap` is seeded with one baseline score per known candidate and
//! then only ever moved by additive adjustments. `normalize` rescales the raw
//! scores onto 0-100 using the observed min/max.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Name used for the placeholder entry produced from an empty map.
pub const NO_STRONG_PREFERENCE: &str = "No strong preference";

/// Score given to the placeholder entry.
pub const SENTINEL_SCORE: u32 = 50;

/// Ordered candidate → raw score mapping.
#[derive(Debug, Clone, Default)]
pub struct ScoreMap {
    entries: Vec<(String, f64)>,
    index: FxHashMap<String, usize>,
}

impl ScoreMap {
    /// Seed every candidate with `baseline`. Duplicate names keep their first
    /// position.
    pub fn initialize<S: AsRef<str>>(candidates: &[S], baseline: f64) -> Self {
        let mut map = ScoreMap::default();
        for name in candidates {
            let name = name.as_ref();
            if map.index.contains_key(name) {
                continue;
            }
            map.index.insert(name.to_string(), map.entries.len());
            map.entries.push((name.to_string(), baseline));
        }
        map
    }

    /// Add `delta` to a known candidate. Unknown names are ignored.
    /// Returns whether the candidate existed.
    pub fn adjust(&mut self, name: &str, delta: f64) -> bool {
        match self.index.get(name) {
            Some(&i) => {
                self.entries[i].1 += delta;
                true
            }
            None => {
                tracing::debug!("Ignoring adjustment for unknown candidate '{}'", name);
                false
            }
        }
    }

    /// Apply a batch of `(candidate, delta)` adjustments, scaled by `factor`.
    pub fn apply(&mut self, adjustments: &[(&str, f64)], factor: f64) {
        for (name, delta) in adjustments {
            self.adjust(name, delta * factor);
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.index.get(name).map(|&i| self.entries[i].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(n, s)| (n.as_str(), *s))
    }
}

/// Ordered candidate → 0-100 integer score mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedMap {
    entries: Vec<(String, u32)>,
}

impl NormalizedMap {
    pub fn from_entries(entries: Vec<(String, u32)>) -> Self {
        Self {
            entries: entries.into_iter().map(|(n, s)| (n, s.min(100))).collect(),
        }
    }

    /// The single placeholder entry used when there was nothing to score.
    pub fn sentinel() -> Self {
        Self {
            entries: vec![(NO_STRONG_PREFERENCE.to_string(), SENTINEL_SCORE)],
        }
    }

    pub fn is_sentinel(&self) -> bool {
        self.entries.len() == 1 && self.entries[0].0 == NO_STRONG_PREFERENCE
    }

    pub fn get(&self, name: &str) -> Option<u32> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, s)| *s)
    }

    pub fn max_score(&self) -> Option<u32> {
        self.entries.iter().map(|(_, s)| *s).max()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(n, s)| (n.as_str(), *s))
    }
}

/// Rescale raw scores onto 0-100.
///
/// - `(score - min) / (max - min) * 100`, rounded, clamped to [0, 100]
/// - all scores equal and positive → every entry 100
/// - all scores equal and zero or below → every entry 0
/// - empty map → [`NormalizedMap::sentinel`]
pub fn normalize(map: &ScoreMap) -> NormalizedMap {
    if map.is_empty() {
        return NormalizedMap::sentinel();
    }

    let (min, max) = map.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (_, s)| {
        (lo.min(s), hi.max(s))
    });
    let range = max - min;

    let entries = map
        .iter()
        .map(|(name, score)| {
            let scaled = if range.abs() < f64::EPSILON {
                if max > 0.0 { 100.0 } else { 0.0 }
            } else {
                (score - min) / range * 100.0
            };
            (name.to_string(), scaled.round().clamp(0.0, 100.0) as u32)
        })
        .collect();

    NormalizedMap { entries }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    // ---- ScoreMap Tests ----

    #[test]
    fn test_initialize_and_adjust() {
        let mut map = ScoreMap::initialize(&["Morning", "Evening"], 50.0);
        assert!(map.adjust("Morning", 12.5));
        assert!(!map.adjust("Brunch", 40.0));

        assert_eq!(map.get("Morning"), Some(62.5));
        assert_eq!(map.get("Evening"), Some(50.0));
        assert_eq!(map.get("Brunch"), None);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_apply_scales_deltas() {
        let mut map = ScoreMap::initialize(&["A", "B"], 0.0);
        map.apply(&[("A", 10.0), ("B", -4.0), ("C", 99.0)], 0.5);
        assert_eq!(map.get("A"), Some(5.0));
        assert_eq!(map.get("B"), Some(-2.0));
    }

    // ---- Normalize Tests ----

    #[test]
    fn test_normalize_rescales() {
        let mut map = ScoreMap::initialize(&["A", "B", "C"], 50.0);
        map.adjust("A", 20.0);
        map.adjust("C", -30.0);

        let norm = normalize(&map);
        assert_eq!(norm.get("A"), Some(100));
        assert_eq!(norm.get("B"), Some(60));
        assert_eq!(norm.get("C"), Some(0));
    }

    #[test]
    fn test_normalize_flat_maps() {
        let norm = normalize(&ScoreMap::initialize(&["A", "B"], 50.0));
        assert_eq!(norm.get("A"), Some(100));
        assert_eq!(norm.get("B"), Some(100));

        let norm = normalize(&ScoreMap::initialize(&["A", "B"], 0.0));
        assert_eq!(norm.get("A"), Some(0));
        assert_eq!(norm.get("B"), Some(0));
    }

    #[test]
    fn test_normalize_empty_gives_sentinel() {
        let norm = normalize(&ScoreMap::default());
        assert!(norm.is_sentinel());
        assert_eq!(norm.get(NO_STRONG_PREFERENCE), Some(SENTINEL_SCORE));
    }

    #[test]
    fn test_normalize_bounds_random() {
        let mut rng = rand::thread_rng();
        let names: Vec<String> = (0..8).map(|i| format!("c{}", i)).collect();

        for _ in 0..200 {
            let mut map = ScoreMap::initialize(&names, rng.gen_range(-50.0..50.0));
            for name in &names {
                map.adjust(name, rng.gen_range(-40.0..40.0));
            }

            let norm = normalize(&map);
            assert_eq!(norm.len(), names.len());
            assert!(norm.iter().all(|(_, s)| s <= 100));

            let (top_name, _) = map
                .iter()
                .fold(("", f64::NEG_INFINITY), |acc, (n, s)| if s > acc.1 { (n, s) } else { acc });
            assert_eq!(norm.get(top_name), Some(100));
        }
    }
}
