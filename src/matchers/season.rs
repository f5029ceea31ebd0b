//! Season Matcher
//!
//! Scores the six harvest-calendar seasons from processing tendency and
//! roast, harvest season, flavor seasonal affinities, broad flavor
//! categories and the tea type's seasonal tendency.
//!
//! Outputs ideal-period ranges over the cyclic season ordering (Winter may
//! join Early Spring) and a four-season legacy aggregate.

use super::{apply_keyed, boost_all, MatchResult, RuleTable};
use crate::calculators::{FlavorAnalysis, GeographyAnalysis, ProcessingAnalysis, TeaTypeAnalysis};
use crate::config::MatcherConfig;
use crate::reference::flavors::{BRIGHT, EARTHY, FLORAL, FRESH, ROASTED, SPICED, SWEET};
use crate::reference::ReferenceTables;
use crate::scoring::{build_cyclic_ranges, normalize, rounded_mean, select, NormalizedMap, ScoreMap};
use tracing::debug;

const HARVEST_SEASON_BOOST: f64 = 10.0;
const FLAVOR_AFFINITY_BOOST: f64 = 8.0;
const TEA_TYPE_BOOST: f64 = 12.0;

static TENDENCY_RULES: RuleTable = &[
    ("warming", &[("Early Autumn", 5.0), ("Late Autumn", 15.0), ("Winter", 20.0), ("Summer", -10.0)]),
    ("cooling", &[("Early Spring", 5.0), ("Late Spring", 10.0), ("Summer", 20.0), ("Winter", -10.0)]),
];

static ROAST_RULES: RuleTable = &[
    ("Charcoal", &[("Late Autumn", 10.0), ("Winter", 15.0), ("Summer", -5.0)]),
    ("Heavy", &[("Late Autumn", 10.0), ("Winter", 15.0), ("Summer", -5.0)]),
    ("Medium", &[("Early Autumn", 10.0), ("Late Autumn", 5.0)]),
    ("Light", &[("Late Spring", 5.0)]),
    ("Minimal", &[("Early Spring", 5.0)]),
];

static BROAD_CATEGORY_RULES: RuleTable = &[
    (FRESH, &[("Early Spring", 8.0), ("Late Spring", 5.0)]),
    (FLORAL, &[("Late Spring", 8.0), ("Summer", 3.0)]),
    (BRIGHT, &[("Summer", 8.0)]),
    (SWEET, &[("Early Autumn", 3.0), ("Winter", 5.0)]),
    (ROASTED, &[("Late Autumn", 8.0), ("Winter", 5.0)]),
    (EARTHY, &[("Late Autumn", 5.0), ("Winter", 8.0)]),
    (SPICED, &[("Winter", 10.0)]),
];

pub struct SeasonMatcher<'a> {
    tables: &'a ReferenceTables,
    config: &'a MatcherConfig,
}

impl<'a> SeasonMatcher<'a> {
    pub fn new(tables: &'a ReferenceTables, config: &'a MatcherConfig) -> Self {
        Self { tables, config }
    }

    /// Raw additive scores before normalization.
    pub fn score(
        &self,
        processing: &ProcessingAnalysis,
        geography: &GeographyAnalysis,
        flavor: &FlavorAnalysis,
        tea_type: &TeaTypeAnalysis,
    ) -> ScoreMap {
        let candidates = &self.tables.candidates;
        let mut map = ScoreMap::initialize(&candidates.seasons.candidates, self.config.baseline);

        apply_keyed(&mut map, TENDENCY_RULES, processing.energetic_tendency.as_str());
        apply_keyed(&mut map, ROAST_RULES, &processing.roast_level);

        boost_all(&mut map, candidates.resolve_season(&geography.harvest_season), HARVEST_SEASON_BOOST);

        for affinity in flavor.seasonal_affinities.iter() {
            boost_all(&mut map, candidates.resolve_season(affinity), FLAVOR_AFFINITY_BOOST);
        }
        for broad in flavor.broad_categories.iter() {
            apply_keyed(&mut map, BROAD_CATEGORY_RULES, broad);
        }

        for season in &tea_type.seasonal_tendency {
            boost_all(&mut map, candidates.resolve_season(season), TEA_TYPE_BOOST);
        }

        map
    }

    pub fn evaluate(
        &self,
        processing: &ProcessingAnalysis,
        geography: &GeographyAnalysis,
        flavor: &FlavorAnalysis,
        tea_type: &TeaTypeAnalysis,
    ) -> MatchResult {
        let registry = &self.tables.candidates.seasons;
        let normalized = normalize(&self.score(processing, geography, flavor, tea_type));

        let recommendations = select(
            &normalized,
            self.config.absolute_threshold,
            self.config.relative_threshold,
            self.config.max_recommendations,
        );
        let ranges = build_cyclic_ranges(
            &normalized,
            &registry.ordering,
            self.config.cluster_threshold,
            registry.wrap.as_ref(),
        );
        let legacy = legacy_aggregate(&normalized, registry);

        debug!(
            "Season match: top {:?}, {} ranges",
            recommendations.top().map(|r| r.name.as_str()),
            ranges.len()
        );

        MatchResult {
            normalized,
            recommendations,
            clusters: Vec::new(),
            ranges,
            legacy: Some(legacy),
        }
    }
}

/// Rounded mean per legacy season group, skipping groups with no scored member.
fn legacy_aggregate(normalized: &NormalizedMap, registry: &crate::reference::CandidateRegistry) -> Vec<(String, u32)> {
    registry
        .groups
        .iter()
        .filter_map(|group| {
            let scores: Vec<u32> = group.members.iter().filter_map(|m| normalized.get(m)).collect();
            if scores.is_empty() {
                return None;
            }
            Some((group.label.clone(), rounded_mean(scores)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matchers::{rows, unregistered_targets};
    use crate::reference::processing::Tendency;

    fn roasted_black() -> (ProcessingAnalysis, TeaTypeAnalysis) {
        let mut processing = ProcessingAnalysis::no_data();
        processing.energetic_tendency = Tendency::Warming;
        processing.roast_level = "Heavy".to_string();

        let mut tea_type = TeaTypeAnalysis::unknown();
        tea_type.seasonal_tendency = vec!["Late Autumn".to_string(), "Winter".to_string()];
        (processing, tea_type)
    }

    // ---- Scoring Tests ----

    #[test]
    fn test_warming_roasted_tea_favors_winter() {
        let tables = ReferenceTables::builtin();
        let config = MatcherConfig::season();
        let (processing, tea_type) = roasted_black();

        let result = SeasonMatcher::new(&tables, &config).evaluate(
            &processing,
            &GeographyAnalysis::no_data(),
            &FlavorAnalysis::no_data(),
            &tea_type,
        );

        assert_eq!(result.normalized.get("Winter"), Some(100));
        assert_eq!(result.normalized.get("Late Autumn"), Some(84));
        assert_eq!(result.normalized.get("Summer"), Some(0));
        assert_eq!(result.recommended_names(), vec!["Winter", "Late Autumn"]);

        assert_eq!(result.ranges.len(), 1);
        assert_eq!(result.ranges[0].start, "Late Autumn");
        assert_eq!(result.ranges[0].end, "Winter");
        assert!(!result.ranges[0].wraps);
        assert!(result.clusters.is_empty());
    }

    #[test]
    fn test_legacy_aggregate() {
        let tables = ReferenceTables::builtin();
        let config = MatcherConfig::season();
        let (processing, tea_type) = roasted_black();

        let result = SeasonMatcher::new(&tables, &config).evaluate(
            &processing,
            &GeographyAnalysis::no_data(),
            &FlavorAnalysis::no_data(),
            &tea_type,
        );

        let legacy = result.legacy.unwrap();
        assert_eq!(
            legacy,
            vec![
                ("Spring".to_string(), 24),
                ("Summer".to_string(), 0),
                ("Autumn".to_string(), 58),
                ("Winter".to_string(), 100),
            ]
        );
    }

    // ---- Rule Table Tests ----

    #[test]
    fn test_rule_tables_name_registered_seasons() {
        let tables = ReferenceTables::builtin();
        let all_rows = rows(TENDENCY_RULES).chain(rows(ROAST_RULES)).chain(rows(BROAD_CATEGORY_RULES));
        assert_eq!(unregistered_targets(all_rows, &tables.candidates.seasons), Vec::<&str>::new());

        let broad: Vec<&str> = tables.flavors.broad_categories.iter().map(|b| b.name.as_str()).collect();
        assert!(BROAD_CATEGORY_RULES.iter().all(|(key, _)| broad.contains(key)));
    }

    #[test]
    fn test_alias_affinity_boosts_both_halves() {
        let tables = ReferenceTables::builtin();
        let config = MatcherConfig::season();
        let mut flavor = FlavorAnalysis::no_data();
        flavor.seasonal_affinities.insert("Spring");

        let map = SeasonMatcher::new(&tables, &config).score(
            &ProcessingAnalysis::no_data(),
            &GeographyAnalysis::no_data(),
            &flavor,
            &TeaTypeAnalysis::unknown(),
        );
        assert_eq!(map.get("Early Spring"), Some(58.0));
        assert_eq!(map.get("Late Spring"), Some(58.0));
        assert_eq!(map.get("Summer"), Some(50.0));
    }

    #[test]
    fn test_no_signal_recommends_every_season() {
        let tables = ReferenceTables::builtin();
        let config = MatcherConfig::season();
        let result = SeasonMatcher::new(&tables, &config).evaluate(
            &ProcessingAnalysis::no_data(),
            &GeographyAnalysis::no_data(),
            &FlavorAnalysis::no_data(),
            &TeaTypeAnalysis::unknown(),
        );

        // Equal positive baselines normalize to 100 everywhere
        assert!(result.normalized.iter().all(|(_, s)| s == 100));
        assert_eq!(result.recommendations.len(), 6);
        assert_eq!(result.ranges.len(), 1);
        assert_eq!(result.ranges[0].members.len(), 6);
    }
}
