//! Time-of-day Matcher
//!
//! Stimulation sets the broad shape of the day (strong caffeine early,
//! gentle teas late), relaxation and the processing alertness modifier
//! refine it. Ranges run over the day ordering, which is cyclic: a run
//! ending at Night continues into a run starting at Early Morning.

use super::{apply_keyed, MatchResult, RuleTable};
use crate::calculators::{CompoundAnalysis, ProcessingAnalysis};
use crate::config::MatcherConfig;
use crate::reference::ReferenceTables;
use crate::scoring::{build_cyclic_ranges, normalize, select, CyclicRange, NormalizedMap, ScoreMap};
use crate::utils::level_value;
use crate::utils::levels::{LEVEL_HIGH, LEVEL_LOW, LEVEL_MODERATE};
use tracing::debug;

static STRONG_STIMULATION: &[(&str, f64)] = &[
    ("Early Morning", 20.0),
    ("Mid-Morning", 15.0),
    ("Midday", 5.0),
    ("Evening", -15.0),
    ("Night", -25.0),
];

static MODERATE_STIMULATION: &[(&str, f64)] = &[
    ("Mid-Morning", 15.0),
    ("Midday", 10.0),
    ("Afternoon", 10.0),
    ("Night", -15.0),
];

static GENTLE_STIMULATION: &[(&str, f64)] = &[
    ("Afternoon", 10.0),
    ("Evening", 15.0),
    ("Night", 15.0),
];

static HIGH_RELAXATION: &[(&str, f64)] = &[("Afternoon", 5.0), ("Evening", 15.0), ("Night", 10.0)];

static ALERTNESS_RULES: RuleTable = &[
    ("invigorating", &[("Early Morning", 10.0), ("Mid-Morning", 5.0)]),
    ("calm focus", &[("Mid-Morning", 5.0), ("Afternoon", 10.0)]),
    ("gentle lift", &[("Mid-Morning", 5.0), ("Afternoon", 5.0)]),
    ("mellowing", &[("Afternoon", 5.0), ("Evening", 10.0)]),
    ("calming", &[("Evening", 10.0), ("Night", 10.0)]),
];

pub struct TimeMatcher<'a> {
    tables: &'a ReferenceTables,
    config: &'a MatcherConfig,
}

impl<'a> TimeMatcher<'a> {
    pub fn new(tables: &'a ReferenceTables, config: &'a MatcherConfig) -> Self {
        Self { tables, config }
    }

    pub fn score(&self, compound: &CompoundAnalysis, processing: &ProcessingAnalysis) -> ScoreMap {
        let mut map = ScoreMap::initialize(&self.tables.candidates.times.candidates, self.config.baseline);

        // Unknown / N/A stimulation contributes nothing
        match level_value(&compound.stimulation_level) {
            Some(level) if level >= LEVEL_HIGH => map.apply(STRONG_STIMULATION, 1.0),
            Some(LEVEL_MODERATE) => map.apply(MODERATE_STIMULATION, 1.0),
            Some(level) if level <= LEVEL_LOW => map.apply(GENTLE_STIMULATION, 1.0),
            _ => {}
        }

        if level_value(&compound.relaxation_level).map_or(false, |l| l >= LEVEL_HIGH) {
            map.apply(HIGH_RELAXATION, 1.0);
        }

        if let Some(modifier) = &processing.alertness_modifier {
            apply_keyed(&mut map, ALERTNESS_RULES, modifier);
        }

        map
    }

    pub fn evaluate(&self, compound: &CompoundAnalysis, processing: &ProcessingAnalysis) -> MatchResult {
        let normalized = normalize(&self.score(compound, processing));

        let recommendations = select(
            &normalized,
            self.config.absolute_threshold,
            self.config.relative_threshold,
            self.config.max_recommendations,
        );
        let ranges = self.ranges(&normalized);

        debug!(
            "Time match: {} recommended, {} ranges",
            recommendations.len(),
            ranges.len()
        );

        MatchResult {
            normalized,
            recommendations,
            clusters: Vec::new(),
            ranges,
            legacy: None,
        }
    }

    /// High-scoring periods over the day ordering.
    pub fn ranges(&self, normalized: &NormalizedMap) -> Vec<CyclicRange> {
        let registry = &self.tables.candidates.times;
        build_cyclic_ranges(normalized, &registry.ordering, self.config.cluster_threshold, registry.wrap.as_ref())
    }
}
