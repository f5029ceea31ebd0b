//! Activity Matcher
//!
//! The compound profile carries most of the signal; stimulation and
//! relaxation extremes, flavor activity hints and tea-type baselines adjust
//! it. Results are clustered into activity groups (one qualifying member is
//! enough) and capped at three recommendations.

use super::{apply_keyed, boost_all, MatchResult, RuleTable};
use crate::calculators::{CompoundAnalysis, FlavorAnalysis, TeaTypeAnalysis};
use crate::config::MatcherConfig;
use crate::reference::ReferenceTables;
use crate::scoring::{build_clusters, normalize, select, ScoreMap};
use crate::utils::level_value;
use crate::utils::levels::{LEVEL_HIGH, LEVEL_VERY_LOW};
use tracing::debug;

const FLAVOR_HINT_BOOST: f64 = 8.0;
const TEA_TYPE_BOOST: f64 = 10.0;

static PROFILE_RULES: RuleTable = &[
    ("Calm & Meditative", &[("Meditation", 25.0), ("Yoga", 15.0), ("Relaxation", 15.0), ("Winding Down", 10.0)]),
    ("Gentle & Soothing", &[("Relaxation", 20.0), ("Winding Down", 20.0), ("Reading", 10.0)]),
    ("Calm Focus", &[("Studying", 20.0), ("Reading", 15.0), ("Meditation", 10.0), ("Focused Work", 10.0)]),
    ("Focused Calm", &[("Focused Work", 20.0), ("Studying", 20.0), ("Creative Work", 10.0)]),
    ("Relaxed Clarity", &[("Reading", 20.0), ("Creative Work", 15.0), ("Yoga", 10.0)]),
    ("Energized Focus", &[("Focused Work", 25.0), ("Studying", 15.0), ("Creative Work", 10.0)]),
    ("Balanced Alertness", &[("Focused Work", 15.0), ("Socializing", 15.0), ("Creative Work", 10.0), ("Reading", 5.0)]),
    ("Mellow Balance", &[("Reading", 15.0), ("Socializing", 10.0), ("Relaxation", 10.0)]),
    ("Bright & Energizing", &[("Morning Routine", 20.0), ("Outdoor Activities", 15.0), ("Socializing", 10.0)]),
    ("Gently Uplifting", &[("Morning Routine", 15.0), ("Socializing", 10.0), ("Creative Work", 10.0)]),
    ("Intense & Sharp", &[("Morning Routine", 25.0), ("Outdoor Activities", 15.0), ("Focused Work", 10.0)]),
    ("Brisk & Alert", &[("Morning Routine", 15.0), ("Focused Work", 15.0), ("Outdoor Activities", 10.0)]),
    ("Light Lift", &[("Reading", 10.0), ("Socializing", 10.0), ("Relaxation", 5.0)]),
];

static HIGH_STIMULATION: &[(&str, f64)] = &[("Meditation", -10.0), ("Winding Down", -20.0)];

static MINIMAL_STIMULATION: &[(&str, f64)] = &[
    ("Morning Routine", -10.0),
    ("Focused Work", -5.0),
    ("Winding Down", 10.0),
];

static HIGH_RELAXATION: &[(&str, f64)] = &[("Meditation", 10.0), ("Yoga", 10.0)];

pub struct ActivityMatcher<'a> {
    tables: &'a ReferenceTables,
    config: &'a MatcherConfig,
}

impl<'a> ActivityMatcher<'a> {
    pub fn new(tables: &'a ReferenceTables, config: &'a MatcherConfig) -> Self {
        Self { tables, config }
    }

    pub fn score(&self, compound: &CompoundAnalysis, flavor: &FlavorAnalysis, tea_type: &TeaTypeAnalysis) -> ScoreMap {
        let mut map = ScoreMap::initialize(&self.tables.candidates.activities.candidates, self.config.baseline);

        apply_keyed(&mut map, PROFILE_RULES, &compound.compound_profile);

        match level_value(&compound.stimulation_level) {
            Some(level) if level >= LEVEL_HIGH => map.apply(HIGH_STIMULATION, 1.0),
            Some(level) if level <= LEVEL_VERY_LOW => map.apply(MINIMAL_STIMULATION, 1.0),
            _ => {}
        }
        if level_value(&compound.relaxation_level).map_or(false, |l| l >= LEVEL_HIGH) {
            map.apply(HIGH_RELAXATION, 1.0);
        }

        boost_all(&mut map, flavor.activity_hints.iter(), FLAVOR_HINT_BOOST);
        boost_all(&mut map, &tea_type.base_activity_hints, TEA_TYPE_BOOST);

        map
    }

    pub fn evaluate(&self, compound: &CompoundAnalysis, flavor: &FlavorAnalysis, tea_type: &TeaTypeAnalysis) -> MatchResult {
        let registry = &self.tables.candidates.activities;
        let normalized = normalize(&self.score(compound, flavor, tea_type));

        let recommendations = select(
            &normalized,
            self.config.absolute_threshold,
            self.config.relative_threshold,
            self.config.max_recommendations,
        );
        let clusters = build_clusters(
            &normalized,
            &registry.groups,
            self.config.cluster_threshold,
            self.config.min_cluster_members,
        );

        debug!(
            "Activity match: {:?}, {} clusters",
            recommendations.names(),
            clusters.len()
        );

        MatchResult {
            normalized,
            recommendations,
            clusters,
            ranges: Vec::new(),
            legacy: None,
        }
    }
}
