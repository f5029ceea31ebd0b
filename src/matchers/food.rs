//! Food Pairing Matcher
//!
//! Flavor-note pairings dominate; roast level, body and broad flavor
//! categories add weight, and the tea type's dominant flavor categories
//! contribute their wheel-level pairings. Recommendations are the top
//! candidates within 10 points of the best (at most five); clusters need two
//! qualifying members.

use super::{apply_keyed, boost_all, MatchResult, RuleTable};
use crate::calculators::{FlavorAnalysis, ProcessingAnalysis, TeaTypeAnalysis};
use crate::config::MatcherConfig;
use crate::reference::flavors::{BRIGHT, EARTHY, FLORAL, FRESH, ROASTED, SPICED, SWEET};
use crate::reference::ReferenceTables;
use crate::scoring::{build_clusters, normalize, select, ScoreMap};
use tracing::debug;

const PAIRING_BOOST: f64 = 10.0;
const TYPE_CATEGORY_BOOST: f64 = 5.0;

static ROAST_RULES: RuleTable = &[
    ("Charcoal", &[("Grilled Meats", 15.0), ("Smoked Fish", 10.0), ("Dark Chocolate", 10.0), ("Roast Duck", 10.0), ("Aged Cheese", 5.0)]),
    ("Heavy", &[("Grilled Meats", 15.0), ("Smoked Fish", 10.0), ("Dark Chocolate", 10.0), ("Roast Duck", 10.0), ("Aged Cheese", 5.0)]),
    ("Medium", &[("Roasted Nuts", 10.0), ("Pastries", 5.0), ("Milk Chocolate", 5.0)]),
];

static BODY_RULES: RuleTable = &[
    ("full", &[("Grilled Meats", 5.0), ("Aged Cheese", 5.0), ("Spicy Dishes", 5.0)]),
    ("thick", &[("Mushroom Dishes", 5.0), ("Roast Duck", 5.0), ("Aged Cheese", 5.0)]),
    ("light", &[("Sushi", 5.0), ("Salads", 5.0), ("Steamed Vegetables", 5.0)]),
    ("silky", &[("Soft Cheese", 5.0), ("Cream Desserts", 5.0)]),
    ("smooth", &[("Dim Sum", 5.0), ("Rice Dishes", 5.0)]),
];

static BROAD_CATEGORY_RULES: RuleTable = &[
    (FRESH, &[("Sushi", 8.0), ("Salads", 8.0), ("Steamed Vegetables", 8.0), ("Seafood", 5.0)]),
    (FLORAL, &[("Soft Cheese", 5.0), ("Fresh Fruit", 5.0), ("Cream Desserts", 5.0)]),
    (BRIGHT, &[("Citrus Desserts", 8.0), ("Berry Tarts", 5.0), ("Seafood", 5.0)]),
    (SWEET, &[("Pastries", 8.0), ("Honey Cakes", 5.0), ("Milk Chocolate", 5.0)]),
    (ROASTED, &[("Grilled Meats", 8.0), ("Roasted Nuts", 8.0), ("Dark Chocolate", 5.0)]),
    (EARTHY, &[("Mushroom Dishes", 10.0), ("Aged Cheese", 5.0), ("Roast Duck", 5.0)]),
    (SPICED, &[("Spicy Dishes", 10.0), ("Pastries", 3.0)]),
];

pub struct FoodMatcher<'a> {
    tables: &'a ReferenceTables,
    config: &'a MatcherConfig,
}

impl<'a> FoodMatcher<'a> {
    pub fn new(tables: &'a ReferenceTables, config: &'a MatcherConfig) -> Self {
        Self { tables, config }
    }

    pub fn score(&self, flavor: &FlavorAnalysis, processing: &ProcessingAnalysis, tea_type: &TeaTypeAnalysis) -> ScoreMap {
        let mut map = ScoreMap::initialize(&self.tables.candidates.foods.candidates, self.config.baseline);

        boost_all(&mut map, flavor.food_pairings.iter(), PAIRING_BOOST);

        apply_keyed(&mut map, ROAST_RULES, &processing.roast_level);
        if let Some(body) = &processing.body_impact {
            apply_keyed(&mut map, BODY_RULES, body);
        }
        for broad in flavor.broad_categories.iter() {
            apply_keyed(&mut map, BROAD_CATEGORY_RULES, broad);
        }

        for category in &tea_type.dominant_flavor_categories {
            if let Some(wheel_category) = self.tables.flavors.categories.iter().find(|c| &c.name == category) {
                boost_all(&mut map, &wheel_category.hints.food_pairings, TYPE_CATEGORY_BOOST);
            }
        }

        map
    }

    pub fn evaluate(&self, flavor: &FlavorAnalysis, processing: &ProcessingAnalysis, tea_type: &TeaTypeAnalysis) -> MatchResult {
        let registry = &self.tables.candidates.foods;
        let normalized = normalize(&self.score(flavor, processing, tea_type));

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
            "Food match: {:?}, {} clusters",
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
