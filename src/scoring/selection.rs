//! Candidate Selector
//!
//! Picks the recommendation list from a normalized map. A candidate is kept
//! when it clears both the absolute threshold and the window below the top
//! score; the result is never empty for non-empty input.

use super::score_map::{NormalizedMap, NO_STRONG_PREFERENCE, SENTINEL_SCORE};
use serde::{Deserialize, Serialize};

/// A single recommended candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub name: String,
    pub score: u32,
}

/// Ordered (descending score) recommendation list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationList {
    pub items: Vec<Recommendation>,
}

impl RecommendationList {
    /// The "no strong preference" list.
    pub fn sentinel() -> Self {
        Self {
            items: vec![Recommendation {
                name: NO_STRONG_PREFERENCE.to_string(),
                score: SENTINEL_SCORE,
            }],
        }
    }

    pub fn is_sentinel(&self) -> bool {
        self.items.len() == 1 && self.items[0].name == NO_STRONG_PREFERENCE
    }

    pub fn names(&self) -> Vec<&str> {
        self.items.iter().map(|r| r.name.as_str()).collect()
    }

    pub fn top(&self) -> Option<&Recommendation> {
        self.items.first()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Select candidates with `score >= absolute && score >= top - relative`,
/// sorted descending (ties keep map order), truncated to `max_count`.
///
/// Falls back to the single top-scoring candidate when the filter removes
/// everything; an empty map yields the sentinel list.
pub fn select(
    normalized: &NormalizedMap,
    absolute_threshold: f64,
    relative_threshold: f64,
    max_count: Option<usize>,
) -> RecommendationList {
    let Some(top) = normalized.max_score() else {
        return RecommendationList::sentinel();
    };
    let top = f64::from(top);

    let mut items: Vec<Recommendation> = normalized
        .iter()
        .filter(|(_, s)| {
            let s = f64::from(*s);
            s >= absolute_threshold && s >= top - relative_threshold
        })
        .map(|(name, score)| Recommendation {
            name: name.to_string(),
            score,
        })
        .collect();

    if items.is_empty() {
        // First entry holding the maximum
        if let Some((name, score)) = normalized.iter().find(|(_, s)| f64::from(*s) == top) {
            items.push(Recommendation {
                name: name.to_string(),
                score,
            });
        }
    }

    items.sort_by(|a, b| b.score.cmp(&a.score));
    if let Some(max) = max_count {
        items.truncate(max.max(1));
    }

    RecommendationList { items }
}
