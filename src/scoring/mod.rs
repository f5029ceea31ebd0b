//! Shared scoring machinery for the matchers
//!
//! Raw additive scores → 0-100 normalization → thresholded selection,
//! clustering, and cyclic range detection.

pub mod clusters;
pub mod cyclic;
pub mod score_map;
pub mod selection;

pub use clusters::{build_clusters, rounded_mean, CandidateGroup, Cluster};
pub use cyclic::{build_cyclic_ranges, CyclicRange, WrapRule};
pub use score_map::{normalize, NormalizedMap, ScoreMap, NO_STRONG_PREFERENCE, SENTINEL_SCORE};
pub use selection::{select, Recommendation, RecommendationList};
