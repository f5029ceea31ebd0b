//! Tea Scorer Rust Implementation
//!
//! Attribute scoring and recommendation derivation for tea catalogs.
//!
//! Layout:
//! - `utils/`: Threshold categorization, ordered hint sets, level lookup
//! - `scoring/`: Score maps, normalization, selection, clusters, cyclic ranges
//! - `reference/`: Immutable reference tables and candidate registries
//! - `calculators/`: Compound, processing, geography, flavor and tea-type analyses
//! - `matchers/`: Season, time-of-day, activity and food-pairing matchers
//! - `profiler`: Runs the whole pipeline for one tea or a catalog
//!
//! The engine is a pure function of a `Tea` plus the reference tables and
//! configuration it was built with; missing data degrades to documented
//! defaults instead of errors.

pub mod calculators;
pub mod config;
pub mod matchers;
pub mod profiler;
pub mod reference;
pub mod scoring;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use calculators::{
    Analysis, CompoundAnalysis, FlavorAnalysis, GeographyAnalysis, ProcessingAnalysis, TeaTypeAnalysis,
};
pub use config::{ConfigError, EngineConfig, MatcherConfig};
pub use matchers::MatchResult;
pub use profiler::{TeaProfile, TeaProfiler};
pub use reference::ReferenceTables;
pub use scoring::{Cluster, CyclicRange, NormalizedMap, Recommendation, RecommendationList};
pub use types::{Geography, Processing, Tea};
pub use utils::{categorize, ThresholdBucket};
