//! Utility modules for tea scoring
//!
//! Contains shared functionality used across calculators and matchers:
//! - Thresholds: range-table categorization
//! - Ordered set: first-seen-order hint accumulation
//! - Levels: qualitative level → integer lookup

pub mod levels;
pub mod ordered_set;
pub mod thresholds;

// Re-export commonly used types
pub use levels::{level_or, level_value};
pub use ordered_set::OrderedSet;
pub use thresholds::{categorize, check_table, find_bucket, Banded, ThresholdBucket, OUTSIDE_RANGES, UNKNOWN};
