//! Threshold Categorizer
//!
//! Maps a continuous measurement to a named bucket using an ordered table of
//! half-open ranges. Every categorical field produced by the calculators
//! (stimulation scale, climate buckets, oxidation class, ...) goes through
//! `categorize` or `find_bucket`.
//!
//! Range semantics:
//! - `min` is inclusive, `max` is exclusive
//! - `max: None` is the unbounded sentinel ("and above")
//! - the first matching bucket wins

use serde::{Deserialize, Serialize};

/// Label returned when the value is a number but no bucket covers it.
pub const OUTSIDE_RANGES: &str = "Outside Defined Ranges";

/// Label returned when the value is missing, NaN or infinite.
pub const UNKNOWN: &str = "Unknown";

/// A single labelled range `[min, max)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdBucket {
    pub label: String,
    pub min: f64,
    /// Exclusive upper bound. `None` accepts every value `>= min`.
    #[serde(default)]
    pub max: Option<f64>,
}

impl ThresholdBucket {
    pub fn new(label: &str, min: f64, max: Option<f64>) -> Self {
        Self {
            label: label.to_string(),
            min,
            max,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        match self.max {
            Some(max) => value >= self.min && value < max,
            None => value >= self.min,
        }
    }
}

/// Anything that carries a threshold range can be categorized.
///
/// Climate buckets attach influence notes to their range; the categorizer only
/// needs the range itself.
pub trait Banded {
    fn bucket(&self) -> &ThresholdBucket;

    fn label(&self) -> &str {
        &self.bucket().label
    }
}

impl Banded for ThresholdBucket {
    fn bucket(&self) -> &ThresholdBucket {
        self
    }
}

/// Return the first bucket containing `value`.
///
/// `None` for missing/NaN values and for values no bucket covers.
pub fn find_bucket<B: Banded>(value: Option<f64>, buckets: &[B]) -> Option<&B> {
    let value = value.filter(|v| !v.is_nan())?;
    buckets.iter().find(|b| b.bucket().contains(value))
}

/// Categorize a measurement against a bucket table.
///
/// Returns the matching label, [`OUTSIDE_RANGES`] for a valid number no bucket
/// covers, or [`UNKNOWN`] for a missing or NaN value. Infinities are valid:
/// `+inf` lands in an unbounded top bucket.
pub fn categorize<'a, B: Banded>(value: Option<f64>, buckets: &'a [B]) -> &'a str {
    match value {
        Some(v) if !v.is_nan() => buckets
            .iter()
            .find(|b| b.bucket().contains(v))
            .map(|b| b.label())
            .unwrap_or(OUTSIDE_RANGES),
        _ => UNKNOWN,
    }
}

/// Problem found in a bucket table by [`check_table`].
#[derive(Debug, Clone, PartialEq)]
pub enum TableIssue {
    /// `buckets[index]` has `max <= min`
    EmptyRange { index: usize },
    /// `buckets[index].max != buckets[index + 1].min`
    Discontinuity { index: usize },
    /// an unbounded bucket is followed by more buckets
    UnboundedNotLast { index: usize },
}

/// Verify that a table is ascending, contiguous and mutually exclusive.
pub fn check_table<B: Banded>(buckets: &[B]) -> Vec<TableIssue> {
    let mut issues = Vec::new();

    for (index, banded) in buckets.iter().enumerate() {
        let bucket = banded.bucket();
        match bucket.max {
            Some(max) if max <= bucket.min => issues.push(TableIssue::EmptyRange { index }),
            None if index + 1 < buckets.len() => {
                issues.push(TableIssue::UnboundedNotLast { index })
            }
            _ => {}
        }

        if let (Some(max), Some(next)) = (bucket.max, buckets.get(index + 1)) {
            if (max - next.bucket().min).abs() > f64::EPSILON {
                issues.push(TableIssue::Discontinuity { index });
            }
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn scale() -> Vec<ThresholdBucket> {
        vec![
            ThresholdBucket::new("Low", 0.0, Some(3.0)),
            ThresholdBucket::new("Mid", 3.0, Some(7.0)),
            ThresholdBucket::new("High", 7.0, None),
        ]
    }

    #[test]
    fn test_bounds_are_half_open() {
        let buckets = scale();
        assert_eq!(categorize(Some(0.0), &buckets), "Low");
        assert_eq!(categorize(Some(2.999), &buckets), "Low");
        assert_eq!(categorize(Some(3.0), &buckets), "Mid");
        assert_eq!(categorize(Some(7.0), &buckets), "High");
        assert_eq!(categorize(Some(1e9), &buckets), "High");
    }

    #[test]
    fn test_invalid_and_uncovered_values() {
        let buckets = scale();
        assert_eq!(categorize(None, &buckets), UNKNOWN);
        assert_eq!(categorize(Some(f64::NAN), &buckets), UNKNOWN);
        assert_eq!(categorize(Some(-0.5), &buckets), OUTSIDE_RANGES);
        assert!(find_bucket(Some(-0.5), &buckets).is_none());
    }

    #[test]
    fn test_infinities_are_numbers() {
        let buckets = scale();
        assert_eq!(categorize(Some(f64::INFINITY), &buckets), "High");
        assert_eq!(find_bucket(Some(f64::INFINITY), &buckets).map(|b| b.label.as_str()), Some("High"));
        assert_eq!(categorize(Some(f64::NEG_INFINITY), &buckets), OUTSIDE_RANGES);

        let bounded = vec![ThresholdBucket::new("Low", 0.0, Some(3.0))];
        assert_eq!(categorize(Some(f64::INFINITY), &bounded), OUTSIDE_RANGES);
    }

    #[test]
    fn test_monotonic_over_random_values() {
        let buckets = scale();
        let rank = |label: &str| buckets.iter().position(|b| b.label == label).unwrap();
        let mut rng = rand::thread_rng();

        let mut values: Vec<f64> = (0..500).map(|_| rng.gen_range(0.0..20.0)).collect();
        values.sort_by(|a, b| a.partial_cmp(b).unwrap());

        let ranks: Vec<usize> = values
            .iter()
            .map(|v| rank(categorize(Some(*v), &buckets)))
            .collect();
        assert!(ranks.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_check_table() {
        assert!(check_table(&scale()).is_empty());

        let broken = vec![
            ThresholdBucket::new("A", 0.0, Some(2.0)),
            ThresholdBucket::new("B", 2.5, None),
            ThresholdBucket::new("C", 5.0, Some(4.0)),
        ];
        let issues = check_table(&broken);
        assert!(issues.contains(&TableIssue::Discontinuity { index: 0 }));
        assert!(issues.contains(&TableIssue::UnboundedNotLast { index: 1 }));
        assert!(issues.contains(&TableIssue::EmptyRange { index: 2 }));
    }
}
