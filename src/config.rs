//! Engine configuration
//!
//! Per-matcher thresholds and baselines. Defaults reproduce the standard
//! tuning; a JSON file may override any subset of fields. Overrides are laid
//! over each matcher's own defaults, so `{"food": {"min_cluster_members": 3}}`
//! keeps the rest of the food tuning.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{matcher}.{field} = {value} is outside 0-100")]
    InvalidThreshold {
        matcher: &'static str,
        field: &'static str,
        value: f64,
    },
}

/// Tuning for one matcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Raw score every candidate starts from
    pub baseline: f64,
    /// Minimum normalized score for a recommendation
    pub absolute_threshold: f64,
    /// Maximum distance below the top score for a recommendation
    pub relative_threshold: f64,
    /// Minimum normalized score for cluster or range membership
    pub cluster_threshold: f64,
    pub min_cluster_members: usize,
    /// `None` keeps every selected candidate
    pub max_recommendations: Option<usize>,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            baseline: 50.0,
            absolute_threshold: 65.0,
            relative_threshold: 20.0,
            cluster_threshold: 70.0,
            min_cluster_members: 1,
            max_recommendations: None,
        }
    }
}

impl MatcherConfig {
    pub fn season() -> Self {
        // Recommendations follow the range threshold
        Self {
            absolute_threshold: 70.0,
            relative_threshold: 100.0,
            cluster_threshold: 70.0,
            ..Default::default()
        }
    }

    pub fn time() -> Self {
        Self {
            absolute_threshold: 65.0,
            relative_threshold: 20.0,
            cluster_threshold: 70.0,
            ..Default::default()
        }
    }

    pub fn activity() -> Self {
        Self {
            absolute_threshold: 65.0,
            relative_threshold: 20.0,
            cluster_threshold: 80.0,
            min_cluster_members: 1,
            max_recommendations: Some(3),
            ..Default::default()
        }
    }

    pub fn food() -> Self {
        // Top-within-10, no absolute floor
        Self {
            absolute_threshold: 0.0,
            relative_threshold: 10.0,
            cluster_threshold: 70.0,
            min_cluster_members: 2,
            max_recommendations: Some(5),
            ..Default::default()
        }
    }

    fn validate(&self, matcher: &'static str) -> Result<(), ConfigError> {
        let fields = [
            ("absolute_threshold", self.absolute_threshold),
            ("relative_threshold", self.relative_threshold),
            ("cluster_threshold", self.cluster_threshold),
        ];
        for (field, value) in fields {
            if !(0.0..=100.0).contains(&value) {
                return Err(ConfigError::InvalidThreshold { matcher, field, value });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct EngineConfig {
    pub season: MatcherConfig,
    pub time: MatcherConfig,
    pub activity: MatcherConfig,
    pub food: MatcherConfig,
}

/// Fully populated sections, read after overrides are merged onto the defaults.
#[derive(Deserialize)]
struct EngineSections {
    season: MatcherConfig,
    time: MatcherConfig,
    activity: MatcherConfig,
    food: MatcherConfig,
}

impl TryFrom<Value> for EngineConfig {
    type Error = serde_json::Error;

    fn try_from(overrides: Value) -> Result<Self, Self::Error> {
        let mut merged = serde_json::to_value(EngineConfig::default())?;
        overlay(&mut merged, overrides);
        let sections: EngineSections = serde_json::from_value(merged)?;
        Ok(Self {
            season: sections.season,
            time: sections.time,
            activity: sections.activity,
            food: sections.food,
        })
    }
}

/// Recursively replace fields of `base` with those present in `overrides`.
/// An explicit `null` replaces too (`"max_recommendations": null` lifts the cap).
fn overlay(base: &mut Value, overrides: Value) {
    match (base, overrides) {
        (Value::Object(base), Value::Object(overrides)) => {
            for (key, value) in overrides {
                match base.get_mut(&key) {
                    Some(slot) => overlay(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            season: MatcherConfig::season(),
            time: MatcherConfig::time(),
            activity: MatcherConfig::activity(),
            food: MatcherConfig::food(),
        }
    }
}

impl EngineConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.season.validate("season")?;
        self.time.validate("time")?;
        self.activity.validate("activity")?;
        self.food.validate("food")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_standard_tuning() {
        let config = EngineConfig::default();
        assert_eq!(config.time.absolute_threshold, 65.0);
        assert_eq!(config.activity.cluster_threshold, 80.0);
        assert_eq!(config.activity.max_recommendations, Some(3));
        assert_eq!(config.food.relative_threshold, 10.0);
        assert_eq!(config.food.min_cluster_members, 2);
        assert_eq!(config.food.max_recommendations, Some(5));
        assert_eq!(config.season.cluster_threshold, 70.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_override_keeps_matcher_defaults() {
        let config = EngineConfig::from_json_str(r#"{ "food": { "min_cluster_members": 3 } }"#).unwrap();
        assert_eq!(config.food.min_cluster_members, 3);
        assert_eq!(config.food.absolute_threshold, 0.0);
        assert_eq!(config.food.relative_threshold, 10.0);
        assert_eq!(config.food.max_recommendations, Some(5));
        assert_eq!(config.activity, MatcherConfig::activity());

        let config = EngineConfig::from_json_str(r#"{ "activity": { "baseline": 40 } }"#).unwrap();
        assert_eq!(config.activity.baseline, 40.0);
        assert_eq!(config.activity.cluster_threshold, 80.0);
        assert_eq!(config.activity.max_recommendations, Some(3));
    }

    #[test]
    fn test_null_lifts_recommendation_cap() {
        let config = EngineConfig::from_json_str(r#"{ "food": { "max_recommendations": null } }"#).unwrap();
        assert_eq!(config.food.max_recommendations, None);
        assert_eq!(config.food.relative_threshold, 10.0);
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(EngineConfig::from_json_str("{}").unwrap(), EngineConfig::default());
    }

    #[test]
    fn test_non_object_section_is_parse_error() {
        let err = EngineConfig::from_json_str(r#"{ "time": 5 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_out_of_range_threshold() {
        let err = EngineConfig::from_json_str(r#"{ "time": { "cluster_threshold": 140 } }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidThreshold { matcher: "time", field: "cluster_threshold", .. }
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = EngineConfig::load(Path::new("/nonexistent/engine.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
