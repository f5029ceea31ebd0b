//! Level string lookup
//!
//! Calculators emit qualitative levels ("High", "Moderate-High", "Very Low");
//! matcher rule tables compare them numerically. Scale:
//!
//! | level | value |
//! |---|---|
//! | none | 0 |
//! | very low | 1 |
//! | low, low-moderate | 2 |
//! | moderate, medium, moderate-high | 3 |
//! | high | 4 |
//! | very high | 5 |
//!
//! Parenthetical suffixes such as "High (smoothed)" are ignored.

pub const LEVEL_NONE: u8 = 0;
pub const LEVEL_VERY_LOW: u8 = 1;
pub const LEVEL_LOW: u8 = 2;
pub const LEVEL_MODERATE: u8 = 3;
pub const LEVEL_HIGH: u8 = 4;
pub const LEVEL_VERY_HIGH: u8 = 5;

/// Map a level label to its integer rank. `None` for labels that are not a
/// level (including "Unknown" and "N/A").
pub fn level_value(label: &str) -> Option<u8> {
    let base = label.split('(').next().unwrap_or(label);
    let key = base.trim().to_lowercase().replace(['_', ' '], "-");

    match key.as_str() {
        "none" => Some(LEVEL_NONE),
        "very-low" => Some(LEVEL_VERY_LOW),
        "low" | "low-moderate" | "low-medium" => Some(LEVEL_LOW),
        "moderate" | "medium" | "moderate-high" | "medium-high" => Some(LEVEL_MODERATE),
        "high" => Some(LEVEL_HIGH),
        "very-high" => Some(LEVEL_VERY_HIGH),
        _ => None,
    }
}

/// `level_value` with missing labels treated as `fallback`.
pub fn level_or(label: &str, fallback: u8) -> u8 {
    level_value(label).unwrap_or(fallback)
}
