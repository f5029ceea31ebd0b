//! Tea-type baselines
//!
//! Typical caffeine level, dominant flavor categories (flavor wheel top
//! categories), seasonal tendency and baseline activity hints per type.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeaTypeBaseline {
    pub name: String,
    /// Lowercase alternative names ("sencha", "pu-erh", ...)
    #[serde(default)]
    pub aliases: Vec<String>,
    pub typical_caffeine: String,
    #[serde(default)]
    pub dominant_flavor_categories: Vec<String>,
    #[serde(default)]
    pub seasonal_tendency: Vec<String>,
    #[serde(default)]
    pub base_activity_hints: Vec<String>,
}

type TypeRow = (
    &'static str,
    &'static [&'static str],
    &'static str,
    &'static [&'static str],
    &'static [&'static str],
    &'static [&'static str],
);

static TEA_TYPES: &[TypeRow] = &[
    ("Green", &["green tea", "sencha", "matcha", "longjing", "gyokuro"], "Moderate",
        &["Vegetal", "Nutty", "Floral"], &["Early Spring", "Late Spring", "Summer"],
        &["Focused Work", "Studying", "Meditation"]),
    ("White", &["white tea", "silver needle", "bai mu dan"], "Low",
        &["Floral", "Fruity", "Sweet"], &["Late Spring", "Summer"],
        &["Meditation", "Reading", "Relaxation"]),
    ("Yellow", &["yellow tea", "junshan yinzhen"], "Low-Moderate",
        &["Sweet", "Vegetal"], &["Early Spring", "Late Spring"],
        &["Reading", "Relaxation"]),
    ("Oolong", &["wulong", "tieguanyin", "dan cong", "rock oolong"], "Moderate",
        &["Floral", "Fruity", "Roasted"], &["Late Spring", "Early Autumn"],
        &["Creative Work", "Socializing", "Reading"]),
    ("Black", &["black tea", "red tea", "hong cha", "assam", "keemun", "ceylon"], "High",
        &["Fruity", "Sweet", "Roasted"], &["Late Autumn", "Winter"],
        &["Morning Routine", "Focused Work", "Socializing"]),
    ("Dark", &["pu-erh", "puer", "pu'er", "heicha", "shou"], "Moderate",
        &["Earthy", "Sweet"], &["Late Autumn", "Winter"],
        &["Meditation", "Winding Down", "Reading"]),
    ("Herbal", &["tisane", "rooibos", "chamomile", "infusion"], "None",
        &["Floral", "Spicy"], &["Summer", "Winter"],
        &["Winding Down", "Relaxation"]),
];

pub fn builtin() -> Vec<TeaTypeBaseline> {
    TEA_TYPES
        .iter()
        .map(|(name, aliases, caffeine, flavors, seasons, activities)| TeaTypeBaseline {
            name: name.to_string(),
            aliases: super::strings(aliases),
            typical_caffeine: caffeine.to_string(),
            dominant_flavor_categories: super::strings(flavors),
            seasonal_tendency: super::strings(seasons),
            base_activity_hints: super::strings(activities),
        })
        .collect()
}
