//! Processing method impact records
//!
//! One record per method tag. Fields left `None` do not participate in the
//! last-writer-wins / averaging aggregation of the processing calculator.

use crate::utils::ThresholdBucket;
use serde::{Deserialize, Serialize};

/// Energetic tendency in the traditional warming/cooling sense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tendency {
    Cooling,
    Neutral,
    Warming,
}

impl Tendency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tendency::Cooling => "cooling",
            Tendency::Neutral => "neutral",
            Tendency::Warming => "warming",
        }
    }

    /// -1 / 0 / 1 mapping used for averaging across methods
    pub fn value(&self) -> f64 {
        match self {
            Tendency::Cooling => -1.0,
            Tendency::Neutral => 0.0,
            Tendency::Warming => 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingMethod {
    /// Lowercase method tag
    pub key: String,
    #[serde(default)]
    pub flavor_impacts: Vec<String>,
    #[serde(default)]
    pub body_impact: Option<String>,
    #[serde(default)]
    pub energetic_tendency: Option<Tendency>,
    #[serde(default)]
    pub alertness_modifier: Option<String>,
    #[serde(default)]
    pub compound_notes: Vec<String>,
}

/// Substring patterns for one roast level. Levels are checked in table order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoastPattern {
    pub level: String,
    pub patterns: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingTables {
    pub methods: Vec<ProcessingMethod>,
    pub roast_patterns: Vec<RoastPattern>,
    pub oxidation: Vec<ThresholdBucket>,
    /// Oxidation (%) at or above which the tendency is forced to warming
    pub warming_oxidation: f64,
    /// Oxidation (%) below which the tendency is forced to cooling
    pub cooling_oxidation: f64,
}

impl ProcessingTables {
    pub fn method(&self, key: &str) -> Option<&ProcessingMethod> {
        let key = key.trim().to_lowercase();
        self.methods.iter().find(|m| m.key == key)
    }
}

type MethodRow = (
    &'static str,
    &'static [&'static str],
    Option<&'static str>,
    Option<Tendency>,
    Option<&'static str>,
    &'static [&'static str],
);

// key, flavor impacts, body, tendency, alertness, compound notes
static METHODS: &[MethodRow] = &[
    ("steamed", &["grassy", "marine", "bright green"], Some("light"), Some(Tendency::Cooling), None,
        &["preserves catechins", "retains chlorophyll"]),
    ("pan-fired", &["toasty", "nutty", "chestnut"], Some("medium"), Some(Tendency::Neutral), None,
        &["moderate catechin retention"]),
    ("withered", &["floral", "fruity"], None, Some(Tendency::Neutral), None,
        &["develops aromatic compounds"]),
    ("rolled", &["layered"], Some("medium"), None, None,
        &["slows infusion release"]),
    ("shade-grown", &["umami", "marine", "sweet"], Some("silky"), Some(Tendency::Cooling), Some("calm focus"),
        &["elevated L-theanine", "elevated chlorophyll"]),
    ("bud-picked", &["delicate", "sweet"], Some("light"), Some(Tendency::Cooling), Some("gentle lift"),
        &["higher caffeine in buds", "higher L-theanine"]),
    ("sun-dried", &["hay", "honey", "dried fruit"], None, Some(Tendency::Warming), None,
        &["gradual polyphenol oxidation"]),
    ("partially-oxidized", &["floral", "fruity", "creamy"], Some("medium"), Some(Tendency::Neutral), None,
        &["mixed catechins and theaflavins"]),
    ("oxidized", &["malty", "fruity", "honey"], Some("full"), Some(Tendency::Warming), Some("invigorating"),
        &["theaflavins", "thearubigins"]),
    ("light-roast", &["floral", "toasty"], None, Some(Tendency::Neutral), None,
        &[]),
    ("medium-roast", &["toasty", "caramel", "nutty"], Some("medium"), Some(Tendency::Warming), None,
        &["reduced caffeine bitterness"]),
    ("heavy-roast", &["roasted", "caramel", "cocoa"], Some("full"), Some(Tendency::Warming), Some("mellowing"),
        &["lower perceived caffeine"]),
    ("charcoal-roasted", &["smoky", "mineral", "cocoa"], Some("full"), Some(Tendency::Warming), Some("mellowing"),
        &["reduced catechins"]),
    ("smoked", &["smoky", "pine smoke"], Some("full"), Some(Tendency::Warming), None,
        &["phenolic smoke compounds"]),
    ("aged", &["woody", "earthy", "dried fruit"], Some("smooth"), Some(Tendency::Warming), Some("mellowing"),
        &["mellowed polyphenols"]),
    ("post-fermented", &["earthy", "forest floor", "sweet"], Some("thick"), Some(Tendency::Warming), Some("calming"),
        &["microbial transformation", "gallic acid"]),
    ("gaba", &["sweet", "fruity"], Some("medium"), Some(Tendency::Neutral), Some("calming"),
        &["elevated GABA"]),
    ("scented", &["jasmine", "floral"], None, Some(Tendency::Cooling), None,
        &[]),
];

static ROAST_PATTERNS: &[(&str, &[&str])] = &[
    ("Charcoal", &["charcoal"]),
    ("Heavy", &["heavy-roast", "heavy roast", "dark-roast", "dark roast"]),
    ("Medium", &["medium-roast", "medium roast"]),
    ("Light", &["light-roast", "light roast"]),
    ("Minimal", &["minimal-roast", "minimal roast", "low-roast"]),
    ("Roast", &["roast"]),
];

pub fn builtin() -> ProcessingTables {
    ProcessingTables {
        methods: METHODS
            .iter()
            .map(|(key, flavors, body, tendency, alertness, compounds)| ProcessingMethod {
                key: key.to_string(),
                flavor_impacts: super::strings(flavors),
                body_impact: body.map(str::to_string),
                energetic_tendency: *tendency,
                alertness_modifier: alertness.map(str::to_string),
                compound_notes: super::strings(compounds),
            })
            .collect(),
        roast_patterns: ROAST_PATTERNS
            .iter()
            .map(|(level, patterns)| RoastPattern {
                level: level.to_string(),
                patterns: super::strings(patterns),
            })
            .collect(),
        oxidation: vec![
            ThresholdBucket::new("Unoxidized", 0.0, Some(15.0)),
            ThresholdBucket::new("Lightly Oxidized", 15.0, Some(40.0)),
            ThresholdBucket::new("Partially Oxidized", 40.0, Some(70.0)),
            ThresholdBucket::new("Heavily Oxidized", 70.0, Some(90.0)),
            ThresholdBucket::new("Fully Oxidized", 90.0, None),
        ],
        warming_oxidation: 70.0,
        cooling_oxidation: 15.0,
    }
}
