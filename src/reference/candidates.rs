//! Candidate registries
//!
//! The canonical candidate names for each recommendation domain, plus the
//! grouping tables and cyclic orderings built on them. Every name a matcher
//! scores, groups or orders must appear in its domain's `candidates` list.

use crate::scoring::{CandidateGroup, WrapRule};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRegistry {
    pub candidates: Vec<String>,
    /// Cluster table (activity, food) or legacy aggregate table (season)
    #[serde(default)]
    pub groups: Vec<CandidateGroup>,
    /// Cyclic ordering (season, time); empty for non-cyclic domains
    #[serde(default)]
    pub ordering: Vec<String>,
    #[serde(default)]
    pub wrap: Option<WrapRule>,
}

impl CandidateRegistry {
    pub fn contains(&self, name: &str) -> bool {
        self.candidates.iter().any(|c| c == name)
    }

    /// Names used by groups or the ordering that are not registered candidates.
    pub fn unregistered_names(&self) -> Vec<String> {
        let grouped = self.groups.iter().flat_map(|g| g.members.iter());
        let mut missing: Vec<String> = grouped
            .chain(self.ordering.iter())
            .filter(|n| !self.contains(n))
            .cloned()
            .collect();
        missing.dedup();
        missing
    }
}

/// Season-hint alias expanded to several season candidates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonAlias {
    pub alias: String,
    pub seasons: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateTables {
    pub seasons: CandidateRegistry,
    pub times: CandidateRegistry,
    pub activities: CandidateRegistry,
    pub foods: CandidateRegistry,
    #[serde(default)]
    pub season_aliases: Vec<SeasonAlias>,
}

impl CandidateTables {
    /// Resolve a seasonal hint to season candidates: the name itself when
    /// registered, its alias expansion otherwise, else nothing.
    pub fn resolve_season<'a>(&'a self, hint: &'a str) -> Vec<&'a str> {
        if self.seasons.contains(hint) {
            return vec![hint];
        }
        self.season_aliases
            .iter()
            .find(|a| a.alias.eq_ignore_ascii_case(hint))
            .map(|a| a.seasons.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }
}

pub const SEASONS: &[&str] = &["Early Spring", "Late Spring", "Summer", "Early Autumn", "Late Autumn", "Winter"];

pub const TIMES: &[&str] = &["Early Morning", "Mid-Morning", "Midday", "Afternoon", "Evening", "Night"];

pub const ACTIVITIES: &[&str] = &[
    "Meditation",
    "Yoga",
    "Reading",
    "Studying",
    "Focused Work",
    "Creative Work",
    "Socializing",
    "Morning Routine",
    "Outdoor Activities",
    "Exercise Recovery",
    "Relaxation",
    "Winding Down",
];

pub const FOODS: &[&str] = &[
    "Dark Chocolate",
    "Milk Chocolate",
    "Pastries",
    "Shortbread",
    "Honey Cakes",
    "Berry Tarts",
    "Citrus Desserts",
    "Cream Desserts",
    "Fresh Fruit",
    "Soft Cheese",
    "Aged Cheese",
    "Roasted Nuts",
    "Grilled Meats",
    "Smoked Fish",
    "Roast Duck",
    "Sushi",
    "Seafood",
    "Steamed Vegetables",
    "Salads",
    "Dim Sum",
    "Spicy Dishes",
    "Mushroom Dishes",
    "Rice Dishes",
];

static SEASON_GROUPS: &[(&str, &[&str])] = &[
    ("Spring", &["Early Spring", "Late Spring"]),
    ("Summer", &["Summer"]),
    ("Autumn", &["Early Autumn", "Late Autumn"]),
    ("Winter", &["Winter"]),
];

static ACTIVITY_GROUPS: &[(&str, &[&str])] = &[
    ("Mindful Practices", &["Meditation", "Yoga", "Relaxation", "Winding Down"]),
    ("Intellectual Pursuits", &["Reading", "Studying", "Focused Work"]),
    ("Creative & Social", &["Creative Work", "Socializing"]),
    ("Active & Energizing", &["Morning Routine", "Outdoor Activities", "Exercise Recovery"]),
];

static FOOD_GROUPS: &[(&str, &[&str])] = &[
    ("Sweet Treats", &["Dark Chocolate", "Milk Chocolate", "Pastries", "Shortbread", "Honey Cakes"]),
    ("Fruit & Bright Desserts", &["Berry Tarts", "Citrus Desserts", "Fresh Fruit", "Cream Desserts"]),
    ("Light & Delicate", &["Sushi", "Seafood", "Steamed Vegetables", "Salads"]),
    ("Rich & Savory", &["Grilled Meats", "Smoked Fish", "Roast Duck", "Aged Cheese", "Mushroom Dishes"]),
    ("Snacks & Small Plates", &["Roasted Nuts", "Soft Cheese", "Dim Sum", "Rice Dishes", "Spicy Dishes"]),
];

fn groups(rows: &[(&str, &[&str])]) -> Vec<CandidateGroup> {
    rows.iter().map(|(label, members)| CandidateGroup::new(label, members)).collect()
}

pub fn builtin() -> CandidateTables {
    CandidateTables {
        seasons: CandidateRegistry {
            candidates: super::strings(SEASONS),
            groups: groups(SEASON_GROUPS),
            ordering: super::strings(SEASONS),
            wrap: Some(WrapRule::new("spring", "winter")),
        },
        times: CandidateRegistry {
            candidates: super::strings(TIMES),
            groups: Vec::new(),
            ordering: super::strings(TIMES),
            wrap: None,
        },
        activities: CandidateRegistry {
            candidates: super::strings(ACTIVITIES),
            groups: groups(ACTIVITY_GROUPS),
            ordering: Vec::new(),
            wrap: None,
        },
        foods: CandidateRegistry {
            candidates: super::strings(FOODS),
            groups: groups(FOOD_GROUPS),
            ordering: Vec::new(),
            wrap: None,
        },
        season_aliases: vec![
            SeasonAlias { alias: "Spring".into(), seasons: super::strings(&["Early Spring", "Late Spring"]) },
            SeasonAlias { alias: "Autumn".into(), seasons: super::strings(&["Early Autumn", "Late Autumn"]) },
            SeasonAlias { alias: "Fall".into(), seasons: super::strings(&["Early Autumn", "Late Autumn"]) },
        ],
    }
}
