//! Flavor wheel reference data
//!
//! Top categories → sub-categories → associated flavors, each level carrying
//! food-pairing, seasonal-affinity and activity hints. Broad categories are
//! derived separately from keyword tables.
//!
//! Hint values must be names from the matching candidate registry (seasonal
//! affinities may also use the "Spring"/"Autumn"/"Fall" aliases).

use serde::{Deserialize, Serialize};

pub const BRIGHT: &str = "Bright & Lively";
pub const FRESH: &str = "Fresh & Green";
pub const FLORAL: &str = "Floral & Aromatic";
pub const SWEET: &str = "Sweet & Rich";
pub const ROASTED: &str = "Roasted & Smoky";
pub const EARTHY: &str = "Earthy & Deep";
pub const SPICED: &str = "Spiced & Warming";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlavorHints {
    #[serde(default)]
    pub food_pairings: Vec<String>,
    #[serde(default)]
    pub seasonal_affinity: Vec<String>,
    #[serde(default)]
    pub activities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlavorNote {
    /// Lowercase sub-category key
    pub key: String,
    /// Lowercase flavors that resolve to this sub-category
    #[serde(default)]
    pub associated: Vec<String>,
    #[serde(default)]
    pub hints: FlavorHints,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlavorCategory {
    pub name: String,
    #[serde(default)]
    pub hints: FlavorHints,
    pub subcategories: Vec<FlavorNote>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BroadCategory {
    pub name: String,
    /// Lowercase substrings
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlavorWheel {
    pub categories: Vec<FlavorCategory>,
    pub broad_categories: Vec<BroadCategory>,
}

type NoteRow = (
    &'static str,
    &'static [&'static str],
    &'static [&'static str],
    &'static [&'static str],
    &'static [&'static str],
);

type CategoryRow = (
    &'static str,
    (&'static [&'static str], &'static [&'static str], &'static [&'static str]),
    &'static [NoteRow],
);

// sub-category key, associated flavors, food pairings, seasonal affinity, activities
static WHEEL: &[CategoryRow] = &[
    ("Floral", (&["Shortbread"], &["Spring"], &["Relaxation"]), &[
        ("jasmine", &["white flowers", "gardenia"], &["Dim Sum", "Seafood", "Fresh Fruit"],
            &["Late Spring", "Summer"], &["Relaxation", "Reading"]),
        ("orchid", &["lily", "lilac", "magnolia"], &["Soft Cheese", "Steamed Vegetables", "Shortbread"],
            &["Spring"], &["Meditation", "Creative Work"]),
        ("rose", &["geranium", "violet", "lavender"], &["Berry Tarts", "Cream Desserts"],
            &["Late Spring"], &["Socializing", "Relaxation"]),
        ("osmanthus", &["apricot blossom", "honeysuckle"], &["Honey Cakes", "Pastries"],
            &["Autumn"], &["Reading"]),
    ]),
    ("Fruity", (&["Fresh Fruit"], &["Summer"], &["Socializing"]), &[
        ("citrus", &["lemon", "orange peel", "bergamot", "grapefruit", "yuzu"], &["Citrus Desserts", "Seafood", "Salads"],
            &["Summer"], &["Morning Routine", "Focused Work"]),
        ("stone fruit", &["peach", "apricot", "plum", "lychee"], &["Fresh Fruit", "Soft Cheese", "Pastries"],
            &["Summer", "Early Autumn"], &["Socializing"]),
        ("berry", &["raspberry", "blackcurrant", "muscatel", "grape"], &["Berry Tarts", "Dark Chocolate"],
            &["Summer"], &["Creative Work", "Socializing"]),
        ("dried fruit", &["raisin", "fig", "date", "prune"], &["Aged Cheese", "Roasted Nuts", "Honey Cakes"],
            &["Late Autumn", "Winter"], &["Reading"]),
    ]),
    ("Vegetal", (&["Steamed Vegetables"], &["Early Spring"], &["Morning Routine"]), &[
        ("grassy", &["fresh cut grass", "hay", "green bean"], &["Salads", "Steamed Vegetables", "Sushi"],
            &["Early Spring"], &["Morning Routine", "Focused Work"]),
        ("marine", &["seaweed", "nori", "umami", "brothy"], &["Sushi", "Seafood", "Rice Dishes"],
            &["Spring", "Summer"], &["Meditation", "Studying"]),
        ("spinach", &["asparagus", "artichoke", "snap pea"], &["Steamed Vegetables", "Salads"],
            &["Early Spring"], &[]),
    ]),
    ("Sweet", (&["Pastries"], &["Autumn"], &["Relaxation"]), &[
        ("honey", &["nectar", "beeswax"], &["Honey Cakes", "Soft Cheese", "Shortbread"],
            &["Autumn"], &["Relaxation", "Winding Down"]),
        ("caramel", &["toffee", "brown sugar", "molasses"], &["Pastries", "Milk Chocolate", "Roasted Nuts"],
            &["Late Autumn", "Winter"], &["Reading", "Socializing"]),
        ("vanilla", &["cream", "custard"], &["Cream Desserts", "Shortbread"],
            &["Winter"], &["Winding Down"]),
    ]),
    ("Roasted", (&["Roasted Nuts"], &["Late Autumn"], &["Reading"]), &[
        ("toasty", &["toast", "bread crust", "biscuit", "grain"], &["Pastries", "Shortbread", "Roasted Nuts"],
            &["Early Autumn"], &["Morning Routine", "Studying"]),
        ("smoky", &["smoke", "pine smoke", "campfire", "tobacco"], &["Grilled Meats", "Smoked Fish", "Aged Cheese"],
            &["Winter"], &["Outdoor Activities", "Reading"]),
        ("cocoa", &["chocolate", "coffee", "malt", "malty"], &["Dark Chocolate", "Milk Chocolate", "Pastries"],
            &["Late Autumn", "Winter"], &["Focused Work", "Morning Routine"]),
    ]),
    ("Earthy", (&["Mushroom Dishes"], &["Winter"], &["Meditation"]), &[
        ("mineral", &["wet stone", "slate", "flint"], &["Seafood", "Sushi"],
            &["Summer"], &["Meditation", "Studying"]),
        ("woody", &["cedar", "oak", "sandalwood", "bark"], &["Mushroom Dishes", "Roast Duck", "Aged Cheese"],
            &["Late Autumn"], &["Meditation", "Reading"]),
        ("forest floor", &["mushroom", "moss", "damp earth", "leather", "petrichor"],
            &["Mushroom Dishes", "Aged Cheese", "Roast Duck"], &["Winter", "Late Autumn"],
            &["Meditation", "Winding Down"]),
    ]),
    ("Nutty", (&["Roasted Nuts"], &["Early Autumn"], &["Studying"]), &[
        ("chestnut", &["roasted chestnut", "sweet potato"], &["Roasted Nuts", "Rice Dishes", "Dim Sum"],
            &["Autumn"], &["Studying"]),
        ("almond", &["hazelnut", "walnut", "sesame"], &["Shortbread", "Roasted Nuts", "Pastries"],
            &["Early Autumn"], &["Reading"]),
    ]),
    ("Spicy", (&["Spicy Dishes"], &["Winter"], &["Socializing"]), &[
        ("warm spice", &["cinnamon", "clove", "nutmeg", "ginger", "cardamom"], &["Spicy Dishes", "Pastries", "Roast Duck"],
            &["Winter"], &["Socializing", "Winding Down"]),
        ("peppery", &["black pepper", "pepper", "camphor"], &["Grilled Meats", "Spicy Dishes"],
            &["Late Autumn"], &["Outdoor Activities"]),
        ("minty", &["mint", "menthol", "cooling"], &["Fresh Fruit", "Salads"],
            &["Summer"], &["Exercise Recovery", "Focused Work"]),
    ]),
];

static BROAD: &[(&str, &[&str])] = &[
    (BRIGHT, &["citrus", "lemon", "bergamot", "grapefruit", "yuzu", "mint", "berry", "muscatel", "brisk"]),
    (FRESH, &["grass", "vegetal", "spinach", "seaweed", "marine", "pea", "asparagus", "green bean", "hay", "nori"]),
    (FLORAL, &["jasmine", "orchid", "rose", "osmanthus", "lilac", "lily", "floral", "flower", "blossom", "lavender"]),
    (SWEET, &["honey", "caramel", "toffee", "vanilla", "cream", "malt", "chocolate", "cocoa", "molasses", "sugar",
        "custard", "fig", "date", "raisin"]),
    (ROASTED, &["roast", "toast", "smoke", "smoky", "char", "campfire", "tobacco", "coffee", "bread", "biscuit", "grain"]),
    (EARTHY, &["earth", "mushroom", "moss", "forest", "wood", "cedar", "oak", "leather", "petrichor", "stone", "slate"]),
    (SPICED, &["cinnamon", "clove", "nutmeg", "ginger", "cardamom", "pepper", "spice", "camphor"]),
];

fn hints(foods: &[&str], seasons: &[&str], activities: &[&str]) -> FlavorHints {
    FlavorHints {
        food_pairings: super::strings(foods),
        seasonal_affinity: super::strings(seasons),
        activities: super::strings(activities),
    }
}

pub fn builtin() -> FlavorWheel {
    FlavorWheel {
        categories: WHEEL
            .iter()
            .map(|(name, (foods, seasons, activities), notes)| FlavorCategory {
                name: name.to_string(),
                hints: hints(foods, seasons, activities),
                subcategories: notes
                    .iter()
                    .map(|(key, associated, foods, seasons, activities)| FlavorNote {
                        key: key.to_string(),
                        associated: super::strings(associated),
                        hints: hints(foods, seasons, activities),
                    })
                    .collect(),
            })
            .collect(),
        broad_categories: BROAD
            .iter()
            .map(|(name, keywords)| BroadCategory {
                name: name.to_string(),
                keywords: super::strings(keywords),
            })
            .collect(),
    }
}
