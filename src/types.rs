//! Input records supplied by the tea catalog.
//!
//! All measurements are optional: catalog entries are frequently partial and
//! every calculator degrades to its "no data" analysis instead of failing.

use serde::{Deserialize, Serialize};

/// A catalog tea. Never mutated by the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Tea {
    pub name: String,
    /// Primary category ("Green", "Oolong", ...)
    #[serde(rename = "type")]
    pub tea_type: Option<String>,
    /// Free-text origin, used when coordinates are missing or match no region
    pub origin: Option<String>,
    /// 0-10
    pub caffeine_level: Option<f64>,
    /// 0-10
    pub l_theanine_level: Option<f64>,
    /// Ordered flavor-note names
    pub flavor_profile: Vec<String>,
    pub processing: Option<Processing>,
    pub geography: Option<Geography>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Processing {
    /// Method tags in catalog order; order matters for last-writer-wins fields
    pub methods: Vec<String>,
    /// Percentage 0-100
    pub oxidation_level: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Geography {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Metres above sea level
    pub altitude: Option<f64>,
    /// Mean relative humidity, %
    pub humidity: Option<f64>,
    /// Mean growing-season temperature, °C
    pub temperature: Option<f64>,
    /// Mean daily insolation, kWh/m²/day
    pub solar_radiation: Option<f64>,
    /// 1-12
    pub harvest_month: Option<u32>,
}

impl Tea {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_catalog_entry() {
        let json = r#"{
            "name": "Tieguanyin",
            "type": "Oolong",
            "caffeineLevel": 5,
            "lTheanineLevel": 6.5,
            "flavorProfile": ["orchid", "butter"],
            "processing": { "methods": ["rolled", "light-roast"], "oxidationLevel": 30 },
            "geography": { "latitude": 25.1, "longitude": 117.9, "harvestMonth": 4 }
        }"#;

        let tea: Tea = serde_json::from_str(json).unwrap();
        assert_eq!(tea.tea_type.as_deref(), Some("Oolong"));
        assert_eq!(tea.l_theanine_level, Some(6.5));
        assert_eq!(tea.flavor_profile, vec!["orchid", "butter"]);
        let geo = tea.geography.unwrap();
        assert_eq!(geo.harvest_month, Some(4));
        assert_eq!(geo.altitude, None);
    }

    #[test]
    fn test_partial_entry_defaults() {
        let tea: Tea = serde_json::from_str(r#"{ "name": "Mystery" }"#).unwrap();
        assert_eq!(tea, Tea::new("Mystery"));
    }
}
