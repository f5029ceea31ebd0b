//! Growing-environment reference data
//!
//! Five climate bucket tables (altitude, humidity, temperature, solar
//! radiation, absolute latitude), named tea regions, the harvest-month season
//! calendar and per-season quality profiles.
//!
//! Units:
//! - altitude: metres above sea level
//! - humidity: mean relative humidity (%)
//! - temperature: mean growing-season temperature (°C)
//! - solar radiation: mean daily insolation (kWh/m²/day)
//! - latitude: absolute degrees

use crate::utils::{Banded, ThresholdBucket};
use serde::{Deserialize, Serialize};

/// A climate range with the influence notes it contributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClimateBucket {
    #[serde(flatten)]
    pub range: ThresholdBucket,
    #[serde(default)]
    pub flavor_notes: Vec<String>,
    #[serde(default)]
    pub mouthfeel_notes: Vec<String>,
    #[serde(default)]
    pub compound_notes: Vec<String>,
}

impl Banded for ClimateBucket {
    fn bucket(&self) -> &ThresholdBucket {
        &self.range
    }
}

/// A tea-growing region as a lat/long bounding box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub name: String,
    /// Lowercase names matched against free-text origins
    #[serde(default)]
    pub aliases: Vec<String>,
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
    #[serde(default)]
    pub flavor_notes: Vec<String>,
    #[serde(default)]
    pub mouthfeel_notes: Vec<String>,
    #[serde(default)]
    pub compound_notes: Vec<String>,
}

impl Region {
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        (self.lat_min..=self.lat_max).contains(&latitude)
            && (self.lon_min..=self.lon_max).contains(&longitude)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonalProfile {
    pub season: String,
    pub quality: String,
    pub flavor_notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClimateTables {
    pub altitude: Vec<ClimateBucket>,
    pub humidity: Vec<ClimateBucket>,
    pub temperature: Vec<ClimateBucket>,
    pub solar_radiation: Vec<ClimateBucket>,
    pub latitude: Vec<ClimateBucket>,
    /// Checked in order; first containing box wins
    pub regions: Vec<Region>,
    /// Northern-hemisphere season for months 1-12 (index 0 = January)
    pub harvest_calendar: Vec<String>,
    pub seasonal_profiles: Vec<SeasonalProfile>,
}

impl ClimateTables {
    pub fn region_at(&self, latitude: f64, longitude: f64) -> Option<&Region> {
        self.regions.iter().find(|r| r.contains(latitude, longitude))
    }

    /// Region whose name or alias appears in `origin` (case-insensitive).
    pub fn region_named(&self, origin: &str) -> Option<&Region> {
        let origin = origin.to_lowercase();
        self.regions.iter().find(|r| {
            origin.contains(&r.name.to_lowercase()) || r.aliases.iter().any(|a| origin.contains(a.as_str()))
        })
    }

    pub fn seasonal_profile(&self, season: &str) -> Option<&SeasonalProfile> {
        self.seasonal_profiles.iter().find(|p| p.season == season)
    }
}

type BucketRow = (
    &'static str,
    f64,
    Option<f64>,
    &'static [&'static str],
    &'static [&'static str],
    &'static [&'static str],
);

static ALTITUDE: &[BucketRow] = &[
    ("Lowland", 0.0, Some(600.0), &["robust", "malty"], &["full-bodied"], &["higher catechins"]),
    ("Mid-Elevation", 600.0, Some(1200.0), &["balanced", "sweet"], &["rounded"],
        &["balanced catechins and amino acids"]),
    ("High-Elevation", 1200.0, Some(1800.0), &["floral", "bright"], &["crisp"],
        &["elevated L-theanine", "concentrated aromatics"]),
    ("Very High-Elevation", 1800.0, None, &["delicate", "complex aromatics"], &["silky"],
        &["high L-theanine", "lower catechins"]),
];

static HUMIDITY: &[BucketRow] = &[
    ("Arid", 0.0, Some(40.0), &["concentrated", "mineral"], &["brisk"], &["stress polyphenols"]),
    ("Moderate", 40.0, Some(60.0), &["balanced"], &["clean"], &[]),
    ("Humid", 60.0, Some(80.0), &["lush", "vegetal"], &["smooth"], &["steady amino acid synthesis"]),
    ("Very Humid", 80.0, None, &["soft", "sweet"], &["soft"], &["lower astringency"]),
];

static TEMPERATURE: &[BucketRow] = &[
    ("Cold", -50.0, Some(10.0), &["sweet", "delicate"], &["thin"], &["slow growth concentrates amino acids"]),
    ("Cool", 10.0, Some(18.0), &["floral", "sweet"], &["silky"], &["higher L-theanine retention"]),
    ("Warm", 18.0, Some(25.0), &["balanced", "fruity"], &["medium"], &["balanced catechins"]),
    ("Hot", 25.0, None, &["bold", "astringent"], &["brisk"], &["higher catechins and caffeine"]),
];

static SOLAR: &[BucketRow] = &[
    ("Low", 0.0, Some(3.5), &["umami", "vegetal"], &["smooth"], &["higher L-theanine", "more chlorophyll"]),
    ("Moderate", 3.5, Some(4.5), &["balanced"], &["rounded"], &[]),
    ("High", 4.5, Some(5.5), &["bright", "brisk"], &["crisp"], &["higher catechins"]),
    ("Very High", 5.5, None, &["bold", "astringent"], &["drying"], &["high catechin and flavonol levels"]),
];

static LATITUDE: &[BucketRow] = &[
    ("Tropical", 0.0, Some(23.5), &["bold", "malty"], &["full"], &["year-round growth", "higher caffeine"]),
    ("Subtropical", 23.5, Some(35.0), &["floral", "complex"], &["rounded"], &["seasonal flush variation"]),
    ("Temperate", 35.0, Some(50.0), &["sweet", "vegetal"], &["delicate"],
        &["dormancy builds amino acid reserves"]),
    ("High Latitude", 50.0, None, &["delicate", "light"], &["thin"], &["marginal cultivation"]),
];

type RegionRow = (
    &'static str,
    &'static [&'static str],
    [f64; 4],
    &'static [&'static str],
    &'static [&'static str],
    &'static [&'static str],
);

// name, aliases, [lat_min, lat_max, lon_min, lon_max], flavor, mouthfeel, compounds
// Narrow boxes precede the wider boxes they overlap.
static REGIONS: &[RegionRow] = &[
    ("Darjeeling", &["darjeeling"], [26.7, 27.3, 87.9, 88.5], &["muscatel", "floral"], &["brisk"], &[]),
    ("Nepal", &["nepal", "ilam"], [26.3, 30.5, 80.0, 88.2], &["floral", "muscatel"], &["smooth"], &[]),
    ("Assam", &["assam"], [24.0, 28.2, 89.7, 96.1], &["malty", "robust"], &["full-bodied"], &["high caffeine"]),
    ("Nilgiri", &["nilgiri"], [10.8, 11.8, 76.0, 77.2], &["fruity", "brisk"], &["clean"], &[]),
    ("Sri Lanka", &["ceylon", "sri lanka"], [5.9, 9.9, 79.5, 82.0], &["citrus", "bright"], &["brisk"], &[]),
    ("Taiwan", &["taiwan", "alishan", "formosa"], [21.9, 25.3, 120.0, 122.0], &["creamy", "floral"],
        &["buttery"], &["high-mountain aromatics"]),
    ("Yunnan", &["yunnan", "pu-erh", "puer"], [21.1, 29.2, 97.5, 106.2], &["earthy", "cocoa", "honey"],
        &["thick"], &[]),
    ("Fujian", &["fujian", "wuyi", "anxi", "fuding"], [23.5, 28.3, 115.8, 120.7], &["floral", "mineral", "roasted"],
        &["rounded"], &[]),
    ("Zhejiang", &["zhejiang", "hangzhou", "longjing"], [27.0, 31.2, 118.0, 123.0], &["chestnut", "vegetal"],
        &["smooth"], &[]),
    ("Anhui", &["anhui", "keemun", "huangshan"], [29.4, 34.6, 114.9, 119.6], &["orchid", "cocoa"], &["smooth"], &[]),
    ("Korea", &["korea", "jeju", "boseong"], [33.0, 38.7, 124.5, 130.0], &["nutty", "vegetal"], &["soft"], &[]),
    ("Japan", &["japan", "uji", "shizuoka", "kagoshima"], [24.0, 45.6, 122.9, 146.0], &["umami", "marine", "grassy"],
        &["brothy"], &["shading raises L-theanine"]),
    ("Kenya", &["kenya"], [-4.8, 5.0, 33.9, 41.9], &["bright", "brisk"], &["full-bodied"], &["high polyphenols"]),
];

// Index 0 = January
static HARVEST_CALENDAR: [&str; 12] = [
    "Winter", "Winter", "Early Spring", "Early Spring", "Late Spring", "Summer",
    "Summer", "Summer", "Early Autumn", "Early Autumn", "Late Autumn", "Winter",
];

static SEASONAL_PROFILES: &[(&str, &str, &[&str])] = &[
    ("Early Spring", "First flush: tender buds, prized sweetness and aroma", &["fresh", "delicate", "sweet"]),
    ("Late Spring", "Late spring pickings: fuller leaf, balanced character", &["floral", "vegetal"]),
    ("Summer", "Summer flush: vigorous growth, bolder and more astringent", &["bold", "brisk", "fruity"]),
    ("Early Autumn", "Early autumn flush: mellowing, rounded character", &["rounded", "fruity", "honey"]),
    ("Late Autumn", "Autumnal flush: deep, mellow, lower astringency", &["mellow", "woody", "nutty"]),
    ("Winter", "Winter pickings: slow growth, concentrated sweetness", &["sweet", "concentrated"]),
];

fn buckets(rows: &[BucketRow]) -> Vec<ClimateBucket> {
    rows.iter()
        .map(|(label, min, max, flavor, mouthfeel, compounds)| ClimateBucket {
            range: ThresholdBucket::new(label, *min, *max),
            flavor_notes: super::strings(flavor),
            mouthfeel_notes: super::strings(mouthfeel),
            compound_notes: super::strings(compounds),
        })
        .collect()
}

pub fn builtin() -> ClimateTables {
    ClimateTables {
        altitude: buckets(ALTITUDE),
        humidity: buckets(HUMIDITY),
        temperature: buckets(TEMPERATURE),
        solar_radiation: buckets(SOLAR),
        latitude: buckets(LATITUDE),
        regions: REGIONS
            .iter()
            .map(|(name, aliases, [lat_min, lat_max, lon_min, lon_max], flavor, mouthfeel, compounds)| Region {
                name: name.to_string(),
                aliases: super::strings(aliases),
                lat_min: *lat_min,
                lat_max: *lat_max,
                lon_min: *lon_min,
                lon_max: *lon_max,
                flavor_notes: super::strings(flavor),
                mouthfeel_notes: super::strings(mouthfeel),
                compound_notes: super::strings(compounds),
            })
            .collect(),
        harvest_calendar: super::strings(&HARVEST_CALENDAR),
        seasonal_profiles: SEASONAL_PROFILES
            .iter()
            .map(|(season, quality, notes)| SeasonalProfile {
                season: season.to_string(),
                quality: quality.to_string(),
                flavor_notes: super::strings(notes),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::check_table;

    #[test]
    fn test_bucket_tables_are_contiguous() {
        let tables = builtin();
        for table in [&tables.altitude, &tables.humidity, &tables.temperature, &tables.solar_radiation, &tables.latitude] {
            assert!(check_table(table).is_empty());
        }
    }

    #[test]
    fn test_region_priority() {
        let tables = builtin();
        // Inside both the Darjeeling and Nepal boxes
        assert_eq!(tables.region_at(27.0, 88.1).map(|r| r.name.as_str()), Some("Darjeeling"));
        assert_eq!(tables.region_at(24.5, 120.5).map(|r| r.name.as_str()), Some("Taiwan"));
        assert!(tables.region_at(51.5, -0.1).is_none());
    }

    #[test]
    fn test_region_by_origin_text() {
        let tables = builtin();
        assert_eq!(tables.region_named("Uji, Kyoto").map(|r| r.name.as_str()), Some("Japan"));
        assert_eq!(tables.region_named("Wuyi Mountains").map(|r| r.name.as_str()), Some("Fujian"));
        assert!(tables.region_named("Cornwall").is_none());
    }

    #[test]
    fn test_calendar_covers_every_month() {
        let tables = builtin();
        assert_eq!(tables.harvest_calendar.len(), 12);
        for season in &tables.harvest_calendar {
            assert!(tables.seasonal_profile(season).is_some());
        }
    }
}
