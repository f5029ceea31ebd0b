//! Geography Calculator
//!
//! Region lookup, five independent climate buckets, harvest season and the
//! seasonal quality profile. Influence notes from every matched climate
//! bucket and the region are merged in that order.
//!
//! Southern-hemisphere harvest months are shifted six months before the
//! calendar lookup: `adjusted = ((month + 6 - 1) % 12) + 1`.

use super::{finite, Analysis};
use crate::reference::climate::{ClimateBucket, ClimateTables, Region};
use crate::types::Tea;
use crate::utils::{categorize, find_bucket, OrderedSet, UNKNOWN};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const NO_GEOGRAPHY_DATA: &str = "No geographic information available.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hemisphere {
    Northern,
    Southern,
    Unknown,
}

impl Hemisphere {
    /// Latitude ≥ 0 is northern.
    pub fn from_latitude(latitude: Option<f64>) -> Self {
        match latitude {
            Some(lat) if lat >= 0.0 => Hemisphere::Northern,
            Some(_) => Hemisphere::Southern,
            None => Hemisphere::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Hemisphere::Northern => "Northern",
            Hemisphere::Southern => "Southern",
            Hemisphere::Unknown => UNKNOWN,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeographyAnalysis {
    pub region: Option<String>,
    pub hemisphere: Hemisphere,
    pub altitude_category: String,
    pub humidity_category: String,
    pub temperature_category: String,
    pub solar_radiation_category: String,
    pub latitude_category: String,
    pub harvest_season: String,
    pub seasonal_quality: Option<String>,
    pub seasonal_notes: OrderedSet,
    pub flavor_influences: OrderedSet,
    pub mouthfeel_influences: OrderedSet,
    pub compound_influences: OrderedSet,
    pub description: String,
}

impl GeographyAnalysis {
    pub fn no_data() -> Self {
        Self {
            region: None,
            hemisphere: Hemisphere::Unknown,
            altitude_category: UNKNOWN.to_string(),
            humidity_category: UNKNOWN.to_string(),
            temperature_category: UNKNOWN.to_string(),
            solar_radiation_category: UNKNOWN.to_string(),
            latitude_category: UNKNOWN.to_string(),
            harvest_season: UNKNOWN.to_string(),
            seasonal_quality: None,
            seasonal_notes: OrderedSet::new(),
            flavor_influences: OrderedSet::new(),
            mouthfeel_influences: OrderedSet::new(),
            compound_influences: OrderedSet::new(),
            description: NO_GEOGRAPHY_DATA.to_string(),
        }
    }
}

impl Analysis for GeographyAnalysis {
    fn description(&self) -> &str {
        &self.description
    }

    fn to_flat(&self) -> Vec<(&'static str, String)> {
        vec![
            ("region", self.region.clone().unwrap_or_else(|| UNKNOWN.to_string())),
            ("hemisphere", self.hemisphere.as_str().to_string()),
            ("altitude_category", self.altitude_category.clone()),
            ("humidity_category", self.humidity_category.clone()),
            ("temperature_category", self.temperature_category.clone()),
            ("solar_radiation_category", self.solar_radiation_category.clone()),
            ("latitude_category", self.latitude_category.clone()),
            ("harvest_season", self.harvest_season.clone()),
            ("seasonal_quality", self.seasonal_quality.clone().unwrap_or_default()),
            ("flavor_influences", self.flavor_influences.joined()),
            ("mouthfeel_influences", self.mouthfeel_influences.joined()),
            ("compound_influences", self.compound_influences.joined()),
            ("description", self.description.clone()),
        ]
    }
}

/// Notes collected from buckets and regions.
#[derive(Default)]
struct Influences {
    flavor: OrderedSet,
    mouthfeel: OrderedSet,
    compound: OrderedSet,
}

impl Influences {
    fn add_bucket(&mut self, bucket: Option<&ClimateBucket>) {
        if let Some(b) = bucket {
            self.flavor.extend(&b.flavor_notes);
            self.mouthfeel.extend(&b.mouthfeel_notes);
            self.compound.extend(&b.compound_notes);
        }
    }

    fn add_region(&mut self, region: &Region) {
        self.flavor.extend(&region.flavor_notes);
        self.mouthfeel.extend(&region.mouthfeel_notes);
        self.compound.extend(&region.compound_notes);
    }
}

pub struct GeographyCalculator<'a> {
    tables: &'a ClimateTables,
}

impl<'a> GeographyCalculator<'a> {
    pub fn new(tables: &'a ClimateTables) -> Self {
        Self { tables }
    }

    pub fn analyze(&self, tea: &Tea) -> GeographyAnalysis {
        let geo = tea.geography.clone().unwrap_or_default();
        let origin = tea.origin.as_deref().filter(|o| !o.trim().is_empty());
        if tea.geography.is_none() && origin.is_none() {
            return GeographyAnalysis::no_data();
        }

        let latitude = finite(geo.latitude);
        let longitude = finite(geo.longitude);
        let altitude = finite(geo.altitude);
        let humidity = finite(geo.humidity);
        let temperature = finite(geo.temperature);
        let solar = finite(geo.solar_radiation);
        let abs_latitude = latitude.map(f64::abs);

        let region = self.resolve_region(latitude, longitude, origin);
        let hemisphere = Hemisphere::from_latitude(latitude);
        let harvest_season = self.harvest_season(geo.harvest_month, hemisphere);
        let profile = self.tables.seasonal_profile(&harvest_season);

        let mut influences = Influences::default();
        influences.add_bucket(find_bucket(altitude, &self.tables.altitude));
        influences.add_bucket(find_bucket(humidity, &self.tables.humidity));
        influences.add_bucket(find_bucket(temperature, &self.tables.temperature));
        influences.add_bucket(find_bucket(solar, &self.tables.solar_radiation));
        influences.add_bucket(find_bucket(abs_latitude, &self.tables.latitude));
        if let Some(r) = region {
            influences.add_region(r);
        }

        let mut analysis = GeographyAnalysis {
            region: region.map(|r| r.name.clone()),
            hemisphere,
            altitude_category: categorize(altitude, &self.tables.altitude).to_string(),
            humidity_category: categorize(humidity, &self.tables.humidity).to_string(),
            temperature_category: categorize(temperature, &self.tables.temperature).to_string(),
            solar_radiation_category: categorize(solar, &self.tables.solar_radiation).to_string(),
            latitude_category: categorize(abs_latitude, &self.tables.latitude).to_string(),
            harvest_season,
            seasonal_quality: profile.map(|p| p.quality.clone()),
            seasonal_notes: profile
                .map(|p| p.flavor_notes.iter().map(String::as_str).collect())
                .unwrap_or_default(),
            flavor_influences: influences.flavor,
            mouthfeel_influences: influences.mouthfeel,
            compound_influences: influences.compound,
            description: String::new(),
        };
        analysis.description = describe(&analysis);
        analysis
    }

    fn resolve_region(&self, latitude: Option<f64>, longitude: Option<f64>, origin: Option<&str>) -> Option<&'a Region> {
        let by_coordinates = match (latitude, longitude) {
            (Some(lat), Some(lon)) => self.tables.region_at(lat, lon),
            _ => None,
        };
        by_coordinates.or_else(|| {
            let found = origin.and_then(|o| self.tables.region_named(o));
            if found.is_none() {
                debug!("No region for coordinates {:?}/{:?}, origin {:?}", latitude, longitude, origin);
            }
            found
        })
    }

    /// Season name for a harvest month. Unknown hemisphere reads as northern.
    pub fn harvest_season(&self, month: Option<u32>, hemisphere: Hemisphere) -> String {
        let Some(month) = month.filter(|m| (1..=12).contains(m)) else {
            return UNKNOWN.to_string();
        };
        let adjusted = match hemisphere {
            Hemisphere::Southern => ((month + 6 - 1) % 12) + 1,
            _ => month,
        };
        self.tables
            .harvest_calendar
            .get(adjusted as usize - 1)
            .cloned()
            .unwrap_or_else(|| UNKNOWN.to_string())
    }
}

fn describe(analysis: &GeographyAnalysis) -> String {
    let mut sentences = Vec::new();

    let mut setting = Vec::new();
    if analysis.altitude_category != UNKNOWN {
        setting.push(analysis.altitude_category.to_lowercase());
    }
    if analysis.latitude_category != UNKNOWN {
        setting.push(analysis.latitude_category.to_lowercase());
    }
    if analysis.temperature_category != UNKNOWN {
        setting.push(format!("{} climate", analysis.temperature_category.to_lowercase()));
    }
    match (&analysis.region, setting.is_empty()) {
        (Some(region), false) => sentences.push(format!("Grown in {}: {}.", region, setting.join(", "))),
        (Some(region), true) => sentences.push(format!("Grown in {}.", region)),
        (None, false) => sentences.push(format!("Grown in a {} setting.", setting.join(", "))),
        (None, true) => {}
    }

    if let Some(quality) = &analysis.seasonal_quality {
        sentences.push(format!("{} harvest. {}.", analysis.harvest_season, quality));
    }
    if !analysis.flavor_influences.is_empty() {
        sentences.push(format!("Terroir favors {} notes.", analysis.flavor_influences.joined()));
    }

    if sentences.is_empty() {
        NO_GEOGRAPHY_DATA.to_string()
    } else {
        sentences.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::climate;
    use crate::types::Geography;

    fn tea(geo: Geography) -> Tea {
        Tea {
            geography: Some(geo),
            ..Tea::new("test")
        }
    }

    // ---- Harvest Season Tests ----

    #[test]
    fn test_southern_hemisphere_shift() {
        let tables = climate::builtin();
        let analysis = GeographyCalculator::new(&tables).analyze(&tea(Geography {
            latitude: Some(-33.0),
            harvest_month: Some(1),
            ..Default::default()
        }));
        assert_eq!(analysis.hemisphere, Hemisphere::Southern);
        assert_eq!(analysis.harvest_season, "Summer");
    }

    #[test]
    fn test_harvest_calendar_edges() {
        let tables = climate::builtin();
        let calc = GeographyCalculator::new(&tables);
        assert_eq!(calc.harvest_season(Some(12), Hemisphere::Northern), "Winter");
        assert_eq!(calc.harvest_season(Some(6), Hemisphere::Southern), "Winter");
        assert_eq!(calc.harvest_season(Some(4), Hemisphere::Unknown), "Early Spring");
        assert_eq!(calc.harvest_season(Some(0), Hemisphere::Northern), UNKNOWN);
        assert_eq!(calc.harvest_season(Some(13), Hemisphere::Northern), UNKNOWN);
        assert_eq!(calc.harvest_season(None, Hemisphere::Northern), UNKNOWN);
    }

    // ---- Region & Bucket Tests ----

    #[test]
    fn test_full_record() {
        let tables = climate::builtin();
        let analysis = GeographyCalculator::new(&tables).analyze(&tea(Geography {
            latitude: Some(27.0),
            longitude: Some(88.1),
            altitude: Some(2000.0),
            humidity: Some(85.0),
            temperature: Some(16.0),
            solar_radiation: Some(4.0),
            harvest_month: Some(4),
        }));

        assert_eq!(analysis.region.as_deref(), Some("Darjeeling"));
        assert_eq!(analysis.altitude_category, "Very High-Elevation");
        assert_eq!(analysis.humidity_category, "Very Humid");
        assert_eq!(analysis.temperature_category, "Cool");
        assert_eq!(analysis.solar_radiation_category, "Moderate");
        assert_eq!(analysis.latitude_category, "Subtropical");
        assert_eq!(analysis.harvest_season, "Early Spring");
        assert!(analysis.seasonal_quality.is_some());

        // Bucket notes first, region notes last, no repeats
        let flavors = analysis.flavor_influences.as_slice();
        assert_eq!(flavors.first().map(String::as_str), Some("delicate"));
        assert!(flavors.iter().any(|f| f == "muscatel"));
        assert_eq!(flavors.iter().filter(|f| *f == "floral").count(), 1);
    }

    #[test]
    fn test_origin_fallback() {
        let tables = climate::builtin();
        let calc = GeographyCalculator::new(&tables);
        let analysis = calc.analyze(&Tea {
            origin: Some("Alishan, Taiwan".to_string()),
            ..Tea::new("test")
        });
        assert_eq!(analysis.region.as_deref(), Some("Taiwan"));
        assert_eq!(analysis.altitude_category, UNKNOWN);
        assert_eq!(analysis.hemisphere, Hemisphere::Unknown);
        assert!(analysis.flavor_influences.contains("creamy"));
    }

    #[test]
    fn test_negative_temperature_bucket() {
        let tables = climate::builtin();
        let analysis = GeographyCalculator::new(&tables).analyze(&tea(Geography {
            temperature: Some(-5.0),
            ..Default::default()
        }));
        assert_eq!(analysis.temperature_category, "Cold");
        assert_eq!(analysis.region, None);
    }

    #[test]
    fn test_no_data() {
        let tables = climate::builtin();
        let calc = GeographyCalculator::new(&tables);
        assert_eq!(calc.analyze(&Tea::new("bare")), GeographyAnalysis::no_data());
    }
}
