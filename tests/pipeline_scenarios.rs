//! Pipeline Integration Tests
//!
//! End-to-end scenarios through the public API: single-attribute analyses,
//! recommendation scoring primitives and the full profiler.

use tea_scorer_rust::calculators::{CompoundCalculator, GeographyCalculator, ProcessingCalculator, NOT_AVAILABLE};
use tea_scorer_rust::calculators::compound::NO_COMPOUND_DATA;
use tea_scorer_rust::scoring::{build_cyclic_ranges, normalize, select, ScoreMap};
use tea_scorer_rust::{
    EngineConfig, Geography, NormalizedMap, Processing, ReferenceTables, Tea, TeaProfiler,
};

fn tables() -> &'static ReferenceTables {
    ReferenceTables::shared()
}

fn with_compounds(caffeine: f64, theanine: f64) -> Tea {
    Tea {
        caffeine_level: Some(caffeine),
        l_theanine_level: Some(theanine),
        ..Tea::new("compounds")
    }
}

// ---- Attribute Scenarios ----

#[test]
fn caffeine_dominant_tea_is_intense() {
    let analysis = CompoundCalculator::new(&tables().compounds).analyze(&with_compounds(8.0, 2.0));
    assert!((analysis.ratio - 0.25).abs() < 1e-9);
    assert_eq!(analysis.ratio_category, "Caffeine Dominant (<0.5)");
    assert_eq!(analysis.stimulation_level, "Very High");
    assert_eq!(analysis.compound_profile, "Intense & Sharp");
}

#[test]
fn zero_compounds_report_no_data() {
    let analysis = CompoundCalculator::new(&tables().compounds).analyze(&with_compounds(0.0, 0.0));
    assert_eq!(analysis.description, NO_COMPOUND_DATA);
    assert_eq!(analysis.ratio_category, NOT_AVAILABLE);
    assert_eq!(analysis.compound_profile, NOT_AVAILABLE);
}

#[test]
fn charcoal_pattern_wins_over_heavy() {
    let tea = Tea {
        processing: Some(Processing {
            methods: vec!["charcoal-heavy-roast".to_string()],
            oxidation_level: None,
        }),
        ..Tea::new("roast")
    };
    let analysis = ProcessingCalculator::new(&tables().processing).analyze(&tea);
    assert_eq!(analysis.roast_level, "Charcoal");
}

#[test]
fn southern_january_harvest_is_summer() {
    let tea = Tea {
        geography: Some(Geography {
            latitude: Some(-33.0),
            harvest_month: Some(1),
            ..Default::default()
        }),
        ..Tea::new("southern")
    };
    let analysis = GeographyCalculator::new(&tables().climate).analyze(&tea);
    assert_eq!(analysis.hemisphere.as_str(), "Southern");
    assert_eq!(analysis.harvest_season, "Summer");
}

// ---- Scoring Scenarios ----

#[test]
fn season_ranges_wrap_across_the_year_end() {
    let registry = &tables().candidates.seasons;
    let normalized = NormalizedMap::from_entries(vec![
        ("Early Spring".to_string(), 90),
        ("Late Spring".to_string(), 20),
        ("Summer".to_string(), 0),
        ("Early Autumn".to_string(), 30),
        ("Late Autumn".to_string(), 80),
        ("Winter".to_string(), 100),
    ]);

    let ranges = build_cyclic_ranges(&normalized, &registry.ordering, 70.0, registry.wrap.as_ref());
    assert_eq!(ranges.len(), 1);
    assert!(ranges[0].wraps);
    assert_eq!(ranges[0].members, vec!["Late Autumn", "Winter", "Early Spring"]);
}

#[test]
fn normalize_and_select_bounds() {
    let mut map = ScoreMap::initialize(&["a", "b", "c", "d"], 50.0);
    map.adjust("a", 30.0);
    map.adjust("b", 25.0);
    map.adjust("c", -40.0);

    let normalized = normalize(&map);
    assert!(normalized.iter().all(|(_, s)| s <= 100));
    assert_eq!(normalized.max_score(), Some(100));
    assert_eq!(normalized.get("c"), Some(0));

    let picked = select(&normalized, 65.0, 20.0, Some(1));
    assert_eq!(picked.names(), vec!["a"]);

    // Nothing clears an absolute threshold of 101: falls back to the top
    let fallback = select(&normalized, 101.0, 0.0, None);
    assert_eq!(fallback.names(), vec!["a"]);
}

// ---- Profiler Scenarios ----

fn darjeeling() -> Tea {
    Tea {
        tea_type: Some("Black".to_string()),
        origin: Some("Darjeeling, India".to_string()),
        caffeine_level: Some(7.0),
        l_theanine_level: Some(4.0),
        flavor_profile: vec!["muscatel".to_string(), "floral".to_string(), "malty".to_string()],
        processing: Some(Processing {
            methods: vec!["withered".to_string(), "rolled".to_string(), "oxidized".to_string()],
            oxidation_level: Some(85.0),
        }),
        geography: Some(Geography {
            latitude: Some(27.0),
            longitude: Some(88.3),
            altitude: Some(2000.0),
            harvest_month: Some(5),
            ..Default::default()
        }),
        ..Tea::new("Darjeeling Second Flush")
    }
}

#[test]
fn profiling_is_deterministic() {
    let profiler = TeaProfiler::default();
    let first = profiler.profile(&darjeeling());
    let second = profiler.profile(&darjeeling());
    assert_eq!(first, second);
}

#[test]
fn empty_tea_degrades_without_panicking() {
    let profile = TeaProfiler::default().profile(&Tea::new("blank"));
    assert!(!profile.compound.has_data());
    assert_eq!(profile.tea_type.description, "Tea type not recognized.");
    for result in [&profile.season, &profile.time, &profile.activity, &profile.food] {
        assert!(!result.recommendations.is_empty());
    }
}

#[test]
fn custom_config_caps_food_recommendations() {
    let mut config = EngineConfig::default();
    config.food.max_recommendations = Some(1);
    let profiler = TeaProfiler::with_builtin_tables(config);
    let profile = profiler.profile(&darjeeling());
    assert_eq!(profile.food.recommendations.len(), 1);
}

#[test]
fn builtin_tables_are_consistent() {
    assert!(tables().validate().is_empty());
}
