//! Full-pipeline benchmark: one tea through all calculators and matchers,
//! and a small catalog sequential vs parallel.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tea_scorer_rust::{Geography, Processing, Tea, TeaProfiler};

fn tieguanyin() -> Tea {
    Tea {
        tea_type: Some("Oolong".to_string()),
        origin: Some("Anxi, Fujian".to_string()),
        caffeine_level: Some(5.5),
        l_theanine_level: Some(6.0),
        flavor_profile: vec!["orchid".to_string(), "honey".to_string(), "cream".to_string(), "toasty".to_string()],
        processing: Some(Processing {
            methods: vec!["withered".to_string(), "rolled".to_string(), "medium-roast".to_string()],
            oxidation_level: Some(30.0),
        }),
        geography: Some(Geography {
            latitude: Some(25.0),
            longitude: Some(118.2),
            altitude: Some(800.0),
            humidity: Some(78.0),
            temperature: Some(19.0),
            solar_radiation: Some(4.2),
            harvest_month: Some(10),
        }),
        ..Tea::new("Tieguanyin")
    }
}

fn bench_profile(c: &mut Criterion) {
    let profiler = TeaProfiler::default();
    let tea = tieguanyin();
    c.bench_function("profile_single", |b| b.iter(|| profiler.profile(black_box(&tea))));

    let catalog: Vec<Tea> = (0..256)
        .map(|i| {
            let mut tea = tieguanyin();
            tea.caffeine_level = Some((i % 10) as f64);
            tea
        })
        .collect();
    c.bench_function("profile_all_256", |b| b.iter(|| profiler.profile_all(black_box(&catalog))));
    c.bench_function("profile_catalog_256", |b| b.iter(|| profiler.profile_catalog(black_box(&catalog))));
}

criterion_group!(benches, bench_profile);
criterion_main!(benches);
