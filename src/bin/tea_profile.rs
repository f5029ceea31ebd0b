// Tea profile CLI
//
// Purpose: Profile one tea or a catalog from a JSON file and print the result
// Usage: cargo run --features cli --bin tea_profile -- <tea.json>
//
// Optional environment:
//   TEA_ENGINE_CONFIG     - JSON file overriding matcher thresholds
//   TEA_REFERENCE_TABLES  - JSON file replacing the built-in reference tables

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tea_scorer_rust::{EngineConfig, ReferenceTables, Tea, TeaProfiler};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// A single tea record or a whole catalog.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogInput {
    Many(Vec<Tea>),
    One(Tea),
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the JSON output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tea_scorer_rust=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let input_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .context("Usage: tea_profile <tea.json>")?;

    let config = match std::env::var("TEA_ENGINE_CONFIG") {
        Ok(path) => {
            tracing::info!("Loading engine config: {}", path);
            EngineConfig::load(Path::new(&path))
                .with_context(|| format!("Failed to load engine config {:?}", path))?
        }
        Err(_) => EngineConfig::default(),
    };

    let custom_tables = match std::env::var("TEA_REFERENCE_TABLES") {
        Ok(path) => {
            tracing::info!("Loading reference tables: {}", path);
            Some(
                ReferenceTables::load(Path::new(&path))
                    .with_context(|| format!("Failed to load reference tables {:?}", path))?,
            )
        }
        Err(_) => None,
    };
    let tables = custom_tables.as_ref().unwrap_or_else(|| ReferenceTables::shared());
    let profiler = TeaProfiler::new(tables, config);

    let contents = std::fs::read_to_string(&input_path)
        .with_context(|| format!("Failed to read tea file: {:?}", input_path))?;
    let input: CatalogInput =
        serde_json::from_str(&contents).with_context(|| "Failed to parse tea JSON")?;

    let output = match input {
        CatalogInput::One(tea) => serde_json::to_string_pretty(&profiler.profile(&tea))?,
        CatalogInput::Many(teas) => {
            tracing::info!("Profiling {} teas", teas.len());
            serde_json::to_string_pretty(&profiler.profile_catalog(&teas))?
        }
    };
    println!("{}", output);

    Ok(())
}
