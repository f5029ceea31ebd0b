//! Tea Profiler - Main coordinator for profiling teas
//!
//! Runs the five attribute calculators, then feeds their analyses to the
//! four matchers. Includes sequential and parallel (Rayon) batch forms.
//!
//! Reference tables and configuration are borrowed immutably, so one
//! profiler can serve any number of threads.

use crate::calculators::{
    CompoundAnalysis, CompoundCalculator, FlavorAnalysis, FlavorCalculator, GeographyAnalysis,
    GeographyCalculator, ProcessingAnalysis, ProcessingCalculator, TeaTypeAnalysis, TeaTypeCalculator,
};
use crate::config::EngineConfig;
use crate::matchers::{ActivityMatcher, FoodMatcher, MatchResult, SeasonMatcher, TimeMatcher};
use crate::reference::ReferenceTables;
use crate::types::Tea;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Complete profile of one tea.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeaProfile {
    pub name: String,
    pub compound: CompoundAnalysis,
    pub processing: ProcessingAnalysis,
    pub geography: GeographyAnalysis,
    pub flavor: FlavorAnalysis,
    pub tea_type: TeaTypeAnalysis,
    pub season: MatchResult,
    pub time: MatchResult,
    pub activity: MatchResult,
    pub food: MatchResult,
}

/// Main tea profiler
pub struct TeaProfiler<'a> {
    tables: &'a ReferenceTables,
    config: EngineConfig,
}

impl TeaProfiler<'static> {
    /// Profiler over the process-wide built-in tables.
    pub fn with_builtin_tables(config: EngineConfig) -> Self {
        Self::new(ReferenceTables::shared(), config)
    }
}

impl Default for TeaProfiler<'static> {
    fn default() -> Self {
        Self::with_builtin_tables(EngineConfig::default())
    }
}

impl<'a> TeaProfiler<'a> {
    pub fn new(tables: &'a ReferenceTables, config: EngineConfig) -> Self {
        Self { tables, config }
    }

    pub fn tables(&self) -> &ReferenceTables {
        self.tables
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Profile a single tea.
    pub fn profile(&self, tea: &Tea) -> TeaProfile {
        let tables = self.tables;

        // STEP 1: Attribute analyses
        let compound = CompoundCalculator::new(&tables.compounds).analyze(tea);
        let processing = ProcessingCalculator::new(&tables.processing).analyze(tea);
        let geography = GeographyCalculator::new(&tables.climate).analyze(tea);
        let flavor = FlavorCalculator::new(&tables.flavors).analyze(tea);
        let tea_type = TeaTypeCalculator::new(&tables.tea_types).analyze(tea);

        // STEP 2: Recommendation matching
        let season = SeasonMatcher::new(tables, &self.config.season)
            .evaluate(&processing, &geography, &flavor, &tea_type);
        let time = TimeMatcher::new(tables, &self.config.time).evaluate(&compound, &processing);
        let activity = ActivityMatcher::new(tables, &self.config.activity).evaluate(&compound, &flavor, &tea_type);
        let food = FoodMatcher::new(tables, &self.config.food).evaluate(&flavor, &processing, &tea_type);

        debug!("Profiled '{}' ({})", tea.name, compound.compound_profile);

        TeaProfile {
            name: tea.name.clone(),
            compound,
            processing,
            geography,
            flavor,
            tea_type,
            season,
            time,
            activity,
            food,
        }
    }

    /// Profile a catalog sequentially.
    pub fn profile_all(&self, teas: &[Tea]) -> Vec<TeaProfile> {
        teas.iter().map(|tea| self.profile(tea)).collect()
    }

    /// Profile a catalog IN PARALLEL using Rayon.
    ///
    /// Every profile is independent; output keeps input order.
    pub fn profile_catalog(&self, teas: &[Tea]) -> Vec<TeaProfile> {
        teas.par_iter().map(|tea| self.profile(tea)).collect()
    }
}
