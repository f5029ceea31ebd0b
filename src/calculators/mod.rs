//! Attribute calculators
//!
//! Each calculator borrows its slice of the reference tables at construction
//! and turns a `Tea` into a read-only analysis record:
//! - Compound: caffeine / L-theanine balance and the named compound profile
//! - Processing: roast level, oxidation, aggregated method impacts
//! - Geography: region, climate buckets, harvest season
//! - Flavor: matched wheel notes, intensity, broad categories, hints
//! - TeaType: baseline record for the primary tea category
//!
//! Missing or partial input never fails; it yields the calculator's
//! "no data" variant.

pub mod compound;
pub mod flavor;
pub mod geography;
pub mod processing;
pub mod tea_type;

pub use compound::{CompoundAnalysis, CompoundCalculator};
pub use flavor::{FlavorAnalysis, FlavorCalculator, FlavorMatch};
pub use geography::{GeographyAnalysis, GeographyCalculator};
pub use processing::{ProcessingAnalysis, ProcessingCalculator};
pub use tea_type::{TeaTypeAnalysis, TeaTypeCalculator};

/// Label used for buckets that could not be computed at all.
pub const NOT_AVAILABLE: &str = "N/A";

/// Common surface of every calculator output.
pub trait Analysis {
    /// Generated human-readable summary
    fn description(&self) -> &str;

    /// Ordered `(field, value)` pairs for display and export.
    fn to_flat(&self) -> Vec<(&'static str, String)>;
}

/// Treat non-finite measurements as missing.
pub(crate) fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}
