//! Reference data loading and upstream adapters for Skyglobe.
//!
//! Responsibilities:
//! - Decode the country attribute list and the GeoJSON boundary collection
//!   into `skyglobe-core` types.
//! - Provide the HTTP forecast adapter.
//!
//! Boundaries:
//! - Do not encode resolution rules (they live in `skyglobe-core`).
//! - Keep blocking I/O off async executors.
//!
//! Invariants:
//! - A dataset either loads completely or not at all.
//! - No global mutable state.

#![forbid(unsafe_code)]

mod boundaries;
mod countries;
mod error;
pub mod forecast;
pub mod fs;

use camino::Utf8Path;
use skyglobe_core::BoundaryDataset;

pub use boundaries::{load_boundaries, read_boundaries};
pub use countries::{load_countries, read_countries};
pub use error::{DatasetLoadError, GeometryIssue};

/// Load both reference files and build the joined dataset.
///
/// Features whose `ADM0_A3` matches no country are kept but reported with a
/// warning; resolvers skip them.
///
/// # Errors
///
/// Returns the first [`DatasetLoadError`] encountered. Nothing is partially
/// loaded.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use camino::Utf8Path;
/// use skyglobe_core::{EnvelopeResolver, PointResolver};
///
/// let dataset = skyglobe_data::load_dataset(
///     Utf8Path::new("data/countries.json"),
///     Utf8Path::new("data/boundaries.geojson"),
/// )?;
/// let resolver = EnvelopeResolver::new(Arc::new(dataset));
/// println!("{:?}", resolver.resolve_country(-26.2, 28.04));
/// # Ok::<(), skyglobe_data::DatasetLoadError>(())
/// ```
pub fn load_dataset(
    countries_path: &Utf8Path,
    boundaries_path: &Utf8Path,
) -> Result<BoundaryDataset, DatasetLoadError> {
    let countries = load_countries(countries_path)?;
    let features = load_boundaries(boundaries_path)?;
    let dataset = BoundaryDataset::new(countries, features)?;

    for feature in dataset.unattributed_features() {
        log::warn!(
            "boundary feature references unknown country {}; it will never match",
            feature.country_ref()
        );
    }
    log::info!(
        "loaded {} countries and {} boundary features from {countries_path} and {boundaries_path}",
        dataset.countries().len(),
        dataset.all_features().len(),
    );
    Ok(dataset)
}
