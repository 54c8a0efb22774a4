//! Errors raised while loading the reference datasets.

use camino::Utf8PathBuf;
use skyglobe_core::{CountryRecordError, DatasetError};
use thiserror::Error;

/// Structural problems found while converting GeoJSON geometry.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GeometryIssue {
    /// The feature carried a `null` or absent geometry.
    #[error("geometry is missing")]
    Missing,
    /// The geometry is neither a `Polygon` nor a `MultiPolygon`.
    #[error("unsupported geometry type {kind}")]
    UnsupportedType {
        /// GeoJSON `type` member.
        kind: String,
    },
    /// The `coordinates` member did not nest arrays of numbers as expected.
    #[error("malformed coordinates: {message}")]
    Coordinates {
        /// Decoder message.
        message: String,
    },
    /// A polygon listed no rings, so it has no outer boundary.
    #[error("polygon has no rings")]
    PolygonWithoutRings,
    /// A position carried fewer than the two required ordinates.
    #[error("position has {ordinates} ordinate(s); longitude and latitude are required")]
    ShortPosition {
        /// Number of ordinates present.
        ordinates: usize,
    },
}

/// Errors returned when loading the country list or boundary collection.
///
/// Every variant is fatal: a process should refuse to serve queries against a
/// dataset that failed to load.
#[derive(Debug, Error)]
pub enum DatasetLoadError {
    /// The file could not be opened.
    #[error("failed to open dataset file {path}: {source}")]
    Open {
        /// File that failed to open.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The file was not valid JSON of the expected shape.
    #[error("failed to parse dataset file {path}: {source}")]
    Parse {
        /// File that failed to parse.
        path: Utf8PathBuf,
        /// Decoder error.
        #[source]
        source: serde_json::Error,
    },
    /// The boundary file's top-level object was not a `FeatureCollection`.
    #[error("{path} is a GeoJSON {found}, expected a FeatureCollection")]
    NotFeatureCollection {
        /// Boundary file.
        path: Utf8PathBuf,
        /// The `type` actually found.
        found: String,
    },
    /// A country entry held invalid codes or names.
    #[error("country entry {index} in {path} is invalid: {source}")]
    InvalidCountry {
        /// Country list file.
        path: Utf8PathBuf,
        /// Zero-based position of the entry.
        index: usize,
        /// Validation failure.
        #[source]
        source: CountryRecordError,
    },
    /// A country entry's average coordinate was not numeric.
    #[error("country entry {index} in {path} has non-numeric {field} {value:?}")]
    InvalidOrdinate {
        /// Country list file.
        path: Utf8PathBuf,
        /// Zero-based position of the entry.
        index: usize,
        /// Attribute key holding the value.
        field: &'static str,
        /// Raw value.
        value: String,
    },
    /// A boundary feature's geometry was structurally malformed.
    #[error("feature {feature} in {path} has malformed geometry: {issue}")]
    InvalidGeometry {
        /// Boundary file.
        path: Utf8PathBuf,
        /// Zero-based position of the feature.
        feature: usize,
        /// What was wrong.
        #[source]
        issue: GeometryIssue,
    },
    /// A boundary feature had no `ADM0_A3` property.
    #[error("feature {feature} in {path} has no ADM0_A3 property")]
    MissingCountryRef {
        /// Boundary file.
        path: Utf8PathBuf,
        /// Zero-based position of the feature.
        feature: usize,
    },
    /// The loaded records violated dataset invariants.
    #[error("reference data is inconsistent: {0}")]
    Index(#[from] DatasetError),
}
