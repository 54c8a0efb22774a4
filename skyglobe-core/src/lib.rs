//! Core domain types for the Skyglobe weather explorer.
//!
//! The heart of the crate is the point-to-country resolver: given a
//! latitude and longitude, find the country boundary that contains it using
//! an even-odd ray-casting test over polygons with holes and multi-part
//! countries.
//!
//! - [`CountryRecord`] and [`BoundaryFeature`] model the reference data.
//! - [`BoundaryDataset`] indexes both collections and joins them by alpha-3.
//! - [`PointResolver`] answers queries; [`LinearResolver`] scans, while
//!   [`EnvelopeResolver`] prefilters with an R\*-tree.
//! - [`forecast`] describes the upstream forecast service.
//!
//! Everything here is free of I/O. Loading datasets from disk and talking to
//! the forecast service live in `skyglobe-data`.

#![forbid(unsafe_code)]

mod country;
mod dataset;
pub mod forecast;
pub mod geometry;
mod resolver;

#[doc(hidden)]
pub mod test_support;

pub use country::{CountryRecord, CountryRecordError};
pub use dataset::{BoundaryDataset, DatasetError};
pub use forecast::{
    CurrentWeather, DailySeries, Forecast, ForecastError, ForecastProvider, ForecastRequest,
    HourlySeries,
};
pub use geometry::{BoundaryFeature, BoundaryGeometry};
pub use resolver::{EnvelopeResolver, LinearResolver, PointResolver};
