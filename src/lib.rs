//! Facade crate for the Skyglobe weather explorer.
//!
//! This crate re-exports the point-to-country resolver and forecast types
//! from `skyglobe-core`, plus the dataset loaders and HTTP forecast provider
//! from `skyglobe-data` behind the `data` feature.

#![forbid(unsafe_code)]

pub use skyglobe_core::{
    BoundaryDataset, BoundaryFeature, BoundaryGeometry, CountryRecord, CountryRecordError,
    CurrentWeather, DailySeries, DatasetError, EnvelopeResolver, Forecast, ForecastError,
    ForecastProvider, ForecastRequest, HourlySeries, LinearResolver, PointResolver,
};

#[cfg(feature = "data")]
pub use skyglobe_data::forecast::{HttpForecastProvider, HttpForecastProviderConfig};
#[cfg(feature = "data")]
pub use skyglobe_data::{DatasetLoadError, load_dataset};
