//! Fetch weather forecasts for a coordinate.
//!
//! The [`ForecastProvider`] trait abstracts the upstream forecast service.
//! Callers build a validated [`ForecastRequest`] and receive a [`Forecast`]
//! holding the current conditions plus hourly and daily series.
//!
//! Resolution of coordinates to countries does not depend on this module.

mod error;
mod model;
mod provider;

pub use error::ForecastError;
pub use model::{CurrentWeather, DailySeries, Forecast, HourlySeries};
pub use provider::{AUTO_TIMEZONE, ForecastProvider, ForecastRequest};
