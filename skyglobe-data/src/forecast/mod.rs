//! HTTP forecast provider for the Open-Meteo API.
//!
//! [`HttpForecastProvider`] implements [`skyglobe_core::ForecastProvider`] by
//! issuing `GET {base_url}/v1/forecast` with the coordinate, timezone and the
//! fixed set of hourly and daily series the explorer displays.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use skyglobe_core::{ForecastProvider, ForecastRequest};
//! use skyglobe_data::forecast::{HttpForecastProvider, HttpForecastProviderConfig};
//!
//! let config = HttpForecastProviderConfig::default()
//!     .with_timeout(Duration::from_secs(10))
//!     .with_user_agent("my-app/1.0");
//! let provider = HttpForecastProvider::with_config(config)?;
//!
//! let request = ForecastRequest::new(-29.31, 27.48, "Africa/Maseru")?;
//! let forecast = provider.fetch_forecast(&request)?;
//! println!("{:?}", forecast.current_weather);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod provider;

#[doc(hidden)]
pub mod test_support;

pub use provider::{
    DAILY_FIELDS, DEFAULT_BASE_URL, DEFAULT_USER_AGENT, HOURLY_FIELDS, HttpForecastProvider,
    HttpForecastProviderConfig, ProviderBuildError,
};
