//! Test utilities for forecast providers.
//!
//! [`StubForecastProvider`] returns a pre-configured forecast or error
//! without making HTTP requests, and records the requests it receives.

use std::sync::Mutex;

use skyglobe_core::{Forecast, ForecastError, ForecastProvider, ForecastRequest};

/// Stub `ForecastProvider` for testing.
///
/// # Example
///
/// ```
/// use skyglobe_core::{Forecast, ForecastProvider, ForecastRequest};
/// use skyglobe_data::forecast::test_support::StubForecastProvider;
///
/// let provider = StubForecastProvider::with_forecast(Forecast {
///     timezone: "Africa/Maseru".to_owned(),
///     ..Forecast::default()
/// });
/// let request = ForecastRequest::with_auto_timezone(-29.3, 27.5)?;
///
/// let forecast = provider.fetch_forecast(&request)?;
/// assert_eq!(forecast.timezone, "Africa/Maseru");
/// assert_eq!(provider.requests(), vec![request]);
/// # Ok::<(), skyglobe_core::ForecastError>(())
/// ```
#[derive(Debug)]
pub struct StubForecastProvider {
    response: Result<Forecast, ForecastError>,
    requests: Mutex<Vec<ForecastRequest>>,
}

impl StubForecastProvider {
    /// Create a provider that returns `forecast` for every request.
    #[must_use]
    pub const fn with_forecast(forecast: Forecast) -> Self {
        Self {
            response: Ok(forecast),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Create a provider that fails every request with `error`.
    #[must_use]
    pub const fn with_error(error: ForecastError) -> Self {
        Self {
            response: Err(error),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Requests received so far, in call order.
    #[must_use]
    pub fn requests(&self) -> Vec<ForecastRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

impl ForecastProvider for StubForecastProvider {
    fn fetch_forecast(&self, request: &ForecastRequest) -> Result<Forecast, ForecastError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }
        self.response.clone()
    }
}
