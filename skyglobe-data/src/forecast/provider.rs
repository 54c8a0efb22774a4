//! HTTP-based `ForecastProvider` using the Open-Meteo forecast API.
//!
//! # Architecture
//!
//! The [`ForecastProvider`] trait is synchronous to keep the core library
//! embeddable in synchronous contexts. This provider bridges the async HTTP
//! call to the sync interface by blocking on a Tokio runtime internally.
//!
//! # Example
//!
//! ```no_run
//! use skyglobe_core::{ForecastProvider, ForecastRequest};
//! use skyglobe_data::forecast::HttpForecastProvider;
//!
//! let provider = HttpForecastProvider::new("https://api.open-meteo.com")?;
//! let request = ForecastRequest::with_auto_timezone(-33.87, 151.21)?;
//! let forecast = provider.fetch_forecast(&request)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::time::Duration;

use reqwest::Client;
use skyglobe_core::{Forecast, ForecastError, ForecastProvider, ForecastRequest};
use thiserror::Error;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};
use url::Url;

/// Default base URL of the public forecast service.
pub const DEFAULT_BASE_URL: &str = "https://api.open-meteo.com";

/// Default user agent for forecast requests.
pub const DEFAULT_USER_AGENT: &str = "skyglobe-forecast/0.1";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Path of the forecast endpoint below the base URL.
const FORECAST_PATH: [&str; 2] = ["v1", "forecast"];

/// Hourly series requested from the service.
pub const HOURLY_FIELDS: &[&str] = &[
    "temperature_2m",
    "relativehumidity_2m",
    "apparent_temperature",
    "precipitation_probability",
    "precipitation",
    "rain",
    "showers",
    "snowfall",
    "snow_depth",
    "windgusts_10m",
    "uv_index",
    "uv_index_clear_sky",
];

/// Daily series requested from the service.
pub const DAILY_FIELDS: &[&str] = &[
    "weathercode",
    "temperature_2m_max",
    "temperature_2m_min",
    "apparent_temperature_max",
    "apparent_temperature_min",
    "sunrise",
    "sunset",
    "uv_index_max",
    "uv_index_clear_sky_max",
];

/// Error type for [`HttpForecastProvider`] construction failures.
#[derive(Debug, Error)]
pub enum ProviderBuildError {
    /// The base URL did not parse, or cannot carry a path.
    #[error("invalid forecast base URL {url:?}: {reason}")]
    BaseUrl {
        /// URL as configured.
        url: String,
        /// Why it was rejected.
        reason: String,
    },
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
    /// Failed to build the Tokio runtime.
    #[error("failed to build Tokio runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/// Configuration for [`HttpForecastProvider`].
#[derive(Debug, Clone)]
pub struct HttpForecastProviderConfig {
    /// Base URL of the forecast service (e.g. `"https://api.open-meteo.com"`).
    pub base_url: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl Default for HttpForecastProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl HttpForecastProviderConfig {
    /// Create a new configuration with the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// HTTP forecast provider.
///
/// Implements the synchronous [`ForecastProvider`] trait by blocking on an
/// asynchronous request. The provider owns a Tokio runtime reused across
/// calls.
///
/// # Runtime behaviour
///
/// Outside any Tokio runtime the provider uses its own runtime. Inside a
/// multi-threaded runtime (detected via [`Handle::try_current()`] and
/// [`RuntimeFlavor::MultiThread`]) it blocks on that runtime's handle with
/// [`tokio::task::block_in_place`]. Inside a `current_thread` runtime it falls
/// back to its own runtime, which stalls the caller's runtime for the
/// duration of the request.
///
/// The provider may be dropped anywhere, including inside async code: its
/// runtime is shut down in the background rather than blocking on drop.
pub struct HttpForecastProvider {
    client: Client,
    config: HttpForecastProviderConfig,
    endpoint: Url,
    // Always `Some` until `drop` takes it.
    runtime: Option<Runtime>,
}

impl Drop for HttpForecastProvider {
    fn drop(&mut self) {
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
        }
    }
}

impl std::fmt::Debug for HttpForecastProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpForecastProvider")
            .field("client", &self.client)
            .field("config", &self.config)
            .field("endpoint", &self.endpoint.as_str())
            .field("runtime", &"<tokio::runtime::Runtime>")
            .finish()
    }
}

impl HttpForecastProvider {
    /// Create a new provider with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client or
    /// Tokio runtime fails to build.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ProviderBuildError> {
        Self::with_config(HttpForecastProviderConfig::new(base_url))
    }

    /// Create a new provider with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client or
    /// Tokio runtime fails to build.
    pub fn with_config(config: HttpForecastProviderConfig) -> Result<Self, ProviderBuildError> {
        let endpoint = forecast_endpoint(&config.base_url)?;
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(ProviderBuildError::HttpClient)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ProviderBuildError::Runtime)?;
        Ok(Self {
            client,
            config,
            endpoint,
            runtime: Some(runtime),
        })
    }

    /// Build the forecast URL for `request`.
    fn build_forecast_url(&self, request: &ForecastRequest) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("latitude", &request.latitude().to_string())
            .append_pair("longitude", &request.longitude().to_string())
            .append_pair("timezone", request.timezone())
            .append_pair("current_weather", "true")
            .append_pair("hourly", &HOURLY_FIELDS.join(","))
            .append_pair("daily", &DAILY_FIELDS.join(","));
        url
    }

    /// Fetch the forecast asynchronously.
    async fn fetch_forecast_async(
        &self,
        request: &ForecastRequest,
    ) -> Result<Forecast, ForecastError> {
        let url = self.build_forecast_url(request);
        log::debug!("requesting forecast from {url}");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, &url))?
            .error_for_status()
            .map_err(|err| self.convert_reqwest_error(&err, &url))?;

        response
            .json::<Forecast>()
            .await
            .map_err(|err| ForecastError::ParseError {
                message: err.to_string(),
            })
    }

    /// Convert a reqwest error to a `ForecastError`.
    fn convert_reqwest_error(&self, error: &reqwest::Error, url: &Url) -> ForecastError {
        if error.is_timeout() {
            return ForecastError::Timeout {
                url: url.to_string(),
                timeout_secs: self.config.timeout.as_secs(),
            };
        }

        if let Some(status) = error.status() {
            return ForecastError::HttpError {
                url: url.to_string(),
                status: status.as_u16(),
                message: error.to_string(),
            };
        }

        if error.is_decode() {
            return ForecastError::ParseError {
                message: error.to_string(),
            };
        }

        ForecastError::NetworkError {
            url: url.to_string(),
            message: error.to_string(),
        }
    }
}

impl ForecastProvider for HttpForecastProvider {
    /// Fetch the forecast for `request`.
    ///
    /// # Runtime requirements
    ///
    /// Inside an existing Tokio runtime, the runtime should be
    /// multi-threaded; see the type-level documentation.
    fn fetch_forecast(&self, request: &ForecastRequest) -> Result<Forecast, ForecastError> {
        let future = self.fetch_forecast_async(request);
        match (Handle::try_current(), self.runtime.as_ref()) {
            (Ok(handle), _) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(future))
            }
            (_, Some(runtime)) => runtime.block_on(future),
            (_, None) => Err(ForecastError::NetworkError {
                url: self.endpoint.to_string(),
                message: "forecast runtime has shut down".to_owned(),
            }),
        }
    }
}

/// Parse `base_url` and append the forecast endpoint path.
fn forecast_endpoint(base_url: &str) -> Result<Url, ProviderBuildError> {
    let rejected = |reason: String| ProviderBuildError::BaseUrl {
        url: base_url.to_owned(),
        reason,
    };
    let mut endpoint = Url::parse(base_url).map_err(|err| rejected(err.to_string()))?;
    endpoint
        .path_segments_mut()
        .map_err(|()| rejected("URL cannot carry a path".to_owned()))?
        .pop_if_empty()
        .extend(FORECAST_PATH);
    endpoint.set_query(None);
    Ok(endpoint)
}
