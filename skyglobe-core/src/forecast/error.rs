use thiserror::Error;

/// Errors from [`crate::forecast::ForecastProvider::fetch_forecast`] and
/// [`crate::forecast::ForecastRequest::new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ForecastError {
    /// Coordinates were non-finite or outside WGS84 ranges.
    #[error("coordinates ({latitude}, {longitude}) are outside the valid range")]
    InvalidCoordinates {
        /// Latitude as supplied.
        latitude: f64,
        /// Longitude as supplied.
        longitude: f64,
    },
    /// The timezone was blank.
    #[error("timezone must not be empty")]
    EmptyTimezone,
    /// The request did not complete within the configured timeout.
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Requested URL.
        url: String,
        /// Configured timeout.
        timeout_secs: u64,
    },
    /// The service answered with a non-success status.
    #[error("forecast service returned HTTP {status} for {url}: {message}")]
    HttpError {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Error detail.
        message: String,
    },
    /// The request failed before a response arrived.
    #[error("network error requesting {url}: {message}")]
    NetworkError {
        /// Requested URL.
        url: String,
        /// Error detail.
        message: String,
    },
    /// The response body was not a valid forecast.
    #[error("failed to parse forecast response: {message}")]
    ParseError {
        /// Decoder error detail.
        message: String,
    },
}
