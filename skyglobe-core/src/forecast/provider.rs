//! Forecast provider trait and validated request type.

use super::{error::ForecastError, model::Forecast};

/// Timezone asking the service to infer the zone from the coordinate.
pub const AUTO_TIMEZONE: &str = "auto";

/// A validated forecast query.
///
/// # Examples
///
/// ```
/// use skyglobe_core::forecast::{ForecastError, ForecastRequest};
///
/// let request = ForecastRequest::new(-33.87, 151.21, "Australia/Sydney")?;
/// assert_eq!(request.timezone(), "Australia/Sydney");
/// assert!(ForecastRequest::new(91.0, 0.0, "auto").is_err());
/// # Ok::<(), ForecastError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastRequest {
    latitude: f64,
    longitude: f64,
    timezone: String,
}

impl ForecastRequest {
    /// Validate and construct a request.
    ///
    /// Latitude must lie in `[-90, 90]` and longitude in `[-180, 180]`; the
    /// timezone must be non-blank (use `"auto"` to let the service decide).
    pub fn new(
        latitude: f64,
        longitude: f64,
        timezone: impl Into<String>,
    ) -> Result<Self, ForecastError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(ForecastError::InvalidCoordinates {
                latitude,
                longitude,
            });
        }
        let zone: String = timezone.into();
        if zone.trim().is_empty() {
            return Err(ForecastError::EmptyTimezone);
        }
        Ok(Self {
            latitude,
            longitude,
            timezone: zone,
        })
    }

    /// Request with the timezone inferred by the service.
    pub fn with_auto_timezone(latitude: f64, longitude: f64) -> Result<Self, ForecastError> {
        Self::new(latitude, longitude, AUTO_TIMEZONE)
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// IANA timezone name or `"auto"`.
    #[must_use]
    pub fn timezone(&self) -> &str {
        &self.timezone
    }
}

/// Fetch a forecast for a coordinate.
///
/// The trait is synchronous so that it embeds in non-async callers; HTTP
/// implementations block on their own runtime.
///
/// # Examples
///
/// ```rust
/// use skyglobe_core::forecast::{Forecast, ForecastError, ForecastProvider, ForecastRequest};
///
/// struct Calm;
///
/// impl ForecastProvider for Calm {
///     fn fetch_forecast(&self, request: &ForecastRequest) -> Result<Forecast, ForecastError> {
///         Ok(Forecast {
///             latitude: request.latitude(),
///             longitude: request.longitude(),
///             timezone: request.timezone().to_owned(),
///             ..Forecast::default()
///         })
///     }
/// }
///
/// let request = ForecastRequest::with_auto_timezone(51.5, -0.1)?;
/// let forecast = Calm.fetch_forecast(&request)?;
/// assert_eq!(forecast.timezone, "auto");
/// # Ok::<(), ForecastError>(())
/// ```
pub trait ForecastProvider {
    /// Return the forecast for `request`.
    fn fetch_forecast(&self, request: &ForecastRequest) -> Result<Forecast, ForecastError>;
}
