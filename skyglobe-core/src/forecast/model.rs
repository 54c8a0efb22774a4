//! Forecast payload returned by providers.
//!
//! Field names follow the upstream JSON so the types deserialise directly.
//! Series values are `Option` because the service reports gaps as `null`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Forecast for one coordinate.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Forecast {
    /// Latitude of the grid cell the service used.
    pub latitude: f64,
    /// Longitude of the grid cell the service used.
    pub longitude: f64,
    /// Timezone applied to all timestamps.
    pub timezone: String,
    /// Abbreviated timezone name, e.g. `AEST`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub timezone_abbreviation: Option<String>,
    /// Offset of `timezone` from UTC in seconds.
    #[cfg_attr(feature = "serde", serde(default))]
    pub utc_offset_seconds: Option<i32>,
    /// Elevation of the grid cell in metres.
    #[cfg_attr(feature = "serde", serde(default))]
    pub elevation: Option<f64>,
    /// Conditions at the time of the request.
    #[cfg_attr(feature = "serde", serde(default))]
    pub current_weather: Option<CurrentWeather>,
    /// Hour-by-hour series.
    #[cfg_attr(feature = "serde", serde(default))]
    pub hourly: Option<HourlySeries>,
    /// Day-by-day series.
    #[cfg_attr(feature = "serde", serde(default))]
    pub daily: Option<DailySeries>,
}

/// Current conditions.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CurrentWeather {
    /// Air temperature in °C.
    pub temperature: f64,
    /// Wind speed in km/h.
    pub windspeed: f64,
    /// Wind direction in degrees.
    pub winddirection: f64,
    /// WMO weather interpretation code.
    pub weathercode: u16,
    /// `1` during daylight, `0` at night.
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_day: Option<u8>,
    /// Local ISO-8601 timestamp of the observation.
    pub time: String,
}

/// Hourly forecast series. Every vector is aligned with `time`.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HourlySeries {
    /// Local ISO-8601 timestamps.
    pub time: Vec<String>,
    /// Air temperature at 2 m, °C.
    pub temperature_2m: Vec<Option<f64>>,
    /// Relative humidity at 2 m, %.
    pub relativehumidity_2m: Vec<Option<f64>>,
    /// Apparent temperature, °C.
    pub apparent_temperature: Vec<Option<f64>>,
    /// Probability of precipitation, %.
    pub precipitation_probability: Vec<Option<f64>>,
    /// Total precipitation, mm.
    pub precipitation: Vec<Option<f64>>,
    /// Rain, mm.
    pub rain: Vec<Option<f64>>,
    /// Showers, mm.
    pub showers: Vec<Option<f64>>,
    /// Snowfall, cm.
    pub snowfall: Vec<Option<f64>>,
    /// Snow depth, m.
    pub snow_depth: Vec<Option<f64>>,
    /// Wind gusts at 10 m, km/h.
    pub windgusts_10m: Vec<Option<f64>>,
    /// UV index.
    pub uv_index: Vec<Option<f64>>,
    /// UV index under clear sky.
    pub uv_index_clear_sky: Vec<Option<f64>>,
}

/// Daily forecast series. Every vector is aligned with `time`.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DailySeries {
    /// Local ISO-8601 dates.
    pub time: Vec<String>,
    /// WMO weather interpretation codes.
    pub weathercode: Vec<Option<u16>>,
    /// Daily maximum temperature, °C.
    pub temperature_2m_max: Vec<Option<f64>>,
    /// Daily minimum temperature, °C.
    pub temperature_2m_min: Vec<Option<f64>>,
    /// Daily maximum apparent temperature, °C.
    pub apparent_temperature_max: Vec<Option<f64>>,
    /// Daily minimum apparent temperature, °C.
    pub apparent_temperature_min: Vec<Option<f64>>,
    /// Local sunrise timestamps.
    pub sunrise: Vec<Option<String>>,
    /// Local sunset timestamps.
    pub sunset: Vec<Option<String>>,
    /// Daily maximum UV index.
    pub uv_index_max: Vec<Option<f64>>,
    /// Daily maximum clear-sky UV index.
    pub uv_index_clear_sky_max: Vec<Option<f64>>,
}
