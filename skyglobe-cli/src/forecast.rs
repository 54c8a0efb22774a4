//! Forecast command implementation for the Skyglobe CLI.

use std::io::Write;

use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use skyglobe_core::forecast::AUTO_TIMEZONE;
use skyglobe_core::{ForecastProvider, ForecastRequest};
use skyglobe_data::forecast::{
    DEFAULT_BASE_URL, HttpForecastProvider, HttpForecastProviderConfig,
};

use crate::output::write_json;
use crate::{
    ARG_BASE_URL, ARG_LATITUDE, ARG_LONGITUDE, ARG_TIMEZONE, CliError, ENV_FORECAST_LATITUDE,
    ENV_FORECAST_LONGITUDE,
};

/// CLI arguments for the `forecast` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "forecast",
    long_about = "Fetch current conditions plus hourly and daily series for a \
                  coordinate from an Open-Meteo compatible service and print \
                  the forecast as JSON.",
    about = "Fetch the weather forecast for a coordinate"
)]
#[ortho_config(prefix = "SKYGLOBE")]
pub(crate) struct ForecastArgs {
    /// Latitude in degrees, positive north.
    #[arg(value_name = "lat", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) latitude: Option<f64>,
    /// Longitude in degrees, positive east.
    #[arg(value_name = "lng", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) longitude: Option<f64>,
    /// IANA timezone for timestamps; "auto" lets the service decide.
    #[arg(long = ARG_TIMEZONE, value_name = "zone")]
    #[serde(default)]
    pub(crate) timezone: Option<String>,
    /// Base URL of the forecast service (e.g. "https://api.open-meteo.com").
    #[arg(long = ARG_BASE_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) base_url: Option<String>,
}

impl ForecastArgs {
    pub(crate) fn into_config(self) -> Result<ForecastConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ForecastConfig::try_from(merged)
    }
}

/// Resolved `forecast` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ForecastConfig {
    pub(crate) latitude: f64,
    pub(crate) longitude: f64,
    pub(crate) timezone: String,
    pub(crate) base_url: String,
}

impl TryFrom<ForecastArgs> for ForecastConfig {
    type Error = CliError;

    fn try_from(args: ForecastArgs) -> Result<Self, Self::Error> {
        let latitude = args.latitude.ok_or(CliError::MissingArgument {
            field: ARG_LATITUDE,
            env: ENV_FORECAST_LATITUDE,
        })?;
        let longitude = args.longitude.ok_or(CliError::MissingArgument {
            field: ARG_LONGITUDE,
            env: ENV_FORECAST_LONGITUDE,
        })?;
        Ok(Self {
            latitude,
            longitude,
            timezone: args.timezone.unwrap_or_else(|| AUTO_TIMEZONE.to_owned()),
            base_url: args.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
        })
    }
}

/// Builds a forecast provider for the current invocation.
pub(super) trait ForecastProviderBuilder {
    fn build(&self, config: &ForecastConfig) -> Result<Box<dyn ForecastProvider>, CliError>;
}

pub(super) struct DefaultForecastProviderBuilder;

impl ForecastProviderBuilder for DefaultForecastProviderBuilder {
    fn build(&self, config: &ForecastConfig) -> Result<Box<dyn ForecastProvider>, CliError> {
        let provider = HttpForecastProvider::with_config(HttpForecastProviderConfig::new(
            config.base_url.clone(),
        ))?;
        Ok(Box::new(provider))
    }
}

pub(super) fn run_forecast(args: ForecastArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    run_forecast_with(args, &DefaultForecastProviderBuilder, writer)
}

pub(super) fn run_forecast_with(
    args: ForecastArgs,
    builder: &dyn ForecastProviderBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    execute_forecast(&config, builder, writer)
}

pub(super) fn execute_forecast(
    config: &ForecastConfig,
    builder: &dyn ForecastProviderBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let request = ForecastRequest::new(config.latitude, config.longitude, config.timezone.as_str())
        .map_err(CliError::InvalidForecastRequest)?;
    let provider = builder.build(config)?;
    let forecast = provider
        .fetch_forecast(&request)
        .map_err(CliError::Forecast)?;
    log::debug!(
        "forecast for ({}, {}) uses timezone {}",
        request.latitude(),
        request.longitude(),
        forecast.timezone
    );
    write_json(writer, &forecast)
}
