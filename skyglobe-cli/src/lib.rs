//! Command-line interface for the Skyglobe weather explorer.
//!
//! `locate` answers "which country contains this point?", `countries` lists
//! the countries the boundary data can display, and `forecast` fetches the
//! weather for a coordinate. Options layer CLI flags over `SKYGLOBE_*`
//! environment variables and configuration files.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use std::io::Write;

mod countries;
mod dataset;
mod error;
mod forecast;
mod locate;
mod logging;
mod output;

pub use error::CliError;
pub use logging::{DEFAULT_LOG_FILTER, init_logging};

use countries::CountriesArgs;
use forecast::ForecastArgs;
use locate::LocateArgs;

pub(crate) const ARG_LATITUDE: &str = "latitude";
pub(crate) const ARG_LONGITUDE: &str = "longitude";
pub(crate) const ARG_DATA_DIR: &str = "data-dir";
pub(crate) const ARG_COUNTRIES: &str = "countries";
pub(crate) const ARG_BOUNDARIES: &str = "boundaries";
pub(crate) const ARG_LINEAR: &str = "linear";
pub(crate) const ARG_ALL: &str = "all";
pub(crate) const ARG_TIMEZONE: &str = "timezone";
pub(crate) const ARG_BASE_URL: &str = "base-url";
pub(crate) const ENV_LOCATE_LATITUDE: &str = "SKYGLOBE_CMDS_LOCATE_LATITUDE";
pub(crate) const ENV_LOCATE_LONGITUDE: &str = "SKYGLOBE_CMDS_LOCATE_LONGITUDE";
pub(crate) const ENV_FORECAST_LATITUDE: &str = "SKYGLOBE_CMDS_FORECAST_LATITUDE";
pub(crate) const ENV_FORECAST_LONGITUDE: &str = "SKYGLOBE_CMDS_FORECAST_LONGITUDE";

/// Run the Skyglobe CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns [`CliError`] when arguments or configuration are invalid, the
/// reference data fails to load, the forecast request fails, or output
/// cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    dispatch(cli, &mut stdout)
}

fn dispatch(cli: Cli, writer: &mut dyn Write) -> Result<(), CliError> {
    match cli.command {
        Command::Locate(args) => locate::run_locate_with(args, writer),
        Command::Countries(args) => countries::run_countries_with(args, writer),
        Command::Forecast(args) => forecast::run_forecast(args, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "skyglobe",
    about = "Resolve coordinates to countries and fetch their weather",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Find the country containing a coordinate.
    Locate(LocateArgs),
    /// List the countries that have boundary data.
    Countries(CountriesArgs),
    /// Fetch the weather forecast for a coordinate.
    Forecast(ForecastArgs),
}

#[cfg(test)]
mod tests;
