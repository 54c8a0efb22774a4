//! Locate command implementation for the Skyglobe CLI.

use std::io::Write;
use std::sync::Arc;

use camino::Utf8PathBuf;
use clap::Parser;
use geo::Coord;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use skyglobe_core::{EnvelopeResolver, LinearResolver, PointResolver};

use crate::dataset::DatasetPaths;
use crate::output::{CountrySummary, write_json};
use crate::{
    ARG_BOUNDARIES, ARG_COUNTRIES, ARG_DATA_DIR, ARG_LATITUDE, ARG_LINEAR, ARG_LONGITUDE,
    CliError, ENV_LOCATE_LATITUDE, ENV_LOCATE_LONGITUDE,
};

/// CLI arguments for the `locate` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "locate",
    long_about = "Resolve a latitude/longitude to the country whose boundary \
                  contains it. Boundaries are read from a GeoJSON \
                  FeatureCollection and joined to the country list by their \
                  ADM0_A3 code. Prints JSON; `country` is null when no \
                  boundary contains the point.",
    about = "Find the country containing a coordinate"
)]
#[ortho_config(prefix = "SKYGLOBE")]
pub(crate) struct LocateArgs {
    /// Latitude in degrees, positive north.
    #[arg(value_name = "lat", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) latitude: Option<f64>,
    /// Longitude in degrees, positive east.
    #[arg(value_name = "lng", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) longitude: Option<f64>,
    /// Directory containing `countries.json` and `boundaries.geojson`.
    #[arg(long = ARG_DATA_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) data_dir: Option<Utf8PathBuf>,
    /// Override the path to the country list.
    #[arg(long = ARG_COUNTRIES, value_name = "path")]
    #[serde(default)]
    pub(crate) countries: Option<Utf8PathBuf>,
    /// Override the path to the boundary collection.
    #[arg(long = ARG_BOUNDARIES, value_name = "path")]
    #[serde(default)]
    pub(crate) boundaries: Option<Utf8PathBuf>,
    /// Scan every boundary instead of prefiltering with the spatial index.
    #[arg(
        long = ARG_LINEAR,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_name = "bool"
    )]
    #[serde(default)]
    pub(crate) linear: Option<bool>,
}

impl LocateArgs {
    pub(crate) fn into_config(self) -> Result<LocateConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        LocateConfig::try_from(merged)
    }
}

/// Resolved `locate` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct LocateConfig {
    pub(crate) latitude: f64,
    pub(crate) longitude: f64,
    pub(crate) paths: DatasetPaths,
    pub(crate) linear: bool,
}

impl TryFrom<LocateArgs> for LocateConfig {
    type Error = CliError;

    fn try_from(args: LocateArgs) -> Result<Self, Self::Error> {
        let latitude = args.latitude.ok_or(CliError::MissingArgument {
            field: ARG_LATITUDE,
            env: ENV_LOCATE_LATITUDE,
        })?;
        let longitude = args.longitude.ok_or(CliError::MissingArgument {
            field: ARG_LONGITUDE,
            env: ENV_LOCATE_LONGITUDE,
        })?;
        Ok(Self {
            latitude,
            longitude,
            paths: DatasetPaths::resolve(args.data_dir, args.countries, args.boundaries),
            linear: args.linear.unwrap_or(false),
        })
    }
}

/// Result printed by `locate`.
#[derive(Debug, Serialize)]
struct LocateOutput<'a> {
    latitude: f64,
    longitude: f64,
    country: Option<CountrySummary<'a>>,
}

pub(crate) fn run_locate_with(args: LocateArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    execute_locate(&config, writer)
}

/// Load the datasets named by `config`, resolve its point and print the
/// answer.
pub(crate) fn execute_locate(
    config: &LocateConfig,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let dataset = Arc::new(config.paths.load()?);
    let resolver: Box<dyn PointResolver> = if config.linear {
        Box::new(LinearResolver::new(dataset))
    } else {
        Box::new(EnvelopeResolver::new(dataset))
    };
    let country = resolver.locate(Coord {
        x: config.longitude,
        y: config.latitude,
    });
    log::info!(
        "({}, {}) resolved to {}",
        config.latitude,
        config.longitude,
        country.map_or("no country", |record| record.alpha2.as_str())
    );

    let output = LocateOutput {
        latitude: config.latitude,
        longitude: config.longitude,
        country: country.map(CountrySummary::from),
    };
    write_json(writer, &output)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<LocateConfig, CliError> {
    let merged = LocateArgs::merge_from_layers(layers).map_err(CliError::from)?;
    LocateConfig::try_from(merged)
}
