//! Countries command implementation for the Skyglobe CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::dataset::DatasetPaths;
use crate::output::{CountrySummary, write_json};
use crate::{ARG_ALL, ARG_BOUNDARIES, ARG_COUNTRIES, ARG_DATA_DIR, CliError};

/// CLI arguments for the `countries` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "countries",
    long_about = "List countries in dataset order. By default only countries \
                  with at least one boundary are listed, as those are the \
                  ones a map can display; pass --all for the full country \
                  list.",
    about = "List the countries that have boundary data"
)]
#[ortho_config(prefix = "SKYGLOBE")]
pub(crate) struct CountriesArgs {
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
    /// Include countries without any boundary.
    #[arg(
        long = ARG_ALL,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_name = "bool"
    )]
    #[serde(default)]
    pub(crate) all: Option<bool>,
}

/// Resolved `countries` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CountriesConfig {
    pub(crate) paths: DatasetPaths,
    pub(crate) all: bool,
}

impl From<CountriesArgs> for CountriesConfig {
    fn from(args: CountriesArgs) -> Self {
        Self {
            paths: DatasetPaths::resolve(args.data_dir, args.countries, args.boundaries),
            all: args.all.unwrap_or(false),
        }
    }
}

pub(crate) fn run_countries_with(
    args: CountriesArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    execute_countries(&CountriesConfig::from(merged), writer)
}

pub(crate) fn execute_countries(
    config: &CountriesConfig,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let dataset = config.paths.load()?;
    let listed: Vec<CountrySummary<'_>> = if config.all {
        dataset.countries().iter().map(CountrySummary::from).collect()
    } else {
        dataset.mapped_countries().map(CountrySummary::from).collect()
    };
    write_json(writer, &listed)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<CountriesConfig, CliError> {
    let merged = CountriesArgs::merge_from_layers(layers).map_err(CliError::from)?;
    Ok(CountriesConfig::from(merged))
}
