//! Error types emitted by the Skyglobe CLI.
//!
//! Keep this error type reasonably small, as every CLI helper returns
//! `Result<_, CliError>`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use skyglobe_core::ForecastError;
use skyglobe_data::DatasetLoadError;
use skyglobe_data::forecast::ProviderBuildError;
use thiserror::Error;

/// Errors emitted by the Skyglobe CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The reference datasets failed to load.
    #[error(transparent)]
    LoadDataset(#[from] DatasetLoadError),
    /// The forecast coordinates or timezone were rejected before any request.
    #[error("invalid forecast request: {0}")]
    InvalidForecastRequest(#[source] ForecastError),
    /// Building the HTTP forecast provider failed.
    #[error("failed to build forecast provider: {0}")]
    BuildForecastProvider(#[from] ProviderBuildError),
    /// The forecast service call failed.
    #[error("failed to fetch forecast: {0}")]
    Forecast(#[source] ForecastError),
    /// Serialising command output to JSON failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
