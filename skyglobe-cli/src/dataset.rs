//! Resolution and validation of the reference dataset paths.

use camino::{Utf8Path, Utf8PathBuf};
use skyglobe_core::BoundaryDataset;
use skyglobe_data::fs::file_is_file;
use skyglobe_data::load_dataset;

use crate::{ARG_BOUNDARIES, ARG_COUNTRIES, CliError};

/// File name of the country list inside the data directory.
pub(crate) const DEFAULT_COUNTRIES_FILE: &str = "countries.json";
/// File name of the boundary collection inside the data directory.
pub(crate) const DEFAULT_BOUNDARIES_FILE: &str = "boundaries.geojson";

/// Locations of the two reference files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DatasetPaths {
    pub(crate) countries: Utf8PathBuf,
    pub(crate) boundaries: Utf8PathBuf,
}

impl DatasetPaths {
    /// Explicit paths win; otherwise the default file names are looked up in
    /// `data_dir`, which itself defaults to the working directory.
    pub(crate) fn resolve(
        data_dir: Option<Utf8PathBuf>,
        countries: Option<Utf8PathBuf>,
        boundaries: Option<Utf8PathBuf>,
    ) -> Self {
        let dir = data_dir.unwrap_or_else(|| Utf8PathBuf::from("."));
        Self {
            countries: countries.unwrap_or_else(|| dir.join(DEFAULT_COUNTRIES_FILE)),
            boundaries: boundaries.unwrap_or_else(|| dir.join(DEFAULT_BOUNDARIES_FILE)),
        }
    }

    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.countries, ARG_COUNTRIES)?;
        require_existing(&self.boundaries, ARG_BOUNDARIES)?;
        Ok(())
    }

    /// Validate both paths, then load and join the datasets.
    pub(crate) fn load(&self) -> Result<BoundaryDataset, CliError> {
        self.validate_sources()?;
        Ok(load_dataset(&self.countries, &self.boundaries)?)
    }
}

fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}
