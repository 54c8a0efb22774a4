//! JSON shapes printed by the CLI.

use std::io::Write;

use serde::Serialize;
use skyglobe_core::CountryRecord;

use crate::CliError;

/// Country as printed by `locate` and `countries`.
#[derive(Debug, Serialize, PartialEq)]
pub(crate) struct CountrySummary<'a> {
    pub(crate) alpha2: &'a str,
    pub(crate) alpha3: &'a str,
    pub(crate) name: &'a str,
    pub(crate) centroid: Centroid,
}

/// Average coordinate of a country, latitude first as users read it.
#[derive(Debug, Serialize, PartialEq)]
pub(crate) struct Centroid {
    pub(crate) lat: f64,
    pub(crate) lng: f64,
}

impl<'a> From<&'a CountryRecord> for CountrySummary<'a> {
    fn from(record: &'a CountryRecord) -> Self {
        Self {
            alpha2: &record.alpha2,
            alpha3: &record.alpha3,
            name: &record.name,
            centroid: Centroid {
                lat: record.centroid.y,
                lng: record.centroid.x,
            },
        }
    }
}

/// Write `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<T: Serialize + ?Sized>(
    writer: &mut dyn Write,
    value: &T,
) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}
