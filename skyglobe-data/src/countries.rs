//! Country attribute list loader.
//!
//! The list is a JSON array of objects keyed by human-readable column names
//! (`"Alpha-2 code"`, `"Latitude (average)"`, ...). Published copies disagree
//! on whether the average coordinates are numbers or numeric strings, so both
//! are accepted.

use std::io::{BufReader, Read};

use camino::Utf8Path;
use geo::Coord;
use serde::Deserialize;
use skyglobe_core::CountryRecord;

use crate::DatasetLoadError;
use crate::fs::open_utf8_file;

const FIELD_LATITUDE: &str = "Latitude (average)";
const FIELD_LONGITUDE: &str = "Longitude (average)";

#[derive(Debug, Deserialize)]
struct RawCountry {
    #[serde(rename = "Country")]
    name: String,
    #[serde(rename = "Alpha-2 code")]
    alpha2: String,
    #[serde(rename = "Alpha-3 code")]
    alpha3: String,
    #[serde(rename = "Latitude (average)")]
    latitude: Ordinate,
    #[serde(rename = "Longitude (average)")]
    longitude: Ordinate,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Ordinate {
    Number(f64),
    Text(String),
}

impl Ordinate {
    /// Numeric value, or the raw text when it does not parse to a finite number.
    fn value(&self) -> Result<f64, String> {
        match self {
            Self::Number(value) => Ok(*value),
            Self::Text(text) => text
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .ok_or_else(|| text.clone()),
        }
    }
}

/// Load the country attribute list at `path`.
///
/// Codes and names are trimmed before validation.
///
/// # Errors
///
/// Returns [`DatasetLoadError::Open`] or [`DatasetLoadError::Parse`] when the
/// file cannot be read as a JSON array of country objects, and
/// [`DatasetLoadError::InvalidOrdinate`] or [`DatasetLoadError::InvalidCountry`]
/// for entries with unusable values.
pub fn load_countries(path: &Utf8Path) -> Result<Vec<CountryRecord>, DatasetLoadError> {
    let file = open_utf8_file(path).map_err(|source| DatasetLoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_countries(BufReader::new(file), path)
}

/// Decode a country list from `reader`; `path` is used for error context.
///
/// # Errors
///
/// As for [`load_countries`], minus the open failure.
pub fn read_countries<R: Read>(
    reader: R,
    path: &Utf8Path,
) -> Result<Vec<CountryRecord>, DatasetLoadError> {
    let raw: Vec<RawCountry> =
        serde_json::from_reader(reader).map_err(|source| DatasetLoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    raw.into_iter()
        .enumerate()
        .map(|(index, entry)| convert_country(entry, index, path))
        .collect()
}

fn convert_country(
    entry: RawCountry,
    index: usize,
    path: &Utf8Path,
) -> Result<CountryRecord, DatasetLoadError> {
    let numeric = |field: &'static str, raw: &Ordinate| {
        raw.value()
            .map_err(|value| DatasetLoadError::InvalidOrdinate {
                path: path.to_path_buf(),
                index,
                field,
                value,
            })
    };
    let latitude = numeric(FIELD_LATITUDE, &entry.latitude)?;
    let longitude = numeric(FIELD_LONGITUDE, &entry.longitude)?;

    CountryRecord::new(
        entry.alpha2.trim(),
        entry.alpha3.trim(),
        entry.name.trim(),
        Coord {
            x: longitude,
            y: latitude,
        },
    )
    .map_err(|source| DatasetLoadError::InvalidCountry {
        path: path.to_path_buf(),
        index,
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use skyglobe_core::CountryRecordError;

    const PATH: &str = "countries.json";

    fn read(json: &str) -> Result<Vec<CountryRecord>, DatasetLoadError> {
        read_countries(json.as_bytes(), Utf8Path::new(PATH))
    }

    #[rstest]
    fn reads_numeric_and_string_ordinates() {
        let countries = read(
            r#"[
                {"Country": "Lesotho", "Alpha-2 code": "LS", "Alpha-3 code": "LSO",
                 "Numeric code": 426, "Latitude (average)": -29.5, "Longitude (average)": 28.5},
                {"Country": " Australia ", "Alpha-2 code": " AU", "Alpha-3 code": "AUS ",
                 "Latitude (average)": " -27 ", "Longitude (average)": "133"}
            ]"#,
        )
        .expect("valid list");

        let [lesotho, australia] = countries.as_slice() else {
            panic!("expected two countries, got {countries:?}");
        };
        assert_eq!(lesotho.alpha3, "LSO");
        assert_eq!(lesotho.centroid, Coord { x: 28.5, y: -29.5 });
        assert_eq!(australia.alpha2, "AU");
        assert_eq!(australia.alpha3, "AUS");
        assert_eq!(australia.name, "Australia");
        assert_eq!(australia.centroid, Coord { x: 133.0, y: -27.0 });
    }

    #[rstest]
    #[case::word("\"north\"")]
    #[case::empty("\"\"")]
    #[case::not_a_number("\"NaN\"")]
    fn rejects_non_numeric_ordinates(#[case] latitude: &str) {
        let json = format!(
            r#"[{{"Country": "Nowhere", "Alpha-2 code": "NW", "Alpha-3 code": "NWH",
                 "Latitude (average)": {latitude}, "Longitude (average)": 0}}]"#
        );
        let err = read(&json).expect_err("bad ordinate");
        assert!(
            matches!(
                err,
                DatasetLoadError::InvalidOrdinate { index: 0, field: FIELD_LATITUDE, .. }
            ),
            "unexpected error: {err:?}"
        );
    }

    #[rstest]
    fn reports_invalid_codes_with_position() {
        let err = read(
            r#"[
                {"Country": "Lesotho", "Alpha-2 code": "LS", "Alpha-3 code": "LSO",
                 "Latitude (average)": 0, "Longitude (average)": 0},
                {"Country": "Broken", "Alpha-2 code": "BRK", "Alpha-3 code": "BRK",
                 "Latitude (average)": 0, "Longitude (average)": 0}
            ]"#,
        )
        .expect_err("invalid alpha-2");
        match err {
            DatasetLoadError::InvalidCountry {
                index,
                source: CountryRecordError::InvalidAlpha2 { code },
                ..
            } => {
                assert_eq!(index, 1);
                assert_eq!(code, "BRK");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[rstest]
    #[case::object(r#"{"Country": "Lesotho"}"#)]
    #[case::missing_key(r#"[{"Country": "Lesotho", "Alpha-2 code": "LS"}]"#)]
    #[case::truncated("[")]
    fn malformed_json_is_a_parse_error(#[case] json: &str) {
        let err = read(json).expect_err("malformed list");
        match err {
            DatasetLoadError::Parse { path, .. } => assert_eq!(path, PATH),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
