//! GeoJSON boundary collection loader.
//!
//! Only the subset of GeoJSON the boundary datasets use is understood: a
//! `FeatureCollection` whose features carry an `ADM0_A3` property and a
//! `Polygon` or `MultiPolygon` geometry. Positions are `[lng, lat, ...]`;
//! altitude and any further ordinates are dropped.

use std::io::{BufReader, Read};

use camino::Utf8Path;
use geo::{Coord, LineString, MultiPolygon, Polygon};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use skyglobe_core::{BoundaryFeature, BoundaryGeometry};

use crate::DatasetLoadError;
use crate::error::GeometryIssue;
use crate::fs::open_utf8_file;

const FEATURE_COLLECTION: &str = "FeatureCollection";

type RawRing = Vec<Vec<f64>>;
type RawPolygon = Vec<RawRing>;

#[derive(Debug, Deserialize)]
struct RawCollection {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    features: Vec<RawFeature>,
}

#[derive(Debug, Deserialize)]
struct RawFeature {
    #[serde(default)]
    properties: Option<RawProperties>,
    #[serde(default)]
    geometry: Option<RawGeometry>,
}

#[derive(Debug, Deserialize)]
struct RawProperties {
    #[serde(rename = "ADM0_A3")]
    adm0_a3: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawGeometry {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    coordinates: serde_json::Value,
}

/// Load the boundary `FeatureCollection` at `path`, preserving feature order.
///
/// # Errors
///
/// Returns [`DatasetLoadError::Open`] or [`DatasetLoadError::Parse`] when the
/// file cannot be read as GeoJSON, [`DatasetLoadError::NotFeatureCollection`]
/// for other top-level types, [`DatasetLoadError::MissingCountryRef`] for
/// features without `ADM0_A3`, and [`DatasetLoadError::InvalidGeometry`] for
/// geometry that cannot be converted.
pub fn load_boundaries(path: &Utf8Path) -> Result<Vec<BoundaryFeature>, DatasetLoadError> {
    let file = open_utf8_file(path).map_err(|source| DatasetLoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_boundaries(BufReader::new(file), path)
}

/// Decode a boundary collection from `reader`; `path` is used for error
/// context.
///
/// # Errors
///
/// As for [`load_boundaries`], minus the open failure.
pub fn read_boundaries<R: Read>(
    reader: R,
    path: &Utf8Path,
) -> Result<Vec<BoundaryFeature>, DatasetLoadError> {
    let collection: RawCollection =
        serde_json::from_reader(reader).map_err(|source| DatasetLoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    if collection.kind != FEATURE_COLLECTION {
        return Err(DatasetLoadError::NotFeatureCollection {
            path: path.to_path_buf(),
            found: collection.kind,
        });
    }

    collection
        .features
        .into_iter()
        .enumerate()
        .map(|(feature, raw)| convert_feature(raw, feature, path))
        .collect()
}

fn convert_feature(
    raw: RawFeature,
    feature: usize,
    path: &Utf8Path,
) -> Result<BoundaryFeature, DatasetLoadError> {
    let country_ref = raw
        .properties
        .and_then(|properties| properties.adm0_a3)
        .ok_or_else(|| DatasetLoadError::MissingCountryRef {
            path: path.to_path_buf(),
            feature,
        })?;
    let geometry = raw
        .geometry
        .ok_or(GeometryIssue::Missing)
        .and_then(convert_geometry)
        .map_err(|issue| DatasetLoadError::InvalidGeometry {
            path: path.to_path_buf(),
            feature,
            issue,
        })?;
    Ok(BoundaryFeature::new(country_ref, geometry))
}

fn convert_geometry(raw: RawGeometry) -> Result<BoundaryGeometry, GeometryIssue> {
    match raw.kind.as_str() {
        "Polygon" => {
            let rings: RawPolygon = decode(raw.coordinates)?;
            convert_polygon(rings).map(BoundaryGeometry::Polygon)
        }
        "MultiPolygon" => {
            let parts: Vec<RawPolygon> = decode(raw.coordinates)?;
            parts
                .into_iter()
                .map(convert_polygon)
                .collect::<Result<Vec<_>, _>>()
                .map(|polygons| BoundaryGeometry::MultiPolygon(MultiPolygon::new(polygons)))
        }
        _ => Err(GeometryIssue::UnsupportedType { kind: raw.kind }),
    }
}

fn decode<T: DeserializeOwned>(coordinates: serde_json::Value) -> Result<T, GeometryIssue> {
    serde_json::from_value(coordinates).map_err(|err| GeometryIssue::Coordinates {
        message: err.to_string(),
    })
}

/// The first ring is the outer boundary; the rest are holes.
fn convert_polygon(rings: RawPolygon) -> Result<Polygon<f64>, GeometryIssue> {
    let mut remaining = rings.into_iter();
    let exterior = remaining
        .next()
        .ok_or(GeometryIssue::PolygonWithoutRings)
        .and_then(convert_ring)?;
    let interiors = remaining.map(convert_ring).collect::<Result<Vec<_>, _>>()?;
    Ok(Polygon::new(exterior, interiors))
}

fn convert_ring(ring: RawRing) -> Result<LineString<f64>, GeometryIssue> {
    ring.iter()
        .map(|position| match position.as_slice() {
            [x, y, ..] => Ok(Coord { x: *x, y: *y }),
            short => Err(GeometryIssue::ShortPosition {
                ordinates: short.len(),
            }),
        })
        .collect::<Result<Vec<_>, _>>()
        .map(LineString::from)
}
