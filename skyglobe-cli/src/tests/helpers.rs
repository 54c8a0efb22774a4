//! Test helpers for writing small reference datasets to disk.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// South Africa and Lesotho as simple squares, plus New Zealand without any
/// boundary. Lesotho sits inside a hole cut from South Africa.
const COUNTRIES: &str = r#"[
  {"Country": "South Africa", "Alpha-2 code": "ZA", "Alpha-3 code": "ZAF",
   "Latitude (average)": "-29", "Longitude (average)": "24"},
  {"Country": "Lesotho", "Alpha-2 code": "LS", "Alpha-3 code": "LSO",
   "Latitude (average)": "-29.5", "Longitude (average)": "28.5"},
  {"Country": "New Zealand", "Alpha-2 code": "NZ", "Alpha-3 code": "NZL",
   "Latitude (average)": -41, "Longitude (average)": 174}
]"#;

const BOUNDARIES: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {"type": "Feature", "properties": {"ADM0_A3": "ZAF"},
     "geometry": {"type": "Polygon", "coordinates": [
       [[16.0, -35.0], [33.0, -35.0], [33.0, -22.0], [16.0, -22.0], [16.0, -35.0]],
       [[27.0, -30.7], [29.5, -30.7], [29.5, -28.5], [27.0, -28.5], [27.0, -30.7]]
     ]}},
    {"type": "Feature", "properties": {"ADM0_A3": "LSO"},
     "geometry": {"type": "Polygon", "coordinates": [
       [[27.0, -30.7], [29.5, -30.7], [29.5, -28.5], [27.0, -28.5], [27.0, -30.7]]
     ]}}
  ]
}"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write fixture file");
}

/// Temporary data directory holding `countries.json` and
/// `boundaries.geojson`.
#[derive(Debug)]
pub(super) struct DataDir {
    _tmp: TempDir,
    root: Utf8PathBuf,
}

impl DataDir {
    /// Create an empty directory.
    pub(super) fn empty() -> Self {
        let tmp = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
        Self { _tmp: tmp, root }
    }

    /// Create a directory populated with the default reference files.
    pub(super) fn populated() -> Self {
        let dir = Self::empty();
        write_utf8(&dir.countries(), COUNTRIES.as_bytes());
        write_utf8(&dir.boundaries(), BOUNDARIES.as_bytes());
        dir
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn countries(&self) -> Utf8PathBuf {
        self.root.join("countries.json")
    }

    pub(super) fn boundaries(&self) -> Utf8PathBuf {
        self.root.join("boundaries.geojson")
    }
}

/// Parse captured stdout as JSON.
pub(super) fn stdout_json(buffer: &[u8]) -> serde_json::Value {
    serde_json::from_slice(buffer).expect("stdout should hold JSON")
}

/// Serialise parsed arguments as a CLI layer, omitting unset options the way
/// a real invocation leaves them out.
pub(super) fn cli_layer<T: serde::Serialize>(args: &T) -> serde_json::Value {
    let mut value = serde_json::to_value(args).expect("arguments serialise");
    if let Some(fields) = value.as_object_mut() {
        fields.retain(|_, field| !field.is_null());
    }
    value
}
