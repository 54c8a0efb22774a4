//! Country reference records.
//!
//! A [`CountryRecord`] carries the identity of a country and a representative
//! point used for camera focus. Boundary geometry refers to countries by their
//! alpha-3 code; everything downstream of resolution keys on alpha-2.

use geo::Coord;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identity and representative point of a single country.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`. The centroid
/// is an average position and plays no part in containment tests.
///
/// # Examples
///
/// ```
/// use geo::Coord;
/// use skyglobe_core::CountryRecord;
///
/// # fn main() -> Result<(), skyglobe_core::CountryRecordError> {
/// let record = CountryRecord::new("LS", "LSO", "Lesotho", Coord { x: 28.5, y: -29.5 })?;
/// assert_eq!(record.alpha3, "LSO");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CountryRecord {
    /// Two-letter code; the stable key for downstream lookups.
    pub alpha2: String,
    /// Three-letter code joining the record to boundary features.
    pub alpha3: String,
    /// Display name.
    pub name: String,
    /// Average position of the country.
    pub centroid: Coord<f64>,
}

/// Errors returned by [`CountryRecord::new`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CountryRecordError {
    /// The alpha-2 code was not two ASCII alphanumerics.
    #[error("alpha-2 code {code:?} must be two ASCII letters or digits")]
    InvalidAlpha2 {
        /// Code as supplied.
        code: String,
    },
    /// The alpha-3 code was not three ASCII alphanumerics.
    #[error("alpha-3 code {code:?} must be three ASCII letters or digits")]
    InvalidAlpha3 {
        /// Code as supplied.
        code: String,
    },
    /// The display name was blank.
    #[error("country {alpha2} must have a name")]
    EmptyName {
        /// Alpha-2 code of the nameless record.
        alpha2: String,
    },
}

impl CountryRecord {
    /// Validates and constructs a [`CountryRecord`].
    ///
    /// Codes are stored verbatim; the reference list is already upper case.
    pub fn new(
        alpha2: impl Into<String>,
        alpha3: impl Into<String>,
        name: impl Into<String>,
        centroid: Coord<f64>,
    ) -> Result<Self, CountryRecordError> {
        let record = Self {
            alpha2: alpha2.into(),
            alpha3: alpha3.into(),
            name: name.into(),
            centroid,
        };
        if !is_code(&record.alpha2, 2) {
            return Err(CountryRecordError::InvalidAlpha2 {
                code: record.alpha2,
            });
        }
        if !is_code(&record.alpha3, 3) {
            return Err(CountryRecordError::InvalidAlpha3 {
                code: record.alpha3,
            });
        }
        if record.name.trim().is_empty() {
            return Err(CountryRecordError::EmptyName {
                alpha2: record.alpha2,
            });
        }
        Ok(record)
    }
}

fn is_code(code: &str, len: usize) -> bool {
    code.len() == len && code.bytes().all(|byte| byte.is_ascii_alphanumeric())
}
