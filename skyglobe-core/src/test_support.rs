//! Geometry and dataset builders shared by unit, behaviour and property
//! tests.
//!
//! These helpers panic on invalid input; they exist to keep test fixtures
//! short and are not part of the supported API.

use geo::{Coord, LineString, Polygon};

use crate::{BoundaryDataset, BoundaryFeature, CountryRecord};

/// Axis-aligned square polygon with corners listed as `(lng, lat)`.
///
/// The ring visits `(min_x, min_y)`, `(min_x, max_y)`, `(max_x, max_y)` and
/// `(max_x, min_y)` in that order.
#[must_use]
pub fn square(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Polygon<f64> {
    Polygon::new(square_ring(min_x, min_y, max_x, max_y), Vec::new())
}

/// Square polygon `outer` with a single square hole `hole`.
///
/// Both tuples are `(min_x, min_y, max_x, max_y)`.
#[must_use]
pub fn square_with_hole(outer: (f64, f64, f64, f64), hole: (f64, f64, f64, f64)) -> Polygon<f64> {
    let (ox0, oy0, ox1, oy1) = outer;
    let (hx0, hy0, hx1, hy1) = hole;
    Polygon::new(
        square_ring(ox0, oy0, ox1, oy1),
        vec![square_ring(hx0, hy0, hx1, hy1)],
    )
}

fn square_ring(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> LineString<f64> {
    LineString::from(vec![
        (min_x, min_y),
        (min_x, max_y),
        (max_x, max_y),
        (max_x, min_y),
    ])
}

/// Country record named after its alpha-2 code with a centroid at the origin.
///
/// # Panics
///
/// Panics when either code is malformed.
#[must_use]
#[expect(clippy::expect_used, reason = "test fixtures fail fast on bad codes")]
pub fn record(alpha2: &str, alpha3: &str) -> CountryRecord {
    CountryRecord::new(alpha2, alpha3, alpha2, Coord { x: 0.0, y: 0.0 })
        .expect("test country codes must be well formed")
}

/// Dataset covering the canonical square scenarios.
///
/// - `AA`/`AAA`: square (0,0)-(10,10) with a hole (4,4)-(6,6).
/// - `BB`/`BBB`: squares (20,20)-(22,22) and (50,50)-(52,52).
/// - feature `ZZZ`: square (30,-10)-(40,0) with no country record.
///
/// # Panics
///
/// Panics if the fixture violates dataset invariants.
#[must_use]
#[expect(clippy::expect_used, reason = "test fixtures fail fast")]
pub fn scenario_dataset() -> BoundaryDataset {
    BoundaryDataset::new(
        vec![record("AA", "AAA"), record("BB", "BBB")],
        vec![
            BoundaryFeature::new(
                "AAA",
                square_with_hole((0.0, 0.0, 10.0, 10.0), (4.0, 4.0, 6.0, 6.0)),
            ),
            BoundaryFeature::new(
                "BBB",
                geo::MultiPolygon::new(vec![
                    square(20.0, 20.0, 22.0, 22.0),
                    square(50.0, 50.0, 52.0, 52.0),
                ]),
            ),
            BoundaryFeature::new("ZZZ", square(30.0, -10.0, 40.0, 0.0)),
        ],
    )
    .expect("scenario dataset is valid")
}
