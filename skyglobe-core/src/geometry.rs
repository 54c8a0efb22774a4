//! Boundary geometry and the even-odd containment test.
//!
//! Rings are [`LineString`]s in WGS84 with `x = longitude` and
//! `y = latitude`. Winding order is neither assumed nor checked: the
//! crossing-number test counts edges, not their direction.
//!
//! Points lying exactly on an edge or vertex resolve to whichever side the
//! floating-point arithmetic lands on. Callers needing edge-exact semantics
//! must not rely on this module for them.

use geo::{BoundingRect, Coord, LineString, MultiPolygon, Polygon, Rect};

/// Return whether `point` lies inside `ring` under the even-odd rule.
///
/// A horizontal ray is cast from `point` towards increasing longitude. An
/// edge counts as a crossing when exactly one endpoint lies strictly north of
/// the point and the edge meets the point's latitude strictly east of it. The
/// ring is treated as closed whether or not its last vertex repeats the first.
///
/// Degenerate rings (fewer than three distinct vertices) enclose no area and
/// report `false` for points off their vertices. Non-finite coordinates never
/// straddle an edge and therefore also report `false`.
///
/// # Examples
///
/// ```
/// use geo::{Coord, LineString};
/// use skyglobe_core::geometry::point_in_ring;
///
/// let ring = LineString::from(vec![(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)]);
/// assert!(point_in_ring(Coord { x: 5.0, y: 5.0 }, &ring));
/// assert!(!point_in_ring(Coord { x: 15.0, y: 15.0 }, &ring));
/// ```
#[must_use]
pub fn point_in_ring(point: Coord<f64>, ring: &LineString<f64>) -> bool {
    let Some(&last) = ring.0.last() else {
        return false;
    };
    let mut previous = last;
    let mut inside = false;
    for &current in &ring.0 {
        if edge_crosses_ray(point, current, previous) {
            inside = !inside;
        }
        previous = current;
    }
    inside
}

#[expect(
    clippy::float_arithmetic,
    reason = "crossing longitude is a linear interpolation along the edge"
)]
fn edge_crosses_ray(point: Coord<f64>, a: Coord<f64>, b: Coord<f64>) -> bool {
    if (a.y > point.y) == (b.y > point.y) {
        return false;
    }
    // Straddling guarantees a.y != b.y, so the division is finite.
    let crossing_x = (b.x - a.x) * (point.y - a.y) / (b.y - a.y) + a.x;
    point.x < crossing_x
}

/// Return whether `point` lies inside `polygon`, honouring its holes.
///
/// The point must be inside the exterior ring and outside every interior
/// ring. Holes are visited in order and the first containing hole settles the
/// answer. Only one level of nesting is modelled: an island inside a hole is
/// not land of the surrounding polygon.
#[must_use]
pub fn point_in_polygon(point: Coord<f64>, polygon: &Polygon<f64>) -> bool {
    point_in_ring(point, polygon.exterior())
        && !polygon
            .interiors()
            .iter()
            .any(|hole| point_in_ring(point, hole))
}

/// Geometry of one boundary feature.
///
/// Parsed once from GeoJSON so that resolution never inspects untyped data.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryGeometry {
    /// A single outer ring with optional holes.
    Polygon(Polygon<f64>),
    /// Independent polygons forming one region, such as a mainland and its
    /// islands.
    MultiPolygon(MultiPolygon<f64>),
}

impl BoundaryGeometry {
    /// Return whether `point` lies inside this geometry.
    ///
    /// Multi-polygon parts are alternatives: membership of any one part is
    /// enough.
    #[must_use]
    pub fn contains_point(&self, point: Coord<f64>) -> bool {
        match self {
            Self::Polygon(polygon) => point_in_polygon(point, polygon),
            Self::MultiPolygon(parts) => parts
                .iter()
                .any(|polygon| point_in_polygon(point, polygon)),
        }
    }

    /// Axis-aligned bounds of all vertices, or `None` when there are none.
    #[must_use]
    pub fn bounding_rect(&self) -> Option<Rect<f64>> {
        match self {
            Self::Polygon(polygon) => polygon.bounding_rect(),
            Self::MultiPolygon(parts) => parts.bounding_rect(),
        }
    }

    /// Number of polygons making up the geometry.
    #[must_use]
    pub fn polygon_count(&self) -> usize {
        match self {
            Self::Polygon(_) => 1,
            Self::MultiPolygon(parts) => parts.0.len(),
        }
    }
}

impl From<Polygon<f64>> for BoundaryGeometry {
    fn from(polygon: Polygon<f64>) -> Self {
        Self::Polygon(polygon)
    }
}

impl From<MultiPolygon<f64>> for BoundaryGeometry {
    fn from(parts: MultiPolygon<f64>) -> Self {
        Self::MultiPolygon(parts)
    }
}

/// A country boundary as published in the reference dataset.
///
/// # Examples
///
/// ```
/// use geo::{Coord, LineString, Polygon};
/// use skyglobe_core::BoundaryFeature;
///
/// let ring = LineString::from(vec![(0.0, 0.0), (0.0, 2.0), (2.0, 2.0), (2.0, 0.0)]);
/// let feature = BoundaryFeature::new("LSO", Polygon::new(ring, Vec::new()));
/// assert!(feature.contains_point(Coord { x: 1.0, y: 1.0 }));
/// assert_eq!(feature.country_ref(), "LSO");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryFeature {
    country_ref: String,
    geometry: BoundaryGeometry,
    bounds: Option<Rect<f64>>,
}

impl BoundaryFeature {
    /// Construct a feature owned by the country with alpha-3 `country_ref`.
    ///
    /// Bounds are computed once here for use by spatial prefilters.
    pub fn new(country_ref: impl Into<String>, geometry: impl Into<BoundaryGeometry>) -> Self {
        let shape: BoundaryGeometry = geometry.into();
        Self {
            country_ref: country_ref.into(),
            bounds: shape.bounding_rect(),
            geometry: shape,
        }
    }

    /// Alpha-3 code of the owning country. May not resolve to any record.
    #[must_use]
    pub fn country_ref(&self) -> &str {
        &self.country_ref
    }

    /// Boundary geometry.
    #[must_use]
    pub const fn geometry(&self) -> &BoundaryGeometry {
        &self.geometry
    }

    /// Precomputed bounds of the geometry.
    #[must_use]
    pub const fn bounds(&self) -> Option<Rect<f64>> {
        self.bounds
    }

    /// Return whether `point` lies inside the feature's geometry.
    #[must_use]
    pub fn contains_point(&self, point: Coord<f64>) -> bool {
        self.geometry.contains_point(point)
    }
}
