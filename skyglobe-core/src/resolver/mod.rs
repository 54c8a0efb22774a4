//! Map a coordinate to the country whose boundary contains it.
//!
//! [`PointResolver`] is the query surface consumed by map-click and
//! geolocation handlers. Two implementations share one contract:
//!
//! - [`LinearResolver`] scans every attributed feature in dataset order.
//! - [`EnvelopeResolver`] prefilters features with an R\*-tree of bounding
//!   rectangles and then applies the same test in the same order.
//!
//! Both return the first feature in dataset order whose geometry contains the
//! point, so they agree on every input. A point inside no feature (open
//! ocean, out-of-range or non-finite coordinates) resolves to `None`.

mod envelope;
mod linear;

pub use envelope::EnvelopeResolver;
pub use linear::LinearResolver;

use geo::Coord;

use crate::CountryRecord;

/// Resolve coordinates to countries.
///
/// Implementations are pure: repeated queries against the same dataset return
/// the same answer, and no state changes between calls.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use geo::{Coord, LineString, Polygon};
/// use skyglobe_core::{BoundaryDataset, BoundaryFeature, CountryRecord, LinearResolver, PointResolver};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let record = CountryRecord::new("AA", "AAA", "Squareland", Coord { x: 5.0, y: 5.0 })?;
/// let ring = LineString::from(vec![(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)]);
/// let feature = BoundaryFeature::new("AAA", Polygon::new(ring, Vec::new()));
/// let resolver = LinearResolver::new(Arc::new(BoundaryDataset::new(vec![record], vec![feature])?));
///
/// assert_eq!(resolver.resolve_country(5.0, 5.0), Some("AA"));
/// assert_eq!(resolver.resolve_country(15.0, 15.0), None);
/// # Ok(())
/// # }
/// ```
pub trait PointResolver {
    /// Return the country containing `point` (`x = longitude`,
    /// `y = latitude`), or `None` when no attributed feature contains it.
    fn locate(&self, point: Coord<f64>) -> Option<&CountryRecord>;

    /// Return the alpha-2 code of the country at (`lat`, `lng`).
    ///
    /// Inputs outside `[-90, 90]` and `[-180, 180]` are not rejected; they
    /// fail to match any boundary and yield `None`.
    fn resolve_country(&self, lat: f64, lng: f64) -> Option<&str> {
        self.locate(Coord { x: lng, y: lat })
            .map(|country| country.alpha2.as_str())
    }
}
