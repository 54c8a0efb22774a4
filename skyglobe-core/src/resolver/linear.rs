//! Linear-scan resolver.

use std::sync::Arc;

use geo::Coord;

use crate::{BoundaryDataset, CountryRecord};

use super::PointResolver;

/// Scan every attributed feature in dataset order.
///
/// Each query costs `O(F · V)` for `F` features of `V` vertices. That is fine
/// for one query per user interaction; bulk callers should prefer
/// [`EnvelopeResolver`](super::EnvelopeResolver).
#[derive(Debug, Clone)]
pub struct LinearResolver {
    dataset: Arc<BoundaryDataset>,
}

impl LinearResolver {
    /// Resolve against `dataset`.
    #[must_use]
    pub const fn new(dataset: Arc<BoundaryDataset>) -> Self {
        Self { dataset }
    }
}

impl PointResolver for LinearResolver {
    fn locate(&self, point: Coord<f64>) -> Option<&CountryRecord> {
        let found = self
            .dataset
            .attributed_features()
            .find(|(_, feature, _)| feature.contains_point(point))
            .map(|(_, _, country)| country);
        log::debug!(
            "linear scan resolved ({}, {}) to {:?}",
            point.y,
            point.x,
            found.map(|country| country.alpha2.as_str())
        );
        found
    }
}
