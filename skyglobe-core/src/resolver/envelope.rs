//! Resolver backed by an R\*-tree of feature bounding rectangles.

use std::sync::Arc;

use geo::Coord;
use rstar::{AABB, RTree, RTreeObject};

use crate::{BoundaryDataset, CountryRecord};

use super::PointResolver;

/// Bounding rectangle of one attributed feature.
#[derive(Debug, Clone)]
struct FeatureEnvelope {
    position: usize,
    envelope: AABB<[f64; 2]>,
}

impl RTreeObject for FeatureEnvelope {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        self.envelope
    }
}

/// Prefilter features by bounding rectangle before the ring test.
///
/// Only features whose rectangle contains the point are tested, in ascending
/// dataset order, so results match [`LinearResolver`](super::LinearResolver)
/// exactly. Rectangle containment includes the boundary, which keeps the
/// prefilter a superset of the exact test.
///
/// Unattributed features and features without vertices never enter the tree.
#[derive(Debug, Clone)]
pub struct EnvelopeResolver {
    dataset: Arc<BoundaryDataset>,
    index: RTree<FeatureEnvelope>,
}

impl EnvelopeResolver {
    /// Build the rectangle index for `dataset`.
    #[must_use]
    pub fn new(dataset: Arc<BoundaryDataset>) -> Self {
        let entries: Vec<FeatureEnvelope> = dataset
            .attributed_features()
            .filter_map(|(position, feature, _)| {
                feature.bounds().map(|bounds| FeatureEnvelope {
                    position,
                    envelope: AABB::from_corners(
                        [bounds.min().x, bounds.min().y],
                        [bounds.max().x, bounds.max().y],
                    ),
                })
            })
            .collect();
        log::debug!("indexed {} feature envelopes", entries.len());
        Self {
            dataset,
            index: RTree::bulk_load(entries),
        }
    }

    /// Number of features held in the rectangle index.
    #[must_use]
    pub fn indexed_len(&self) -> usize {
        self.index.size()
    }

    fn candidates(&self, point: Coord<f64>) -> Vec<usize> {
        let probe = AABB::from_point([point.x, point.y]);
        let mut positions: Vec<usize> = self
            .index
            .locate_in_envelope_intersecting(&probe)
            .map(|entry| entry.position)
            .collect();
        // The tree yields entries in spatial order; first-match semantics
        // need dataset order.
        positions.sort_unstable();
        positions
    }
}

impl PointResolver for EnvelopeResolver {
    fn locate(&self, point: Coord<f64>) -> Option<&CountryRecord> {
        let candidates = self.candidates(point);
        let found = candidates.into_iter().find_map(|position| {
            let feature = self.dataset.all_features().get(position)?;
            if feature.contains_point(point) {
                self.dataset.owner_of(position)
            } else {
                None
            }
        });
        log::debug!(
            "envelope index resolved ({}, {}) to {:?}",
            point.y,
            point.x,
            found.map(|country| country.alpha2.as_str())
        );
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{record, scenario_dataset, square};
    use crate::{BoundaryFeature, LinearResolver};
    use rstest::rstest;

    #[rstest]
    fn skips_unattributed_features_when_indexing() {
        let resolver = EnvelopeResolver::new(Arc::new(scenario_dataset()));
        assert_eq!(resolver.indexed_len(), 2);
    }

    #[rstest]
    fn overlapping_features_resolve_in_dataset_order() {
        // The second feature's rectangle is smaller, so a spatial traversal
        // could reach it first; dataset order must still win.
        let dataset = BoundaryDataset::new(
            vec![record("AA", "AAA"), record("BB", "BBB")],
            vec![
                BoundaryFeature::new("AAA", square(0.0, 0.0, 10.0, 10.0)),
                BoundaryFeature::new("BBB", square(4.0, 4.0, 6.0, 6.0)),
            ],
        )
        .expect("valid dataset");
        let shared = Arc::new(dataset);
        let indexed = EnvelopeResolver::new(Arc::clone(&shared));
        let linear = LinearResolver::new(shared);
        assert_eq!(indexed.resolve_country(5.0, 5.0), Some("AA"));
        assert_eq!(linear.resolve_country(5.0, 5.0), Some("AA"));
    }

    #[rstest]
    fn point_inside_rectangle_but_outside_ring_is_rejected() {
        let dataset = BoundaryDataset::new(
            vec![record("TT", "TTT")],
            vec![BoundaryFeature::new(
                "TTT",
                geo::Polygon::new(
                    geo::LineString::from(vec![(0.0, 0.0), (10.0, 0.0), (0.0, 10.0)]),
                    Vec::new(),
                ),
            )],
        )
        .expect("valid dataset");
        let resolver = EnvelopeResolver::new(Arc::new(dataset));
        assert_eq!(resolver.resolve_country(1.0, 1.0), Some("TT"));
        assert_eq!(resolver.resolve_country(9.0, 9.0), None);
    }
}
