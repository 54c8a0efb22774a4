//! In-memory index over the country and boundary reference datasets.
//!
//! A [`BoundaryDataset`] is built once at start-up and never mutated. It
//! resolves the alpha-3 join between boundary features and country records
//! up front, so resolvers never perform string lookups per query.

use std::collections::HashMap;

use thiserror::Error;

use crate::{BoundaryFeature, CountryRecord};

/// Errors returned by [`BoundaryDataset::new`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DatasetError {
    /// Two country records share an alpha-2 code.
    #[error("alpha-2 code {code} appears more than once in the country list")]
    DuplicateAlpha2 {
        /// The repeated code.
        code: String,
    },
    /// Two country records share an alpha-3 code.
    #[error("alpha-3 code {code} appears more than once in the country list")]
    DuplicateAlpha3 {
        /// The repeated code.
        code: String,
    },
}

/// Read-only country and boundary reference data.
///
/// Features keep their dataset order; resolvers rely on that order to pick
/// the first match deterministically.
///
/// # Examples
///
/// ```
/// use geo::{Coord, LineString, Polygon};
/// use skyglobe_core::{BoundaryDataset, BoundaryFeature, CountryRecord};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let lesotho = CountryRecord::new("LS", "LSO", "Lesotho", Coord { x: 28.2, y: -29.6 })?;
/// let ring = LineString::from(vec![(27.0, -30.7), (27.0, -28.6), (29.4, -28.6), (29.4, -30.7)]);
/// let feature = BoundaryFeature::new("LSO", Polygon::new(ring, Vec::new()));
/// let dataset = BoundaryDataset::new(vec![lesotho], vec![feature])?;
///
/// assert_eq!(dataset.lookup_by_alpha3("LSO").map(|c| c.alpha2.as_str()), Some("LS"));
/// assert_eq!(dataset.all_features().len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct BoundaryDataset {
    countries: Vec<CountryRecord>,
    features: Vec<BoundaryFeature>,
    by_alpha2: HashMap<String, usize>,
    by_alpha3: HashMap<String, usize>,
    /// Country position for each feature, `None` when the join fails.
    owners: Vec<Option<usize>>,
    /// Whether each country owns at least one feature.
    mapped: Vec<bool>,
}

impl BoundaryDataset {
    /// Index `countries` and attribute each of `features` to its country.
    ///
    /// Features whose alpha-3 reference matches no record are kept but left
    /// unattributed; resolvers skip them.
    pub fn new(
        countries: Vec<CountryRecord>,
        features: Vec<BoundaryFeature>,
    ) -> Result<Self, DatasetError> {
        let mut by_alpha2 = HashMap::with_capacity(countries.len());
        let mut by_alpha3 = HashMap::with_capacity(countries.len());
        for (position, country) in countries.iter().enumerate() {
            if by_alpha2
                .insert(country.alpha2.to_ascii_uppercase(), position)
                .is_some()
            {
                return Err(DatasetError::DuplicateAlpha2 {
                    code: country.alpha2.clone(),
                });
            }
            if by_alpha3.insert(country.alpha3.clone(), position).is_some() {
                return Err(DatasetError::DuplicateAlpha3 {
                    code: country.alpha3.clone(),
                });
            }
        }

        let owners: Vec<Option<usize>> = features
            .iter()
            .map(|feature| by_alpha3.get(feature.country_ref()).copied())
            .collect();

        let mut mapped = vec![false; countries.len()];
        for &owner in owners.iter().flatten() {
            if let Some(flag) = mapped.get_mut(owner) {
                *flag = true;
            }
        }

        let unattributed = owners.iter().filter(|owner| owner.is_none()).count();
        if unattributed > 0 {
            log::debug!(
                "{unattributed} of {} boundary features reference unknown countries",
                features.len()
            );
        }

        Ok(Self {
            countries,
            features,
            by_alpha2,
            by_alpha3,
            owners,
            mapped,
        })
    }

    /// Find a country by its alpha-3 code. Matching is exact, as for the
    /// boundary join.
    #[must_use]
    pub fn lookup_by_alpha3(&self, code: &str) -> Option<&CountryRecord> {
        self.by_alpha3
            .get(code)
            .and_then(|&position| self.countries.get(position))
    }

    /// Find a country by its alpha-2 code, ignoring ASCII case.
    ///
    /// Alpha-2 codes arrive from user-facing selections, so `"au"` and `"AU"`
    /// find the same record.
    #[must_use]
    pub fn lookup_by_alpha2(&self, code: &str) -> Option<&CountryRecord> {
        self.by_alpha2
            .get(&code.to_ascii_uppercase())
            .and_then(|&position| self.countries.get(position))
    }

    /// All boundary features in dataset order.
    #[must_use]
    pub fn all_features(&self) -> &[BoundaryFeature] {
        &self.features
    }

    /// All country records in dataset order.
    #[must_use]
    pub fn countries(&self) -> &[CountryRecord] {
        &self.countries
    }

    /// Country owning `feature`, if its alpha-3 reference resolves.
    #[must_use]
    pub fn country_for(&self, feature: &BoundaryFeature) -> Option<&CountryRecord> {
        self.lookup_by_alpha3(feature.country_ref())
    }

    /// Country owning the feature at `position` in [`Self::all_features`].
    #[must_use]
    pub fn owner_of(&self, position: usize) -> Option<&CountryRecord> {
        self.owners
            .get(position)
            .copied()
            .flatten()
            .and_then(|owner| self.countries.get(owner))
    }

    /// Attributed features with their positions and owners, in dataset order.
    pub fn attributed_features(
        &self,
    ) -> impl Iterator<Item = (usize, &BoundaryFeature, &CountryRecord)> + '_ {
        self.features
            .iter()
            .enumerate()
            .filter_map(|(position, feature)| {
                self.owner_of(position)
                    .map(|country| (position, feature, country))
            })
    }

    /// Countries owning at least one boundary feature, in dataset order.
    ///
    /// These are the countries a map can display and select.
    pub fn mapped_countries(&self) -> impl Iterator<Item = &CountryRecord> + '_ {
        self.countries
            .iter()
            .zip(&self.mapped)
            .filter(|&(_, &mapped)| mapped)
            .map(|(country, _)| country)
    }

    /// Features whose alpha-3 reference matches no country record.
    pub fn unattributed_features(&self) -> impl Iterator<Item = &BoundaryFeature> + '_ {
        self.features
            .iter()
            .zip(&self.owners)
            .filter(|(_, owner)| owner.is_none())
            .map(|(feature, _)| feature)
    }
}
