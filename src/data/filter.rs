use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

use super::model::{Penguin, PenguinDataset};

// ---------------------------------------------------------------------------
// Filter criteria: the two user-adjustable inputs
// ---------------------------------------------------------------------------

/// Bounds of the body-mass slider, in grams.
pub const MASS_CEILING_MIN: f64 = 2000.0;
pub const MASS_CEILING_MAX: f64 = 6000.0;

/// The current user selection: a body-mass upper bound and the set of
/// species to show. Owned by the control layer, read-only to the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    /// Rows pass only with `body_mass_g` strictly below this value.
    pub mass_ceiling: f64,
    /// Species allow-set. Empty set matches nothing; unknown labels are
    /// harmless and simply match nothing.
    pub species: BTreeSet<String>,
}

impl FilterCriteria {
    /// Defaults for a freshly loaded dataset: all species selected,
    /// ceiling at the slider maximum.
    pub fn for_dataset(dataset: &PenguinDataset) -> Self {
        FilterCriteria {
            mass_ceiling: MASS_CEILING_MAX,
            species: dataset.species.iter().cloned().collect(),
        }
    }

    /// Whether a single row passes both predicates.
    ///
    /// A missing body mass never passes the ceiling test, matching the
    /// source data's semantics where a comparison against NA is false.
    pub fn matches(&self, penguin: &Penguin) -> bool {
        if !self.species.contains(&penguin.species) {
            return false;
        }
        match penguin.body_mass_g {
            Some(mass) => mass < self.mass_ceiling,
            None => false,
        }
    }

    /// Stable hash of the criteria, used to memoize recomputation.
    /// Purely an optimization: [`filtered_indices`] stays the source of truth.
    pub fn cache_key(&self) -> u64 {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        self.mass_ceiling.to_bits().hash(&mut hasher);
        for label in &self.species {
            label.hash(&mut hasher);
        }
        hasher.finish()
    }
}

// ---------------------------------------------------------------------------
// The filtering pipeline
// ---------------------------------------------------------------------------

/// Return indices of penguins that pass the current criteria.
///
/// Pure function of its two inputs: stable (output preserves dataset order),
/// side-effect free, and safe to call repeatedly with unchanged inputs.
/// An empty result is a valid output, not an error.
pub fn filtered_indices(dataset: &PenguinDataset, criteria: &FilterCriteria) -> Vec<usize> {
    dataset
        .penguins
        .iter()
        .enumerate()
        .filter(|(_, p)| criteria.matches(p))
        .map(|(i, _)| i)
        .collect()
}
