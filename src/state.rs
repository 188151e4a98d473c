use std::collections::BTreeMap;

use crate::color::SpeciesColors;
use crate::data::filter::{filtered_indices, FilterCriteria};
use crate::data::model::PenguinDataset;
use crate::data::view::FilteredView;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// The dataset, loaded once at startup and never mutated.
    pub dataset: PenguinDataset,

    /// Current filter selections (slider + species checkboxes).
    pub criteria: FilterCriteria,

    /// Indices of penguins passing the current criteria (cached).
    pub visible_indices: Vec<usize>,

    /// Species → plot colour mapping.
    pub colors: SpeciesColors,

    /// Display-layer substring filters for the data table, per column.
    /// These never reach the pipeline.
    pub table_filters: BTreeMap<String, String>,

    /// Criteria hash of the last recomputation.
    last_key: Option<u64>,
}

impl AppState {
    /// Wire up a freshly loaded dataset with default criteria and compute
    /// the initial view before the first render.
    pub fn new(dataset: PenguinDataset) -> Self {
        let criteria = FilterCriteria::for_dataset(&dataset);
        let visible_indices = filtered_indices(&dataset, &criteria);
        let key = criteria.cache_key();
        AppState {
            colors: SpeciesColors::new(&dataset.species),
            dataset,
            criteria,
            visible_indices,
            table_filters: BTreeMap::new(),
            last_key: Some(key),
        }
    }

    /// Recompute `visible_indices` if the criteria changed since the last
    /// call. Skipping unchanged criteria is purely an optimization; the
    /// recomputation itself is pure and idempotent.
    pub fn refilter(&mut self) {
        let key = self.criteria.cache_key();
        if self.last_key == Some(key) {
            return;
        }
        self.visible_indices = filtered_indices(&self.dataset, &self.criteria);
        self.last_key = Some(key);
    }

    /// The current filtered view, for widgets to read.
    pub fn view(&self) -> FilteredView<'_> {
        FilteredView::new(&self.dataset, &self.visible_indices)
    }

    /// Toggle a single species in the allow-set.
    pub fn toggle_species(&mut self, label: &str) {
        if !self.criteria.species.remove(label) {
            self.criteria.species.insert(label.to_string());
        }
        self.refilter();
    }

    /// Select all known species.
    pub fn select_all_species(&mut self) {
        self.criteria.species = self.dataset.species.iter().cloned().collect();
        self.refilter();
    }

    /// Deselect every species.
    pub fn select_no_species(&mut self) {
        self.criteria.species.clear();
        self.refilter();
    }
}
