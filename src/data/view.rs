use super::model::{FieldValue, Penguin, PenguinDataset};

// ---------------------------------------------------------------------------
// FilteredView – read accessors over the current filter result
// ---------------------------------------------------------------------------

/// A transient, read-only window over the rows passing the current filter.
/// Borrows the dataset and the cached index list; widgets consume it and
/// never write back.
#[derive(Debug, Clone, Copy)]
pub struct FilteredView<'a> {
    dataset: &'a PenguinDataset,
    indices: &'a [usize],
}

impl<'a> FilteredView<'a> {
    pub fn new(dataset: &'a PenguinDataset, indices: &'a [usize]) -> Self {
        FilteredView { dataset, indices }
    }

    /// Number of rows passing the filter.
    pub fn row_count(&self) -> usize {
        self.indices.len()
    }

    /// Surviving rows in dataset order.
    pub fn records(&self) -> impl Iterator<Item = &'a Penguin> + '_ {
        self.indices.iter().map(|&i| &self.dataset.penguins[i])
    }

    /// Arithmetic mean of a numeric column over the view.
    ///
    /// Rows where the column is missing are skipped. Returns `None` when no
    /// row contributes a value; callers must render a placeholder rather
    /// than a number. Never returns NaN.
    pub fn mean(&self, column: &str) -> Option<f64> {
        let mut sum = 0.0;
        let mut n = 0usize;
        for penguin in self.records() {
            if let Some(v) = penguin.numeric_field(column) {
                sum += v;
                n += 1;
            }
        }
        if n == 0 {
            None
        } else {
            Some(sum / n as f64)
        }
    }

    /// The view restricted to the named columns, row-major, for tabular
    /// display. Unknown column names yield `Null` cells.
    pub fn project(&self, columns: &[&str]) -> Vec<Vec<FieldValue>> {
        self.records()
            .map(|p| columns.iter().map(|c| p.field(c)).collect())
            .collect()
    }

    /// Partition the view into per-species row groups, in dataset species
    /// order. Species with no surviving rows yield empty groups.
    pub fn group_by_species(&self) -> Vec<(&'a str, Vec<&'a Penguin>)> {
        self.dataset
            .species
            .iter()
            .map(|label| {
                let rows: Vec<&Penguin> = self
                    .records()
                    .filter(|p| p.species == *label)
                    .collect();
                (label.as_str(), rows)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{filtered_indices, FilterCriteria};
    use std::collections::BTreeMap;

    fn penguin(species: &str, mass: f64, bill_length: Option<f64>) -> Penguin {
        Penguin {
            species: species.to_string(),
            island: "Biscoe".to_string(),
            bill_length_mm: bill_length,
            bill_depth_mm: Some(17.0),
            body_mass_g: Some(mass),
            extra: BTreeMap::new(),
        }
    }

    fn dataset() -> PenguinDataset {
        PenguinDataset::from_penguins(
            vec![
                penguin("Adelie", 3000.0, Some(39.0)),
                penguin("Gentoo", 5000.0, Some(47.0)),
                penguin("Chinstrap", 3500.0, Some(49.0)),
            ],
            Vec::new(),
        )
    }

    fn criteria(ceiling: f64, species: &[&str]) -> FilterCriteria {
        FilterCriteria {
            mass_ceiling: ceiling,
            species: species.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn reference_scenario_count_and_mean() {
        let ds = dataset();
        let crit = criteria(3600.0, &["Adelie", "Chinstrap"]);
        let indices = filtered_indices(&ds, &crit);
        let view = FilteredView::new(&ds, &indices);

        assert_eq!(view.row_count(), 2);
        assert_eq!(view.mean("body_mass_g"), Some(3250.0));
        let species: Vec<&str> = view.records().map(|p| p.species.as_str()).collect();
        assert_eq!(species, vec!["Adelie", "Chinstrap"]);
    }

    #[test]
    fn empty_view_reports_no_data_not_zero() {
        let ds = dataset();
        let crit = criteria(2000.0, &["Adelie", "Gentoo", "Chinstrap"]);
        let indices = filtered_indices(&ds, &crit);
        let view = FilteredView::new(&ds, &indices);

        assert_eq!(view.row_count(), 0);
        assert_eq!(view.mean("body_mass_g"), None);
        assert_eq!(view.mean("bill_length_mm"), None);
        assert!(view.project(&["species", "body_mass_g"]).is_empty());
    }

    #[test]
    fn mean_skips_missing_cells() {
        let ds = PenguinDataset::from_penguins(
            vec![
                penguin("Adelie", 3000.0, Some(40.0)),
                penguin("Adelie", 3200.0, None),
                penguin("Adelie", 3400.0, Some(42.0)),
            ],
            Vec::new(),
        );
        let indices: Vec<usize> = (0..ds.len()).collect();
        let view = FilteredView::new(&ds, &indices);

        assert_eq!(view.mean("bill_length_mm"), Some(41.0));
        // A column that is missing everywhere is "no data", not 0.
        assert_eq!(view.mean("flipper_length_mm"), None);
    }

    #[test]
    fn projection_keeps_column_and_row_order() {
        let ds = dataset();
        let indices: Vec<usize> = (0..ds.len()).collect();
        let view = FilteredView::new(&ds, &indices);

        let rows = view.project(&["species", "island", "body_mass_g"]);
        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows[0],
            vec![
                FieldValue::String("Adelie".into()),
                FieldValue::String("Biscoe".into()),
                FieldValue::Float(3000.0),
            ]
        );
        assert_eq!(rows[2][0], FieldValue::String("Chinstrap".into()));
    }

    #[test]
    fn grouping_covers_all_species_in_index_order() {
        let ds = dataset();
        let crit = criteria(3600.0, &["Adelie", "Chinstrap"]);
        let indices = filtered_indices(&ds, &crit);
        let view = FilteredView::new(&ds, &indices);

        let groups = view.group_by_species();
        let labels: Vec<&str> = groups.iter().map(|(l, _)| *l).collect();
        assert_eq!(labels, vec!["Adelie", "Chinstrap", "Gentoo"]);
        assert_eq!(groups[0].1.len(), 1);
        assert_eq!(groups[1].1.len(), 1);
        // Gentoo was filtered out: present as a group, but empty.
        assert!(groups[2].1.is_empty());
    }
}
