use eframe::egui::{TextEdit, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::FieldValue;
use crate::state::AppState;

/// The fixed projection shown in the data grid.
pub const TABLE_COLUMNS: [&str; 5] = [
    "species",
    "island",
    "bill_length_mm",
    "bill_depth_mm",
    "body_mass_g",
];

// ---------------------------------------------------------------------------
// Penguin data grid
// ---------------------------------------------------------------------------

/// Render the "Penguin Data" table: the filtered view projected onto the
/// fixed columns, with a per-column substring filter row. Column filters
/// are display-layer state only and never feed back into the pipeline.
pub fn data_table(ui: &mut Ui, state: &mut AppState) {
    ui.strong("Penguin Data");

    // ---- Per-column filter inputs ----
    ui.columns(TABLE_COLUMNS.len(), |columns: &mut [Ui]| {
        for (col_ui, name) in columns.iter_mut().zip(TABLE_COLUMNS) {
            let filter = state
                .table_filters
                .entry(name.to_string())
                .or_default();
            col_ui.add(
                TextEdit::singleline(filter)
                    .hint_text(name)
                    .desired_width(f32::INFINITY),
            );
        }
    });

    let rows = visible_rows(state);

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .columns(Column::remainder().clip(true), TABLE_COLUMNS.len())
        .header(20.0, |mut header| {
            for name in TABLE_COLUMNS {
                header.col(|ui: &mut Ui| {
                    ui.strong(name);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, rows.len(), |mut row| {
                let cells = &rows[row.index()];
                for cell in cells {
                    row.col(|ui: &mut Ui| {
                        ui.label(cell);
                    });
                }
            });
        });
}

/// Project the filtered view onto the table columns and apply the
/// display-layer column filters (case-insensitive substring match).
fn visible_rows(state: &AppState) -> Vec<Vec<String>> {
    let projected: Vec<Vec<FieldValue>> = state.view().project(&TABLE_COLUMNS);

    projected
        .into_iter()
        .map(|row| row.iter().map(FieldValue::to_string).collect())
        .filter(|row: &Vec<String>| {
            TABLE_COLUMNS.iter().zip(row).all(|(name, cell)| {
                match state.table_filters.get(*name) {
                    Some(needle) if !needle.is_empty() => cell
                        .to_lowercase()
                        .contains(&needle.to_lowercase()),
                    _ => true,
                }
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Penguin, PenguinDataset};
    use std::collections::BTreeMap;

    fn penguin(species: &str, island: &str, mass: f64) -> Penguin {
        Penguin {
            species: species.to_string(),
            island: island.to_string(),
            bill_length_mm: Some(40.0),
            bill_depth_mm: Some(18.0),
            body_mass_g: Some(mass),
            extra: BTreeMap::new(),
        }
    }

    fn state() -> AppState {
        AppState::new(PenguinDataset::from_penguins(
            vec![
                penguin("Adelie", "Torgersen", 3750.0),
                penguin("Gentoo", "Biscoe", 5076.0),
                penguin("Chinstrap", "Dream", 3733.0),
            ],
            Vec::new(),
        ))
    }

    #[test]
    fn rows_follow_the_fixed_projection() {
        let st = state();
        let rows = visible_rows(&st);
        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows[0],
            vec!["Adelie", "Torgersen", "40.0", "18.0", "3750.0"]
        );
    }

    #[test]
    fn column_filters_narrow_the_display_only() {
        let mut st = state();
        st.table_filters
            .insert("island".to_string(), "bis".to_string());
        let rows = visible_rows(&st);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][0], "Gentoo");
        // The pipeline's view is untouched by display filters.
        assert_eq!(st.view().row_count(), 3);
    }
}
