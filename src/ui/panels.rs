use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::data::filter::{MASS_CEILING_MAX, MASS_CEILING_MIN};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter controls
// ---------------------------------------------------------------------------

/// Render the filter controls sidebar.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filter controls");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Body-mass ceiling slider ----
            ui.strong("Mass");
            ui.add(
                egui::Slider::new(
                    &mut state.criteria.mass_ceiling,
                    MASS_CEILING_MIN..=MASS_CEILING_MAX,
                )
                .suffix(" g")
                .integer(),
            );
            ui.separator();

            // ---- Species checkbox group ----
            let species = state.dataset.species.clone();
            let n_selected = state.criteria.species.len();
            ui.strong(format!("Species  ({n_selected}/{})", species.len()));

            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    state.select_all_species();
                }
                if ui.small_button("None").clicked() {
                    state.select_no_species();
                }
            });

            for label in &species {
                let is_selected = state.criteria.species.contains(label);
                let text =
                    RichText::new(label).color(state.colors.color_for(label));

                let mut checked = is_selected;
                if ui.checkbox(&mut checked, text).changed() {
                    state.toggle_species(label);
                }
            }
        });

    // Recompute visible indices after any control changes.
    state.refilter();
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the title bar with the shown/total count.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.strong("Penguins dashboard");
        ui.separator();
        ui.label(format!(
            "{} of {} penguins shown",
            state.visible_indices.len(),
            state.dataset.len()
        ));
    });
}

// ---------------------------------------------------------------------------
// Value boxes
// ---------------------------------------------------------------------------

/// The three summary boxes: count, average bill length, average bill depth.
pub fn value_boxes(ui: &mut Ui, state: &AppState) {
    let view = state.view();
    let count = view.row_count().to_string();
    let bill_length = mean_label(view.mean("bill_length_mm"));
    let bill_depth = mean_label(view.mean("bill_depth_mm"));

    ui.columns(3, |columns: &mut [Ui]| {
        value_box(&mut columns[0], "Number of penguins", &count);
        value_box(&mut columns[1], "Average bill length", &bill_length);
        value_box(&mut columns[2], "Average bill depth", &bill_depth);
    });
}

/// One-decimal mean with unit suffix, or a neutral placeholder when the
/// view is empty.
fn mean_label(mean: Option<f64>) -> String {
    match mean {
        Some(v) => format!("{v:.1} mm"),
        None => "N/A".to_string(),
    }
}

fn value_box(ui: &mut Ui, title: &str, value: &str) {
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.vertical_centered(|ui: &mut Ui| {
            ui.label(title);
            ui.heading(RichText::new(value).strong());
        });
    });
}
