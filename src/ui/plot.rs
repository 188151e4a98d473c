use eframe::egui::Ui;
use egui_plot::{Legend, MarkerShape, Plot, PlotPoints, Points};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Bill length × depth scatter plot
// ---------------------------------------------------------------------------

/// Render the "Bill length and depth" scatter, one point series per species.
pub fn bill_scatter(ui: &mut Ui, state: &AppState) {
    let view = state.view();

    Plot::new("bill_scatter")
        .legend(Legend::default())
        .x_axis_label("Bill length (mm)")
        .y_axis_label("Bill depth (mm)")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (species, rows) in view.group_by_species() {
                // Rows missing either coordinate are skipped in display only.
                let points: PlotPoints = rows
                    .iter()
                    .filter_map(|p| Some([p.bill_length_mm?, p.bill_depth_mm?]))
                    .collect();

                let series = Points::new(points)
                    .name(species)
                    .color(state.colors.color_for(species))
                    .shape(MarkerShape::Circle)
                    .radius(3.0);

                plot_ui.points(series);
            }
        });
}
