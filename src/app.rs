use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PenguinDashApp {
    pub state: AppState,
}

impl PenguinDashApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for PenguinDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title and counts ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: filter controls ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: value boxes, scatter plot, data table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::value_boxes(ui, &self.state);
            ui.separator();

            ui.columns(2, |columns: &mut [egui::Ui]| {
                columns[0].strong("Bill length and depth");
                plot::bill_scatter(&mut columns[0], &self.state);
                table::data_table(&mut columns[1], &mut self.state);
            });
        });
    }
}
