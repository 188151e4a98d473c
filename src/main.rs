mod app;
mod color;
mod data;
mod state;
mod ui;

use anyhow::Context;
use app::PenguinDashApp;
use eframe::egui;
use state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // The dataset is a bundled artifact: if it cannot be parsed the process
    // has nothing to show and aborts here.
    let dataset = data::loader::load_bundled().context("loading bundled dataset")?;
    let state = AppState::new(dataset);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Penguins dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(PenguinDashApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe exited with error: {e}"))
}
