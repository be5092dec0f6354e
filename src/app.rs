use eframe::egui;

use crate::state::AppState;
use crate::ui::{grid, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct RustyGridApp {
    pub state: AppState,
}

impl eframe::App for RustyGridApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu, toolbar, search, status ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: editable grid ----
        egui::CentralPanel::default().show(ctx, |ui| {
            grid::csv_grid(ui, &mut self.state);
        });
    }
}
