use alumni_business::matches_global_filter;

use crate::{state::State, widgets};

pub struct AlumniApp {
    pub state: State,
}

impl AlumniApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }
}

impl eframe::App for AlumniApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Alumni Directory");
                ui.separator();
                widgets::search_box(ui, &mut self.state.search_query);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    egui::widgets::global_theme_preference_switch(ui);
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let state = &mut self.state;
            let shown = state
                .records
                .iter()
                .filter(|record| matches_global_filter(record, &state.search_query))
                .count();
            ui.weak(row_count_label(shown, state.records.len()));
            ui.add_space(8.0);

            widgets::alumni_table(ui, &mut state.table, &state.records, &state.search_query);
        });
    }
}

/// Summary shown above the table, e.g. `3 of 120 alumni`.
pub fn row_count_label(shown: usize, total: usize) -> String {
    format!("{shown} of {total} alumni")
}
