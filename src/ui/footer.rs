// src/ui/footer.rs
use eframe::egui::{self, RichText};
use crate::state::AppState;
use crate::ui::theme;

pub fn show_footer(ui: &mut egui::Ui, state: &AppState) {
    ui.add_space(8.0);
    ui.vertical_centered(|ui| {
        ui.horizontal(|ui| {
            theme::badge(ui, "Demo Project", theme::MUTED);
            ui.label(RichText::new("Built with LLM-powered health analysis").color(theme::MUTED));
        });
        ui.add_space(4.0);
        ui.horizontal_wrapped(|ui| {
            for tech in &state.data.tech_stack {
                theme::badge(ui, tech.as_str(), theme::ROSE_400);
            }
        });
    });
    ui.add_space(8.0);
}
