// src/ui/header.rs
use eframe::egui::{self, RichText};
use std::time::Instant;
use crate::state::AppState;
use crate::ui::theme;

pub fn show_header(ui: &mut egui::Ui, state: &mut AppState) {
    ui.add_space(6.0);
    ui.horizontal(|ui| {
        ui.label(RichText::new("♥").size(22.0).color(theme::ROSE_400));
        ui.label(RichText::new("HealthSync").size(20.0).strong());

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("👤 My Profile").clicked() {
                state.notify_unavailable("My Profile", Instant::now());
            }
        });
    });
    ui.add_space(6.0);
}
