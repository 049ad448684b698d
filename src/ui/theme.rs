// src/ui/theme.rs
use eframe::egui::{self, Color32, RichText, Stroke};

pub const ROSE_950: Color32 = Color32::from_rgb(76, 5, 25);
pub const ROSE_900: Color32 = Color32::from_rgb(60, 18, 30);
pub const ROSE_800: Color32 = Color32::from_rgb(110, 30, 50);
pub const ROSE_600: Color32 = Color32::from_rgb(225, 29, 72);
pub const ROSE_400: Color32 = Color32::from_rgb(251, 113, 133);
pub const RED_600: Color32 = Color32::from_rgb(220, 38, 38);
pub const RED_900: Color32 = Color32::from_rgb(90, 20, 20);
pub const RED_400: Color32 = Color32::from_rgb(248, 113, 113);
pub const GREEN_400: Color32 = Color32::from_rgb(74, 222, 128);
pub const BLUE_400: Color32 = Color32::from_rgb(96, 165, 250);
pub const MUTED: Color32 = Color32::from_rgb(150, 150, 160);

pub fn apply(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = Color32::from_rgb(24, 10, 16);
    visuals.window_fill = Color32::from_rgb(32, 14, 22);
    visuals.selection.bg_fill = ROSE_600;
    ctx.set_visuals(visuals);
}

/// Bordered card with a heading row.
pub fn card(ui: &mut egui::Ui, add_title: impl FnOnce(&mut egui::Ui), add_contents: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::none()
        .fill(Color32::from_rgb(32, 14, 22))
        .stroke(Stroke::new(1.0, ROSE_800))
        .rounding(8.0)
        .inner_margin(egui::Margin::same(16.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(add_title);
            ui.add_space(8.0);
            ui.separator();
            ui.add_space(8.0);
            add_contents(ui);
        });
}

/// Tinted inner panel used for list rows and insight tiles.
pub fn tile(ui: &mut egui::Ui, fill: Color32, stroke: Color32, add_contents: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::none()
        .fill(fill)
        .stroke(Stroke::new(1.0, stroke))
        .rounding(6.0)
        .inner_margin(egui::Margin::same(10.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui);
        });
}

/// Small outlined label, the egui stand-in for a badge.
pub fn badge(ui: &mut egui::Ui, text: impl Into<String>, color: Color32) {
    egui::Frame::none()
        .stroke(Stroke::new(1.0, color))
        .rounding(10.0)
        .inner_margin(egui::Margin::symmetric(6.0, 1.0))
        .show(ui, |ui| {
            ui.label(RichText::new(text.into()).small().color(color));
        });
}

pub fn primary_button(text: &str) -> egui::Button<'static> {
    egui::Button::new(RichText::new(text.to_string()).color(Color32::WHITE).strong())
        .fill(ROSE_600)
}
