// src/ui/toasts.rs
use eframe::egui::{self, RichText, Stroke};
use crate::state::toast_state::ToastKind;
use crate::state::AppState;
use crate::ui::theme;

/// Stacks live toasts in the bottom-right corner.
pub fn show_toasts(ctx: &egui::Context, state: &mut AppState) {
    if state.toasts.is_empty() {
        return;
    }

    let mut dismissed = None;
    egui::Area::new("toasts")
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            for (index, toast) in state.toasts.iter().enumerate() {
                let (fill, stroke) = match toast.kind {
                    ToastKind::Destructive => (theme::RED_900, theme::RED_600),
                    ToastKind::Info => (theme::ROSE_950, theme::ROSE_800),
                };

                egui::Frame::none()
                    .fill(fill)
                    .stroke(Stroke::new(1.0, stroke))
                    .rounding(6.0)
                    .inner_margin(egui::Margin::same(12.0))
                    .show(ui, |ui| {
                        ui.set_max_width(320.0);
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(&toast.title).strong());
                            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                                if ui.small_button("✖").clicked() {
                                    dismissed = Some(index);
                                }
                            });
                        });
                        if !toast.description.is_empty() {
                            ui.label(&toast.description);
                        }
                    });
                ui.add_space(6.0);
            }
        });

    if let Some(index) = dismissed {
        state.toasts.dismiss(index);
    }
}
