// src/ui/insights.rs
use eframe::egui::{self, RichText};
use crate::config::{HealthInsight, Trend};
use crate::state::AppState;
use crate::ui::theme;

pub fn show_insights(ui: &mut egui::Ui, state: &AppState) {
    theme::card(
        ui,
        |ui| {
            ui.label(RichText::new("📈").size(18.0).color(theme::ROSE_400));
            ui.heading("Health Insights");
            theme::badge(ui, "AI Powered", theme::ROSE_400);
        },
        |ui| {
            // Two tiles per row
            for pair in state.data.insights.chunks(2) {
                ui.columns(2, |columns| {
                    for (column, insight) in columns.iter_mut().zip(pair) {
                        show_insight_tile(column, insight);
                    }
                });
                ui.add_space(8.0);
            }
        },
    );
}

fn show_insight_tile(ui: &mut egui::Ui, insight: &HealthInsight) {
    let trend_color = match insight.trend {
        Trend::Up => theme::GREEN_400,
        Trend::Down => theme::BLUE_400,
        Trend::Stable => theme::MUTED,
    };

    theme::tile(ui, theme::ROSE_900, theme::ROSE_800, |ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new(&insight.category).small().color(theme::MUTED));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                theme::badge(ui, insight.trend_label(), trend_color);
            });
        });
        ui.label(RichText::new(&insight.value).size(22.0).strong());
        if let Some(note) = &insight.ai_note {
            ui.label(RichText::new(format!("✨ {}", note)).small().color(theme::ROSE_400));
        }
    });
}
