// src/app.rs
use eframe::egui;
use std::time::Instant;

use crate::config::{SampleData, Settings};
use crate::state::AppState;

pub struct HealthSyncApp {
    state: AppState,
}

impl HealthSyncApp {
    pub fn new(cc: &eframe::CreationContext<'_>, data: SampleData, settings: &Settings) -> Self {
        crate::ui::theme::apply(&cc.egui_ctx);
        Self {
            state: AppState::new(data, settings),
        }
    }
}

impl eframe::App for HealthSyncApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Completes a due analysis run before anything is drawn.
        if let Some(wait) = self.state.tick(Instant::now()) {
            ctx.request_repaint_after(wait);
        }

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            crate::ui::header::show_header(ui, &mut self.state);
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            crate::ui::footer::show_footer(ui, &self.state);
        });

        egui::SidePanel::right("sidebar")
            .resizable(false)
            .exact_width(340.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_source("sidebar_scroll")
                    .show(ui, |ui| {
                        ui.add_space(12.0);
                        crate::ui::sidebar::show_sidebar(ui, &mut self.state);
                    });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_source("main_scroll")
                .show(ui, |ui| {
                    ui.add_space(12.0);
                    crate::ui::symptom_checker::show_symptom_checker(ui, &mut self.state);
                    ui.add_space(16.0);
                    crate::ui::insights::show_insights(ui, &self.state);
                });
        });

        crate::ui::toasts::show_toasts(ctx, &mut self.state);

        // The spinner animates while a run is pending.
        if self.state.symptoms.pending().is_some() {
            ctx.request_repaint();
        }
    }
}
