// src/ui/sidebar.rs
use eframe::egui::{self, RichText};
use std::time::Instant;
use crate::config::Appointment;
use crate::state::AppState;
use crate::ui::theme;

pub fn show_sidebar(ui: &mut egui::Ui, state: &mut AppState) {
    show_appointments(ui, state);
    ui.add_space(16.0);
    show_records(ui, state);
}

fn show_appointments(ui: &mut egui::Ui, state: &mut AppState) {
    let mut schedule_clicked = false;

    theme::card(
        ui,
        |ui| {
            ui.label(RichText::new("📅").size(16.0).color(theme::ROSE_400));
            ui.label(RichText::new("Appointments").size(17.0).strong());
        },
        |ui| {
            for appointment in &state.data.appointments {
                show_appointment(ui, appointment);
                ui.add_space(8.0);
            }
            schedule_clicked = ui
                .add_sized([ui.available_width(), 30.0], egui::Button::new("Schedule New Appointment"))
                .clicked();
        },
    );

    if schedule_clicked {
        state.notify_unavailable("Schedule New Appointment", Instant::now());
    }
}

fn show_appointment(ui: &mut egui::Ui, appointment: &Appointment) {
    ui.push_id(appointment.id, |ui| theme::tile(ui, theme::ROSE_900, theme::ROSE_800, |ui| {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new(&appointment.doctor).strong());
                ui.label(RichText::new(&appointment.specialty).small().color(theme::MUTED));
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                theme::badge(ui, appointment.kind.as_str(), theme::MUTED);
            });
        });
        ui.label(
            RichText::new(format!("🕑 {}", appointment.schedule_label()))
                .color(theme::MUTED)
        );
    }));
}

fn show_records(ui: &mut egui::Ui, state: &AppState) {
    theme::card(
        ui,
        |ui| {
            ui.label(RichText::new("📄").size(16.0).color(theme::ROSE_400));
            ui.label(RichText::new("Records").size(17.0).strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                theme::badge(ui, "AI Summarized", theme::ROSE_400);
            });
        },
        |ui| {
            for record in &state.data.records {
                theme::tile(ui, theme::ROSE_900, theme::ROSE_900, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(record.label());
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(RichText::new("📄").color(theme::MUTED));
                        });
                    });
                });
                ui.add_space(6.0);
            }
        },
    );
}
