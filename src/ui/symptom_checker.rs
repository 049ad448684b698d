// src/ui/symptom_checker.rs
use eframe::egui::{self, Color32, RichText, Stroke};
use std::time::Instant;
use crate::analysis::{AnalysisResult, Urgency};
use crate::state::AppState;
use crate::state::symptom_state::AnalysisPhase;
use crate::ui::theme;

pub fn show_symptom_checker(ui: &mut egui::Ui, state: &mut AppState) {
    theme::card(
        ui,
        |ui| {
            ui.label(RichText::new("🧠").size(18.0).color(theme::ROSE_400));
            ui.heading("AI Symptom Checker");
        },
        |ui| match state.symptoms.phase() {
            AnalysisPhase::Input => show_input(ui, state),
            AnalysisPhase::Analyzing => show_analyzing(ui, state),
            AnalysisPhase::Results => {
                if let Some(result) = state.symptoms.result().cloned() {
                    show_results(ui, state, &result);
                }
            }
        },
    );
}

fn show_input(ui: &mut egui::Ui, state: &mut AppState) {
    ui.label(RichText::new("Select your symptoms:").strong());
    ui.add_space(6.0);

    let mut toggled = None;
    ui.horizontal_wrapped(|ui| {
        for symptom in state.data.symptoms.iter() {
            let selected = state.symptoms.is_selected(&symptom.id);
            let label = if symptom.is_severe() {
                format!("{} ⚠", symptom.name)
            } else {
                symptom.name.clone()
            };

            let (fill, stroke) = match (selected, symptom.is_severe()) {
                (true, true) => (theme::RED_600, theme::RED_600),
                (true, false) => (theme::ROSE_600, theme::ROSE_600),
                (false, _) => (Color32::TRANSPARENT, theme::ROSE_800),
            };

            let chip = egui::Button::new(RichText::new(label).color(Color32::WHITE))
                .fill(fill)
                .stroke(Stroke::new(1.0, stroke))
                .rounding(12.0);
            if ui.add(chip).on_hover_text(format!("Severity: {}", symptom.severity)).clicked() {
                toggled = Some(symptom.id.clone());
            }
        }
    });
    if let Some(id) = toggled {
        state.toggle_symptom(&id);
    }

    ui.add_space(12.0);
    ui.label(RichText::new("Additional notes (optional):").strong());
    ui.add_space(4.0);
    ui.add(
        egui::TextEdit::multiline(&mut state.symptoms.notes)
            .hint_text("Describe your symptoms in more detail...")
            .desired_rows(3)
            .desired_width(f32::INFINITY)
    );

    ui.add_space(12.0);
    if ui.add_sized([ui.available_width(), 36.0], theme::primary_button("✨ Analyze Symptoms with AI")).clicked() {
        state.analyze_symptoms(Instant::now());
    }

    ui.add_space(6.0);
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new("This is not a medical diagnosis. Always consult a healthcare professional.")
                .small()
                .color(theme::MUTED)
        );
    });
}

fn show_analyzing(ui: &mut egui::Ui, state: &mut AppState) {
    let progress = state.symptoms.progress(Instant::now()).unwrap_or(0.0);

    ui.add_space(24.0);
    ui.vertical_centered(|ui| {
        ui.add(egui::Spinner::new().size(48.0).color(theme::ROSE_400));
        ui.add_space(12.0);
        ui.heading("Analyzing Your Symptoms");
        ui.label(
            RichText::new("Our LLM is processing your symptoms using medical knowledge...")
                .color(theme::MUTED)
        );
        ui.add_space(12.0);
        ui.add(egui::ProgressBar::new(progress).desired_width(240.0));
        ui.add_space(8.0);
        if ui.button("Cancel").clicked() {
            state.reset_analysis();
        }
    });
    ui.add_space(24.0);
}

fn show_results(ui: &mut egui::Ui, state: &mut AppState, result: &AnalysisResult) {
    let (fill, stroke, icon, icon_color) = match result.urgency {
        Urgency::High => (theme::RED_900, theme::RED_600, "⚠", theme::RED_400),
        Urgency::Medium | Urgency::Low => (theme::ROSE_900, theme::ROSE_800, "✔", theme::GREEN_400),
    };

    theme::tile(ui, fill, stroke, |ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new(icon).size(22.0).color(icon_color));
            ui.vertical(|ui| {
                ui.label(RichText::new(&result.condition).size(17.0).strong());
                ui.label(
                    RichText::new(format!("Confidence: {}%", result.confidence))
                        .small()
                        .color(theme::MUTED)
                );
            });
        });
    });

    ui.add_space(12.0);
    ui.label(RichText::new("Recommendations:").strong());
    ui.add_space(4.0);
    for recommendation in &result.recommendations {
        ui.horizontal_wrapped(|ui| {
            ui.label(RichText::new("◆").color(theme::ROSE_400));
            ui.label(recommendation);
        });
    }

    ui.add_space(12.0);
    ui.columns(2, |columns| {
        let width = columns[0].available_width();
        if columns[0].add_sized([width, 32.0], egui::Button::new("New Analysis")).clicked() {
            state.reset_analysis();
        }
        if columns[1].add_sized([width, 32.0], theme::primary_button("📅 Book Appointment")).clicked() {
            state.notify_unavailable("Book Appointment", Instant::now());
        }
    });
}
