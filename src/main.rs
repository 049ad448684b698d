// src/main.rs
use eframe::egui;
use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod analysis;
mod app;
mod config;
mod file;
mod state;
mod ui;

use app::HealthSyncApp;
use crate::config::Settings;

fn main() -> Result<()> {
    let (settings, settings_error) = match Settings::load() {
        Ok(settings) => (settings, None),
        Err(e) => (Settings::default(), Some(e)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter))
        )
        .init();

    if let Some(e) = settings_error {
        warn!("Falling back to default settings: {:#}", e);
    }
    info!(
        "HealthSync v{} starting (analysis delay {} ms)",
        env!("CARGO_PKG_VERSION"),
        settings.analysis_delay_ms
    );

    let data = file::load_sample_data(settings.sample_data.as_deref())?;
    info!("Loaded {} symptoms, {} insights, {} appointments",
        data.symptoms.len(), data.insights.len(), data.appointments.len());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([settings.window_width, settings.window_height])
            .with_title("HealthSync - AI Health Platform"),
        ..Default::default()
    };

    eframe::run_native(
        "HealthSync",
        options,
        Box::new(move |cc| Box::new(HealthSyncApp::new(cc, data, &settings))),
    ).map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
