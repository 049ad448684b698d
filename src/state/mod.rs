// src/state/mod.rs
use std::time::{Duration, Instant};
use tracing::debug;

use crate::config::{SampleData, Settings};
use crate::state::symptom_state::{CheckerError, SymptomState};
use crate::state::toast_state::{ToastKind, ToastQueue};

pub mod symptom_state;
pub mod toast_state;

// Core application state
#[derive(Debug)]
pub struct AppState {
    // Static demo content, read-only after startup
    pub data: SampleData,

    pub symptoms: SymptomState,
    pub toasts: ToastQueue,
}

impl AppState {
    pub fn new(data: SampleData, settings: &Settings) -> Self {
        Self {
            data,
            symptoms: SymptomState::new(settings.analysis_delay()),
            toasts: ToastQueue::new(settings.toast_duration()),
        }
    }

    pub fn toggle_symptom(&mut self, id: &str) {
        self.symptoms.toggle_symptom(id);
    }

    /// Submits the current selection. Validation failures become a toast;
    /// a submit while busy is dropped.
    pub fn analyze_symptoms(&mut self, now: Instant) {
        match self.symptoms.submit(now) {
            Ok(_) => {}
            Err(CheckerError::EmptySelection) => {
                self.toasts.push(
                    "Select symptoms",
                    CheckerError::EmptySelection.to_string(),
                    ToastKind::Destructive,
                    now,
                );
            }
            Err(e @ CheckerError::NotAcceptingInput(_)) => {
                debug!("Submit ignored: {}", e);
            }
        }
    }

    pub fn reset_analysis(&mut self) {
        self.symptoms.reset();
    }

    /// Demo buttons that would need a backend.
    pub fn notify_unavailable(&mut self, feature: &str, now: Instant) {
        self.toasts.push(
            feature,
            "Not available in this demo",
            ToastKind::Info,
            now,
        );
    }

    /// Advances timers. Returns how long until something changes on its own.
    pub fn tick(&mut self, now: Instant) -> Option<Duration> {
        self.symptoms.poll(now, &self.data.symptoms);
        self.toasts.prune(now);

        let toast_wait = self.toasts.next_expiry()
            .map(|at| at.saturating_duration_since(now));
        match (self.symptoms.remaining(now), toast_wait) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
}
