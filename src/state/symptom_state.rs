// src/state/symptom_state.rs
use std::fmt;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

use crate::analysis::{self, AnalysisResult, SelectionSet};
use crate::config::SymptomCatalog;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisPhase {
    Input,
    Analyzing,
    Results,
}

impl fmt::Display for AnalysisPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisPhase::Input => write!(f, "input"),
            AnalysisPhase::Analyzing => write!(f, "analyzing"),
            AnalysisPhase::Results => write!(f, "results"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckerError {
    #[error("Please select at least one symptom")]
    EmptySelection,
    #[error("Symptom checker is in {0} phase and not accepting input")]
    NotAcceptingInput(AnalysisPhase),
}

/// An in-flight simulated analysis. Dropping it cancels the run.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingAnalysis {
    pub run_id: Uuid,
    pub started_at: Instant,
    pub ready_at: Instant,
}

// The result only exists in the Results stage.
#[derive(Debug, Clone, PartialEq)]
enum Stage {
    Input,
    Analyzing(PendingAnalysis),
    Results(AnalysisResult),
}

/// Symptom checker state machine: input -> analyzing -> results -> (reset) input.
///
/// Time is passed in by the caller, so the analysis timer is just a deadline
/// checked by [`SymptomState::poll`] once per frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SymptomState {
    selection: SelectionSet,
    pub notes: String,
    stage: Stage,
    delay: Duration,
}

impl SymptomState {
    pub fn new(delay: Duration) -> Self {
        Self {
            selection: SelectionSet::new(),
            notes: String::new(),
            stage: Stage::Input,
            delay,
        }
    }

    pub fn phase(&self) -> AnalysisPhase {
        match self.stage {
            Stage::Input => AnalysisPhase::Input,
            Stage::Analyzing(_) => AnalysisPhase::Analyzing,
            Stage::Results(_) => AnalysisPhase::Results,
        }
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.contains(id)
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match &self.stage {
            Stage::Results(result) => Some(result),
            _ => None,
        }
    }

    pub fn pending(&self) -> Option<&PendingAnalysis> {
        match &self.stage {
            Stage::Analyzing(pending) => Some(pending),
            _ => None,
        }
    }

    /// Flips membership of `id`. Returns false (and changes nothing) outside
    /// the input phase. Unknown ids are accepted.
    pub fn toggle_symptom(&mut self, id: &str) -> bool {
        if self.phase() != AnalysisPhase::Input {
            debug!(id, phase = %self.phase(), "Ignoring symptom toggle");
            return false;
        }

        if !self.selection.remove(id) {
            self.selection.insert(id.to_string());
        }
        true
    }

    /// Starts a simulated analysis run and returns its id.
    pub fn submit(&mut self, now: Instant) -> Result<Uuid, CheckerError> {
        let phase = self.phase();
        if phase != AnalysisPhase::Input {
            return Err(CheckerError::NotAcceptingInput(phase));
        }
        if self.selection.is_empty() {
            return Err(CheckerError::EmptySelection);
        }

        let pending = PendingAnalysis {
            run_id: Uuid::new_v4(),
            started_at: now,
            ready_at: now + self.delay,
        };
        let run_id = pending.run_id;
        info!(%run_id, symptoms = self.selection.len(), "Analysis started");
        self.stage = Stage::Analyzing(pending);
        Ok(run_id)
    }

    /// Completes the pending run once its deadline has passed.
    /// Returns true on the call that produced a result.
    pub fn poll(&mut self, now: Instant, catalog: &SymptomCatalog) -> bool {
        let run_id = match &self.stage {
            Stage::Analyzing(pending) if now >= pending.ready_at => pending.run_id,
            _ => return false,
        };

        let result = analysis::analyze(&self.selection, catalog);
        info!(%run_id, urgency = %result.urgency, confidence = result.confidence, "Analysis complete");
        self.stage = Stage::Results(result);
        true
    }

    /// Time left on the pending run, if any.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.pending().map(|p| p.ready_at.saturating_duration_since(now))
    }

    /// Fraction of the pending run elapsed, in 0.0..=1.0.
    pub fn progress(&self, now: Instant) -> Option<f32> {
        self.pending().map(|p| {
            let total = p.ready_at.saturating_duration_since(p.started_at);
            if total.is_zero() {
                1.0
            } else {
                let elapsed = now.saturating_duration_since(p.started_at);
                (elapsed.as_secs_f32() / total.as_secs_f32()).min(1.0)
            }
        })
    }

    /// Back to an empty input phase. Cancels a pending run.
    pub fn reset(&mut self) {
        if let Stage::Analyzing(pending) = &self.stage {
            info!(run_id = %pending.run_id, "Analysis cancelled");
        }
        self.selection.clear();
        self.notes.clear();
        self.stage = Stage::Input;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Urgency;
    use crate::config::SampleData;
    use proptest::prelude::*;

    const DELAY: Duration = Duration::from_millis(2000);

    fn catalog() -> SymptomCatalog {
        SampleData::embedded().unwrap().symptoms
    }

    fn checker_with(ids: &[&str]) -> SymptomState {
        let mut state = SymptomState::new(DELAY);
        for id in ids {
            state.toggle_symptom(id);
        }
        state
    }

    /// Submits and polls past the deadline.
    fn run_to_completion(state: &mut SymptomState, catalog: &SymptomCatalog) {
        let start = Instant::now();
        state.submit(start).unwrap();
        assert!(state.poll(start + DELAY, catalog));
    }

    #[test]
    fn test_toggle_adds_and_removes() {
        let mut state = SymptomState::new(DELAY);
        assert!(state.toggle_symptom("fever"));
        assert!(state.is_selected("fever"));
        assert!(state.toggle_symptom("fever"));
        assert!(state.selection().is_empty());
    }

    #[test]
    fn test_empty_submit_is_rejected() {
        let mut state = SymptomState::new(DELAY);
        let before = state.clone();

        assert_eq!(state.submit(Instant::now()), Err(CheckerError::EmptySelection));
        assert_eq!(state.phase(), AnalysisPhase::Input);
        assert!(state.result().is_none());
        assert_eq!(state, before);
    }

    #[test]
    fn test_result_waits_for_delay() {
        let catalog = catalog();
        let mut state = checker_with(&["headache", "fever"]);
        let start = Instant::now();

        state.submit(start).unwrap();
        assert_eq!(state.phase(), AnalysisPhase::Analyzing);
        assert!(state.result().is_none());

        assert!(!state.poll(start + Duration::from_millis(1999), &catalog));
        assert_eq!(state.phase(), AnalysisPhase::Analyzing);
        assert_eq!(state.remaining(start + Duration::from_millis(1500)), Some(Duration::from_millis(500)));
        assert_eq!(state.progress(start + Duration::from_millis(1000)), Some(0.5));

        assert!(state.poll(start + DELAY, &catalog));
        assert_eq!(state.phase(), AnalysisPhase::Results);
        assert!(state.remaining(start + DELAY).is_none());

        let result = state.result().unwrap();
        assert_eq!(result.condition, "Common viral symptoms");
        assert_eq!(result.recommendations.len(), 4);

        // Already complete, nothing more to do.
        assert!(!state.poll(start + DELAY * 2, &catalog));
    }

    #[test]
    fn test_severe_selection_is_high_urgency() {
        let catalog = catalog();
        let mut state = checker_with(&["chestpain"]);
        run_to_completion(&mut state, &catalog);

        let result = state.result().unwrap();
        assert_eq!(result.condition, "Potential cardiac or respiratory concern");
        assert_eq!(result.urgency, Urgency::High);
    }

    #[test]
    fn test_double_submit_is_ignored() {
        let catalog = catalog();
        let mut state = checker_with(&["cough"]);
        let start = Instant::now();

        let run_id = state.submit(start).unwrap();
        let later = start + Duration::from_millis(1500);
        assert_eq!(
            state.submit(later),
            Err(CheckerError::NotAcceptingInput(AnalysisPhase::Analyzing))
        );

        // First deadline still stands.
        let pending = state.pending().unwrap();
        assert_eq!(pending.run_id, run_id);
        assert_eq!(pending.ready_at, start + DELAY);
        assert!(state.poll(start + DELAY, &catalog));
    }

    #[test]
    fn test_selection_frozen_outside_input() {
        let catalog = catalog();
        let mut state = checker_with(&["cough"]);
        let start = Instant::now();
        state.submit(start).unwrap();

        assert!(!state.toggle_symptom("chestpain"));
        assert!(state.poll(start + DELAY, &catalog));
        assert_eq!(state.result().unwrap().urgency, Urgency::Low);

        assert!(!state.toggle_symptom("cough"));
        assert!(state.is_selected("cough"));
        assert_eq!(
            state.submit(start + DELAY),
            Err(CheckerError::NotAcceptingInput(AnalysisPhase::Results))
        );
    }

    #[test]
    fn test_reset_after_results_restores_initial_state() {
        let catalog = catalog();
        let mut state = checker_with(&["headache", "nausea"]);
        state.notes.push_str("Started yesterday evening");
        run_to_completion(&mut state, &catalog);

        state.reset();
        assert_eq!(state, SymptomState::new(DELAY));
        assert_eq!(state.phase(), AnalysisPhase::Input);
        assert!(state.notes.is_empty());
    }

    #[test]
    fn test_reset_cancels_pending_run() {
        let catalog = catalog();
        let mut state = checker_with(&["breathing"]);
        let start = Instant::now();
        state.submit(start).unwrap();

        state.reset();
        assert!(!state.poll(start + DELAY * 3, &catalog));
        assert_eq!(state.phase(), AnalysisPhase::Input);
        assert!(state.result().is_none());
        assert!(state.selection().is_empty());
    }

    #[test]
    fn test_zero_delay_completes_on_first_poll() {
        let catalog = catalog();
        let mut state = SymptomState::new(Duration::ZERO);
        state.toggle_symptom("fatigue");
        let now = Instant::now();
        state.submit(now).unwrap();

        assert_eq!(state.progress(now), Some(1.0));
        assert!(state.poll(now, &catalog));
    }

    fn catalog_ids() -> Vec<String> {
        catalog().iter().map(|s| s.id.clone()).collect()
    }

    proptest! {
        #[test]
        fn toggle_twice_is_identity(
            initial in prop::sample::subsequence(catalog_ids(), 0..=8),
            id in "[a-z]{1,12}",
        ) {
            let mut state = SymptomState::new(DELAY);
            for existing in &initial {
                state.toggle_symptom(existing);
            }
            let before = state.selection().clone();

            state.toggle_symptom(&id);
            state.toggle_symptom(&id);
            prop_assert_eq!(state.selection(), &before);
        }

        #[test]
        fn urgency_follows_severity(ids in prop::sample::subsequence(catalog_ids(), 1..=8)) {
            let catalog = catalog();
            let mut state = SymptomState::new(DELAY);
            for id in &ids {
                state.toggle_symptom(id);
            }
            run_to_completion(&mut state, &catalog);

            let severe = ids.iter().any(|id| id == "chestpain" || id == "breathing");
            let result = state.result().unwrap();
            if severe {
                prop_assert_eq!(result.urgency, Urgency::High);
                prop_assert_eq!(result.confidence, 78);
            } else {
                prop_assert_eq!(result.urgency, Urgency::Low);
                prop_assert_eq!(result.confidence, 92);
            }
        }
    }
}
