// src/analysis/symptom.rs

use serde::{Serialize, Deserialize};
use std::collections::BTreeSet;
use std::fmt;
use crate::config::{Severity, SymptomCatalog};

/// Symptom ids picked by the user. Membership only, order is irrelevant.
pub type SelectionSet = BTreeSet<String>;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Urgency {
    Low,
    Medium,
    High,
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Urgency::Low => write!(f, "low"),
            Urgency::Medium => write!(f, "medium"),
            Urgency::High => write!(f, "high"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisResult {
    pub condition: String,
    pub confidence: u8,         // 0-100
    pub urgency: Urgency,
    pub recommendations: Vec<String>,
}

const SEVERE_CONDITION: &str = "Potential cardiac or respiratory concern";
const SEVERE_CONFIDENCE: u8 = 78;
const SEVERE_RECOMMENDATIONS: [&str; 4] = [
    "Seek immediate medical attention",
    "Do not engage in strenuous activity",
    "Monitor symptoms closely",
    "Call emergency services if symptoms worsen",
];

const COMMON_CONDITION: &str = "Common viral symptoms";
const COMMON_CONFIDENCE: u8 = 92;
const COMMON_RECOMMENDATIONS: [&str; 4] = [
    "Rest and stay hydrated",
    "Over-the-counter pain relievers may help",
    "Monitor temperature regularly",
    "Consult a doctor if symptoms persist beyond 3 days",
];

/// True when any selected id is tagged severe in the catalog.
/// Ids missing from the catalog never count.
pub fn has_severe(selection: &SelectionSet, catalog: &SymptomCatalog) -> bool {
    selection.iter()
        .any(|id| catalog.severity_of(id) == Some(Severity::Severe))
}

/// Maps a selection to one of the two canned assessments.
pub fn analyze(selection: &SelectionSet, catalog: &SymptomCatalog) -> AnalysisResult {
    let (condition, confidence, urgency, recommendations) = if has_severe(selection, catalog) {
        (SEVERE_CONDITION, SEVERE_CONFIDENCE, Urgency::High, SEVERE_RECOMMENDATIONS)
    } else {
        (COMMON_CONDITION, COMMON_CONFIDENCE, Urgency::Low, COMMON_RECOMMENDATIONS)
    };

    AnalysisResult {
        condition: condition.to_string(),
        confidence,
        urgency,
        recommendations: recommendations.iter().map(|r| r.to_string()).collect(),
    }
}
