// src/analysis/mod.rs
pub mod symptom;

// Re-export commonly used types
pub use symptom::{
    AnalysisResult,
    SelectionSet,
    Urgency,
    analyze,
};
