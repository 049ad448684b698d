// src/config/mod.rs
pub mod symptom;
pub mod insight;
pub mod appointment;
pub mod sample_data;
pub mod settings;

// Re-export commonly used types
pub use symptom::{Symptom, Severity, SymptomCatalog};
pub use insight::{HealthInsight, Trend};
pub use appointment::{Appointment, Record};
pub use sample_data::SampleData;
pub use settings::Settings;
