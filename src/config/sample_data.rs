// src/config/sample_data.rs
use serde::{Serialize, Deserialize};
use anyhow::{Result, Context};

use super::{Appointment, HealthInsight, Record, SymptomCatalog};

pub const EMBEDDED_SAMPLE_DATA: &str = include_str!("../../assets/sample_data.ron");

/// Static demo content. Built once at startup and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SampleData {
    pub symptoms: SymptomCatalog,
    pub insights: Vec<HealthInsight>,
    pub appointments: Vec<Appointment>,
    pub records: Vec<Record>,
    #[serde(default)]
    pub tech_stack: Vec<String>,
}

impl SampleData {
    pub fn embedded() -> Result<Self> {
        Self::from_ron(EMBEDDED_SAMPLE_DATA).context("Embedded sample data is invalid")
    }

    pub fn from_ron(content: &str) -> Result<Self> {
        let data: SampleData = ron::from_str(content).context("Failed to parse sample data")?;
        data.symptoms.validate()?;
        Ok(data)
    }
}
