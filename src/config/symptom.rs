// src/config/symptom.rs
use serde::{Serialize, Deserialize};
use std::collections::HashSet;
use std::fmt;
use anyhow::{Result, anyhow};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Mild => write!(f, "mild"),
            Severity::Moderate => write!(f, "moderate"),
            Severity::Severe => write!(f, "severe"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Symptom {
    pub id: String,
    pub name: String,
    pub severity: Severity,
}

impl Symptom {
    pub fn is_severe(&self) -> bool {
        self.severity == Severity::Severe
    }
}

/// Selectable symptoms, in display order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct SymptomCatalog {
    symptoms: Vec<Symptom>,
}

impl SymptomCatalog {
    /// Rejects empty catalogs and duplicate ids.
    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(anyhow!("Symptom catalog is empty"));
        }

        let mut seen = HashSet::new();
        for symptom in &self.symptoms {
            if !seen.insert(symptom.id.as_str()) {
                return Err(anyhow!("Duplicate symptom id in catalog: {}", symptom.id));
            }
        }
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Symptom> {
        self.symptoms.iter().find(|s| s.id == id)
    }

    pub fn severity_of(&self, id: &str) -> Option<Severity> {
        self.get(id).map(|s| s.severity)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Symptom> {
        self.symptoms.iter()
    }

    pub fn len(&self) -> usize {
        self.symptoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symptoms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symptom(id: &str, severity: Severity) -> Symptom {
        Symptom {
            id: id.to_string(),
            name: id.to_uppercase(),
            severity,
        }
    }

    fn catalog(symptoms: Vec<Symptom>) -> SymptomCatalog {
        SymptomCatalog { symptoms }
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = catalog(vec![
            symptom("cough", Severity::Mild),
            symptom("chestpain", Severity::Severe),
        ]);
        catalog.validate().unwrap();

        assert_eq!(catalog.severity_of("chestpain"), Some(Severity::Severe));
        assert!(catalog.get("chestpain").unwrap().is_severe());
        assert_eq!(catalog.severity_of("unknown"), None);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let result = catalog(vec![
            symptom("fever", Severity::Moderate),
            symptom("fever", Severity::Mild),
        ]).validate();
        let err = result.unwrap_err().to_string();
        assert!(err.contains("fever"), "unexpected error: {}", err);
    }

    #[test]
    fn test_rejects_empty_catalog() {
        assert!(catalog(Vec::new()).validate().is_err());
    }
}
