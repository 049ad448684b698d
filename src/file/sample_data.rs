// src/file/sample_data.rs
use super::FileHandler;
use crate::config::SampleData;
use std::path::Path;
use std::fs;
use anyhow::{Result, anyhow};

#[derive(Debug)]
pub struct SampleDataFileHandler;

impl SampleDataFileHandler {
    pub fn new() -> Self {
        Self
    }
}

impl FileHandler<SampleData> for SampleDataFileHandler {
    fn load(&self, path: &Path) -> Result<SampleData> {
        if !path.exists() {
            return Err(anyhow!("Sample data file not found: {}", path.display()));
        }
        let content = fs::read_to_string(path)?;
        SampleData::from_ron(&content)
    }
}
