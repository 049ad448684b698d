// src/file/mod.rs
use anyhow::{Result, Context};
use std::path::Path;
use tracing::info;
use crate::config::SampleData;

pub mod sample_data;

// Core trait for file operations
pub trait FileHandler<T> {
    fn load(&self, path: &Path) -> Result<T>;
}

/// Picks the sample data source: the override file when one is configured,
/// otherwise the copy embedded in the binary.
pub fn load_sample_data(override_path: Option<&Path>) -> Result<SampleData> {
    match override_path {
        Some(path) => {
            info!(path = %path.display(), "Loading sample data override");
            sample_data::SampleDataFileHandler::new()
                .load(path)
                .with_context(|| format!("Failed to load sample data from {}", path.display()))
        }
        None => {
            info!("Using embedded sample data");
            SampleData::embedded()
        }
    }
}
