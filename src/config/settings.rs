// src/config/settings.rs
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use anyhow::{Result, Context};
use config::{Config, Environment, File};

const ENV_PREFIX: &str = "HEALTHSYNC";

/// Runtime knobs read once at startup from defaults, an optional settings
/// file and `HEALTHSYNC_*` environment variables (in increasing priority).
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Settings {
    pub analysis_delay_ms: u64,
    pub toast_duration_ms: u64,
    pub window_width: f32,
    pub window_height: f32,
    pub log_filter: String,
    #[serde(default)]
    pub sample_data: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            analysis_delay_ms: 2000,
            toast_duration_ms: 4000,
            window_width: 1280.0,
            window_height: 860.0,
            log_filter: "info".to_string(),
            sample_data: None,
        }
    }
}

impl Settings {
    /// `<config dir>/healthsync/settings.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("healthsync").join("settings.toml"))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(Self::default_path().as_deref())
    }

    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default("analysis_delay_ms", defaults.analysis_delay_ms as i64)?
            .set_default("toast_duration_ms", defaults.toast_duration_ms as i64)?
            .set_default("window_width", defaults.window_width as f64)?
            .set_default("window_height", defaults.window_height as f64)?
            .set_default("log_filter", defaults.log_filter)?;

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(false));
        }

        builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .context("Failed to read settings")?
            .try_deserialize()
            .context("Invalid settings")
    }

    pub fn analysis_delay(&self) -> Duration {
        Duration::from_millis(self.analysis_delay_ms)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_without_file() {
        let dir = tempdir().unwrap();
        let settings = Settings::load_from(Some(&dir.path().join("missing.toml"))).unwrap();

        assert_eq!(settings.analysis_delay(), Duration::from_secs(2));
        assert_eq!(settings.toast_duration(), Duration::from_secs(4));
        assert_eq!(settings.log_filter, "info");
        assert!(settings.sample_data.is_none());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, concat!(
            "analysis_delay_ms = 250\n",
            "window_width = 900.0\n",
            "sample_data = \"/tmp/demo.ron\"\n",
        )).unwrap();

        let settings = Settings::load_from(Some(&path)).unwrap();
        assert_eq!(settings.analysis_delay_ms, 250);
        assert_eq!(settings.window_width, 900.0);
        assert_eq!(settings.window_height, 860.0);
        assert_eq!(settings.sample_data, Some(PathBuf::from("/tmp/demo.ron")));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "analysis_delay_ms = \"soon\"\n").unwrap();

        assert!(Settings::load_from(Some(&path)).is_err());
    }
}
