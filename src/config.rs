//! Runtime configuration derived from the environment.

use std::path::PathBuf;

use crate::constants::{DEFAULT_BASE_URL, OUTPUT_FILENAME};

/// Runtime configuration for a sync run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the Trading 212 API, including the version prefix.
    pub base_url: String,
    /// Path of the CSV file to write.
    pub output_path: PathBuf,
}

impl Config {
    /// Build the configuration from environment variables, falling back to
    /// the built-in defaults.
    ///
    /// * `T212_BASE_URL` — API base URL (e.g. the demo environment).
    /// * `T212_OUTPUT_PATH` — where to write the CSV.
    pub fn from_env() -> Self {
        let base_url = std::env::var("T212_BASE_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(|v| v.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let output_path = std::env::var("T212_OUTPUT_PATH")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(OUTPUT_FILENAME));

        Self {
            base_url,
            output_path,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            output_path: PathBuf::from(OUTPUT_FILENAME),
        }
    }
}
