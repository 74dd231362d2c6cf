use std::path::PathBuf;

use anyhow::{Context, Result};

/// Process settings loaded from environment variables (and `.env` when present).
///
/// Command-line flags take precedence over everything here.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Word list used when `--dictionary` is not given. Falls back to the embedded list.
    pub dictionary_path: Option<PathBuf>,
    /// Seed used when `--seed` is not given.
    pub seed: Option<u64>,
    pub rust_log: String,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Settings {
            dictionary_path: optional_env("CHBS_DICTIONARY").map(PathBuf::from),
            seed: optional_env("CHBS_SEED")
                .map(|raw| raw.parse::<u64>())
                .transpose()
                .context("CHBS_SEED must be an unsigned integer")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string()),
        })
    }
}

/// Returns the variable's value, treating unset and blank the same way.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
