use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every knob has a default — the service boots with no environment at all
/// and degrades keyless if no credential can be resolved.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Optional override that skips Secrets Manager entirely.
    pub anthropic_api_key: Option<String>,
    /// Secrets Manager secret holding the LLM API key.
    pub secret_name: String,
    pub aws_region: String,
    /// Directory candidate records are written to.
    pub output_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            anthropic_api_key: std::env::var("ANTHROPIC_API_KEY")
                .ok()
                .filter(|key| !key.is_empty()),
            secret_name: std::env::var("API_KEY_SECRET_NAME")
                .unwrap_or_else(|_| "TalentScoutAPIKey".to_string()),
            aws_region: std::env::var("AWS_REGION").unwrap_or_else(|_| "eu-north-1".to_string()),
            output_dir: std::env::var("CANDIDATE_DATA_DIR")
                .unwrap_or_else(|_| "candidate_data".to_string())
                .into(),
        })
    }
}
