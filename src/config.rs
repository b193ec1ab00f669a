//! Configuration module

use std::env;
use std::path::PathBuf;

use crate::constants::{
    DEFAULT_ARTIFACT_DIR, DEFAULT_ENCODERS_FILE, DEFAULT_FEATURE_NAMES_FILE, DEFAULT_MODEL_FILE,
    DEFAULT_PORT, DEFAULT_SCALER_FILE,
};
use crate::logic::ArtifactPaths;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Bind address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Directory holding the training artifacts
    pub artifact_dir: PathBuf,

    pub model_file: String,
    pub scaler_file: String,
    pub encoders_file: String,
    pub feature_names_file: String,

    /// Environment (development, production)
    pub environment: String,

    /// Log output format (pretty, json)
    pub log_format: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),

            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),

            artifact_dir: env::var("ARTIFACT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_ARTIFACT_DIR)),

            model_file: env::var("MODEL_FILE").unwrap_or_else(|_| DEFAULT_MODEL_FILE.to_string()),

            scaler_file: env::var("SCALER_FILE")
                .unwrap_or_else(|_| DEFAULT_SCALER_FILE.to_string()),

            encoders_file: env::var("ENCODERS_FILE")
                .unwrap_or_else(|_| DEFAULT_ENCODERS_FILE.to_string()),

            feature_names_file: env::var("FEATURE_NAMES_FILE")
                .unwrap_or_else(|_| DEFAULT_FEATURE_NAMES_FILE.to_string()),

            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),

            log_format: env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string()),
        }
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn json_logs(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }

    /// Socket address string for the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn artifact_paths(&self) -> ArtifactPaths {
        ArtifactPaths {
            model: self.artifact_dir.join(&self.model_file),
            scaler: self.artifact_dir.join(&self.scaler_file),
            encoders: self.artifact_dir.join(&self.encoders_file),
            feature_names: self.artifact_dir.join(&self.feature_names_file),
        }
    }
}
