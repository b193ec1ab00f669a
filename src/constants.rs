//! Central Constants
//!
//! Single source of truth for service identity and configuration defaults.

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "Student Performance Prediction API";

pub const MISSION: &str =
    "Improve access to quality education for low-income families and rural households";

/// Default listen port
pub const DEFAULT_PORT: u16 = 8000;

/// Default artifact directory, relative to the working directory
pub const DEFAULT_ARTIFACT_DIR: &str = "artifacts";

pub const DEFAULT_MODEL_FILE: &str = "model.json";
pub const DEFAULT_SCALER_FILE: &str = "scaler.json";
pub const DEFAULT_ENCODERS_FILE: &str = "encoders.json";
pub const DEFAULT_FEATURE_NAMES_FILE: &str = "feature_names.json";

/// Default tracing filter when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "equity_score=debug,tower_http=debug";
