//! Error handling
//!
//! Each failure class stays distinguishable all the way to the caller:
//! input validation (422), model unavailable (503) and internal contract
//! violations (500).

use std::path::PathBuf;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

// ============================================================================
// VALIDATION
// ============================================================================

/// One violated constraint on one request field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    /// Field path in the request body
    pub field: String,
    pub message: String,
    /// `required`, `range` or `category`
    pub constraint: String,
}

#[derive(Debug, Clone, Error)]
#[error("request validation failed on {} field(s)", .violations.len())]
pub struct ValidationFailure {
    pub violations: Vec<FieldViolation>,
}

impl ValidationFailure {
    pub fn single(violation: FieldViolation) -> Self {
        Self { violations: vec![violation] }
    }
}

// ============================================================================
// CORE PIPELINE
// ============================================================================

/// Unknown field or inadmissible category handed to the encoding table
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EncodingError {
    #[error("no encoder for feature '{0}'")]
    UnknownFeature(String),
    #[error("value '{value}' is not a known category of '{feature}'")]
    UnknownCategory { feature: String, value: String },
}

/// Serving-time drift between the loaded artifacts and the pipeline
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ContractError {
    #[error("feature vector has {actual} values, model expects {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("feature layout mismatch: expected hash {expected:08x}, got {actual:08x}")]
    LayoutMismatch { expected: u32, actual: u32 },

    #[error("encoding failed: {0}")]
    Encoding(#[from] EncodingError),

    #[error("no scaler entry for continuous feature '{0}'")]
    MissingScaler(String),

    #[error("model produced a non-finite score ({0})")]
    NonFiniteScore(f64),
}

/// Startup failure while loading training artifacts
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid {artifact} artifact: {reason}")]
    Invalid {
        artifact: &'static str,
        reason: String,
    },
}

impl ArtifactError {
    pub fn invalid(artifact: &'static str, reason: impl Into<String>) -> Self {
        ArtifactError::Invalid {
            artifact,
            reason: reason.into(),
        }
    }
}

/// Everything the serving facade can report for one request
#[derive(Debug, Clone, Error)]
pub enum ServeError {
    #[error(transparent)]
    Validation(#[from] ValidationFailure),

    #[error("model not loaded: {reason}")]
    ModelUnavailable { reason: String },

    #[error("internal contract violation: {0}")]
    Contract(#[from] ContractError),
}

// ============================================================================
// HTTP
// ============================================================================

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub enum AppError {
    // Request errors
    Validation(Vec<FieldViolation>),
    MalformedBody(String),

    // Readiness
    ModelNotLoaded(String),

    // Generic errors
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, mut body) = match &self {
            AppError::Validation(violations) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({
                    "error": "Validation Error",
                    "message": "Please check your input values and ensure they meet the specified constraints",
                    "details": violations,
                }),
            ),
            AppError::MalformedBody(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({
                    "error": "Validation Error",
                    "message": msg,
                    "details": [],
                }),
            ),
            AppError::ModelNotLoaded(reason) => {
                tracing::warn!("Prediction rejected, model not loaded: {}", reason);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    json!({
                        "error": "Model not loaded. Please ensure model files are available.",
                    }),
                )
            }
            AppError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal server error" }),
                )
            }
        };

        body["status"] = json!(status.as_u16());

        (status, Json(body)).into_response()
    }
}

impl From<ServeError> for AppError {
    fn from(err: ServeError) -> Self {
        match err {
            ServeError::Validation(failure) => AppError::Validation(failure.violations),
            ServeError::ModelUnavailable { reason } => AppError::ModelNotLoaded(reason),
            ServeError::Contract(e) => AppError::InternalError(e.to_string()),
        }
    }
}

impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        AppError::MalformedBody(rejection.body_text())
    }
}
