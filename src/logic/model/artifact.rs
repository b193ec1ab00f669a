//! Model Artifact - trained parameters consumed at serving time
//!
//! The predictor only needs a deterministic `score(features)`; a linear
//! regressor is the artifact training currently ships.

use std::fmt::Debug;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ArtifactError;

/// Model types training exports as plain coefficients + intercept
pub const LINEAR_MODEL_TYPES: &[&str] = &["linear_regression", "ridge", "lasso", "elastic_net"];

// ============================================================================
// SCORE MODEL TRAIT
// ============================================================================

/// Any deterministic regressor over an ordered feature vector
pub trait ScoreModel: Debug + Send + Sync {
    fn model_type(&self) -> &str;
    fn n_features(&self) -> usize;
    fn score(&self, features: &[f64]) -> f64;
}

// ============================================================================
// MODEL FILE
// ============================================================================

/// `model.json` as written by training
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelFile {
    pub model_type: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub trained_at: Option<DateTime<Utc>>,
    pub intercept: f64,
    pub coefficients: Vec<f64>,
}

/// Metadata kept after loading
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub model_type: String,
    pub version: Option<String>,
    pub trained_at: Option<DateTime<Utc>>,
    pub features: usize,
    pub loaded_at: DateTime<Utc>,
}

// ============================================================================
// LINEAR MODEL
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel {
    model_type: String,
    coefficients: Vec<f64>,
    intercept: f64,
}

impl LinearModel {
    pub fn new(coefficients: Vec<f64>, intercept: f64) -> Self {
        Self {
            model_type: "linear_regression".to_string(),
            coefficients,
            intercept,
        }
    }

    pub fn from_file(file: &ModelFile) -> Result<Self, ArtifactError> {
        if !LINEAR_MODEL_TYPES.contains(&file.model_type.as_str()) {
            return Err(ArtifactError::invalid(
                "model",
                format!("unsupported model_type '{}'", file.model_type),
            ));
        }
        if file.coefficients.is_empty() {
            return Err(ArtifactError::invalid("model", "no coefficients"));
        }
        if !file.intercept.is_finite() || file.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(ArtifactError::invalid("model", "non-finite coefficient or intercept"));
        }

        Ok(Self {
            model_type: file.model_type.clone(),
            coefficients: file.coefficients.clone(),
            intercept: file.intercept,
        })
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }
}

impl ScoreModel for LinearModel {
    fn model_type(&self) -> &str {
        &self.model_type
    }

    fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    fn score(&self, features: &[f64]) -> f64 {
        self.intercept
            + self
                .coefficients
                .iter()
                .zip(features)
                .map(|(c, x)| c * x)
                .sum::<f64>()
    }
}

impl ModelMetadata {
    pub fn from_file(file: &ModelFile) -> Self {
        Self {
            model_type: file.model_type.clone(),
            version: file.version.clone(),
            trained_at: file.trained_at,
            features: file.coefficients.len(),
            loaded_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(model_type: &str, coefficients: Vec<f64>) -> ModelFile {
        ModelFile {
            model_type: model_type.to_string(),
            version: Some("1.0.0".to_string()),
            trained_at: None,
            intercept: 1.0,
            coefficients,
        }
    }

    #[test]
    fn test_linear_score() {
        let model = LinearModel::new(vec![0.5, -2.0, 1.0], 10.0);
        assert_eq!(model.score(&[2.0, 1.0, 3.0]), 10.0 + 1.0 - 2.0 + 3.0);
        assert_eq!(model.n_features(), 3);
    }

    #[test]
    fn test_from_file_accepts_linear_family() {
        for kind in LINEAR_MODEL_TYPES {
            let model = LinearModel::from_file(&file(kind, vec![1.0])).unwrap();
            assert_eq!(model.model_type(), *kind);
        }
    }

    #[test]
    fn test_from_file_rejects_bad_artifacts() {
        assert!(LinearModel::from_file(&file("random_forest", vec![1.0])).is_err());
        assert!(LinearModel::from_file(&file("linear_regression", vec![])).is_err());
        assert!(LinearModel::from_file(&file("linear_regression", vec![f64::NAN])).is_err());
    }

    #[test]
    fn test_model_file_parses_without_optional_fields() {
        let json = r#"{"model_type": "ridge", "intercept": 67.2, "coefficients": [1.0, 2.0]}"#;
        let file: ModelFile = serde_json::from_str(json).unwrap();
        assert!(file.version.is_none());
        assert_eq!(ModelMetadata::from_file(&file).features, 2);
    }
}
