//! Inference - feature vector → clamped exam score
//!
//! Linear extrapolation can leave the physical score range for extreme but
//! valid inputs, so every prediction is clamped into [SCORE_MIN, SCORE_MAX].

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::artifact::ScoreModel;
use crate::error::{ArtifactError, ContractError};
use crate::logic::features::{FeatureLayout, FeatureVector};

pub const SCORE_MIN: f64 = 0.0;
pub const SCORE_MAX: f64 = 100.0;

/// Prediction output
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Score in [SCORE_MIN, SCORE_MAX]
    pub score: f64,
    /// Model output before clamping
    pub raw_score: f64,
    pub clamped: bool,
}

impl Prediction {
    pub fn from_raw(raw_score: f64) -> Self {
        let score = raw_score.clamp(SCORE_MIN, SCORE_MAX);
        Self {
            score,
            raw_score,
            clamped: score != raw_score,
        }
    }
}

/// Model bound to the feature layout it was trained on
#[derive(Debug, Clone)]
pub struct Predictor {
    model: Arc<dyn ScoreModel>,
    layout_hash: u32,
}

impl Predictor {
    pub fn new(model: Arc<dyn ScoreModel>, layout: &FeatureLayout) -> Result<Self, ArtifactError> {
        if model.n_features() != layout.len() {
            return Err(ArtifactError::invalid(
                "model",
                format!(
                    "{} coefficients for {} features",
                    model.n_features(),
                    layout.len()
                ),
            ));
        }

        Ok(Self {
            model,
            layout_hash: layout.hash(),
        })
    }

    pub fn model(&self) -> &dyn ScoreModel {
        self.model.as_ref()
    }

    pub fn predict(&self, vector: &FeatureVector) -> Result<Prediction, ContractError> {
        if vector.len() != self.model.n_features() {
            return Err(ContractError::LengthMismatch {
                expected: self.model.n_features(),
                actual: vector.len(),
            });
        }
        if vector.layout_hash != self.layout_hash {
            return Err(ContractError::LayoutMismatch {
                expected: self.layout_hash,
                actual: vector.layout_hash,
            });
        }

        let raw = self.model.score(vector.as_slice());
        if !raw.is_finite() {
            return Err(ContractError::NonFiniteScore(raw));
        }

        let prediction = Prediction::from_raw(raw);
        if prediction.clamped {
            tracing::debug!("Raw prediction {:.3} clamped to {:.1}", raw, prediction.score);
        }

        Ok(prediction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::features::Feature;
    use crate::logic::model::LinearModel;

    fn layout() -> FeatureLayout {
        FeatureLayout::new(vec![Feature::HoursStudied, Feature::Attendance]).unwrap()
    }

    fn predictor(coefficients: Vec<f64>, intercept: f64) -> Predictor {
        Predictor::new(Arc::new(LinearModel::new(coefficients, intercept)), &layout()).unwrap()
    }

    fn vector(values: Vec<f64>) -> FeatureVector {
        FeatureVector::new(layout().hash(), values)
    }

    #[test]
    fn test_dot_product_plus_intercept() {
        let p = predictor(vec![2.0, 3.0], 50.0).predict(&vector(vec![1.0, -1.0])).unwrap();
        assert_eq!(p.score, 49.0);
        assert!(!p.clamped);
    }

    #[test]
    fn test_clamps_both_bounds() {
        let high = predictor(vec![100.0, 100.0], 50.0).predict(&vector(vec![3.0, 3.0])).unwrap();
        assert_eq!(high.score, SCORE_MAX);
        assert!(high.clamped);
        assert_eq!(high.raw_score, 650.0);

        let low = predictor(vec![100.0, 100.0], 50.0).predict(&vector(vec![-3.0, -3.0])).unwrap();
        assert_eq!(low.score, SCORE_MIN);
        assert!(low.clamped);
    }

    #[test]
    fn test_rejects_wrong_length() {
        let err = predictor(vec![1.0, 1.0], 0.0).predict(&vector(vec![1.0])).unwrap_err();
        assert_eq!(err, ContractError::LengthMismatch { expected: 2, actual: 1 });
    }

    #[test]
    fn test_rejects_foreign_layout() {
        let foreign = FeatureVector::new(layout().hash() ^ 1, vec![1.0, 1.0]);
        let err = predictor(vec![1.0, 1.0], 0.0).predict(&foreign).unwrap_err();
        assert!(matches!(err, ContractError::LayoutMismatch { .. }));
    }

    #[test]
    fn test_non_finite_score_is_contract_violation() {
        let err = predictor(vec![1.0, 1.0], 0.0)
            .predict(&vector(vec![f64::INFINITY, f64::NEG_INFINITY]))
            .unwrap_err();
        assert!(matches!(err, ContractError::NonFiniteScore(_)));
    }

    #[test]
    fn test_coefficient_count_checked_at_construction() {
        let model = Arc::new(LinearModel::new(vec![1.0, 2.0, 3.0], 0.0));
        assert!(Predictor::new(model, &layout()).is_err());
    }
}
