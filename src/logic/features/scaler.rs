//! Scaler Parameters - per-feature normalization fitted at training time

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::layout::{FeatureKind, FeatureLayout};
use crate::error::ArtifactError;

/// One fitted transform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum ScaleTransform {
    /// z-score: `(x - mean) / scale`
    Standard { mean: f64, scale: f64 },
    /// `(x - min) / (max - min)`
    MinMax { min: f64, max: f64 },
}

impl ScaleTransform {
    pub fn apply(&self, value: f64) -> f64 {
        match *self {
            ScaleTransform::Standard { mean, scale } => (value - mean) / scale,
            ScaleTransform::MinMax { min, max } => (value - min) / (max - min),
        }
    }

    pub fn method(&self) -> &'static str {
        match self {
            ScaleTransform::Standard { .. } => "standard",
            ScaleTransform::MinMax { .. } => "min_max",
        }
    }

    fn check(&self) -> Result<(), String> {
        match *self {
            ScaleTransform::Standard { mean, scale } => {
                if !mean.is_finite() || !scale.is_finite() {
                    return Err("non-finite standard parameters".to_string());
                }
                if scale <= 0.0 {
                    return Err(format!("standard scale must be positive, got {}", scale));
                }
            }
            ScaleTransform::MinMax { min, max } => {
                if !min.is_finite() || !max.is_finite() {
                    return Err("non-finite min_max parameters".to_string());
                }
                if max <= min {
                    return Err(format!("min_max requires max > min, got [{}, {}]", min, max));
                }
            }
        }
        Ok(())
    }
}

/// Scaler artifact: feature name → transform
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScalerParameters {
    pub features: BTreeMap<String, ScaleTransform>,
}

impl ScalerParameters {
    pub fn get(&self, feature: &str) -> Option<&ScaleTransform> {
        self.features.get(feature)
    }

    /// Distinct scaling methods in use, for model info
    pub fn methods(&self) -> Vec<&'static str> {
        let mut methods: Vec<&'static str> = self.features.values().map(|t| t.method()).collect();
        methods.sort_unstable();
        methods.dedup();
        methods
    }

    /// Continuous features must be scaled; every entry must name a layout
    /// feature and hold usable parameters.
    pub fn check_against(&self, layout: &FeatureLayout) -> Result<(), ArtifactError> {
        for feature in layout.of_kind(FeatureKind::Continuous) {
            if !self.features.contains_key(feature.name()) {
                return Err(ArtifactError::invalid(
                    "scaler",
                    format!("missing parameters for continuous feature '{}'", feature.name()),
                ));
            }
        }

        for (name, transform) in &self.features {
            let known = layout.features().iter().any(|f| f.name() == name);
            if !known {
                return Err(ArtifactError::invalid(
                    "scaler",
                    format!("parameters for '{}' which is not in the feature list", name),
                ));
            }
            transform
                .check()
                .map_err(|reason| ArtifactError::invalid("scaler", format!("{}: {}", name, reason)))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::features::layout::Feature;

    #[test]
    fn test_standard_transform() {
        let t = ScaleTransform::Standard { mean: 10.0, scale: 2.0 };
        assert_eq!(t.apply(14.0), 2.0);
        assert_eq!(t.apply(10.0), 0.0);
    }

    #[test]
    fn test_min_max_transform() {
        let t = ScaleTransform::MinMax { min: 0.0, max: 20.0 };
        assert_eq!(t.apply(5.0), 0.25);
        assert_eq!(t.apply(20.0), 1.0);
    }

    #[test]
    fn test_deserialize_tagged_methods() {
        let json = r#"{"features": {
            "Hours_Studied": {"method": "standard", "mean": 9.85, "scale": 4.12},
            "Attendance": {"method": "min_max", "min": 0.0, "max": 100.0}
        }}"#;
        let params: ScalerParameters = serde_json::from_str(json).unwrap();
        assert_eq!(params.methods(), vec!["min_max", "standard"]);
        assert!(matches!(params.get("Attendance"), Some(ScaleTransform::MinMax { .. })));
    }

    #[test]
    fn test_check_requires_continuous_coverage() {
        let layout = FeatureLayout::new(vec![Feature::HoursStudied, Feature::FamilyIncome]).unwrap();
        let params = ScalerParameters::default();
        let err = params.check_against(&layout).unwrap_err();
        assert!(err.to_string().contains("Hours_Studied"));
    }

    #[test]
    fn test_check_rejects_degenerate_parameters() {
        let layout = FeatureLayout::new(vec![Feature::HoursStudied]).unwrap();
        let mut params = ScalerParameters::default();
        params.features.insert(
            "Hours_Studied".to_string(),
            ScaleTransform::Standard { mean: 1.0, scale: 0.0 },
        );
        assert!(params.check_against(&layout).is_err());

        params.features.insert(
            "Hours_Studied".to_string(),
            ScaleTransform::MinMax { min: 5.0, max: 5.0 },
        );
        assert!(params.check_against(&layout).is_err());
    }

    #[test]
    fn test_check_rejects_unknown_entries() {
        let layout = FeatureLayout::new(vec![Feature::HoursStudied]).unwrap();
        let mut params = ScalerParameters::default();
        params.features.insert(
            "Hours_Studied".to_string(),
            ScaleTransform::Standard { mean: 1.0, scale: 1.0 },
        );
        params.features.insert(
            "Sleep_Hours".to_string(),
            ScaleTransform::Standard { mean: 7.0, scale: 1.5 },
        );
        assert!(params.check_against(&layout).is_err());
    }
}
