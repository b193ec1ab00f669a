//! Feature Vector - ordered model input built from a validated profile
//!
//! For each feature of the training layout, in order:
//! - categorical → encoding table code
//! - continuous  → raw profile value
//! - derived     → computed from raw values and codes
//!
//! then the fitted scaler transform is applied when one exists for that name.

use serde::{Deserialize, Serialize};

use super::encoding::EncodingTable;
use super::layout::{Feature, FeatureKind, FeatureLayout};
use super::scaler::ScalerParameters;
use crate::error::{ArtifactError, ContractError};
use crate::models::profile::StudentProfile;

// ============================================================================
// FEATURE VECTOR
// ============================================================================

/// Model input with the hash of the layout it was built for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub layout_hash: u32,
    pub values: Vec<f64>,
}

impl FeatureVector {
    pub fn new(layout_hash: u32, values: Vec<f64>) -> Self {
        Self { layout_hash, values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Named values for debug logging
    pub fn to_log_entry(&self, layout: &FeatureLayout) -> serde_json::Value {
        serde_json::json!({
            "layout_hash": format!("{:08x}", self.layout_hash),
            "named_values": layout.features().iter()
                .zip(self.values.iter())
                .map(|(f, v)| (f.name().to_string(), serde_json::json!(*v)))
                .collect::<serde_json::Map<_, _>>(),
        })
    }
}

// ============================================================================
// VECTORIZER
// ============================================================================

/// Categorical features whose codes the layout needs, directly or through a
/// derived feature
pub fn encoded_inputs(layout: &FeatureLayout) -> Vec<Feature> {
    let mut inputs: Vec<Feature> = layout.of_kind(FeatureKind::Categorical).collect();

    if layout.contains(Feature::SupportSystemScore) {
        for dep in [Feature::ParentalInvolvement, Feature::AccessToResources] {
            if !inputs.contains(&dep) {
                inputs.push(dep);
            }
        }
    }

    inputs
}

/// Immutable encode + scale stage of the pipeline
#[derive(Debug, Clone)]
pub struct Vectorizer {
    layout: FeatureLayout,
    encoding: EncodingTable,
    scaler: ScalerParameters,
}

impl Vectorizer {
    /// Cross-check the three artifacts before accepting them
    pub fn new(
        layout: FeatureLayout,
        encoding: EncodingTable,
        scaler: ScalerParameters,
    ) -> Result<Self, ArtifactError> {
        encoding.check_coverage(&layout)?;
        scaler.check_against(&layout)?;

        Ok(Self { layout, encoding, scaler })
    }

    pub fn layout(&self) -> &FeatureLayout {
        &self.layout
    }

    pub fn encoding(&self) -> &EncodingTable {
        &self.encoding
    }

    pub fn scaler(&self) -> &ScalerParameters {
        &self.scaler
    }

    pub fn vectorize(&self, profile: &StudentProfile) -> Result<FeatureVector, ContractError> {
        let mut values = Vec::with_capacity(self.layout.len());

        for feature in self.layout.features() {
            let raw = self.raw_value(*feature, profile)?;

            let value = match self.scaler.get(feature.name()) {
                Some(transform) => transform.apply(raw),
                None if feature.kind() == FeatureKind::Continuous => {
                    return Err(ContractError::MissingScaler(feature.name().to_string()));
                }
                None => raw,
            };

            values.push(value);
        }

        if values.len() != self.layout.len() {
            return Err(ContractError::LengthMismatch {
                expected: self.layout.len(),
                actual: values.len(),
            });
        }

        Ok(FeatureVector::new(self.layout.hash(), values))
    }

    fn code(&self, feature: Feature, value: &str) -> Result<f64, ContractError> {
        Ok(self.encoding.encode(feature.name(), value)? as f64)
    }

    fn raw_value(&self, feature: Feature, p: &StudentProfile) -> Result<f64, ContractError> {
        let value = match feature {
            Feature::HoursStudied => p.hours_studied,
            Feature::Attendance => p.attendance,
            Feature::SleepHours => p.sleep_hours,
            Feature::PreviousScores => p.previous_scores,
            Feature::TutoringSessions => p.tutoring_sessions,
            Feature::PhysicalActivity => p.physical_activity,

            Feature::ParentalInvolvement => self.code(feature, p.parental_involvement.as_str())?,
            Feature::AccessToResources => self.code(feature, p.access_to_resources.as_str())?,
            Feature::FamilyIncome => self.code(feature, p.family_income.as_str())?,
            Feature::ParentalEducationLevel => {
                self.code(feature, p.parental_education_level.as_str())?
            }
            Feature::InternetAccess => self.code(feature, p.internet_access.as_str())?,

            Feature::StudyEfficiency => p.hours_studied / (p.attendance + 1.0),
            Feature::SupportSystemScore => {
                self.code(Feature::ParentalInvolvement, p.parental_involvement.as_str())?
                    + p.tutoring_sessions
                    + self.code(Feature::AccessToResources, p.access_to_resources.as_str())?
            }
            Feature::WellbeingScore => p.sleep_hours + p.physical_activity,
        };

        Ok(value)
    }
}

// ============================================================================
// TESTS
// ============================================================================
