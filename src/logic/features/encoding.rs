//! Encoding Table - categorical value → training-time integer code
//!
//! The encoders artifact stores, per feature, the ordered class list a label
//! encoder was fitted with. A class's code is its index in that list.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::layout::{FeatureKind, FeatureLayout};
use crate::error::{ArtifactError, EncodingError};

/// Encoders artifact as written by training: feature name → ordered classes
pub type EncodersFile = BTreeMap<String, Vec<String>>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncodingTable {
    classes: BTreeMap<String, Vec<String>>,
}

impl EncodingTable {
    pub fn new(classes: EncodersFile) -> Self {
        Self { classes }
    }

    /// Code of `value` for `feature`. Never defaults: an unknown value is a
    /// configuration error because upstream validation should have stopped it.
    pub fn encode(&self, feature: &str, value: &str) -> Result<i64, EncodingError> {
        let classes = self
            .classes
            .get(feature)
            .ok_or_else(|| EncodingError::UnknownFeature(feature.to_string()))?;

        classes
            .iter()
            .position(|c| c == value)
            .map(|i| i as i64)
            .ok_or_else(|| EncodingError::UnknownCategory {
                feature: feature.to_string(),
                value: value.to_string(),
            })
    }

    pub fn features(&self) -> impl Iterator<Item = &str> {
        self.classes.keys().map(String::as_str)
    }

    pub fn classes(&self, feature: &str) -> Option<&[String]> {
        self.classes.get(feature).map(Vec::as_slice)
    }

    /// Every categorical feature the layout uses (and every feature a derived
    /// feature reads) must be encodable for every admissible request value.
    pub fn check_coverage(&self, layout: &FeatureLayout) -> Result<(), ArtifactError> {
        for feature in super::vector::encoded_inputs(layout) {
            for value in feature.categories() {
                self.encode(feature.name(), value)
                    .map_err(|e| ArtifactError::invalid("encoders", e.to_string()))?;
            }
        }

        for feature in layout.of_kind(FeatureKind::Categorical) {
            let classes = self.classes(feature.name()).unwrap_or_default();
            let mut unique = classes.to_vec();
            unique.sort();
            unique.dedup();
            if unique.len() != classes.len() {
                return Err(ArtifactError::invalid(
                    "encoders",
                    format!("duplicate classes for '{}'", feature.name()),
                ));
            }
        }

        Ok(())
    }
}
