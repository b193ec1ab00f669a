//! Feature Layout - Centralized Feature Definition
//!
//! **This file controls the feature schema the serving code understands.**
//!
//! `Feature` is the catalogue of every model input the vectorizer knows how to
//! produce. The feature-name artifact written by training selects and orders a
//! subset of it; that ordering is a `FeatureLayout`.
//!
//! ## Rules
//! 1. Add or rename a catalogue entry → increment LAYOUT_VERSION
//! 2. The coefficient order of a model is the order of its `FeatureLayout`.
//!    Reordering silently corrupts predictions, so vectors carry the layout
//!    hash and the predictor refuses a vector built for another layout.

use std::collections::HashSet;

use crc32fast::Hasher;
use serde::{Deserialize, Serialize};

use crate::error::ArtifactError;
use crate::models::profile::{EducationLevel, InternetAccess, Tier};

// ============================================================================
// LAYOUT VERSION
// ============================================================================

/// Catalogue version, hashed together with the feature order
pub const LAYOUT_VERSION: u8 = 1;

// ============================================================================
// FEATURE CATALOGUE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureKind {
    /// Raw numeric profile field
    Continuous,
    /// Profile field encoded through the encoding table
    Categorical,
    /// Engineered from other fields at serving time
    Derived,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    HoursStudied,
    Attendance,
    ParentalInvolvement,
    AccessToResources,
    SleepHours,
    PreviousScores,
    TutoringSessions,
    FamilyIncome,
    ParentalEducationLevel,
    InternetAccess,
    PhysicalActivity,
    StudyEfficiency,
    SupportSystemScore,
    WellbeingScore,
}

impl Feature {
    pub const ALL: [Feature; 14] = [
        Feature::HoursStudied,
        Feature::Attendance,
        Feature::ParentalInvolvement,
        Feature::AccessToResources,
        Feature::SleepHours,
        Feature::PreviousScores,
        Feature::TutoringSessions,
        Feature::FamilyIncome,
        Feature::ParentalEducationLevel,
        Feature::InternetAccess,
        Feature::PhysicalActivity,
        Feature::StudyEfficiency,
        Feature::SupportSystemScore,
        Feature::WellbeingScore,
    ];

    /// Column name used by the training pipeline
    pub fn name(&self) -> &'static str {
        match self {
            Feature::HoursStudied => "Hours_Studied",
            Feature::Attendance => "Attendance",
            Feature::ParentalInvolvement => "Parental_Involvement",
            Feature::AccessToResources => "Access_to_Resources",
            Feature::SleepHours => "Sleep_Hours",
            Feature::PreviousScores => "Previous_Scores",
            Feature::TutoringSessions => "Tutoring_Sessions",
            Feature::FamilyIncome => "Family_Income",
            Feature::ParentalEducationLevel => "Parental_Education_Level",
            Feature::InternetAccess => "Internet_Access",
            Feature::PhysicalActivity => "Physical_Activity",
            Feature::StudyEfficiency => "Study_Efficiency",
            Feature::SupportSystemScore => "Support_System_Score",
            Feature::WellbeingScore => "Wellbeing_Score",
        }
    }

    pub fn kind(&self) -> FeatureKind {
        match self {
            Feature::ParentalInvolvement
            | Feature::AccessToResources
            | Feature::FamilyIncome
            | Feature::ParentalEducationLevel
            | Feature::InternetAccess => FeatureKind::Categorical,
            Feature::StudyEfficiency
            | Feature::SupportSystemScore
            | Feature::WellbeingScore => FeatureKind::Derived,
            _ => FeatureKind::Continuous,
        }
    }

    /// Admissible request values of a categorical feature (empty otherwise)
    pub fn categories(&self) -> &'static [&'static str] {
        match self {
            Feature::ParentalInvolvement
            | Feature::AccessToResources
            | Feature::FamilyIncome => &Tier::VALUES,
            Feature::ParentalEducationLevel => &EducationLevel::VALUES,
            Feature::InternetAccess => &InternetAccess::VALUES,
            _ => &[],
        }
    }

    pub fn from_name(name: &str) -> Option<Feature> {
        Feature::ALL.iter().copied().find(|f| f.name() == name)
    }
}

// ============================================================================
// LAYOUT HASH
// ============================================================================

/// CRC32 over the catalogue version and the ordered feature names
pub fn compute_layout_hash(features: &[Feature]) -> u32 {
    let mut hasher = Hasher::new();

    hasher.update(&[LAYOUT_VERSION]);

    for feature in features {
        hasher.update(feature.name().as_bytes());
        hasher.update(&[0]); // Separator
    }

    hasher.finalize()
}

// ============================================================================
// FEATURE LAYOUT (training order)
// ============================================================================

/// Ordered feature list fixed at training time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureLayout {
    features: Vec<Feature>,
    hash: u32,
}

impl FeatureLayout {
    pub fn new(features: Vec<Feature>) -> Result<Self, ArtifactError> {
        if features.is_empty() {
            return Err(ArtifactError::invalid("feature_names", "feature list is empty"));
        }

        let mut seen = HashSet::new();
        for feature in &features {
            if !seen.insert(*feature) {
                return Err(ArtifactError::invalid(
                    "feature_names",
                    format!("duplicate feature '{}'", feature.name()),
                ));
            }
        }

        let hash = compute_layout_hash(&features);
        Ok(Self { features, hash })
    }

    /// Resolve training column names against the catalogue
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, ArtifactError> {
        let features = names
            .iter()
            .map(|name| {
                Feature::from_name(name.as_ref()).ok_or_else(|| {
                    ArtifactError::invalid(
                        "feature_names",
                        format!("unknown feature '{}'", name.as_ref()),
                    )
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(features)
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn hash(&self) -> u32 {
        self.hash
    }

    pub fn contains(&self, feature: Feature) -> bool {
        self.features.contains(&feature)
    }

    pub fn index_of(&self, feature: Feature) -> Option<usize> {
        self.features.iter().position(|f| *f == feature)
    }

    pub fn names(&self) -> Vec<String> {
        self.features.iter().map(|f| f.name().to_string()).collect()
    }

    pub fn of_kind(&self, kind: FeatureKind) -> impl Iterator<Item = Feature> + '_ {
        self.features.iter().copied().filter(move |f| f.kind() == kind)
    }
}

// ============================================================================
// LAYOUT INFO
// ============================================================================

/// Layout summary for logging and `/model-info`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutInfo {
    pub version: u8,
    pub hash: String,
    pub feature_count: usize,
    pub feature_names: Vec<String>,
}

impl From<&FeatureLayout> for LayoutInfo {
    fn from(layout: &FeatureLayout) -> Self {
        Self {
            version: LAYOUT_VERSION,
            hash: format!("{:08x}", layout.hash()),
            feature_count: layout.len(),
            feature_names: layout.names(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
