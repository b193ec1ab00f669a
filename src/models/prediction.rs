//! Response models

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::logic::artifacts::ArtifactChecksums;
use crate::logic::features::LayoutInfo;
use crate::logic::insight::{ConfidenceLevel, Insights, MissionInsights, PerformanceLevel};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    /// Predicted exam score (0-100), two decimals
    pub predicted_score: f64,
    pub performance_level: PerformanceLevel,
    pub recommendations: Vec<String>,
    pub equity_risk_factors: Vec<String>,
    pub mission_insights: MissionInsights,
    pub confidence_level: ConfidenceLevel,
}

impl PredictionResponse {
    pub fn assemble(predicted_score: f64, insights: Insights) -> Self {
        Self {
            predicted_score: round_score(predicted_score),
            performance_level: insights.performance_level,
            recommendations: insights.recommendations,
            equity_risk_factors: insights.equity_risk_factors,
            mission_insights: insights.mission_insights,
            confidence_level: insights.confidence_level,
        }
    }
}

/// Two-decimal rounding; stays inside [0, 100] for clamped input
pub fn round_score(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub is_model_loaded: bool,
    pub version: String,
    pub timestamp: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub message: String,
    pub mission: String,
    pub version: String,
    pub health_check: String,
    pub model_info: String,
}

/// Accepted domain of one request field
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InputDomain {
    Range { min: f64, max: f64 },
    Categories(Vec<String>),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfo {
    pub model_type: String,
    pub model_version: Option<String>,
    pub trained_at: Option<DateTime<Utc>>,
    pub loaded_at: DateTime<Utc>,
    pub features_count: usize,
    pub feature_names: Vec<String>,
    pub categorical_features: Vec<String>,
    pub scaling_methods: Vec<String>,
    pub layout: LayoutInfo,
    pub checksums: Option<ArtifactChecksums>,
    pub mission: String,
    pub prediction_range: String,
    pub supported_inputs: BTreeMap<String, InputDomain>,
}
