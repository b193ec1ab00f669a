use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PerformanceLevel {
    Excellent,
    Good,
    Average,
    #[serde(rename = "Below Average")]
    BelowAverage,
    #[serde(rename = "Needs Significant Improvement")]
    NeedsSignificantImprovement,
}

impl PerformanceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PerformanceLevel::Excellent => "Excellent",
            PerformanceLevel::Good => "Good",
            PerformanceLevel::Average => "Average",
            PerformanceLevel::BelowAverage => "Below Average",
            PerformanceLevel::NeedsSignificantImprovement => "Needs Significant Improvement",
        }
    }
}

/// Ordinal label shared by confidence and intervention priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Level {
    Low,
    Medium,
    High,
}

pub type ConfidenceLevel = Level;
pub type InterventionPriority = Level;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionInsights {
    pub income_impact: String,
    pub resource_access: String,
    pub support_needed: bool,
    pub intervention_priority: InterventionPriority,
}

/// Everything derived from a profile and its predicted score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insights {
    pub performance_level: PerformanceLevel,
    pub confidence_level: ConfidenceLevel,
    pub equity_risk_factors: Vec<String>,
    pub recommendations: Vec<String>,
    pub mission_insights: MissionInsights,
}
