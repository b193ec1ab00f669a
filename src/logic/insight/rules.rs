//! Insight Rules & Thresholds
//!
//! Rule tables and cut points for the insight engine. No evaluation logic
//! lives here; `engine.rs` walks these tables in declaration order, which is
//! the order messages appear in a response.

use super::types::PerformanceLevel;
use crate::logic::model::SCORE_MIN;
use crate::models::profile::{EducationLevel, InternetAccess, StudentProfile, Tier};

// ============================================================================
// PERFORMANCE BANDS
// ============================================================================

/// Lower bound (inclusive) of a performance band
#[derive(Debug, Clone, Copy)]
pub struct PerformanceBand {
    pub min_score: f64,
    pub level: PerformanceLevel,
}

/// Descending cut points; the last band starts at SCORE_MIN so every clamped
/// score lands in exactly one band.
pub const PERFORMANCE_BANDS: [PerformanceBand; 5] = [
    PerformanceBand { min_score: 85.0, level: PerformanceLevel::Excellent },
    PerformanceBand { min_score: 75.0, level: PerformanceLevel::Good },
    PerformanceBand { min_score: 65.0, level: PerformanceLevel::Average },
    PerformanceBand { min_score: 50.0, level: PerformanceLevel::BelowAverage },
    PerformanceBand { min_score: SCORE_MIN, level: PerformanceLevel::NeedsSignificantImprovement },
];

// ============================================================================
// EQUITY RISK RULES
// ============================================================================

/// One predicate over one profile field
#[derive(Clone, Copy)]
pub struct RiskRule {
    pub id: &'static str,
    pub field: &'static str,
    pub applies: fn(&StudentProfile) -> bool,
    /// Contribution to intervention priority
    pub weight: u32,
    pub message: &'static str,
}

/// Attendance below this is treated as chronic absenteeism
pub const CHRONIC_ABSENCE_ATTENDANCE: f64 = 60.0;

pub const EQUITY_RISK_RULES: &[RiskRule] = &[
    RiskRule {
        id: "LOW_FAMILY_INCOME",
        field: "family_income",
        applies: |p| p.family_income == Tier::Low,
        weight: 2,
        message: "Low family income may limit access to educational resources and opportunities",
    },
    RiskRule {
        id: "LOW_RESOURCE_ACCESS",
        field: "access_to_resources",
        applies: |p| p.access_to_resources == Tier::Low,
        weight: 2,
        message: "Limited access to educational resources requires community support programs",
    },
    RiskRule {
        id: "NO_INTERNET",
        field: "internet_access",
        applies: |p| p.internet_access == InternetAccess::No,
        weight: 2,
        message: "Lack of internet access creates significant barriers in digital learning environment",
    },
    RiskRule {
        id: "LIMITED_PARENTAL_EDUCATION",
        field: "parental_education_level",
        applies: |p| p.parental_education_level == EducationLevel::HighSchool,
        weight: 1,
        message: "Limited parental education may require additional family engagement programs",
    },
    RiskRule {
        id: "LOW_PARENTAL_INVOLVEMENT",
        field: "parental_involvement",
        applies: |p| p.parental_involvement == Tier::Low,
        weight: 1,
        message: "Low parental involvement indicates need for family engagement initiatives",
    },
    RiskRule {
        id: "CHRONIC_ABSENCE",
        field: "attendance",
        applies: |p| p.attendance < CHRONIC_ABSENCE_ATTENDANCE,
        weight: 2,
        message: "Chronic absenteeism signals barriers to regular school participation",
    },
];

// ============================================================================
// RECOMMENDATION RULES
// ============================================================================

#[derive(Clone, Copy)]
pub struct RecommendationRule {
    pub id: &'static str,
    pub field: &'static str,
    pub applies: fn(&StudentProfile) -> bool,
    pub message: &'static str,
}

pub const RECOMMENDATION_RULES: &[RecommendationRule] = &[
    RecommendationRule {
        id: "STUDY_TIME",
        field: "hours_studied",
        applies: |p| p.hours_studied < 5.0,
        message: "Increase weekly study time to at least 5-6 hours for better performance",
    },
    RecommendationRule {
        id: "ATTENDANCE",
        field: "attendance",
        applies: |p| p.attendance < 80.0,
        message: "Improve attendance rate - aim for at least 85% to maximize learning",
    },
    RecommendationRule {
        id: "SLEEP",
        field: "sleep_hours",
        applies: |p| p.sleep_hours < 7.0,
        message: "Ensure adequate sleep (7-8 hours) for optimal cognitive performance",
    },
    RecommendationRule {
        id: "TUTORING",
        field: "tutoring_sessions",
        applies: |p| p.tutoring_sessions < 1.0,
        message: "Consider additional tutoring sessions for personalized academic support",
    },
    RecommendationRule {
        id: "PHYSICAL_ACTIVITY",
        field: "physical_activity",
        applies: |p| p.physical_activity < 2.0,
        message: "Include regular physical activity (2-3 hours/week) to improve focus and health",
    },
    RecommendationRule {
        id: "FOUNDATIONS",
        field: "previous_scores",
        applies: |p| p.previous_scores < 70.0,
        message: "Focus on strengthening foundational knowledge in weak subject areas",
    },
];

// ============================================================================
// INTERVENTION PRIORITY
// ============================================================================

/// Summed risk weight at or above this → High priority
pub const HIGH_PRIORITY_WEIGHT: u32 = 5;

/// Summed risk weight at or above this → Medium priority
pub const MEDIUM_PRIORITY_WEIGHT: u32 = 2;

// ============================================================================
// CONFIDENCE
// ============================================================================

/// Fraction of a field's domain at either end that counts as extreme
pub const EXTREME_EDGE_FRACTION: f64 = 0.05;

/// This many extreme fields or more → Low confidence
pub const LOW_CONFIDENCE_EXTREMES: usize = 3;

// ============================================================================
// MISSION TEXT
// ============================================================================

pub fn income_impact(income: Tier) -> &'static str {
    match income {
        Tier::Low => "Economic barriers may significantly impact educational outcomes",
        Tier::Medium => "Moderate economic impact on educational access",
        Tier::High => "Economic factors are supportive of educational success",
    }
}

pub fn resource_access(access: Tier) -> &'static str {
    match access {
        Tier::Low => "Critical resource limitations requiring immediate intervention",
        Tier::Medium => "Moderate resource access with room for improvement",
        Tier::High => "Good access to educational resources supporting success",
    }
}
