//! Confidence heuristic
//!
//! The model exposes no uncertainty, so confidence is derived from the input:
//! how many continuous fields sit in the outer edge of their declared domain,
//! and whether the score was pinned to a clamp bound.

use super::rules::{EXTREME_EDGE_FRACTION, LOW_CONFIDENCE_EXTREMES};
use super::types::ConfidenceLevel;
use crate::logic::model::{SCORE_MAX, SCORE_MIN};
use crate::models::profile::{ContinuousField, StudentProfile};

/// Continuous fields lying in the outer edge of their domain
pub fn extreme_fields(profile: &StudentProfile) -> Vec<ContinuousField> {
    ContinuousField::ALL
        .iter()
        .copied()
        .filter(|field| {
            let position = field.range().position(profile.continuous(*field));
            position < EXTREME_EDGE_FRACTION || position > 1.0 - EXTREME_EDGE_FRACTION
        })
        .collect()
}

pub fn confidence_level(profile: &StudentProfile, predicted_score: f64) -> ConfidenceLevel {
    let extremes = extreme_fields(profile).len();

    let level = match extremes {
        0 => ConfidenceLevel::High,
        n if n < LOW_CONFIDENCE_EXTREMES => ConfidenceLevel::Medium,
        _ => ConfidenceLevel::Low,
    };

    let at_bound = predicted_score <= SCORE_MIN || predicted_score >= SCORE_MAX;
    if at_bound {
        level.min(ConfidenceLevel::Medium)
    } else {
        level
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::{EducationLevel, InternetAccess, Tier};

    fn typical() -> StudentProfile {
        StudentProfile {
            hours_studied: 6.0,
            attendance: 85.0,
            parental_involvement: Tier::Medium,
            access_to_resources: Tier::Medium,
            sleep_hours: 7.0,
            previous_scores: 75.0,
            tutoring_sessions: 2.0,
            family_income: Tier::Medium,
            parental_education_level: EducationLevel::College,
            internet_access: InternetAccess::Yes,
            physical_activity: 3.0,
        }
    }

    #[test]
    fn test_typical_profile_high_confidence() {
        assert!(extreme_fields(&typical()).is_empty());
        assert_eq!(confidence_level(&typical(), 70.0), ConfidenceLevel::High);
    }

    #[test]
    fn test_some_extremes_medium() {
        let profile = StudentProfile { hours_studied: 0.0, attendance: 100.0, ..typical() };
        assert_eq!(
            extreme_fields(&profile),
            vec![ContinuousField::HoursStudied, ContinuousField::Attendance]
        );
        assert_eq!(confidence_level(&profile, 70.0), ConfidenceLevel::Medium);
    }

    #[test]
    fn test_many_extremes_low() {
        let profile = StudentProfile {
            hours_studied: 20.0,
            sleep_hours: 3.0,
            tutoring_sessions: 10.0,
            ..typical()
        };
        assert_eq!(confidence_level(&profile, 70.0), ConfidenceLevel::Low);
    }

    #[test]
    fn test_clamped_score_caps_confidence() {
        assert_eq!(confidence_level(&typical(), 100.0), ConfidenceLevel::Medium);
        assert_eq!(confidence_level(&typical(), 0.0), ConfidenceLevel::Medium);
    }
}
