//! Insight Engine
//!
//! Pure function of `(profile, predicted_score)`. Rule tables are evaluated
//! in declaration order so identical input always yields identical lists.

use super::confidence::confidence_level;
use super::rules::{
    self, RiskRule, EQUITY_RISK_RULES, HIGH_PRIORITY_WEIGHT, MEDIUM_PRIORITY_WEIGHT,
    PERFORMANCE_BANDS, RECOMMENDATION_RULES,
};
use super::types::{Insights, InterventionPriority, MissionInsights, PerformanceLevel};
use crate::models::profile::StudentProfile;

pub fn interpret(profile: &StudentProfile, predicted_score: f64) -> Insights {
    let fired = fired_risk_rules(profile);
    let equity_risk_factors: Vec<String> = fired.iter().map(|r| r.message.to_string()).collect();

    let mission_insights = MissionInsights {
        income_impact: rules::income_impact(profile.family_income).to_string(),
        resource_access: rules::resource_access(profile.access_to_resources).to_string(),
        support_needed: !equity_risk_factors.is_empty(),
        intervention_priority: intervention_priority(&fired),
    };

    if !fired.is_empty() {
        tracing::debug!(
            rules = ?fired.iter().map(|r| r.id).collect::<Vec<_>>(),
            priority = ?mission_insights.intervention_priority,
            "Equity risk factors fired"
        );
    }

    Insights {
        performance_level: performance_level(predicted_score),
        confidence_level: confidence_level(profile, predicted_score),
        equity_risk_factors,
        recommendations: recommendations(profile),
        mission_insights,
    }
}

/// First band whose lower bound the score reaches. Scores below every bound
/// (only possible for unclamped input) fall into the lowest band.
pub fn performance_level(score: f64) -> PerformanceLevel {
    PERFORMANCE_BANDS
        .iter()
        .find(|band| score >= band.min_score)
        .map(|band| band.level)
        .unwrap_or(PerformanceLevel::NeedsSignificantImprovement)
}

pub fn fired_risk_rules(profile: &StudentProfile) -> Vec<&'static RiskRule> {
    EQUITY_RISK_RULES
        .iter()
        .filter(|rule| (rule.applies)(profile))
        .collect()
}

pub fn recommendations(profile: &StudentProfile) -> Vec<String> {
    RECOMMENDATION_RULES
        .iter()
        .filter(|rule| (rule.applies)(profile))
        .map(|rule| rule.message.to_string())
        .collect()
}

pub fn intervention_priority(fired: &[&RiskRule]) -> InterventionPriority {
    let weight: u32 = fired.iter().map(|r| r.weight).sum();

    if weight >= HIGH_PRIORITY_WEIGHT {
        InterventionPriority::High
    } else if weight >= MEDIUM_PRIORITY_WEIGHT {
        InterventionPriority::Medium
    } else {
        InterventionPriority::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::insight::types::Level;
    use crate::models::profile::{EducationLevel, InternetAccess, Tier};

    fn low_income() -> StudentProfile {
        StudentProfile {
            hours_studied: 4.0,
            attendance: 75.0,
            parental_involvement: Tier::Low,
            access_to_resources: Tier::Low,
            sleep_hours: 6.5,
            previous_scores: 65.0,
            tutoring_sessions: 0.5,
            family_income: Tier::Low,
            parental_education_level: EducationLevel::HighSchool,
            internet_access: InternetAccess::No,
            physical_activity: 1.5,
        }
    }

    fn privileged() -> StudentProfile {
        StudentProfile {
            hours_studied: 8.0,
            attendance: 95.0,
            parental_involvement: Tier::High,
            access_to_resources: Tier::High,
            sleep_hours: 8.0,
            previous_scores: 85.0,
            tutoring_sessions: 3.0,
            family_income: Tier::High,
            parental_education_level: EducationLevel::Postgraduate,
            internet_access: InternetAccess::Yes,
            physical_activity: 4.0,
        }
    }

    #[test]
    fn test_performance_thresholds() {
        assert_eq!(performance_level(100.0), PerformanceLevel::Excellent);
        assert_eq!(performance_level(85.0), PerformanceLevel::Excellent);
        assert_eq!(performance_level(84.99), PerformanceLevel::Good);
        assert_eq!(performance_level(75.0), PerformanceLevel::Good);
        assert_eq!(performance_level(65.0), PerformanceLevel::Average);
        assert_eq!(performance_level(50.0), PerformanceLevel::BelowAverage);
        assert_eq!(performance_level(49.99), PerformanceLevel::NeedsSignificantImprovement);
        assert_eq!(performance_level(0.0), PerformanceLevel::NeedsSignificantImprovement);
    }

    #[test]
    fn test_performance_bands_partition_score_range() {
        // Every hundredth of a point maps to exactly one band
        for i in 0..=10_000 {
            let score = i as f64 / 100.0;
            let matching = PERFORMANCE_BANDS
                .iter()
                .enumerate()
                .filter(|(idx, band)| {
                    let upper = if *idx == 0 { f64::INFINITY } else { PERFORMANCE_BANDS[idx - 1].min_score };
                    score >= band.min_score && score < upper
                })
                .count();
            assert_eq!(matching, 1, "score {}", score);
        }
    }

    #[test]
    fn test_low_income_scenario() {
        let insights = interpret(&low_income(), 57.7);

        assert_eq!(insights.equity_risk_factors.len(), 5);
        assert!(insights.mission_insights.support_needed);
        assert_eq!(insights.mission_insights.intervention_priority, Level::High);
        assert_eq!(
            insights.mission_insights.income_impact,
            "Economic barriers may significantly impact educational outcomes"
        );
        assert_eq!(insights.performance_level, PerformanceLevel::BelowAverage);
        // study time, attendance, sleep, tutoring, activity, foundations
        assert_eq!(insights.recommendations.len(), 6);
    }

    #[test]
    fn test_privileged_scenario() {
        let insights = interpret(&privileged(), 73.5);

        assert!(insights.equity_risk_factors.is_empty());
        assert!(insights.recommendations.is_empty());
        assert!(!insights.mission_insights.support_needed);
        assert_eq!(insights.mission_insights.intervention_priority, Level::Low);
        assert_eq!(insights.performance_level, PerformanceLevel::Average);
        assert_eq!(insights.confidence_level, Level::High);
    }

    #[test]
    fn test_risk_factors_follow_rule_order() {
        let insights = interpret(&low_income(), 57.7);
        let expected: Vec<String> = EQUITY_RISK_RULES
            .iter()
            .filter(|r| r.id != "CHRONIC_ABSENCE")
            .map(|r| r.message.to_string())
            .collect();
        assert_eq!(insights.equity_risk_factors, expected);
        assert_eq!(interpret(&low_income(), 57.7), insights);
    }

    #[test]
    fn test_each_risk_rule_fires_alone() {
        let cases = [
            ("LOW_FAMILY_INCOME", StudentProfile { family_income: Tier::Low, ..privileged() }),
            ("LOW_RESOURCE_ACCESS", StudentProfile { access_to_resources: Tier::Low, ..privileged() }),
            ("NO_INTERNET", StudentProfile { internet_access: InternetAccess::No, ..privileged() }),
            (
                "LIMITED_PARENTAL_EDUCATION",
                StudentProfile { parental_education_level: EducationLevel::HighSchool, ..privileged() },
            ),
            ("LOW_PARENTAL_INVOLVEMENT", StudentProfile { parental_involvement: Tier::Low, ..privileged() }),
            ("CHRONIC_ABSENCE", StudentProfile { attendance: 40.0, ..privileged() }),
        ];

        for (id, profile) in cases {
            let fired: Vec<_> = fired_risk_rules(&profile).iter().map(|r| r.id).collect();
            assert_eq!(fired, vec![id]);
            assert!(interpret(&profile, 70.0).mission_insights.support_needed);
        }
    }

    #[test]
    fn test_support_needed_iff_risk_factors() {
        let tiers = [Tier::Low, Tier::Medium, Tier::High];
        for income in tiers {
            for access in tiers {
                for internet in [InternetAccess::Yes, InternetAccess::No] {
                    let profile = StudentProfile {
                        family_income: income,
                        access_to_resources: access,
                        internet_access: internet,
                        ..privileged()
                    };
                    let insights = interpret(&profile, 70.0);
                    assert_eq!(
                        insights.mission_insights.support_needed,
                        !insights.equity_risk_factors.is_empty()
                    );
                }
            }
        }
    }

    #[test]
    fn test_priority_from_weights() {
        assert_eq!(intervention_priority(&[]), Level::Low);

        let single_minor = StudentProfile { parental_involvement: Tier::Low, ..privileged() };
        assert_eq!(interpret(&single_minor, 70.0).mission_insights.intervention_priority, Level::Low);

        let single_major = StudentProfile { internet_access: InternetAccess::No, ..privileged() };
        assert_eq!(interpret(&single_major, 70.0).mission_insights.intervention_priority, Level::Medium);

        let stacked = StudentProfile {
            internet_access: InternetAccess::No,
            family_income: Tier::Low,
            parental_involvement: Tier::Low,
            ..privileged()
        };
        assert_eq!(interpret(&stacked, 70.0).mission_insights.intervention_priority, Level::High);
    }

    #[test]
    fn test_mission_text_by_tier() {
        let medium = StudentProfile {
            family_income: Tier::Medium,
            access_to_resources: Tier::Medium,
            ..privileged()
        };
        let insights = interpret(&medium, 70.0);
        assert_eq!(insights.mission_insights.income_impact, "Moderate economic impact on educational access");
        assert_eq!(
            insights.mission_insights.resource_access,
            "Moderate resource access with room for improvement"
        );
    }
}
