//! End-to-end pipeline over the shipped artifacts

use std::path::PathBuf;

use equity_score::error::ServeError;
use equity_score::logic::insight::{Level, PerformanceLevel};
use equity_score::logic::ArtifactPaths;
use equity_score::models::StudentInput;
use equity_score::PredictionService;

fn artifact_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("artifacts")
}

fn service() -> PredictionService {
    let service = PredictionService::load(&ArtifactPaths::in_dir(artifact_dir()));
    assert!(service.is_ready(), "shipped artifacts must load");
    service
}

#[allow(clippy::too_many_arguments)]
fn input(
    hours: f64,
    attendance: f64,
    involvement: &str,
    resources: &str,
    sleep: f64,
    previous: f64,
    tutoring: f64,
    income: &str,
    education: &str,
    internet: &str,
    activity: f64,
) -> StudentInput {
    StudentInput {
        hours_studied: Some(hours),
        attendance: Some(attendance),
        parental_involvement: Some(involvement.to_string()),
        access_to_resources: Some(resources.to_string()),
        sleep_hours: Some(sleep),
        previous_scores: Some(previous),
        tutoring_sessions: Some(tutoring),
        family_income: Some(income.to_string()),
        parental_education_level: Some(education.to_string()),
        internet_access: Some(internet.to_string()),
        physical_activity: Some(activity),
    }
}

fn low_income() -> StudentInput {
    input(4.0, 75.0, "Low", "Low", 6.5, 65.0, 0.5, "Low", "High School", "No", 1.5)
}

fn privileged() -> StudentInput {
    input(8.0, 95.0, "High", "High", 8.0, 85.0, 3.0, "High", "Postgraduate", "Yes", 4.0)
}

fn typical(hours: f64) -> StudentInput {
    input(hours, 85.0, "Medium", "Medium", 7.0, 75.0, 2.0, "Medium", "College", "Yes", 3.0)
}

#[test]
fn low_income_student_flags_support() {
    let response = service().serve(low_income()).unwrap();

    assert!((response.predicted_score - 57.73).abs() < 0.01);
    assert_eq!(response.performance_level, PerformanceLevel::BelowAverage);
    assert!(!response.equity_risk_factors.is_empty());
    assert!(response.mission_insights.support_needed);
    assert_eq!(response.mission_insights.intervention_priority, Level::High);
}

#[test]
fn privileged_student_needs_no_support() {
    let response = service().serve(privileged()).unwrap();

    assert!((response.predicted_score - 73.54).abs() < 0.01);
    assert!(response.equity_risk_factors.is_empty());
    assert!(!response.mission_insights.support_needed);
    assert_eq!(response.mission_insights.intervention_priority, Level::Low);
}

#[test]
fn privileged_scores_above_low_income() {
    let svc = service();
    let low = svc.serve(low_income()).unwrap().predicted_score;
    let high = svc.serve(privileged()).unwrap().predicted_score;
    assert!(high > low);
}

#[test]
fn more_study_hours_never_lowers_score() {
    let svc = service();
    let scores: Vec<f64> = [1.0, 5.0, 10.0, 15.0, 20.0]
        .into_iter()
        .map(|h| svc.serve(typical(h)).unwrap().predicted_score)
        .collect();

    assert!(scores.windows(2).all(|w| w[0] <= w[1]), "{:?}", scores);
}

#[test]
fn extreme_profiles_stay_in_range() {
    let svc = service();
    let best = input(20.0, 100.0, "High", "High", 12.0, 100.0, 10.0, "High", "Postgraduate", "Yes", 15.0);
    let worst = input(0.0, 0.0, "Low", "Low", 3.0, 0.0, 0.0, "Low", "High School", "No", 0.0);

    for profile in [best, worst] {
        let response = svc.serve(profile).unwrap();
        assert!((0.0..=100.0).contains(&response.predicted_score));
        assert_eq!(response.confidence_level, Level::Low);
    }
}

#[test]
fn grid_of_profiles_stays_in_range() {
    let svc = service();
    let tiers = ["Low", "Medium", "High"];

    for hours in [0.0, 10.0, 20.0] {
        for attendance in [0.0, 50.0, 100.0] {
            for tier in tiers {
                for internet in ["Yes", "No"] {
                    let profile = input(
                        hours, attendance, tier, tier, 7.0, 50.0, 1.0, tier, "College", internet, 2.0,
                    );
                    let response = svc.serve(profile).unwrap();
                    assert!((0.0..=100.0).contains(&response.predicted_score));
                    assert_eq!(
                        response.mission_insights.support_needed,
                        !response.equity_risk_factors.is_empty()
                    );
                }
            }
        }
    }
}

#[test]
fn identical_requests_identical_responses() {
    let svc = service();
    let first = svc.serve(low_income()).unwrap();
    let second = svc.serve(low_income()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn missing_artifacts_leave_service_unready() {
    let dir = tempfile::tempdir().unwrap();
    let svc = PredictionService::load(&ArtifactPaths::in_dir(dir.path()));

    assert!(!svc.is_ready());
    let err = svc.serve(privileged()).unwrap_err();
    assert!(matches!(err, ServeError::ModelUnavailable { .. }));
}

#[test]
fn model_info_reports_shipped_artifacts() {
    let info = service().model_info().unwrap();

    assert_eq!(info.model_type, "linear_regression");
    assert_eq!(info.features_count, 14);
    assert_eq!(info.feature_names[0], "Hours_Studied");
    assert_eq!(info.layout.feature_count, 14);
    assert_eq!(info.checksums.unwrap().scaler.len(), 64);
}
