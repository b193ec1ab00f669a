//! Student profile model
//!
//! `StudentInput` is the wire form accepted at the request boundary. Every
//! field is optional on the wire so that a missing field is reported through
//! the same structured validation path as an out-of-range one. A validated
//! input becomes a `StudentProfile`, the only shape the core pipeline sees.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

use crate::error::{FieldViolation, ValidationFailure};

// ============================================================================
// CATEGORICAL DOMAINS
// ============================================================================

/// Three-level tier used by parental involvement, resource access and income
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    Low,
    Medium,
    High,
}

impl Tier {
    pub const VALUES: [&'static str; 3] = ["Low", "Medium", "High"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Low => "Low",
            Tier::Medium => "Medium",
            Tier::High => "High",
        }
    }
}

impl FromStr for Tier {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(Tier::Low),
            "Medium" => Ok(Tier::Medium),
            "High" => Ok(Tier::High),
            _ => Err(()),
        }
    }
}

/// Highest education level reached by a parent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EducationLevel {
    #[serde(rename = "High School")]
    HighSchool,
    College,
    Postgraduate,
}

impl EducationLevel {
    pub const VALUES: [&'static str; 3] = ["High School", "College", "Postgraduate"];

    pub fn as_str(&self) -> &'static str {
        match self {
            EducationLevel::HighSchool => "High School",
            EducationLevel::College => "College",
            EducationLevel::Postgraduate => "Postgraduate",
        }
    }
}

impl FromStr for EducationLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "High School" => Ok(EducationLevel::HighSchool),
            "College" => Ok(EducationLevel::College),
            "Postgraduate" => Ok(EducationLevel::Postgraduate),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InternetAccess {
    Yes,
    No,
}

impl InternetAccess {
    pub const VALUES: [&'static str; 2] = ["Yes", "No"];

    pub fn as_str(&self) -> &'static str {
        match self {
            InternetAccess::Yes => "Yes",
            InternetAccess::No => "No",
        }
    }
}

impl FromStr for InternetAccess {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Yes" => Ok(InternetAccess::Yes),
            "No" => Ok(InternetAccess::No),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for InternetAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// CONTINUOUS DOMAINS
// ============================================================================

/// Closed numeric interval `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldRange {
    pub min: f64,
    pub max: f64,
}

impl FieldRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Relative position of `value` inside the range, 0.0 at `min`, 1.0 at `max`
    pub fn position(&self, value: f64) -> f64 {
        (value - self.min) / (self.max - self.min)
    }
}

/// The six continuous profile fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContinuousField {
    HoursStudied,
    Attendance,
    SleepHours,
    PreviousScores,
    TutoringSessions,
    PhysicalActivity,
}

impl ContinuousField {
    pub const ALL: [ContinuousField; 6] = [
        ContinuousField::HoursStudied,
        ContinuousField::Attendance,
        ContinuousField::SleepHours,
        ContinuousField::PreviousScores,
        ContinuousField::TutoringSessions,
        ContinuousField::PhysicalActivity,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ContinuousField::HoursStudied => "hours_studied",
            ContinuousField::Attendance => "attendance",
            ContinuousField::SleepHours => "sleep_hours",
            ContinuousField::PreviousScores => "previous_scores",
            ContinuousField::TutoringSessions => "tutoring_sessions",
            ContinuousField::PhysicalActivity => "physical_activity",
        }
    }

    /// Declared domain; must agree with the `range` attributes on `StudentInput`
    pub fn range(&self) -> FieldRange {
        match self {
            ContinuousField::HoursStudied => FieldRange::new(0.0, 20.0),
            ContinuousField::Attendance => FieldRange::new(0.0, 100.0),
            ContinuousField::SleepHours => FieldRange::new(3.0, 12.0),
            ContinuousField::PreviousScores => FieldRange::new(0.0, 100.0),
            ContinuousField::TutoringSessions => FieldRange::new(0.0, 10.0),
            ContinuousField::PhysicalActivity => FieldRange::new(0.0, 15.0),
        }
    }
}

/// Wire field names in declaration order. Violations are reported in this order.
pub const PROFILE_FIELDS: [&str; 11] = [
    "hours_studied",
    "attendance",
    "parental_involvement",
    "access_to_resources",
    "sleep_hours",
    "previous_scores",
    "tutoring_sessions",
    "family_income",
    "parental_education_level",
    "internet_access",
    "physical_activity",
];

// ============================================================================
// VALIDATED PROFILE
// ============================================================================

/// A fully validated student profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub hours_studied: f64,
    pub attendance: f64,
    pub parental_involvement: Tier,
    pub access_to_resources: Tier,
    pub sleep_hours: f64,
    pub previous_scores: f64,
    pub tutoring_sessions: f64,
    pub family_income: Tier,
    pub parental_education_level: EducationLevel,
    pub internet_access: InternetAccess,
    pub physical_activity: f64,
}

impl StudentProfile {
    pub fn continuous(&self, field: ContinuousField) -> f64 {
        match field {
            ContinuousField::HoursStudied => self.hours_studied,
            ContinuousField::Attendance => self.attendance,
            ContinuousField::SleepHours => self.sleep_hours,
            ContinuousField::PreviousScores => self.previous_scores,
            ContinuousField::TutoringSessions => self.tutoring_sessions,
            ContinuousField::PhysicalActivity => self.physical_activity,
        }
    }
}

// ============================================================================
// WIRE INPUT
// ============================================================================

/// Prediction request body
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct StudentInput {
    /// Hours studied per week (0-20)
    #[validate(required, range(min = 0.0, max = 20.0))]
    pub hours_studied: Option<f64>,

    /// Attendance percentage (0-100)
    #[validate(required, range(min = 0.0, max = 100.0))]
    pub attendance: Option<f64>,

    #[validate(required, custom(function = "validate_tier"))]
    pub parental_involvement: Option<String>,

    #[validate(required, custom(function = "validate_tier"))]
    pub access_to_resources: Option<String>,

    /// Average sleep hours per night (3-12)
    #[validate(required, range(min = 3.0, max = 12.0))]
    pub sleep_hours: Option<f64>,

    #[validate(required, range(min = 0.0, max = 100.0))]
    pub previous_scores: Option<f64>,

    /// Tutoring sessions per week (0-10)
    #[validate(required, range(min = 0.0, max = 10.0))]
    pub tutoring_sessions: Option<f64>,

    #[validate(required, custom(function = "validate_tier"))]
    pub family_income: Option<String>,

    #[validate(required, custom(function = "validate_education_level"))]
    pub parental_education_level: Option<String>,

    #[validate(required, custom(function = "validate_internet_access"))]
    pub internet_access: Option<String>,

    /// Physical activity hours per week (0-15)
    #[validate(required, range(min = 0.0, max = 15.0))]
    pub physical_activity: Option<f64>,
}

fn category_error(allowed: &[&str]) -> ValidationError {
    let mut err = ValidationError::new("category");
    err.message = Some(format!("must be one of {}", allowed.join(", ")).into());
    err
}

fn validate_tier(value: &str) -> Result<(), ValidationError> {
    value
        .parse::<Tier>()
        .map(|_| ())
        .map_err(|_| category_error(&Tier::VALUES))
}

fn validate_education_level(value: &str) -> Result<(), ValidationError> {
    value
        .parse::<EducationLevel>()
        .map(|_| ())
        .map_err(|_| category_error(&EducationLevel::VALUES))
}

fn validate_internet_access(value: &str) -> Result<(), ValidationError> {
    value
        .parse::<InternetAccess>()
        .map(|_| ())
        .map_err(|_| category_error(&InternetAccess::VALUES))
}

impl StudentInput {
    /// Validate every field and convert into a typed profile.
    pub fn into_profile(self) -> Result<StudentProfile, ValidationFailure> {
        self.validate().map_err(ValidationFailure::from)?;

        // After a successful validate() every field is present and admissible.
        self.typed().ok_or_else(|| ValidationFailure::single(FieldViolation {
            field: "body".to_string(),
            message: "request could not be converted into a student profile".to_string(),
            constraint: "required".to_string(),
        }))
    }

    fn typed(&self) -> Option<StudentProfile> {
        Some(StudentProfile {
            hours_studied: self.hours_studied?,
            attendance: self.attendance?,
            parental_involvement: self.parental_involvement.as_deref()?.parse().ok()?,
            access_to_resources: self.access_to_resources.as_deref()?.parse().ok()?,
            sleep_hours: self.sleep_hours?,
            previous_scores: self.previous_scores?,
            tutoring_sessions: self.tutoring_sessions?,
            family_income: self.family_income.as_deref()?.parse().ok()?,
            parental_education_level: self.parental_education_level.as_deref()?.parse().ok()?,
            internet_access: self.internet_access.as_deref()?.parse().ok()?,
            physical_activity: self.physical_activity?,
        })
    }
}

impl From<&StudentProfile> for StudentInput {
    fn from(profile: &StudentProfile) -> Self {
        Self {
            hours_studied: Some(profile.hours_studied),
            attendance: Some(profile.attendance),
            parental_involvement: Some(profile.parental_involvement.to_string()),
            access_to_resources: Some(profile.access_to_resources.to_string()),
            sleep_hours: Some(profile.sleep_hours),
            previous_scores: Some(profile.previous_scores),
            tutoring_sessions: Some(profile.tutoring_sessions),
            family_income: Some(profile.family_income.to_string()),
            parental_education_level: Some(profile.parental_education_level.to_string()),
            internet_access: Some(profile.internet_access.to_string()),
            physical_activity: Some(profile.physical_activity),
        }
    }
}

// ============================================================================
// VALIDATION ERROR MAPPING
// ============================================================================

fn describe(err: &ValidationError) -> String {
    if let Some(message) = &err.message {
        return message.to_string();
    }
    match err.code.as_ref() {
        "required" => "field is required".to_string(),
        "range" => {
            let min = err.params.get("min").map(|v| v.to_string()).unwrap_or_default();
            let max = err.params.get("max").map(|v| v.to_string()).unwrap_or_default();
            format!("must be between {} and {}", min, max)
        }
        other => format!("failed {} check", other),
    }
}

impl From<ValidationErrors> for ValidationFailure {
    fn from(errors: ValidationErrors) -> Self {
        let mut violations: Vec<FieldViolation> = Vec::new();

        for (field, kind) in errors.errors() {
            let ValidationErrorsKind::Field(list) = kind else {
                continue;
            };
            for err in list {
                violations.push(FieldViolation {
                    field: field.to_string(),
                    message: describe(err),
                    constraint: err.code.to_string(),
                });
            }
        }

        let order = |field: &str| {
            PROFILE_FIELDS
                .iter()
                .position(|f| *f == field)
                .unwrap_or(PROFILE_FIELDS.len())
        };
        violations.sort_by(|a, b| {
            order(&a.field)
                .cmp(&order(&b.field))
                .then_with(|| a.constraint.cmp(&b.constraint))
        });

        ValidationFailure { violations }
    }
}

// ============================================================================
// TESTS
// ============================================================================
