//! Prediction Service - serving facade
//!
//! Owns the artifact lifecycle and the per-request pipeline:
//! validate → vectorize → predict → interpret → respond.
//!
//! Readiness is decided once at construction. A service built from artifacts
//! that failed to load stays `Unready` for the life of the process; operators
//! restart it after fixing the artifacts.

use std::collections::BTreeMap;
use std::sync::Arc;

use uuid::Uuid;

use crate::constants::{APP_VERSION, MISSION};
use crate::error::ServeError;
use crate::logic::artifacts::{self, ArtifactChecksums, ArtifactPaths};
use crate::logic::features::{FeatureKind, LayoutInfo, Vectorizer};
use crate::logic::insight;
use crate::logic::model::{ModelMetadata, Predictor, SCORE_MAX, SCORE_MIN};
use crate::models::prediction::{HealthResponse, InputDomain, ModelInfo, PredictionResponse};
use crate::models::profile::{
    ContinuousField, EducationLevel, InternetAccess, StudentInput, StudentProfile, Tier,
};

// ============================================================================
// SERVING CONTEXT
// ============================================================================

/// Immutable artifacts shared read-only by every request
#[derive(Debug)]
pub struct ServingContext {
    vectorizer: Vectorizer,
    predictor: Predictor,
    metadata: ModelMetadata,
    checksums: Option<ArtifactChecksums>,
}

impl ServingContext {
    pub fn new(
        vectorizer: Vectorizer,
        predictor: Predictor,
        metadata: ModelMetadata,
        checksums: Option<ArtifactChecksums>,
    ) -> Self {
        Self {
            vectorizer,
            predictor,
            metadata,
            checksums,
        }
    }

    pub fn vectorizer(&self) -> &Vectorizer {
        &self.vectorizer
    }

    pub fn predictor(&self) -> &Predictor {
        &self.predictor
    }

    pub fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }

    pub fn checksums(&self) -> Option<&ArtifactChecksums> {
        self.checksums.as_ref()
    }

    /// Core pipeline on an already validated profile
    pub fn run(&self, profile: &StudentProfile) -> Result<PredictionResponse, ServeError> {
        let request_id = Uuid::new_v4();

        let vector = self.vectorizer.vectorize(profile).map_err(|e| {
            tracing::error!(%request_id, "Vectorization failed: {}", e);
            e
        })?;
        tracing::debug!(
            %request_id,
            vector = %vector.to_log_entry(self.vectorizer.layout()),
            "Feature vector built"
        );

        let prediction = self.predictor.predict(&vector).map_err(|e| {
            tracing::error!(%request_id, "Prediction failed: {}", e);
            e
        })?;

        let insights = insight::interpret(profile, prediction.score);

        tracing::info!(
            %request_id,
            score = prediction.score,
            raw_score = prediction.raw_score,
            level = insights.performance_level.as_str(),
            risk_factors = insights.equity_risk_factors.len(),
            "Prediction served"
        );

        Ok(PredictionResponse::assemble(prediction.score, insights))
    }
}

// ============================================================================
// READINESS
// ============================================================================

#[derive(Debug, Clone)]
pub enum Readiness {
    /// Artifacts missing or rejected; the reason is logged and kept for health
    Unready { reason: String },
    Ready(Arc<ServingContext>),
}

/// Readiness-gated facade handed to every request handler
#[derive(Debug, Clone)]
pub struct PredictionService {
    readiness: Readiness,
}

impl PredictionService {
    /// Load artifacts once. Never fails: a load error yields an unready service.
    pub fn load(paths: &ArtifactPaths) -> Self {
        match artifacts::load_context(paths) {
            Ok(context) => Self::ready(context),
            Err(e) => {
                tracing::error!("Error loading model components: {}", e);
                tracing::error!("Service will reject predictions until restarted with valid artifacts");
                Self::unready(e.to_string())
            }
        }
    }

    pub fn ready(context: ServingContext) -> Self {
        Self {
            readiness: Readiness::Ready(Arc::new(context)),
        }
    }

    pub fn unready(reason: impl Into<String>) -> Self {
        Self {
            readiness: Readiness::Unready {
                reason: reason.into(),
            },
        }
    }

    pub fn readiness(&self) -> &Readiness {
        &self.readiness
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.readiness, Readiness::Ready(_))
    }

    pub fn context(&self) -> Result<&ServingContext, ServeError> {
        match &self.readiness {
            Readiness::Ready(context) => Ok(context),
            Readiness::Unready { reason } => Err(ServeError::ModelUnavailable {
                reason: reason.clone(),
            }),
        }
    }

    /// Predict for a validated profile
    pub fn predict(&self, profile: &StudentProfile) -> Result<PredictionResponse, ServeError> {
        self.context()?.run(profile)
    }

    /// Validate a wire request, then predict. Validation errors are reported
    /// even while unready.
    pub fn serve(&self, input: StudentInput) -> Result<PredictionResponse, ServeError> {
        let profile = input.into_profile()?;
        self.predict(&profile)
    }

    pub fn health(&self) -> HealthResponse {
        let loaded = self.is_ready();

        HealthResponse {
            status: if loaded { "healthy" } else { "degraded" }.to_string(),
            message: if loaded {
                "API is running and model is loaded".to_string()
            } else {
                "API is running but model not loaded".to_string()
            },
            is_model_loaded: loaded,
            version: APP_VERSION.to_string(),
            timestamp: chrono::Utc::now().timestamp(),
        }
    }

    pub fn model_info(&self) -> Result<ModelInfo, ServeError> {
        let context = self.context()?;
        let layout = context.vectorizer().layout();
        let metadata = context.metadata();

        Ok(ModelInfo {
            model_type: context.predictor().model().model_type().to_string(),
            model_version: metadata.version.clone(),
            trained_at: metadata.trained_at,
            loaded_at: metadata.loaded_at,
            features_count: layout.len(),
            feature_names: layout.names(),
            categorical_features: layout
                .of_kind(FeatureKind::Categorical)
                .map(|f| f.name().to_string())
                .collect(),
            scaling_methods: context
                .vectorizer()
                .scaler()
                .methods()
                .into_iter()
                .map(String::from)
                .collect(),
            layout: LayoutInfo::from(layout),
            checksums: context.checksums().cloned(),
            mission: MISSION.to_string(),
            prediction_range: format!("{}-{} (exam scores)", SCORE_MIN, SCORE_MAX),
            supported_inputs: supported_inputs(),
        })
    }
}

/// Request domains, for model info
pub fn supported_inputs() -> BTreeMap<String, InputDomain> {
    let mut inputs = BTreeMap::new();

    for field in ContinuousField::ALL {
        let range = field.range();
        inputs.insert(
            field.name().to_string(),
            InputDomain::Range {
                min: range.min,
                max: range.max,
            },
        );
    }

    inputs.insert("parental_involvement".to_string(), categories(&Tier::VALUES));
    inputs.insert("access_to_resources".to_string(), categories(&Tier::VALUES));
    inputs.insert("family_income".to_string(), categories(&Tier::VALUES));
    inputs.insert(
        "parental_education_level".to_string(),
        categories(&EducationLevel::VALUES),
    );
    inputs.insert("internet_access".to_string(), categories(&InternetAccess::VALUES));

    inputs
}

fn categories(values: &[&str]) -> InputDomain {
    InputDomain::Categories(values.iter().map(|v| v.to_string()).collect())
}

// ============================================================================
// TEST FIXTURES
// ============================================================================


// ============================================================================
// TESTS
// ============================================================================
