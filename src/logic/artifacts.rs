//! Artifact loading
//!
//! Reads the four training artifacts, cross-checks them and builds the
//! immutable serving context. Any failure here keeps the service unready.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::constants::{
    DEFAULT_ENCODERS_FILE, DEFAULT_FEATURE_NAMES_FILE, DEFAULT_MODEL_FILE, DEFAULT_SCALER_FILE,
};
use crate::error::ArtifactError;
use crate::logic::features::{EncodersFile, EncodingTable, FeatureLayout, ScalerParameters, Vectorizer};
use crate::logic::model::{LinearModel, ModelFile, ModelMetadata, Predictor};
use crate::logic::service::ServingContext;

/// Locations of the four training artifacts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub model: PathBuf,
    pub scaler: PathBuf,
    pub encoders: PathBuf,
    pub feature_names: PathBuf,
}

impl ArtifactPaths {
    /// Default file names inside one directory
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            model: dir.join(DEFAULT_MODEL_FILE),
            scaler: dir.join(DEFAULT_SCALER_FILE),
            encoders: dir.join(DEFAULT_ENCODERS_FILE),
            feature_names: dir.join(DEFAULT_FEATURE_NAMES_FILE),
        }
    }
}

/// SHA-256 of each artifact file as loaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactChecksums {
    pub model: String,
    pub scaler: String,
    pub encoders: String,
    pub feature_names: String,
}

fn read_artifact<T: DeserializeOwned>(path: &Path) -> Result<(T, String), ArtifactError> {
    let data = fs::read(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let checksum = hex::encode(Sha256::digest(&data));

    let value = serde_json::from_slice(&data).map_err(|source| ArtifactError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    Ok((value, checksum))
}

/// Load, validate and assemble the serving context
pub fn load_context(paths: &ArtifactPaths) -> Result<ServingContext, ArtifactError> {
    tracing::info!("Loading feature names from {}", paths.feature_names.display());
    let (names, feature_names_sum): (Vec<String>, _) = read_artifact(&paths.feature_names)?;
    let layout = FeatureLayout::from_names(&names)?;

    tracing::info!("Loading encoders from {}", paths.encoders.display());
    let (encoders, encoders_sum): (EncodersFile, _) = read_artifact(&paths.encoders)?;

    tracing::info!("Loading scaler from {}", paths.scaler.display());
    let (scaler, scaler_sum): (ScalerParameters, _) = read_artifact(&paths.scaler)?;

    tracing::info!("Loading model from {}", paths.model.display());
    let (model_file, model_sum): (ModelFile, _) = read_artifact(&paths.model)?;

    let model = LinearModel::from_file(&model_file)?;
    let predictor = Predictor::new(Arc::new(model), &layout)?;
    let vectorizer = Vectorizer::new(layout, EncodingTable::new(encoders), scaler)?;

    let checksums = ArtifactChecksums {
        model: model_sum,
        scaler: scaler_sum,
        encoders: encoders_sum,
        feature_names: feature_names_sum,
    };

    let context = ServingContext::new(
        vectorizer,
        predictor,
        ModelMetadata::from_file(&model_file),
        Some(checksums),
    );

    tracing::info!(
        "Model components loaded: {} ({} features, layout {:08x})",
        context.metadata().model_type,
        context.vectorizer().layout().len(),
        context.vectorizer().layout().hash()
    );

    Ok(context)
}
