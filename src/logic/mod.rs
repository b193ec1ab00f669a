//! Prediction logic: feature pipeline, model, insights and serving facade

pub mod features;
pub mod model;
pub mod insight;
pub mod artifacts;
pub mod service;

pub use artifacts::{ArtifactChecksums, ArtifactPaths};
pub use service::{PredictionService, Readiness, ServingContext};
