//! Model Module - trained artifact and inference
//!
//! Inference is kept separate from artifact parsing so another deterministic
//! scorer can replace the linear model without touching the pipeline.

pub mod artifact;
pub mod inference;

// Re-export common types
pub use artifact::{LinearModel, ModelFile, ModelMetadata, ScoreModel};
pub use inference::{Prediction, Predictor, SCORE_MAX, SCORE_MIN};
