//! Insight Module - equity interpretation of a prediction
//!
//! Performance level, confidence, equity risk factors, recommendations and
//! mission insights, all derived deterministically from the validated profile
//! and the clamped score.

pub mod types;
pub mod rules;
pub mod confidence;
pub mod engine;

// Re-export common types
pub use types::{
    ConfidenceLevel, Insights, InterventionPriority, Level, MissionInsights, PerformanceLevel,
};
pub use engine::interpret;
