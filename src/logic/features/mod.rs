//! Features Module - profile → model input
//!
//! Encoding, scaling and ordering of model inputs. The training layout is the
//! single authority on order; see `layout.rs`.

pub mod layout;
pub mod encoding;
pub mod scaler;
pub mod vector;

// Re-export common types
pub use layout::{Feature, FeatureKind, FeatureLayout, LayoutInfo, LAYOUT_VERSION};
pub use encoding::{EncodersFile, EncodingTable};
pub use scaler::{ScaleTransform, ScalerParameters};
pub use vector::{FeatureVector, Vectorizer};
