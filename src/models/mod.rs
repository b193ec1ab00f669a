//! Data models

pub mod profile;
pub mod prediction;

pub use profile::*;
pub use prediction::*;
