//! Domain layer: Core types.
//!
//! This module contains plain Rust types with no I/O.
//! All types are serializable and validate their own invariants.

mod dataset;
mod features;
mod prediction;
mod summary;

pub use dataset::{DatasetError, TrainingSet};
pub use features::{FeatureVector, Standardization, FEATURE_NAMES, N_FEATURES};
pub use prediction::{clamp_target, HealthBand, RulPrediction, RUL_MAX, RUL_MIN};
pub use summary::ModelSummary;
