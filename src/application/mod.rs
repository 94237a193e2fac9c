//! Application layer: Use cases and services.
//!
//! This module wires the scaler and model adapters into the single
//! predict-from-parameters use case.

mod inference;

pub use inference::InferenceService;
