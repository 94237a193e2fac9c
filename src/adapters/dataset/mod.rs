//! Training data sources.

mod json;
mod synthetic;

pub use json::JsonDataset;
pub use synthetic::{SyntheticDataset, DEFAULT_SAMPLES, DEFAULT_SEED};
