//! Adapters layer: Concrete implementations of ports.
//!
//! - `scaler`: per-feature standardization
//! - `svr`: RBF support vector regression
//! - `dataset`: synthetic and JSON training sets

pub mod dataset;
pub mod scaler;
pub mod svr;

pub use dataset::{JsonDataset, SyntheticDataset};
pub use scaler::StandardScaler;
pub use svr::{Gamma, RbfSvr, SvrParams, MAX_TRAINING_ROWS};
