//! Training data types.

use serde::{Deserialize, Serialize};

use super::features::N_FEATURES;
use super::prediction::clamp_target;

/// Error type for dataset loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("Dataset is empty")]
    Empty,

    #[error("Shape mismatch: {features} feature rows but {targets} targets")]
    ShapeMismatch { features: usize, targets: usize },

    #[error("Non-finite value at row {row}")]
    NonFinite { row: usize },

    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Generator misconfigured: {0}")]
    Generator(String),
}

/// Rows of raw features paired with RUL targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSet {
    pub features: Vec<[f64; N_FEATURES]>,
    pub targets: Vec<f64>,
}

impl TrainingSet {
    /// Build a training set, checking shape and finiteness.
    ///
    /// # Errors
    /// Returns `DatasetError` if the set is empty, lengths differ, or any
    /// value is NaN or infinite.
    pub fn new(features: Vec<[f64; N_FEATURES]>, targets: Vec<f64>) -> Result<Self, DatasetError> {
        let set = Self { features, targets };
        set.validate()?;
        Ok(set)
    }

    /// Check shape and finiteness.
    ///
    /// # Errors
    /// See [`TrainingSet::new`].
    pub fn validate(&self) -> Result<(), DatasetError> {
        if self.features.len() != self.targets.len() {
            return Err(DatasetError::ShapeMismatch {
                features: self.features.len(),
                targets: self.targets.len(),
            });
        }
        if self.features.is_empty() {
            return Err(DatasetError::Empty);
        }

        for (row, (x, y)) in self.features.iter().zip(&self.targets).enumerate() {
            if !y.is_finite() || x.iter().any(|v| !v.is_finite()) {
                return Err(DatasetError::NonFinite { row });
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Clamp every target into the valid RUL range.
    #[must_use]
    pub fn with_clamped_targets(mut self) -> Self {
        self.targets.iter_mut().for_each(|y| *y = clamp_target(*y));
        self
    }
}
