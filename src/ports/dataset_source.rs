//! Dataset port: Trait for the origin of training data.

use crate::domain::{DatasetError, TrainingSet};

/// Source of the fixed training set used at startup.
pub trait DatasetSource: Send + Sync {
    /// Load the full training set.
    ///
    /// # Errors
    /// Returns `DatasetError` if the data cannot be read or fails validation.
    fn load(&self) -> Result<TrainingSet, DatasetError>;

    /// Short human-readable description for logs.
    fn describe(&self) -> String;
}
