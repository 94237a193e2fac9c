//! JSON file dataset.
//!
//! Expected layout:
//!
//! ```json
//! { "features": [[1.0, 2.0, 3.0], ...], "targets": [420.0, ...] }
//! ```

use std::path::PathBuf;

use crate::domain::{DatasetError, TrainingSet};
use crate::ports::DatasetSource;

/// Training set read from a JSON file at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonDataset {
    path: PathBuf,
}

impl JsonDataset {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DatasetSource for JsonDataset {
    fn load(&self) -> Result<TrainingSet, DatasetError> {
        let content = std::fs::read_to_string(&self.path)?;
        let set: TrainingSet = serde_json::from_str(&content)?;
        set.validate()?;

        tracing::info!("Loaded {} training rows from {:?}", set.len(), self.path);
        Ok(set)
    }

    fn describe(&self) -> String {
        format!("json({})", self.path.display())
    }
}
