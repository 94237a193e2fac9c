//! Training summary recorded once the model is fitted.

use serde::{Deserialize, Serialize};

/// Facts about the fitted model, logged at startup and served on `/health`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSummary {
    /// Number of training rows
    pub n_samples: usize,

    /// Rows kept as support vectors
    pub n_support_vectors: usize,

    /// Resolved RBF kernel coefficient
    pub gamma: f64,

    /// Root-mean-square error on the (clamped) training targets
    pub train_rmse: f64,

    /// Coordinate-descent sweeps used by the solver
    pub iterations: usize,

    /// When training finished
    pub trained_at: chrono::DateTime<chrono::Utc>,
}
