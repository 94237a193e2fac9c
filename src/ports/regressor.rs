//! Regressor port: Trait for a fitted model.
//!
//! This trait abstracts the concrete model (RBF support vector regression)
//! from the inference service.

use crate::domain::N_FEATURES;

/// A fitted regression model over standardized features.
///
/// Implementations are immutable once fitted, so a single instance can be
/// shared across request handlers without locking.
pub trait Regressor: Send + Sync {
    /// Predict the target for one standardized row.
    ///
    /// Inputs outside the training distribution are extrapolated, never
    /// rejected.
    fn predict(&self, x: &[f64; N_FEATURES]) -> f64;

    /// Predict the targets for many standardized rows.
    fn predict_batch(&self, xs: &[[f64; N_FEATURES]]) -> Vec<f64> {
        xs.iter().map(|x| self.predict(x)).collect()
    }
}
