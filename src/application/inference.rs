//! Inference service: Trains once, then answers predictions.
//!
//! This service coordinates:
//! - Dataset loading and target clamping
//! - Scaler fitting
//! - Model fitting
//! - Standardize-then-predict for every request
//!
//! Everything is built in [`InferenceService::train`] and never mutated
//! afterwards, so a single instance is shared across handlers behind an `Arc`.

use crate::adapters::{RbfSvr, StandardScaler, SvrParams};
use crate::domain::{FeatureVector, ModelSummary, RulPrediction, Standardization, N_FEATURES};
use crate::ports::{DatasetSource, Regressor};
use crate::RulError;

/// Service owning the fitted scaler and model.
pub struct InferenceService<R = RbfSvr>
where
    R: Regressor,
{
    standardization: Standardization,
    model: R,
    summary: ModelSummary,
}

fn rmse(preds: &[f64], targets: &[f64]) -> f64 {
    let mse = preds
        .iter()
        .zip(targets)
        .map(|(p, t)| (p - t).powi(2))
        .sum::<f64>()
        / targets.len().max(1) as f64;
    mse.sqrt()
}

impl InferenceService<RbfSvr> {
    /// Load the dataset, fit the scaler and fit the SVR.
    ///
    /// Targets are clamped to the valid RUL range before fitting.
    ///
    /// # Errors
    /// Returns error if the dataset cannot be loaded or training fails.
    pub fn train(source: &dyn DatasetSource, params: &SvrParams) -> Result<Self, RulError> {
        tracing::info!("Training model from {}", source.describe());

        let data = source.load()?.with_clamped_targets();
        let scaler = StandardScaler::fit(&data.features)?;
        let x = scaler.transform_all(&data.features);
        let model = RbfSvr::fit(&x, &data.targets, params)?;

        let train_rmse = rmse(&model.predict_batch(&x), &data.targets);
        let summary = ModelSummary {
            n_samples: data.len(),
            n_support_vectors: model.n_support_vectors(),
            gamma: model.gamma(),
            train_rmse,
            iterations: model.iterations(),
            trained_at: chrono::Utc::now(),
        };

        tracing::info!(
            "Model ready: samples={}, support_vectors={}, train_rmse={:.2}h",
            summary.n_samples,
            summary.n_support_vectors,
            summary.train_rmse
        );

        Ok(Self::from_parts(scaler.into_params(), model, summary))
    }
}

impl<R> InferenceService<R>
where
    R: Regressor,
{
    /// Assemble a service from already-fitted parts.
    pub fn from_parts(standardization: Standardization, model: R, summary: ModelSummary) -> Self {
        Self {
            standardization,
            model,
            summary,
        }
    }

    /// Standardize the inputs and run the model.
    ///
    /// The prediction is returned as-is; it is not clamped to the training
    /// target range.
    ///
    /// # Errors
    /// Returns `RulError::Validation` if any input is NaN or infinite.
    pub fn predict(&self, features: FeatureVector) -> Result<RulPrediction, RulError> {
        features
            .validate()
            .map_err(|errors| RulError::Validation(errors.join("; ")))?;

        let z = self.standardization.apply(&features.to_array());
        let hours = self.model.predict(&z);
        if !hours.is_finite() {
            return Err(RulError::Training(format!(
                "model produced a non-finite prediction for {z:?}"
            )));
        }

        tracing::debug!("Predicted {:.2}h for standardized input {:?}", hours, z);
        Ok(RulPrediction::new(features, hours))
    }

    /// Run the model directly on an already standardized row.
    #[must_use]
    pub fn predict_standardized(&self, z: &[f64; N_FEATURES]) -> f64 {
        self.model.predict(z)
    }

    #[must_use]
    pub fn standardization(&self) -> &Standardization {
        &self.standardization
    }

    #[must_use]
    pub fn summary(&self) -> &ModelSummary {
        &self.summary
    }
}
