//! Standard scaler: per-feature zero-mean, unit-variance rescaling.
//!
//! Fitted once on the training rows. The resulting [`Standardization`] is
//! shared by training and inference.

use crate::domain::{DatasetError, Standardization, N_FEATURES};

/// Columns whose standard deviation falls below this are treated as constant.
const MIN_SCALE: f64 = 1e-12;

/// Scaler fitted on raw feature rows.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardScaler {
    params: Standardization,
}

impl StandardScaler {
    /// Learn per-feature mean and population standard deviation.
    ///
    /// Constant columns get a scale of `1.0` so they map to zero instead of
    /// dividing by zero.
    ///
    /// # Errors
    /// Returns `DatasetError::Empty` if `rows` is empty.
    pub fn fit(rows: &[[f64; N_FEATURES]]) -> Result<Self, DatasetError> {
        if rows.is_empty() {
            return Err(DatasetError::Empty);
        }

        let n = rows.len() as f64;
        let mut mean = [0.0; N_FEATURES];
        for row in rows {
            for (m, v) in mean.iter_mut().zip(row) {
                *m += v;
            }
        }
        mean.iter_mut().for_each(|m| *m /= n);

        let mut scale = [0.0; N_FEATURES];
        for row in rows {
            for i in 0..N_FEATURES {
                let d = row[i] - mean[i];
                scale[i] += d * d;
            }
        }
        for s in &mut scale {
            let std = (*s / n).sqrt();
            *s = if std < MIN_SCALE { 1.0 } else { std };
        }

        tracing::debug!("Fitted scaler: mean={:?}, scale={:?}", mean, scale);

        Ok(Self {
            params: Standardization { mean, scale },
        })
    }

    /// Standardize one row.
    #[must_use]
    pub fn transform(&self, row: &[f64; N_FEATURES]) -> [f64; N_FEATURES] {
        self.params.apply(row)
    }

    /// Standardize every row.
    #[must_use]
    pub fn transform_all(&self, rows: &[[f64; N_FEATURES]]) -> Vec<[f64; N_FEATURES]> {
        rows.iter().map(|r| self.transform(r)).collect()
    }

    /// The learned parameters.
    #[must_use]
    pub fn into_params(self) -> Standardization {
        self.params
    }
}
