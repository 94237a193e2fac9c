//! Feature vector and standardization types.
//!
//! The three parameters are anonymous sensor-like measurements. No physical
//! units are attached to them.

use serde::{Deserialize, Serialize};

/// Number of input features the model is trained on.
pub const N_FEATURES: usize = 3;

/// Display names for the three parameters, in model order.
pub const FEATURE_NAMES: [&str; N_FEATURES] = ["param1", "param2", "param3"];

/// Raw, unscaled input to the model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub param1: f64,
    pub param2: f64,
    pub param3: f64,
}

impl FeatureVector {
    #[must_use]
    pub fn new(param1: f64, param2: f64, param3: f64) -> Self {
        Self {
            param1,
            param2,
            param3,
        }
    }

    /// Convert features to an array for inference.
    /// Order: param1, param2, param3
    #[must_use]
    pub fn to_array(&self) -> [f64; N_FEATURES] {
        [self.param1, self.param2, self.param3]
    }

    /// Check that every feature is a finite number.
    ///
    /// Any finite value is accepted: out-of-distribution inputs are
    /// extrapolated by the model, not rejected.
    ///
    /// # Errors
    /// Returns validation errors as a vector of strings.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let errors: Vec<String> = FEATURE_NAMES
            .iter()
            .zip(self.to_array())
            .filter(|(_, v)| !v.is_finite())
            .map(|(name, v)| format!("{name} must be a finite number, got {v}"))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl From<[f64; N_FEATURES]> for FeatureVector {
    fn from(v: [f64; N_FEATURES]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

/// Per-feature mean and standard deviation learned from the training set.
///
/// The same instance is used for training and for every prediction, so the
/// model never sees inputs scaled differently from its training data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Standardization {
    pub mean: [f64; N_FEATURES],
    pub scale: [f64; N_FEATURES],
}

impl Standardization {
    /// Standardize one raw row: `(x - mean) / scale`.
    #[must_use]
    pub fn apply(&self, x: &[f64; N_FEATURES]) -> [f64; N_FEATURES] {
        let mut out = [0.0; N_FEATURES];
        for (i, v) in out.iter_mut().enumerate() {
            *v = (x[i] - self.mean[i]) / self.scale[i];
        }
        out
    }

    /// The raw input that standardizes to the zero vector.
    #[must_use]
    pub fn mean_point(&self) -> FeatureVector {
        FeatureVector::from(self.mean)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_features_to_array() {
        let f = FeatureVector::new(70.0, 0.5, 30.0);
        assert_eq!(f.to_array(), [70.0, 0.5, 30.0]);
    }

    #[test]
    fn test_validation() {
        assert!(FeatureVector::new(-1e6, 0.0, 1e9).validate().is_ok());

        let errors = FeatureVector::new(f64::NAN, 1.0, f64::INFINITY)
            .validate()
            .expect_err("Non-finite values must fail");
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("param1"));
        assert!(errors[1].contains("param3"));
    }

    #[test]
    fn test_standardization_apply() {
        let s = Standardization {
            mean: [10.0, 0.0, -5.0],
            scale: [2.0, 1.0, 0.5],
        };

        let z = s.apply(&[12.0, 3.0, -5.0]);
        assert_eq!(z, [1.0, 3.0, 0.0]);
        assert_eq!(s.apply(&s.mean_point().to_array()), [0.0; N_FEATURES]);
    }
}
