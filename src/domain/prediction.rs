//! Prediction result types.
//!
//! Represents the output of the remaining-useful-life regressor.

use serde::{Deserialize, Serialize};

use super::FeatureVector;

/// Lower bound for training targets. Predictions are never clamped and may
/// fall below it.
pub const RUL_MIN: f64 = 0.0;

/// Upper bound for training targets. Predictions may exceed it.
pub const RUL_MAX: f64 = 1000.0;

/// Display classification of a predicted RUL.
///
/// Used only for presentation; the predicted value itself is never altered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthBand {
    /// Less than 200 hours left
    Critical,
    /// Less than 500 hours left
    Degraded,
    /// Everything else
    Healthy,
}

impl HealthBand {
    /// Classify a predicted RUL in hours.
    #[must_use]
    pub fn from_hours(hours: f64) -> Self {
        if hours < 200.0 {
            Self::Critical
        } else if hours < 500.0 {
            Self::Degraded
        } else {
            Self::Healthy
        }
    }

    /// Get a human-readable description.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Critical => "Critical - schedule maintenance now",
            Self::Degraded => "Degraded - plan maintenance soon",
            Self::Healthy => "Healthy - no action needed",
        }
    }

    /// Get the associated color for the dashboard (RGB).
    #[must_use]
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            Self::Critical => (244, 63, 94),  // Rose (#F43F5E)
            Self::Degraded => (251, 191, 36), // Amber (#FBBF24)
            Self::Healthy => (16, 185, 129),  // Emerald (#10B981)
        }
    }
}

impl std::fmt::Display for HealthBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Critical => write!(f, "CRITICAL"),
            Self::Degraded => write!(f, "DEGRADED"),
            Self::Healthy => write!(f, "HEALTHY"),
        }
    }
}

/// A single model prediction together with the inputs that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RulPrediction {
    /// Raw (unscaled) inputs
    pub features: FeatureVector,

    /// Predicted remaining useful life in hours, unclamped
    pub hours: f64,

    /// Presentation band derived from `hours`
    pub band: HealthBand,
}

impl RulPrediction {
    #[must_use]
    pub fn new(features: FeatureVector, hours: f64) -> Self {
        Self {
            features,
            hours,
            band: HealthBand::from_hours(hours),
        }
    }
}

/// Clamp a training target into `[RUL_MIN, RUL_MAX]`.
#[must_use]
pub fn clamp_target(y: f64) -> f64 {
    y.clamp(RUL_MIN, RUL_MAX)
}
