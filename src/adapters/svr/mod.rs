//! Support vector regression with a radial basis kernel.
//!
//! # Model
//!
//! `f(x) = intercept + sum_i beta_i * (k(sv_i, x) + 1)` with
//! `k(a, b) = exp(-gamma * ||a - b||^2)`.
//!
//! The intercept is the mean training target. The `+ 1` term absorbs the
//! remaining bias into the kernel, which removes the equality constraint from
//! the dual and lets each coordinate be solved in closed form.
//!
//! # Training
//!
//! The epsilon-insensitive dual
//!
//! ```text
//! min  1/2 beta' Q beta - (y - intercept)' beta + epsilon * sum |beta_i|
//! s.t. -C <= beta_i <= C
//! ```
//!
//! is solved by cyclic coordinate descent. Each step is a soft-threshold by
//! `epsilon` followed by a clip to the box. Sweeps visit rows in index order,
//! so the same data and parameters always produce the same model.

use serde::{Deserialize, Serialize};

use crate::domain::N_FEATURES;
use crate::ports::Regressor;
use crate::RulError;

/// Coefficients at or below this magnitude are dropped after fitting.
const SUPPORT_THRESHOLD: f64 = 1e-8;

/// Largest training set [`RbfSvr::fit`] accepts. The dense kernel matrix
/// needs `8 * n^2` bytes, about 200 MB at this size.
pub const MAX_TRAINING_ROWS: usize = 5_000;

/// RBF kernel coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Gamma {
    /// `1 / (n_features * var(X))` over the training matrix.
    Scale,
    /// Fixed positive value.
    Value(f64),
}

/// Hyperparameters for [`RbfSvr::fit`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SvrParams {
    /// Box constraint on each dual coefficient
    pub c: f64,
    /// Half-width of the insensitive tube
    pub epsilon: f64,
    pub gamma: Gamma,
    /// Stop when no coefficient moves more than this in a sweep
    pub tolerance: f64,
    /// Maximum number of sweeps
    pub max_iter: usize,
}

impl Default for SvrParams {
    fn default() -> Self {
        Self {
            c: 100.0,
            epsilon: 0.1,
            gamma: Gamma::Scale,
            tolerance: 1e-3,
            max_iter: 10_000,
        }
    }
}

impl SvrParams {
    fn validate(&self) -> Result<(), RulError> {
        if !(self.c.is_finite() && self.c > 0.0) {
            return Err(RulError::Training(format!("C must be positive, got {}", self.c)));
        }
        if !(self.epsilon.is_finite() && self.epsilon >= 0.0) {
            return Err(RulError::Training(format!(
                "epsilon must be non-negative, got {}",
                self.epsilon
            )));
        }
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(RulError::Training(format!(
                "tolerance must be positive, got {}",
                self.tolerance
            )));
        }
        if self.max_iter == 0 {
            return Err(RulError::Training("max_iter must be at least 1".into()));
        }
        if let Gamma::Value(g) = self.gamma {
            if !(g.is_finite() && g > 0.0) {
                return Err(RulError::Training(format!("gamma must be positive, got {g}")));
            }
        }
        Ok(())
    }
}

/// Fitted epsilon-SVR with an RBF kernel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RbfSvr {
    support_vectors: Vec<[f64; N_FEATURES]>,
    dual_coef: Vec<f64>,
    intercept: f64,
    gamma: f64,
    iterations: usize,
}

fn rbf(a: &[f64; N_FEATURES], b: &[f64; N_FEATURES], gamma: f64) -> f64 {
    let d2: f64 = a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum();
    (-gamma * d2).exp()
}

fn soft_threshold(v: f64, t: f64) -> f64 {
    if v > t {
        v - t
    } else if v < -t {
        v + t
    } else {
        0.0
    }
}

fn resolve_gamma(x: &[[f64; N_FEATURES]], gamma: Gamma) -> f64 {
    match gamma {
        Gamma::Value(g) => g,
        Gamma::Scale => {
            let count = (x.len() * N_FEATURES) as f64;
            let mean = x.iter().flatten().sum::<f64>() / count;
            let var = x.iter().flatten().map(|v| (v - mean).powi(2)).sum::<f64>() / count;
            if var > 0.0 {
                1.0 / (N_FEATURES as f64 * var)
            } else {
                1.0
            }
        }
    }
}

impl RbfSvr {
    /// Fit the model on standardized rows.
    ///
    /// # Errors
    /// Returns `RulError::Training` if the inputs are empty, have mismatched
    /// lengths, exceed [`MAX_TRAINING_ROWS`], or the hyperparameters are out
    /// of range.
    pub fn fit(x: &[[f64; N_FEATURES]], y: &[f64], params: &SvrParams) -> Result<Self, RulError> {
        params.validate()?;
        if x.is_empty() {
            return Err(RulError::Training("no training rows".into()));
        }
        if x.len() != y.len() {
            return Err(RulError::Training(format!(
                "{} rows but {} targets",
                x.len(),
                y.len()
            )));
        }
        if x.len() > MAX_TRAINING_ROWS {
            return Err(RulError::Training(format!(
                "{} training rows exceeds the limit of {MAX_TRAINING_ROWS}",
                x.len()
            )));
        }

        let n = x.len();
        let gamma = resolve_gamma(x, params.gamma);
        let intercept = y.iter().sum::<f64>() / n as f64;

        tracing::info!(
            "Fitting RBF SVR: n={}, C={}, epsilon={}, gamma={:.6}",
            n,
            params.c,
            params.epsilon,
            gamma
        );

        // Q[i][j] = k(x_i, x_j) + 1, row-major
        let mut q = vec![0.0; n * n];
        for i in 0..n {
            for j in i..n {
                let v = rbf(&x[i], &x[j], gamma) + 1.0;
                q[i * n + j] = v;
                q[j * n + i] = v;
            }
        }

        let mut beta = vec![0.0; n];
        // grad_i = (Q beta)_i - (y_i - intercept)
        let mut grad: Vec<f64> = y.iter().map(|yi| intercept - yi).collect();
        let mut iterations = 0;
        let mut converged = false;

        for sweep in 1..=params.max_iter {
            iterations = sweep;
            let mut max_delta: f64 = 0.0;

            for i in 0..n {
                let qii = q[i * n + i];
                let target = soft_threshold(qii * beta[i] - grad[i], params.epsilon) / qii;
                let updated = target.clamp(-params.c, params.c);
                let delta = updated - beta[i];
                if delta == 0.0 {
                    continue;
                }

                beta[i] = updated;
                let row = &q[i * n..(i + 1) * n];
                grad.iter_mut().zip(row).for_each(|(g, qij)| *g += delta * qij);
                max_delta = max_delta.max(delta.abs());
            }

            if max_delta < params.tolerance {
                converged = true;
                break;
            }
        }

        if !converged {
            tracing::warn!(
                "SVR solver stopped at max_iter={} before reaching tolerance {}",
                params.max_iter,
                params.tolerance
            );
        }

        let (support_vectors, dual_coef): (Vec<_>, Vec<_>) = x
            .iter()
            .zip(&beta)
            .filter(|(_, b)| b.abs() > SUPPORT_THRESHOLD)
            .map(|(sv, b)| (*sv, *b))
            .unzip();

        tracing::info!(
            "SVR fitted in {} sweeps with {} support vectors",
            iterations,
            support_vectors.len()
        );

        Ok(Self {
            support_vectors,
            dual_coef,
            intercept,
            gamma,
            iterations,
        })
    }

    #[must_use]
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    #[must_use]
    pub fn n_support_vectors(&self) -> usize {
        self.support_vectors.len()
    }

    #[must_use]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    #[must_use]
    pub fn dual_coef(&self) -> &[f64] {
        &self.dual_coef
    }
}

impl Regressor for RbfSvr {
    fn predict(&self, x: &[f64; N_FEATURES]) -> f64 {
        self.support_vectors
            .iter()
            .zip(&self.dual_coef)
            .map(|(sv, b)| b * (rbf(sv, x, self.gamma) + 1.0))
            .sum::<f64>()
            + self.intercept
    }
}
