//! Seeded synthetic training set.
//!
//! Three independent Gaussian parameters with a linear degradation target
//! plus Gaussian noise. The same seed always yields the same rows.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

use crate::domain::{DatasetError, TrainingSet, N_FEATURES};
use crate::ports::DatasetSource;

/// Default RNG seed.
pub const DEFAULT_SEED: u64 = 42;

/// Default number of rows.
pub const DEFAULT_SAMPLES: usize = 200;

/// (mean, std) for param1, param2, param3.
const FEATURE_DISTRIBUTIONS: [(f64, f64); N_FEATURES] = [(70.0, 10.0), (0.5, 0.15), (30.0, 5.0)];

/// Target slope per unit of each parameter, relative to its mean.
const TARGET_WEIGHTS: [f64; N_FEATURES] = [-6.0, -900.0, -12.0];

/// Target at the feature means.
const TARGET_BASELINE: f64 = 500.0;

const NOISE_STD: f64 = 25.0;

/// Deterministic in-memory dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntheticDataset {
    seed: u64,
    n_samples: usize,
}

impl SyntheticDataset {
    #[must_use]
    pub fn new(seed: u64, n_samples: usize) -> Self {
        Self { seed, n_samples }
    }
}

impl Default for SyntheticDataset {
    fn default() -> Self {
        Self::new(DEFAULT_SEED, DEFAULT_SAMPLES)
    }
}

fn normal(mean: f64, std: f64) -> Result<Normal<f64>, DatasetError> {
    Normal::new(mean, std).map_err(|e| DatasetError::Generator(e.to_string()))
}

impl DatasetSource for SyntheticDataset {
    fn load(&self) -> Result<TrainingSet, DatasetError> {
        if self.n_samples == 0 {
            return Err(DatasetError::Empty);
        }

        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let dists = FEATURE_DISTRIBUTIONS
            .iter()
            .map(|(m, s)| normal(*m, *s))
            .collect::<Result<Vec<_>, _>>()?;
        let noise = normal(0.0, NOISE_STD)?;

        let mut features = Vec::with_capacity(self.n_samples);
        let mut targets = Vec::with_capacity(self.n_samples);

        for _ in 0..self.n_samples {
            let mut row = [0.0; N_FEATURES];
            let mut y = TARGET_BASELINE;
            for i in 0..N_FEATURES {
                row[i] = dists[i].sample(&mut rng);
                y += TARGET_WEIGHTS[i] * (row[i] - FEATURE_DISTRIBUTIONS[i].0);
            }
            y += noise.sample(&mut rng);

            features.push(row);
            targets.push(y);
        }

        TrainingSet::new(features, targets)
    }

    fn describe(&self) -> String {
        format!("synthetic(seed={}, n={})", self.seed, self.n_samples)
    }
}
