//! Server configuration from environment variables.
//!
//! Every setting has a default, so the server starts with an empty
//! environment:
//! - `RUL_BIND_ADDR` (default `127.0.0.1:8050`)
//! - `RUL_DATASET_PATH` (optional JSON dataset; default is the synthetic set)
//! - `RUL_DATASET_SEED` (default `42`)
//! - `RUL_DATASET_SAMPLES` (default `200`, at most `MAX_TRAINING_ROWS`)
//! - `RUL_LOG_MODE` (`stdout` | `file` | `auto`, default `auto`)
//! - `RUL_LOG_FILE` (default `rul-predictor.log`)

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::adapters::dataset::{DEFAULT_SAMPLES, DEFAULT_SEED};
use crate::adapters::{JsonDataset, SyntheticDataset, MAX_TRAINING_ROWS};
use crate::ports::DatasetSource;
use crate::RulError;

pub const BIND_ADDR_ENV: &str = "RUL_BIND_ADDR";
pub const DATASET_PATH_ENV: &str = "RUL_DATASET_PATH";
pub const DATASET_SEED_ENV: &str = "RUL_DATASET_SEED";
pub const DATASET_SAMPLES_ENV: &str = "RUL_DATASET_SAMPLES";
pub const LOG_MODE_ENV: &str = "RUL_LOG_MODE";
pub const LOG_FILE_ENV: &str = "RUL_LOG_FILE";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8050";
const DEFAULT_LOG_FILE: &str = "rul-predictor.log";

/// Where training data comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetConfig {
    Synthetic { seed: u64, n_samples: usize },
    Json(PathBuf),
}

impl DatasetConfig {
    /// Build the configured dataset source.
    #[must_use]
    pub fn source(&self) -> Box<dyn DatasetSource> {
        match self {
            Self::Synthetic { seed, n_samples } => {
                Box::new(SyntheticDataset::new(*seed, *n_samples))
            }
            Self::Json(path) => Box::new(JsonDataset::new(path.clone())),
        }
    }
}

/// Log destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogMode {
    Stdout,
    File,
    /// File when stdout is a terminal, stdout otherwise
    Auto,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub dataset: DatasetConfig,
    pub log_mode: LogMode,
    pub log_file: PathBuf,
}

fn parse_var<T>(name: &str, raw: Option<String>, default: T) -> Result<T, RulError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        Some(v) => v
            .trim()
            .parse()
            .map_err(|e| RulError::Config(format!("{name}={v:?}: {e}"))),
        None => Ok(default),
    }
}

impl ServerConfig {
    /// Read configuration from the process environment.
    ///
    /// # Errors
    /// Returns `RulError::Config` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, RulError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    /// Returns `RulError::Config` if a variable is set but cannot be parsed,
    /// or the synthetic row count is above [`MAX_TRAINING_ROWS`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, RulError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = parse_var(
            BIND_ADDR_ENV,
            lookup(BIND_ADDR_ENV),
            DEFAULT_BIND_ADDR
                .parse::<SocketAddr>()
                .map_err(|e| RulError::Config(format!("default bind address: {e}")))?,
        )?;

        let dataset = match lookup(DATASET_PATH_ENV).filter(|p| !p.trim().is_empty()) {
            Some(path) => DatasetConfig::Json(PathBuf::from(path)),
            None => {
                let n_samples = parse_var(
                    DATASET_SAMPLES_ENV,
                    lookup(DATASET_SAMPLES_ENV),
                    DEFAULT_SAMPLES,
                )?;
                if n_samples > MAX_TRAINING_ROWS {
                    return Err(RulError::Config(format!(
                        "{DATASET_SAMPLES_ENV}={n_samples}: at most {MAX_TRAINING_ROWS} rows supported"
                    )));
                }
                DatasetConfig::Synthetic {
                    seed: parse_var(DATASET_SEED_ENV, lookup(DATASET_SEED_ENV), DEFAULT_SEED)?,
                    n_samples,
                }
            }
        };

        let log_mode = match lookup(LOG_MODE_ENV).as_deref() {
            Some("stdout") => LogMode::Stdout,
            Some("file") => LogMode::File,
            Some("auto") | None => LogMode::Auto,
            Some(other) => {
                return Err(RulError::Config(format!(
                    "{LOG_MODE_ENV}={other:?}: expected stdout, file or auto"
                )))
            }
        };

        let log_file = lookup(LOG_FILE_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

        Ok(Self {
            bind_addr,
            dataset,
            log_mode,
            log_file,
        })
    }
}
