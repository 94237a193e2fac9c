//! # rul-predictor
//!
//! Remaining-useful-life (RUL) regression served over HTTP.
//!
//! This crate provides:
//! - Feature standardization fitted once on a fixed training set
//! - An epsilon-SVR with a radial basis kernel
//! - A JSON prediction endpoint and a server-rendered dashboard
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Core types (feature vectors, predictions, training data)
//! - `ports`: Trait definitions for the model and the dataset source
//! - `adapters`: Concrete implementations (scaler, SVR, datasets)
//! - `application`: The inference service built at startup
//! - `web`: Axum router, JSON API and dashboard
//! - `config`: Environment-driven server configuration

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod web;

pub use domain::{FeatureVector, HealthBand, RulPrediction};

/// Result type for rul-predictor operations
pub type Result<T> = std::result::Result<T, RulError>;

/// Main error type for rul-predictor
#[derive(Debug, thiserror::Error)]
pub enum RulError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Dataset error: {0}")]
    Dataset(#[from] domain::DatasetError),

    #[error("Training failed: {0}")]
    Training(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
