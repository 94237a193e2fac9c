//! Ports layer: Trait definitions for external operations.
//!
//! Following Hexagonal Architecture, these traits define the boundaries
//! between the application and its model and data backends.

mod dataset_source;
mod regressor;

pub use dataset_source::DatasetSource;
pub use regressor::Regressor;
