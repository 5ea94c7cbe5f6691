//! Configuration module for the harvester
//!
//! This module provides the `HarvestConfig` struct and its type-safe builder
//! for configuring a harvest run with validation and sensible defaults.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod methods;
pub mod types;

// Re-exports for public API
pub use builder::{HarvestConfigBuilder, WithOutputDir};
pub use types::{ConfigError, HarvestConfig, default_request_metadata};
