//! Type-safe builder for `HarvestConfig` using the typestate pattern
//!
//! The output directory is the only required setting; `build()` is not
//! available until it has been provided.

use std::marker::PhantomData;
use std::path::PathBuf;

use super::types::{ConfigError, HarvestConfig};

// Type states for the builder
pub struct WithOutputDir;

pub struct HarvestConfigBuilder<State = ()> {
    pub(crate) inner: HarvestConfig,
    pub(crate) _phantom: PhantomData<State>,
}

impl Default for HarvestConfigBuilder<()> {
    fn default() -> Self {
        Self {
            inner: HarvestConfig::default(),
            _phantom: PhantomData,
        }
    }
}

impl HarvestConfig {
    /// Create a builder for configuring a `HarvestConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> HarvestConfigBuilder<()> {
        HarvestConfigBuilder::default()
    }

    /// Reopen a loaded config for overrides (e.g. CLI flags over a config file).
    #[must_use]
    pub fn into_builder(self) -> HarvestConfigBuilder<WithOutputDir> {
        HarvestConfigBuilder {
            inner: self,
            _phantom: PhantomData,
        }
    }
}

impl HarvestConfigBuilder<()> {
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> HarvestConfigBuilder<WithOutputDir> {
        self.inner.output_dir = dir.into();
        HarvestConfigBuilder {
            inner: self.inner,
            _phantom: PhantomData,
        }
    }
}

// Build method only available when the output directory is set
impl HarvestConfigBuilder<WithOutputDir> {
    /// Validate and produce the config.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint, see `HarvestConfig::validate`.
    pub fn build(self) -> Result<HarvestConfig, ConfigError> {
        self.inner.validate()?;
        Ok(self.inner)
    }

    /// Replace the output directory chosen earlier.
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.inner.output_dir = dir.into();
        self
    }
}
