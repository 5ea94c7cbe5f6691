//! Builder methods available for all states
//!
//! This module contains setters that can be called on the builder
//! regardless of its current type state.

use std::collections::BTreeMap;

use super::builder::HarvestConfigBuilder;

impl<State> HarvestConfigBuilder<State> {
    /// Set the portal endpoint every request is posted to
    #[must_use]
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.inner.endpoint = endpoint.into();
        self
    }

    /// Replace the whole static metadata block
    ///
    /// `contentId` and `serviceName` are filled per request and are rejected
    /// by `build()` if present here.
    #[must_use]
    pub fn request_metadata(mut self, metadata: BTreeMap<String, String>) -> Self {
        self.inner.request_metadata = metadata;
        self
    }

    /// Set or override a single static metadata field
    #[must_use]
    pub fn metadata_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.inner.request_metadata.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn root_content_id(mut self, id: impl Into<String>) -> Self {
        self.inner.root_content_id = id.into();
        self
    }

    /// Set the pause after every fetch in milliseconds
    ///
    /// Use 0 only against a local or mocked endpoint.
    #[must_use]
    pub fn request_delay_ms(mut self, delay_ms: u64) -> Self {
        self.inner.request_delay_ms = delay_ms;
        self
    }

    /// Set the deepest recursion level still fetched (yearly pages are depth 0)
    #[must_use]
    pub fn max_depth(mut self, depth: u8) -> Self {
        self.inner.max_depth = depth;
        self
    }

    #[must_use]
    pub fn request_timeout_secs(mut self, secs: u64) -> Self {
        self.inner.request_timeout_secs = secs;
        self
    }

    #[must_use]
    pub fn storage_base_url(mut self, base: impl Into<String>) -> Self {
        self.inner.storage_base_url = base.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the inclusive two-digit year range of the quarterly tables
    #[must_use]
    pub fn quarterly_years(mut self, first: u8, last: u8) -> Self {
        self.inner.quarterly_first_year = first;
        self.inner.quarterly_last_year = last;
        self
    }

    #[must_use]
    pub fn quarterly_tables(mut self, tables: u8) -> Self {
        self.inner.quarterly_tables = tables;
        self
    }

    #[must_use]
    pub fn save_report(mut self, save: bool) -> Self {
        self.inner.save_report = save;
        self
    }
}
