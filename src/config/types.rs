//! Core configuration types for a harvest run
//!
//! This module contains the main `HarvestConfig` struct, its error type and
//! the JSON file loader.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::utils::{
    DEFAULT_ENDPOINT, DEFAULT_MAX_DEPTH, DEFAULT_OUTPUT_DIR, DEFAULT_QUARTERLY_FIRST_YEAR,
    DEFAULT_QUARTERLY_LAST_YEAR, DEFAULT_QUARTERLY_TABLES, DEFAULT_REQUEST_DELAY_MS,
    DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_ROOT_CONTENT_ID, DEFAULT_RULE_BOOK_ID,
    DEFAULT_STORAGE_BASE_URL,
};

/// Errors raised while building or loading a `HarvestConfig`
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Endpoint is not an absolute http(s) URL
    #[error("Invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    /// Storage base is not an absolute http(s) URL
    #[error("Invalid storage base URL '{0}'")]
    InvalidStorageBase(String),

    /// Root listing content ID is blank
    #[error("Root content ID must not be empty")]
    EmptyRootContentId,

    /// Metadata block tries to set one of the per-request fields
    #[error("Static metadata must not contain the per-request field '{0}'")]
    ReservedMetadataKey(String),

    /// Quarterly year range is empty or not two-digit
    #[error("Invalid quarterly year range {first}..={last} (two-digit years, first <= last)")]
    InvalidYearRange { first: u8, last: u8 },

    /// No quarterly tables requested
    #[error("At least one quarterly table is required")]
    NoQuarterlyTables,

    /// Config file could not be read
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid JSON for `HarvestConfig`
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Field names the request client fills per request.
pub(crate) const RESERVED_METADATA_KEYS: [&str; 2] = ["contentId", "serviceName"];

/// Static metadata sent with every portal request.
///
/// The portal ignores requests that omit any of these fields, even the
/// empty ones.
#[must_use]
pub fn default_request_metadata() -> BTreeMap<String, String> {
    [
        ("baseLocale", ""),
        ("screenId", "10000001"),
        ("classification", ""),
        ("actionVal", "viewStaticData"),
        ("requestType", "ApplicationRH"),
        ("attachId", ""),
        ("langType", "2"),
        ("ruleBookId", DEFAULT_RULE_BOOK_ID),
        ("attr", ""),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_string(), value.to_string()))
    .collect()
}

/// Main configuration struct for a harvest run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarvestConfig {
    /// Directory the URL lists (and optional report) are written under.
    pub(crate) output_dir: PathBuf,

    /// Portal endpoint every request is posted to.
    pub(crate) endpoint: String,

    /// Static form fields sent alongside `contentId` and `serviceName`.
    pub(crate) request_metadata: BTreeMap<String, String>,

    /// Content ID of the root listing that enumerates the yearly pages.
    pub(crate) root_content_id: String,

    /// Pause after every fetch, successful or not.
    pub(crate) request_delay_ms: u64,

    /// Deepest recursion level still fetched; yearly pages are depth 0.
    pub(crate) max_depth: u8,

    pub(crate) request_timeout_secs: u64,

    /// Replaces the internal `jsp/dgca` prefix in discovered file paths.
    pub(crate) storage_base_url: String,

    pub(crate) quarterly_first_year: u8,
    pub(crate) quarterly_last_year: u8,
    pub(crate) quarterly_tables: u8,

    /// Write `crawl_report.json` next to the URL lists.
    pub(crate) save_report: bool,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_metadata: default_request_metadata(),
            root_content_id: DEFAULT_ROOT_CONTENT_ID.to_string(),
            request_delay_ms: DEFAULT_REQUEST_DELAY_MS,
            max_depth: DEFAULT_MAX_DEPTH,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            storage_base_url: DEFAULT_STORAGE_BASE_URL.to_string(),
            quarterly_first_year: DEFAULT_QUARTERLY_FIRST_YEAR,
            quarterly_last_year: DEFAULT_QUARTERLY_LAST_YEAR,
            quarterly_tables: DEFAULT_QUARTERLY_TABLES,
            save_report: false,
        }
    }
}

impl HarvestConfig {
    /// Load a config from a JSON file.
    ///
    /// Missing fields take their defaults. The result is validated the same
    /// way `HarvestConfigBuilder::build` validates.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Read` or `ConfigError::Parse` when the file
    /// cannot be loaded, or a validation error for out-of-range values.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check every invariant the crawler relies on.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match url::Url::parse(&self.endpoint) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
            Ok(parsed) => {
                return Err(ConfigError::InvalidEndpoint {
                    endpoint: self.endpoint.clone(),
                    reason: format!("unsupported scheme '{}'", parsed.scheme()),
                });
            }
            Err(e) => {
                return Err(ConfigError::InvalidEndpoint {
                    endpoint: self.endpoint.clone(),
                    reason: e.to_string(),
                });
            }
        }

        if !(self.storage_base_url.starts_with("http://")
            || self.storage_base_url.starts_with("https://"))
        {
            return Err(ConfigError::InvalidStorageBase(self.storage_base_url.clone()));
        }

        if self.root_content_id.trim().is_empty() {
            return Err(ConfigError::EmptyRootContentId);
        }

        if let Some(key) = RESERVED_METADATA_KEYS
            .iter()
            .find(|key| self.request_metadata.contains_key(**key))
        {
            return Err(ConfigError::ReservedMetadataKey((*key).to_string()));
        }

        if self.quarterly_first_year > self.quarterly_last_year || self.quarterly_last_year > 99 {
            return Err(ConfigError::InvalidYearRange {
                first: self.quarterly_first_year,
                last: self.quarterly_last_year,
            });
        }

        if self.quarterly_tables == 0 {
            return Err(ConfigError::NoQuarterlyTables);
        }

        Ok(())
    }
}
