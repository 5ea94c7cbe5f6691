//! Getter methods for `HarvestConfig`

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::types::HarvestConfig;
use crate::utils::{
    DOMESTIC_LIST_FILE, INTERNATIONAL_LIST_FILE, MERGED_LIST_FILE, REPORT_FILE,
};

impl HarvestConfig {
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    #[must_use]
    pub fn request_metadata(&self) -> &BTreeMap<String, String> {
        &self.request_metadata
    }

    #[must_use]
    pub fn root_content_id(&self) -> &str {
        &self.root_content_id
    }

    #[must_use]
    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }

    #[must_use]
    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    #[must_use]
    pub fn storage_base_url(&self) -> &str {
        &self.storage_base_url
    }

    /// Inclusive range of two-digit years for the quarterly tables
    #[must_use]
    pub fn quarterly_years(&self) -> std::ops::RangeInclusive<u8> {
        self.quarterly_first_year..=self.quarterly_last_year
    }

    #[must_use]
    pub fn quarterly_tables(&self) -> u8 {
        self.quarterly_tables
    }

    #[must_use]
    pub fn save_report(&self) -> bool {
        self.save_report
    }

    #[must_use]
    pub fn domestic_list_path(&self) -> PathBuf {
        self.output_dir.join(DOMESTIC_LIST_FILE)
    }

    #[must_use]
    pub fn international_list_path(&self) -> PathBuf {
        self.output_dir.join(INTERNATIONAL_LIST_FILE)
    }

    #[must_use]
    pub fn merged_list_path(&self) -> PathBuf {
        self.output_dir.join(MERGED_LIST_FILE)
    }

    #[must_use]
    pub fn report_path(&self) -> PathBuf {
        self.output_dir.join(REPORT_FILE)
    }
}
