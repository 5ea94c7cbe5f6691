//! Predictable URLs of the quarterly international tables
//!
//! Unlike the domestic monthly files, the international tables live at fixed
//! storage paths named `{yy}Q{q}_{table}.xlsx`, so they are enumerated
//! instead of crawled.

use std::ops::RangeInclusive;

use crate::config::HarvestConfig;
use crate::utils::QUARTERLY_PATH;

const QUARTERS: RangeInclusive<u8> = 1..=4;

/// Enumerates table × year × quarter
#[derive(Debug, Clone)]
pub struct QuarterlyUrlGenerator {
    storage_base: String,
    years: RangeInclusive<u8>,
    tables: u8,
}

impl QuarterlyUrlGenerator {
    pub fn new(storage_base: impl Into<String>, years: RangeInclusive<u8>, tables: u8) -> Self {
        Self {
            storage_base: storage_base.into().trim_end_matches('/').to_string(),
            years,
            tables,
        }
    }

    #[must_use]
    pub fn from_config(config: &HarvestConfig) -> Self {
        Self::new(
            config.storage_base_url(),
            config.quarterly_years(),
            config.quarterly_tables(),
        )
    }

    /// URL of one table for one quarter of a two-digit year
    #[must_use]
    pub fn url_for(&self, year: u8, quarter: u8, table: u8) -> String {
        format!(
            "{}/{QUARTERLY_PATH}/{year:02}Q{quarter}_{table}.xlsx",
            self.storage_base
        )
    }

    /// All URLs, table-major then year then quarter
    #[must_use]
    pub fn urls(&self) -> Vec<String> {
        let mut urls = Vec::with_capacity(self.len());
        for table in 1..=self.tables {
            for year in self.years.clone() {
                for quarter in QUARTERS {
                    urls.push(self.url_for(year, quarter, table));
                }
            }
        }
        urls
    }

    #[must_use]
    pub fn len(&self) -> usize {
        usize::from(self.tables) * self.years.clone().count() * QUARTERS.count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
