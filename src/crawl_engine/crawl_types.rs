//! Core types for a crawl run.
//!
//! `CrawlState` is owned by the top-level crawl and lent by `&mut` down the
//! recursion; nothing in it is shared or cloned between branches.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

use crate::content_id::ContentId;

/// Counters collected while crawling
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawlStats {
    /// Node fetches attempted (root listing excluded)
    pub nodes_fetched: usize,
    /// Node fetches that failed with a transport error
    pub fetch_failures: usize,
    /// Nodes skipped for lying beyond the depth bound
    pub depth_pruned: usize,
}

/// Mutable state of one crawl invocation
#[derive(Debug, Default)]
pub struct CrawlState {
    visited: HashSet<ContentId>,
    urls: BTreeSet<String>,
    pub(crate) stats: CrawlStats,
}

impl CrawlState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_visited(&self, id: &ContentId) -> bool {
        self.visited.contains(id)
    }

    /// Record `id` as visited. Returns false if it already was.
    pub fn mark_visited(&mut self, id: ContentId) -> bool {
        self.visited.insert(id)
    }

    #[must_use]
    pub fn visited(&self) -> &HashSet<ContentId> {
        &self.visited
    }

    pub(crate) fn record_urls<'a>(&mut self, urls: impl IntoIterator<Item = &'a String>) {
        self.urls.extend(urls.into_iter().cloned());
    }

    /// Every spreadsheet URL discovered so far, across all seeds
    #[must_use]
    pub fn urls(&self) -> &BTreeSet<String> {
        &self.urls
    }

    #[must_use]
    pub fn stats(&self) -> CrawlStats {
        self.stats
    }

    pub(crate) fn into_urls(self) -> BTreeSet<String> {
        self.urls
    }
}

/// URLs found below one yearly page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearSummary {
    pub content_id: ContentId,
    pub urls_found: usize,
}

/// Summary of a crawl run, saved as `crawl_report.json` on request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrawlReport {
    pub root_content_id: ContentId,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    /// The root listing fetch failed, so no yearly page was crawled
    pub root_listing_failed: bool,
    pub years: Vec<YearSummary>,
    pub stats: CrawlStats,
    pub spreadsheet_urls: usize,
}

/// Result of crawling from the root listing
#[derive(Debug, Clone)]
pub struct CrawlOutcome {
    pub urls: BTreeSet<String>,
    pub report: CrawlReport,
}
