//! Progress reporting abstraction for crawl operations
//!
//! Defines the `ProgressReporter` trait for crawl lifecycle events, a
//! logging implementation for the CLI and a no-op implementation.

use log::{debug, info, warn};

use crate::content_id::ContentId;

/// Trait for reporting crawl progress at key lifecycle events
///
/// Implementations can log, collect events for tests, update a UI, etc.
/// Depth is the recursion level below a yearly page (yearly pages are 0).
pub trait ProgressReporter: Send + Sync {
    /// The root listing was read and enumerated `yearly` pages
    fn report_root_listing(&self, root: &ContentId, yearly: usize);

    /// The root listing could not be fetched
    fn report_root_failed(&self, root: &ContentId, error: &str);

    /// A node is about to be fetched
    fn report_fetch_started(&self, id: &ContentId, depth: u32);

    /// A node's body contained spreadsheet URLs
    fn report_urls_found(&self, id: &ContentId, depth: u32, count: usize);

    /// A node could not be fetched; its subtree is skipped
    fn report_fetch_failed(&self, id: &ContentId, depth: u32, error: &str);

    /// A node lies beyond the depth bound and was not fetched
    fn report_depth_pruned(&self, id: &ContentId, depth: u32);

    /// A yearly page's subtree is finished
    fn report_year_completed(&self, id: &ContentId, found: usize, total: usize);

    /// The crawl is finished
    fn report_completed(&self, total: usize);
}

/// Progress reporter that does nothing
#[derive(Debug, Clone, Copy)]
pub struct NoOpProgress;

impl ProgressReporter for NoOpProgress {
    #[inline(always)]
    fn report_root_listing(&self, _root: &ContentId, _yearly: usize) {}

    #[inline(always)]
    fn report_root_failed(&self, _root: &ContentId, _error: &str) {}

    #[inline(always)]
    fn report_fetch_started(&self, _id: &ContentId, _depth: u32) {}

    #[inline(always)]
    fn report_urls_found(&self, _id: &ContentId, _depth: u32, _count: usize) {}

    #[inline(always)]
    fn report_fetch_failed(&self, _id: &ContentId, _depth: u32, _error: &str) {}

    #[inline(always)]
    fn report_depth_pruned(&self, _id: &ContentId, _depth: u32) {}

    #[inline(always)]
    fn report_year_completed(&self, _id: &ContentId, _found: usize, _total: usize) {}

    #[inline(always)]
    fn report_completed(&self, _total: usize) {}
}

/// Progress reporter that writes to the `log` facade, indented by depth
#[derive(Debug, Clone, Copy)]
pub struct LogProgress;

fn indent(depth: u32) -> usize {
    2 + 2 * depth as usize
}

impl ProgressReporter for LogProgress {
    fn report_root_listing(&self, root: &ContentId, yearly: usize) {
        info!(target: "dgca_harvest::crawl", "Root listing {root}: found {yearly} year content IDs");
    }

    fn report_root_failed(&self, root: &ContentId, error: &str) {
        warn!(target: "dgca_harvest::crawl", "Root listing {root} unavailable: {error}");
    }

    fn report_fetch_started(&self, id: &ContentId, depth: u32) {
        let pad = indent(depth);
        if depth == 0 {
            info!(target: "dgca_harvest::crawl", "{:pad$}Fetching year {id}...", "");
        } else {
            debug!(target: "dgca_harvest::crawl", "{:pad$}Following HTML link (contentId: {id})...", "");
        }
    }

    fn report_urls_found(&self, _id: &ContentId, depth: u32, count: usize) {
        let pad = indent(depth);
        info!(target: "dgca_harvest::crawl", "{:pad$}Found {count} XLS/XLSX URLs", "");
    }

    fn report_fetch_failed(&self, id: &ContentId, depth: u32, error: &str) {
        let pad = indent(depth);
        warn!(target: "dgca_harvest::crawl", "{:pad$}Error processing contentId {id}: {error}", "");
    }

    fn report_depth_pruned(&self, id: &ContentId, depth: u32) {
        let pad = indent(depth);
        debug!(target: "dgca_harvest::crawl", "{:pad$}Depth {depth} exceeds limit, skipping {id}", "");
    }

    fn report_year_completed(&self, id: &ContentId, found: usize, total: usize) {
        info!(target: "dgca_harvest::crawl", "  Year {id}: found {found} URLs (total so far: {total})");
    }

    fn report_completed(&self, total: usize) {
        info!(target: "dgca_harvest::crawl", "Found {total} total domestic URLs");
    }
}
