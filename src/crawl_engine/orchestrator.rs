//! Top-level crawl orchestration
//!
//! Reads the root listing, enumerates the yearly pages on it and crawls each
//! one with a single shared visited set, so pages linked from several years
//! are fetched once.

use chrono::Utc;
use log::info;

use super::crawl_types::{CrawlOutcome, CrawlReport, CrawlState, YearSummary};
use super::progress::ProgressReporter;
use super::traversal::Traversal;
use crate::content_id::ContentId;
use crate::page_extractor::root_listing_ids;
use crate::portal_client::{ContentSource, ServiceName};

/// Crawl every yearly page listed under `root`.
///
/// A failed root fetch is reported and produces an empty outcome with
/// `root_listing_failed` set; it is not an error, so callers still persist
/// whatever else they have.
pub async fn crawl_from_root<S, P>(traversal: &Traversal<S, P>, root: &ContentId) -> CrawlOutcome
where
    S: ContentSource,
    P: ProgressReporter,
{
    let started_at = Utc::now();
    info!(target: "dgca_harvest::crawl", "Fetching parent data (contentId: {root})...");

    let fetched = traversal
        .source
        .fetch(root, ServiceName::ParentListing)
        .await;
    traversal.pacer.pause().await;

    let mut state = CrawlState::new();
    let mut years = Vec::new();

    let root_listing_failed = match fetched {
        Ok(listing) => {
            info!(
                target: "dgca_harvest::crawl",
                "Parent data fetched, response length: {}",
                listing.len()
            );
            let yearly_ids = root_listing_ids(&listing);
            traversal.progress.report_root_listing(root, yearly_ids.len());

            for year in &yearly_ids {
                let year_urls = traversal.crawl(year, &mut state, 0).await;
                traversal
                    .progress
                    .report_year_completed(year, year_urls.len(), state.urls().len());
                years.push(YearSummary {
                    content_id: year.clone(),
                    urls_found: year_urls.len(),
                });
            }
            false
        }
        Err(e) => {
            traversal.progress.report_root_failed(root, &e.to_string());
            true
        }
    };

    traversal.progress.report_completed(state.urls().len());

    let stats = state.stats();
    let urls = state.into_urls();
    let report = CrawlReport {
        root_content_id: root.clone(),
        started_at,
        finished_at: Utc::now(),
        root_listing_failed,
        years,
        stats,
        spreadsheet_urls: urls.len(),
    };

    CrawlOutcome { urls, report }
}
