//! Depth-first, cycle-safe expansion of the content-ID graph.
//!
//! The portal's link graph is neither a tree nor acyclic: yearly pages link
//! to each other and child pages link back to their parents. Two guards keep
//! the recursion finite:
//!
//! - a node is marked visited before it is fetched, so a node reachable
//!   from two sibling branches is only fetched by the first one;
//! - a node deeper than `max_depth` is dropped without a fetch.

use std::collections::BTreeSet;

use super::crawl_types::CrawlState;
use super::progress::ProgressReporter;
use super::rate_limiter::RequestPacer;
use crate::config::HarvestConfig;
use crate::content_id::ContentId;
use crate::page_extractor::ContentExtractor;
use crate::portal_client::{ContentSource, ServiceName};
use crate::utils::body_preview;

/// Characters of a body shown when a node yields nothing.
const EMPTY_BODY_PREVIEW_CHARS: usize = 120;

/// Recursive crawler over a [`ContentSource`]
pub struct Traversal<S, P> {
    pub(crate) source: S,
    pub(crate) extractor: ContentExtractor,
    pub(crate) pacer: RequestPacer,
    pub(crate) progress: P,
    pub(crate) max_depth: u32,
}

impl<S: ContentSource, P: ProgressReporter> Traversal<S, P> {
    pub fn new(
        source: S,
        extractor: ContentExtractor,
        pacer: RequestPacer,
        progress: P,
        max_depth: u8,
    ) -> Self {
        Self {
            source,
            extractor,
            pacer,
            progress,
            max_depth: u32::from(max_depth),
        }
    }

    /// Build a traversal with the extractor, pacer and depth from `config`.
    pub fn from_config(source: S, progress: P, config: &HarvestConfig) -> Self {
        Self::new(
            source,
            ContentExtractor::new(config.storage_base_url()),
            RequestPacer::new(config.request_delay()),
            progress,
            config.max_depth(),
        )
    }

    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    #[must_use]
    pub fn pacer(&self) -> &RequestPacer {
        &self.pacer
    }

    #[must_use]
    pub fn progress(&self) -> &P {
        &self.progress
    }

    /// Crawl the subtree below `seed` and return the spreadsheet URLs in it.
    ///
    /// Returns an empty set when `seed` was already visited or lies beyond
    /// the depth bound. A fetch failure ends this branch only; siblings are
    /// crawled normally by the caller. URLs are also accumulated in `state`.
    pub async fn crawl(
        &self,
        seed: &ContentId,
        state: &mut CrawlState,
        depth: u32,
    ) -> BTreeSet<String> {
        if state.is_visited(seed) {
            return BTreeSet::new();
        }
        if depth > self.max_depth {
            state.stats.depth_pruned += 1;
            self.progress.report_depth_pruned(seed, depth);
            return BTreeSet::new();
        }

        state.mark_visited(seed.clone());
        self.progress.report_fetch_started(seed, depth);

        let fetched = self.source.fetch(seed, ServiceName::NodeContent).await;
        state.stats.nodes_fetched += 1;
        self.pacer.pause().await;

        let body = match fetched {
            Ok(body) => body,
            Err(e) => {
                state.stats.fetch_failures += 1;
                self.progress.report_fetch_failed(seed, depth, &e.to_string());
                return BTreeSet::new();
            }
        };

        let extraction = self.extractor.extract(&body);
        if extraction.is_empty() {
            log::debug!(
                target: "dgca_harvest::crawl",
                "Content {seed} yielded nothing: {}",
                body_preview(&body, EMPTY_BODY_PREVIEW_CHARS)
            );
        }

        let mut found = extraction.spreadsheet_urls;
        if !found.is_empty() {
            self.progress.report_urls_found(seed, depth, found.len());
            state.record_urls(&found);
        }

        for child in &extraction.child_ids {
            if state.is_visited(child) {
                continue;
            }
            let nested = Box::pin(self.crawl(child, state, depth + 1)).await;
            found.extend(nested);
        }

        found
    }
}
