//! Content extraction from portal response bodies.
//!
//! A body yields spreadsheet URLs and child content IDs through two
//! independent passes whose results are always unioned:
//!
//! - the structured pass (`structured`) parses JSON, walks it, and reads
//!   `data-url` attributes out of embedded HTML fragments;
//! - the pattern pass (`patterns`) scans the raw text with fixed regexes.
//!
//! The pattern pass is the fallback for bodies the structured pass cannot
//! read (HTML pages, truncated JSON, malformed fragments), so it runs on every
//! body even when the structured pass succeeded.

// Sub-modules
pub mod link_rewriter;
pub mod patterns;
pub mod schema;
pub mod structured;

use log::debug;

// Re-exports for public API
pub use link_rewriter::{LinkRewriter, LinkTarget};
pub use patterns::{city_pair_content_id, pattern_pass, root_listing_ids};
pub use schema::{ExtractionResult, ParseError};
pub use structured::structured_pass;

/// Runs both extraction passes against response bodies
#[derive(Debug, Clone)]
pub struct ContentExtractor {
    rewriter: LinkRewriter,
}

impl ContentExtractor {
    pub fn new(storage_base: impl Into<String>) -> Self {
        Self {
            rewriter: LinkRewriter::new(storage_base),
        }
    }

    #[must_use]
    pub fn rewriter(&self) -> &LinkRewriter {
        &self.rewriter
    }

    /// Extract everything one body contributes.
    ///
    /// Parse failures only empty the structured pass; the pattern pass
    /// always runs and both results are merged.
    #[must_use]
    pub fn extract(&self, body: &str) -> ExtractionResult {
        let mut result = match structured_pass(body, &self.rewriter) {
            Ok(found) => found,
            Err(ParseError::NotJson) => ExtractionResult::default(),
            Err(e) => {
                debug!(target: "dgca_harvest::extract", "Structured pass found nothing: {e}");
                ExtractionResult::default()
            }
        };

        result.merge(pattern_pass(body, &self.rewriter));
        result
    }
}
