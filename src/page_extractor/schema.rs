use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::content_id::ContentId;

/// What one response body contributes to the crawl.
///
/// Both sets may be empty. Sets are ordered so merged results and the child
/// expansion order are deterministic across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Public spreadsheet URLs (after the storage prefix rewrite)
    pub spreadsheet_urls: BTreeSet<String>,
    /// Content IDs of linked child pages
    pub child_ids: BTreeSet<ContentId>,
}

impl ExtractionResult {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spreadsheet_urls.is_empty() && self.child_ids.is_empty()
    }

    /// Union `other` into `self`.
    pub fn merge(&mut self, other: ExtractionResult) {
        self.spreadsheet_urls.extend(other.spreadsheet_urls);
        self.child_ids.extend(other.child_ids);
    }
}

/// Why the structured pass found nothing
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Body does not start like a JSON document
    #[error("Body is not JSON")]
    NotJson,

    /// Body starts like JSON but does not parse
    #[error("Malformed JSON body: {0}")]
    Json(#[from] serde_json::Error),
}
