//! Deduplication, merging and persistence of discovered URLs
//!
//! The three persisted views are each sorted lexicographically so repeated
//! runs produce diff-friendly output.

use std::collections::BTreeSet;

use crate::config::HarvestConfig;
use crate::content_saver::{SaveError, save_url_list};

/// Set union of both inputs, sorted, without duplicates.
#[must_use]
pub fn merge<C, G>(crawled: C, generated: G) -> Vec<String>
where
    C: IntoIterator<Item = String>,
    G: IntoIterator<Item = String>,
{
    crawled
        .into_iter()
        .chain(generated)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn sorted_unique(urls: impl IntoIterator<Item = String>) -> Vec<String> {
    urls.into_iter().collect::<BTreeSet<_>>().into_iter().collect()
}

/// The three views written at the end of a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlLists {
    /// Crawled URLs only
    pub domestic: Vec<String>,
    /// Generated URLs only
    pub international: Vec<String>,
    /// Union of both
    pub merged: Vec<String>,
}

impl UrlLists {
    pub fn new<C, G>(crawled: C, generated: G) -> Self
    where
        C: IntoIterator<Item = String>,
        G: IntoIterator<Item = String>,
    {
        let domestic = sorted_unique(crawled);
        let international = sorted_unique(generated);
        let merged = merge(domestic.iter().cloned(), international.iter().cloned());
        Self {
            domestic,
            international,
            merged,
        }
    }

    /// Write all three views under the configured output directory.
    ///
    /// # Errors
    ///
    /// Returns the first file that could not be written.
    pub async fn save(&self, config: &HarvestConfig) -> Result<(), SaveError> {
        save_url_list(self.domestic.as_slice(), &config.domestic_list_path()).await?;
        save_url_list(self.international.as_slice(), &config.international_list_path()).await?;
        save_url_list(self.merged.as_slice(), &config.merged_list_path()).await?;
        Ok(())
    }
}
