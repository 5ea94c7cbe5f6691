//! Classification and prefix rewriting of portal link targets.
//!
//! The portal refers to files in public storage by an internal path such as
//! `jsp/dgca/InventoryList/.../JAN2024.xlsx` and to other portal pages by
//! paths ending in `html` that carry the target content ID as one of their
//! segments. This module turns such raw link values into spreadsheet URLs and
//! child content IDs.

use crate::content_id::{ContentId, is_numeric_segment};
use crate::utils::INTERNAL_STORAGE_PREFIX;

/// Internal path segment every file link starts with.
pub const INTERNAL_PATH_ROOT: &str = "jsp/";

/// Minimum number of digits for a `data-url` segment to count as a content ID.
const MIN_CONTENT_ID_DIGITS: usize = 3;

/// What a single `data-url` attribute points at
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// A spreadsheet file, already rewritten to its public URL
    Spreadsheet(String),
    /// Another portal page; every content ID found in its path
    Page(Vec<ContentId>),
    /// Anything else (PDFs, external sites, anchors)
    Other,
}

/// Rewrites internal storage paths onto the public storage base.
#[derive(Debug, Clone)]
pub struct LinkRewriter {
    storage_base: String,
}

impl LinkRewriter {
    pub fn new(storage_base: impl Into<String>) -> Self {
        Self {
            storage_base: storage_base.into().trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn storage_base(&self) -> &str {
        &self.storage_base
    }

    /// Replace a leading `jsp/dgca` with the storage base.
    ///
    /// Paths under any other prefix are returned unchanged.
    #[must_use]
    pub fn rewrite(&self, path: &str) -> String {
        match path.strip_prefix(INTERNAL_STORAGE_PREFIX) {
            Some(rest) => format!("{}{rest}", self.storage_base),
            None => path.to_string(),
        }
    }

    /// Classify a `data-url` attribute value found in an embedded fragment.
    #[must_use]
    pub fn classify_data_url(&self, data_url: &str) -> LinkTarget {
        let data_url = data_url.trim();

        if data_url.starts_with(INTERNAL_PATH_ROOT) && is_spreadsheet_path(data_url) {
            return LinkTarget::Spreadsheet(self.rewrite(data_url));
        }

        if is_html_link(data_url) {
            let ids: Vec<ContentId> = data_url
                .split('/')
                .filter(|segment| {
                    segment.len() >= MIN_CONTENT_ID_DIGITS && is_numeric_segment(segment)
                })
                .map(ContentId::from)
                .collect();
            if !ids.is_empty() {
                return LinkTarget::Page(ids);
            }
        }

        LinkTarget::Other
    }
}

/// True for paths ending in a spreadsheet extension (`.xls` / `.xlsx`).
#[must_use]
pub fn is_spreadsheet_path(path: &str) -> bool {
    let lower = path.to_ascii_lowercase();
    lower.ends_with(".xls") || lower.ends_with(".xlsx")
}

/// True for links to other portal pages (`.../html` or `*.html`).
#[must_use]
pub fn is_html_link(path: &str) -> bool {
    let lower = path.to_ascii_lowercase();
    lower.contains("/html") || lower.ends_with(".html")
}

/// Path segment at `index` as a content ID, when it is all digits.
#[must_use]
pub fn numeric_segment_at(path: &str, index: usize) -> Option<ContentId> {
    path.split('/')
        .nth(index)
        .filter(|segment| is_numeric_segment(segment))
        .map(ContentId::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://public-prd-dgca.s3.ap-south-1.amazonaws.com";

    #[test]
    fn rewrites_internal_prefix_only() {
        let rewriter = LinkRewriter::new(BASE);
        assert_eq!(
            rewriter.rewrite("jsp/dgca/InventoryList/JAN2024.xlsx"),
            format!("{BASE}/InventoryList/JAN2024.xlsx")
        );
        assert_eq!(rewriter.rewrite("jsp/other/a.xls"), "jsp/other/a.xls");
    }

    #[test]
    fn trailing_slash_on_base_is_ignored() {
        let rewriter = LinkRewriter::new(format!("{BASE}/"));
        assert_eq!(rewriter.rewrite("jsp/dgca/foo.xls"), format!("{BASE}/foo.xls"));
    }

    #[test]
    fn classifies_spreadsheets() {
        let rewriter = LinkRewriter::new(BASE);
        assert_eq!(
            rewriter.classify_data_url("jsp/dgca/foo.XLSX"),
            LinkTarget::Spreadsheet(format!("{BASE}/foo.XLSX"))
        );
        // outside the internal tree
        assert_eq!(
            rewriter.classify_data_url("https://example.org/foo.xls"),
            LinkTarget::Other
        );
    }

    #[test]
    fn classifies_pages_by_numeric_segments() {
        let rewriter = LinkRewriter::new(BASE);
        assert_eq!(
            rewriter.classify_data_url("yearly/259/9467/html"),
            LinkTarget::Page(vec![ContentId::from("259"), ContentId::from("9467")])
        );
        assert_eq!(
            rewriter.classify_data_url("jsp/dgca/12/report.html"),
            LinkTarget::Other
        );
        assert_eq!(rewriter.classify_data_url("jsp/dgca/x.pdf"), LinkTarget::Other);
    }

    #[test]
    fn segment_lookup_requires_digits() {
        assert_eq!(
            numeric_segment_at("yearly/259/9467/html", 2),
            Some(ContentId::from("9467"))
        );
        assert_eq!(numeric_segment_at("jsp/dgca/abc/x.html", 2), None);
        assert_eq!(numeric_segment_at("yearly", 2), None);
    }
}
