//! Pattern extraction pass
//!
//! Scans the raw body text with fixed regular expressions. This pass does
//! not care whether the body is JSON, HTML or a broken mix of both, which is
//! exactly the case the structured pass cannot handle.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use super::link_rewriter::{LinkRewriter, is_spreadsheet_path, numeric_segment_at};
use super::schema::ExtractionResult;
use crate::content_id::ContentId;

/// Internal file paths: `jsp/...` up to the first extension.
static INTERNAL_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"jsp[a-zA-Z0-9/ _%,]*\.[a-z]+").expect("INTERNAL_PATH: hardcoded regex is valid")
});

/// Yearly page links such as `yearly/259/9467/html`.
static YEARLY_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)yearly/[^"']*html"#).expect("YEARLY_LINK: hardcoded regex is valid")
});

/// Generic internal page links such as `jsp/dgca/9467/index.html`.
static INTERNAL_HTML_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)jsp/[^"']*\.html"#).expect("INTERNAL_HTML_LINK: hardcoded regex is valid")
});

/// Root listing entries such as `monthlyStatistics/259/4188/html`.
static MONTHLY_STATISTICS_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)monthlyStatistics.*?html")
        .expect("MONTHLY_STATISTICS_LINK: hardcoded regex is valid")
});

/// Mentions of the domestic city-pair table.
static CITY_PAIR_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)city.*?pair|CITYPAIR").expect("CITY_PAIR_MARKER: hardcoded regex is valid")
});

/// Path segment holding the content ID in every link shape above.
const CONTENT_ID_SEGMENT: usize = 2;

/// Run the pattern pass over a raw body. Never fails.
#[must_use]
pub fn pattern_pass(body: &str, rewriter: &LinkRewriter) -> ExtractionResult {
    let mut result = ExtractionResult::default();

    for found in INTERNAL_PATH.find_iter(body) {
        let path = found.as_str();
        if is_spreadsheet_path(path) {
            result.spreadsheet_urls.insert(rewriter.rewrite(path));
        } else if path.ends_with(".html") || path.ends_with(".htm") {
            result
                .child_ids
                .extend(numeric_segment_at(path, CONTENT_ID_SEGMENT));
        }
    }

    for pattern in [&*YEARLY_LINK, &*INTERNAL_HTML_LINK] {
        for found in pattern.find_iter(body) {
            result
                .child_ids
                .extend(numeric_segment_at(found.as_str(), CONTENT_ID_SEGMENT));
        }
    }

    result
}

/// Yearly page IDs listed on the root listing page.
///
/// The root listing is always HTML, so only this pattern-based scan is used.
#[must_use]
pub fn root_listing_ids(body: &str) -> BTreeSet<ContentId> {
    MONTHLY_STATISTICS_LINK
        .find_iter(body)
        .filter_map(|found| {
            found
                .as_str()
                .split('/')
                .nth(CONTENT_ID_SEGMENT)
                .map(str::trim)
                .filter(|segment| !segment.is_empty())
                .map(ContentId::from)
        })
        .collect()
}

/// Content ID of the city-pair page linked from a yearly page, if any.
///
/// Returns `None` unless the page mentions the city-pair table at all; then
/// the first yearly link with a content ID segment wins.
///
/// The crawl does not need it (the city-pair page is reached like any other
/// child). It is an offline helper, exposed through `dgca-harvest extract
/// --city-pair`, for locating the table on a saved yearly page.
#[must_use]
pub fn city_pair_content_id(year_body: &str) -> Option<ContentId> {
    if !CITY_PAIR_MARKER.is_match(year_body) {
        return None;
    }

    YEARLY_LINK.find_iter(year_body).find_map(|found| {
        found
            .as_str()
            .split('/')
            .nth(CONTENT_ID_SEGMENT)
            .filter(|segment| !segment.is_empty())
            .map(ContentId::from)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://storage.test";

    #[test]
    fn finds_spreadsheets_in_broken_markup() {
        let body = "<td><a data-url=\"jsp/dgca/InventoryList/Domestic/JAN 2024.xlsx\" <<<";
        let result = pattern_pass(body, &LinkRewriter::new(BASE));
        assert!(
            result
                .spreadsheet_urls
                .contains(&format!("{BASE}/InventoryList/Domestic/JAN 2024.xlsx"))
        );
    }

    #[test]
    fn non_spreadsheet_files_are_ignored() {
        let body = r#"<a href="jsp/dgca/circular.pdf">pdf</a>"#;
        assert!(pattern_pass(body, &LinkRewriter::new(BASE)).is_empty());
    }

    #[test]
    fn yearly_links_yield_third_segment() {
        let body = r#"<a data-url="yearly/259/9467/html">2023</a> <a data-url='Yearly/259/abc/html'>x</a>"#;
        let result = pattern_pass(body, &LinkRewriter::new(BASE));
        assert_eq!(
            result.child_ids.into_iter().collect::<Vec<_>>(),
            vec![ContentId::from("9467")]
        );
    }

    #[test]
    fn internal_html_links_yield_third_segment() {
        let body = r#"<a href="jsp/dgca/5521/index.html">more</a>"#;
        let result = pattern_pass(body, &LinkRewriter::new(BASE));
        assert!(result.child_ids.contains(&ContentId::from("5521")));
    }

    #[test]
    fn root_listing_enumerates_monthly_statistics() {
        let body = r#"<li><a data-url="monthlyStatistics/259/100/html">2024</a></li>
<li><a data-url="monthlyStatistics/259/101/html">2023</a></li>
<li><a data-url="monthlyStatistics/259/100/html">dup</a></li>"#;
        let ids: Vec<_> = root_listing_ids(body).into_iter().collect();
        assert_eq!(ids, vec![ContentId::from("100"), ContentId::from("101")]);
    }

    #[test]
    fn city_pair_requires_marker() {
        let with_marker = r#"City Pair data <a data-url="yearly/259/7001/html">x</a>"#;
        let without_marker = r#"<a data-url="yearly/259/7001/html">x</a>"#;
        assert_eq!(city_pair_content_id(with_marker), Some(ContentId::from("7001")));
        assert_eq!(city_pair_content_id(without_marker), None);
    }
}
