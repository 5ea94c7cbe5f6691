//! Structured extraction pass
//!
//! Parses the body as JSON and walks the value tree. String leaves are either
//! further JSON documents (the portal nests serialized JSON inside JSON) or
//! HTML fragments whose `<a data-url="...">` attributes carry the links.
//! No field names are assumed; the walk is purely structural.

use std::sync::LazyLock;

use log::trace;
use scraper::{Html, Selector};
use serde_json::Value;

use super::link_rewriter::{LinkRewriter, LinkTarget};
use super::schema::{ExtractionResult, ParseError};

static DATA_URL_ANCHOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("a[data-url]").expect("BUG: hardcoded CSS selector 'a[data-url]' is invalid")
});

/// Markers that identify a string value as an HTML fragment.
const MARKUP_MARKERS: [&str; 3] = ["<table", "<a", "data-url"];

/// True when the trimmed text opens like a JSON object or array.
#[must_use]
pub fn looks_like_json(text: &str) -> bool {
    let trimmed = text.trim_start();
    trimmed.starts_with('{') || trimmed.starts_with('[')
}

/// True when the text carries table/anchor markup or a `data-url` marker.
#[must_use]
pub fn looks_like_markup(text: &str) -> bool {
    let lower = text.to_ascii_lowercase();
    MARKUP_MARKERS.iter().any(|marker| lower.contains(marker))
}

/// Every non-empty `data-url` attribute of an anchor in an HTML fragment.
#[must_use]
pub fn data_urls_in_fragment(fragment: &str) -> Vec<String> {
    let document = Html::parse_fragment(fragment);
    document
        .select(&DATA_URL_ANCHOR)
        .filter_map(|anchor| anchor.value().attr("data-url"))
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect()
}

/// Run the structured pass over a raw body.
///
/// # Errors
///
/// `ParseError::NotJson` when the body does not open like JSON,
/// `ParseError::Json` when it does but fails to parse. Malformed nested
/// strings never fail the pass; they are treated as plain text.
pub fn structured_pass(body: &str, rewriter: &LinkRewriter) -> Result<ExtractionResult, ParseError> {
    if !looks_like_json(body) {
        return Err(ParseError::NotJson);
    }
    let root: Value = serde_json::from_str(body.trim())?;

    let mut data_urls = Vec::new();
    walk_value(&root, &mut data_urls);

    let mut result = ExtractionResult::default();
    for data_url in data_urls {
        match rewriter.classify_data_url(&data_url) {
            LinkTarget::Spreadsheet(url) => {
                result.spreadsheet_urls.insert(url);
            }
            LinkTarget::Page(ids) => result.child_ids.extend(ids),
            LinkTarget::Other => trace!(
                target: "dgca_harvest::extract",
                "Ignoring data-url {data_url}"
            ),
        }
    }
    Ok(result)
}

fn walk_value(value: &Value, data_urls: &mut Vec<String>) {
    match value {
        Value::Object(map) => map.values().for_each(|child| walk_value(child, data_urls)),
        Value::Array(items) => items.iter().for_each(|child| walk_value(child, data_urls)),
        Value::String(text) => walk_string(text, data_urls),
        Value::Null | Value::Bool(_) | Value::Number(_) => {}
    }
}

fn walk_string(text: &str, data_urls: &mut Vec<String>) {
    if looks_like_json(text)
        && let Ok(nested) = serde_json::from_str::<Value>(text.trim())
    {
        walk_value(&nested, data_urls);
        return;
    }

    if looks_like_markup(text) {
        data_urls.extend(data_urls_in_fragment(text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content_id::ContentId;

    const BASE: &str = "https://storage.test";

    fn rewriter() -> LinkRewriter {
        LinkRewriter::new(BASE)
    }

    #[test]
    fn finds_anchor_in_embedded_fragment() {
        let body = r#"{"data":{"content":"<table><tr><td><a data-url=\"jsp/dgca/foo.xls\">Jan</a></td></tr></table>"}}"#;
        let result = structured_pass(body, &rewriter()).unwrap();
        assert_eq!(
            result.spreadsheet_urls.into_iter().collect::<Vec<_>>(),
            vec![format!("{BASE}/foo.xls")]
        );
    }

    #[test]
    fn walks_json_within_json() {
        let inner = serde_json::json!({
            "html": "<a data-url=\"yearly/259/9467/html\">2023</a>"
        })
        .to_string();
        let body = serde_json::json!({ "payload": inner, "list": [1, null, true] }).to_string();

        let result = structured_pass(&body, &rewriter()).unwrap();
        assert!(result.child_ids.contains(&ContentId::from("9467")));
        assert!(result.spreadsheet_urls.is_empty());
    }

    #[test]
    fn array_items_are_walked() {
        let body = r#"[{"x":"<a data-url='jsp/dgca/a.xlsx'>a</a>"}, "<a data-url='jsp/dgca/b.xls'>b</a>"]"#;
        let result = structured_pass(body, &rewriter()).unwrap();
        assert_eq!(result.spreadsheet_urls.len(), 2);
    }

    #[test]
    fn malformed_nested_json_is_treated_as_text() {
        let body = r#"{"a":"{not json <a data-url='jsp/dgca/c.xls'>c</a>"}"#;
        let result = structured_pass(body, &rewriter()).unwrap();
        assert!(result.spreadsheet_urls.contains(&format!("{BASE}/c.xls")));
    }

    #[test]
    fn html_body_is_not_json() {
        assert!(matches!(
            structured_pass("<html><a data-url='jsp/dgca/x.xls'></a></html>", &rewriter()),
            Err(ParseError::NotJson)
        ));
        assert!(matches!(
            structured_pass("{\"broken\": ", &rewriter()),
            Err(ParseError::Json(_))
        ));
    }

    #[test]
    fn empty_data_url_is_skipped() {
        assert!(data_urls_in_fragment("<a data-url=''>x</a><a data-url=' '>y</a>").is_empty());
        assert_eq!(
            data_urls_in_fragment("<a href='#' data-url='jsp/dgca/z.xls'>z</a><div data-url='no'></div>"),
            vec!["jsp/dgca/z.xls".to_string()]
        );
    }
}
