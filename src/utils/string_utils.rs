//! UTF-8-safe string truncation utilities
//!
//! Response bodies from the portal are logged in abbreviated form when a
//! node yields nothing. Bodies may contain multi-byte characters (Hindi
//! headings are common), so slicing has to respect character boundaries.

/// Safely truncate a string to a maximum number of CHARACTERS (not bytes).
///
/// Never panics, even on multi-byte characters.
///
/// # Examples
/// ```
/// # use dgca_harvest::utils::string_utils::safe_truncate_chars;
/// assert_eq!(safe_truncate_chars("Hello, World!", 5), "Hello");
/// assert_eq!(safe_truncate_chars("विमान", 2), "वि");
/// assert_eq!(safe_truncate_chars("Hi", 100), "Hi");
/// ```
#[inline]
pub fn safe_truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        None => s,
        Some((byte_idx, _)) => &s[..byte_idx],
    }
}

/// One-line preview of a response body for log output.
///
/// Whitespace runs (including newlines) collapse to a single space and the
/// result is cut to `max_chars` characters with a trailing ellipsis.
#[must_use]
pub fn body_preview(body: &str, max_chars: usize) -> String {
    let collapsed = body.split_whitespace().collect::<Vec<_>>().join(" ");
    let truncated = safe_truncate_chars(&collapsed, max_chars);
    if truncated.len() < collapsed.len() {
        format!("{truncated}…")
    } else {
        collapsed
    }
}
