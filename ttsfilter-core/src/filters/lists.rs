//! lists.rs - Numbered list marker removal.
//!
//! Only markers at the start of a line are touched, e.g. "1. xxx", "2．xxx",
//! "3。xxx", "4) xxx", "5、xxx", "(6) xxx", "（7）xxx".
//!
//! License: MIT OR APACHE 2.0

use once_cell::sync::Lazy;
use regex::Regex;

use crate::filters::collapse_whitespace;

static PERIOD_MARKER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[\s\x1C-\x1F]*\d+[.．。][\s\x1C-\x1F]*").unwrap());

static PAREN_MARKER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[\s\x1C-\x1F]*\d+[)）、][\s\x1C-\x1F]*").unwrap());

static WRAPPED_MARKER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[\s\x1C-\x1F]*[(（]\d+[)）][\s\x1C-\x1F]*").unwrap());

/// Removes numbered list markers at line starts, then collapses whitespace.
pub fn filter_numbered_lists(text: &str) -> String {
    let mut filtered = PERIOD_MARKER_RE.replace_all(text, "").into_owned();
    filtered = PAREN_MARKER_RE.replace_all(&filtered, "").into_owned();
    filtered = WRAPPED_MARKER_RE.replace_all(&filtered, "").into_owned();
    collapse_whitespace(&filtered)
}
