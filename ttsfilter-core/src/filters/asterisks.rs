//! asterisks.rs - Removal of asterisk-delimited emphasis spans.
//!
//! License: MIT OR APACHE 2.0

use once_cell::sync::Lazy;
use regex::Regex;

use crate::filters::collapse_whitespace;

/// One or more asterisks, a lazily matched interior free of asterisks and
/// line breaks, then one or more asterisks.
static EMPHASIS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*+[^*\n]*?\*+").unwrap());

/// Deletes emphasis spans (`*a*`, `**a**`, `***a***`, ...) without any whitespace cleanup.
fn remove_emphasis_spans(text: &str) -> String {
    EMPHASIS_RE.replace_all(text, "").into_owned()
}

/// Removes text enclosed within asterisks of any length, collapsing
/// whitespace afterwards. Lone asterisks that close no span are kept.
pub fn filter_asterisks(text: &str) -> String {
    collapse_whitespace(&remove_emphasis_spans(text))
}

/// Drops every asterisk that has no asterisk immediately before or after it.
pub fn remove_lone_asterisks(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());

    for (i, &c) in chars.iter().enumerate() {
        if c == '*' {
            let prev_is_star = i > 0 && chars[i - 1] == '*';
            let next_is_star = chars.get(i + 1) == Some(&'*');
            if !prev_is_star && !next_is_star {
                continue;
            }
        }
        out.push(c);
    }
    out
}
