//! special_chars.rs - Unicode general-category character filter.
//!
//! Text is folded to NFKC first, then only letters (`L*`), numbers (`N*`),
//! punctuation (`P*`) and whitespace survive. Symbols, marks, controls,
//! format characters and emoji are dropped. Whitespace is not collapsed here.
//!
//! License: MIT OR APACHE 2.0

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Anything outside Letter, Number and Punctuation that is not whitespace
/// (including the U+001C..U+001F separators).
static UNSPEAKABLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\p{L}\p{N}\p{P}\s\x1C-\x1F]+").unwrap());

/// Removes all non-letter, non-number, non-punctuation, non-whitespace characters.
pub fn remove_special_characters(text: &str) -> String {
    let normalized: String = text.nfkc().collect();
    UNSPEAKABLE_RE.replace_all(&normalized, "").into_owned()
}
