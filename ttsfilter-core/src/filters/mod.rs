//! This module contains the individual text filters.
//!
//! Each filter is a pure function from text to text. The gated filters are
//! composed in a fixed order by [`crate::pipeline::TtsFilter`]; list-marker
//! and formatting cleanup are standalone utilities.
//!
//! License: MIT OR APACHE 2.0

pub mod asterisks;
pub mod formatting;
pub mod lists;
pub mod nested;
pub mod special_chars;

pub use asterisks::{filter_asterisks, remove_lone_asterisks};
pub use formatting::filter_special_formatting;
pub use lists::filter_numbered_lists;
pub use nested::{
    filter_angle_brackets, filter_brackets, filter_parentheses, strip, strip_nested, DelimiterPair,
};
pub use special_chars::remove_special_characters;

/// Whitespace as the filters understand it: Unicode `White_Space` plus the
/// information separators U+001C..U+001F.
pub fn is_whitespace(c: char) -> bool {
    c.is_whitespace() || ('\u{1C}'..='\u{1F}').contains(&c)
}

/// Collapses every whitespace run to one space and trims both ends.
pub fn collapse_whitespace(input: &str) -> String {
    input
        .split(is_whitespace)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_mixed_whitespace() {
        assert_eq!(collapse_whitespace(" a \t b\n\nc  "), "a b c");
        assert_eq!(collapse_whitespace("   "), "");
    }

    #[test]
    fn information_separators_count_as_whitespace() {
        assert!(is_whitespace('\u{1C}'));
        assert!(is_whitespace('\u{1F}'));
        assert!(is_whitespace('\u{3000}'));
        assert!(!is_whitespace('\u{1B}'));
        assert_eq!(collapse_whitespace("a\u{1C}\u{1C}b\u{1F} "), "a b");
    }
}
