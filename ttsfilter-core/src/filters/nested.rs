//! nested.rs - Depth-tracking removal of delimited spans.
//!
//! A single scanner handles every bracket dialect. Nesting is counted, not
//! validated: an unmatched closer is dropped without touching the depth, and
//! an unmatched opener swallows the rest of the input.
//!
//! License: MIT OR APACHE 2.0

use log::debug;

use crate::errors::FilterError;
use crate::filters::collapse_whitespace;

/// An open/close delimiter pair for [`strip_nested`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DelimiterPair {
    open: char,
    close: char,
}

impl DelimiterPair {
    pub const BRACKETS: DelimiterPair = DelimiterPair { open: '[', close: ']' };
    pub const PARENTHESES: DelimiterPair = DelimiterPair { open: '(', close: ')' };
    pub const ANGLE_BRACKETS: DelimiterPair = DelimiterPair { open: '<', close: '>' };

    /// Builds a pair, rejecting `open == close`.
    pub fn new(open: char, close: char) -> Result<Self, FilterError> {
        if open == close {
            return Err(FilterError::DegenerateDelimiters { open, close });
        }
        Ok(Self { open, close })
    }

    pub fn open(&self) -> char {
        self.open
    }

    pub fn close(&self) -> char {
        self.close
    }
}

/// Removes every span enclosed by `pair`, then collapses whitespace runs to a
/// single space and trims the result.
pub fn strip_nested(text: &str, pair: DelimiterPair) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut result = String::with_capacity(text.len());
    let mut depth: usize = 0;

    for c in text.chars() {
        if c == pair.open {
            depth += 1;
        } else if c == pair.close {
            depth = depth.saturating_sub(1);
        } else if depth == 0 {
            result.push(c);
        }
    }

    if depth > 0 {
        debug!(
            target: "ttsfilter_core::filters",
            "Unclosed '{}' left {} span(s) open; trailing text dropped.",
            pair.open, depth
        );
    }

    collapse_whitespace(&result)
}

/// Checked form of [`strip_nested`] taking raw delimiter characters.
pub fn strip(text: &str, open: char, close: char) -> Result<String, FilterError> {
    let pair = DelimiterPair::new(open, close)?;
    Ok(strip_nested(text, pair))
}

/// Removes text within square brackets, handling nested cases.
pub fn filter_brackets(text: &str) -> String {
    strip_nested(text, DelimiterPair::BRACKETS)
}

/// Removes text within parentheses, handling nested cases.
pub fn filter_parentheses(text: &str) -> String {
    strip_nested(text, DelimiterPair::PARENTHESES)
}

/// Removes text within angle brackets, handling nested cases.
pub fn filter_angle_brackets(text: &str) -> String {
    strip_nested(text, DelimiterPair::ANGLE_BRACKETS)
}
