//! formatting.rs - Markdown decoration cleanup that spares expression directives.
//!
//! Emphasis asterisks, stray asterisks, header hashes and leading bullet
//! markers are removed. Every `[...]` expression directive is protected first
//! and restored byte-for-byte before whitespace is collapsed.
//!
//! License: MIT OR APACHE 2.0

use once_cell::sync::Lazy;
use regex::Regex;

use crate::filters::asterisks::remove_lone_asterisks;
use crate::filters::collapse_whitespace;
use crate::protect::protect_expressions;

/// The asterisk emphasis rule, except that the interior may not run into a
/// protected placeholder (`U+E000` opens every placeholder).
static GUARDED_EMPHASIS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*+[^*\n\x{E000}]*?\*+").unwrap());

static HEADER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"#{1,6}[\s\x1C-\x1F]+").unwrap());

static BULLET_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^[-+][\s\x1C-\x1F]+").unwrap());

/// Removes markdown formatting symbols that should not be spoken, keeping
/// bracketed expression directives intact.
pub fn filter_special_formatting(text: &str) -> String {
    let (protected, ctx) = protect_expressions(text);

    let mut cleaned = GUARDED_EMPHASIS_RE.replace_all(&protected, "").into_owned();
    cleaned = remove_lone_asterisks(&cleaned);
    cleaned = HEADER_RE.replace_all(&cleaned, "").into_owned();
    cleaned = BULLET_RE.replace_all(&cleaned, "").into_owned();

    collapse_whitespace(&ctx.restore(&cleaned))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spares_expressions_and_strips_markdown() {
        assert_eq!(
            filter_special_formatting("[smile] *happy* ## Header\n- item"),
            "[smile] Header item"
        );
    }

    #[test]
    fn asterisks_inside_expressions_survive() {
        assert_eq!(
            filter_special_formatting("[*sparkle*] **wow** done"),
            "[*sparkle*] done"
        );
    }

    #[test]
    fn hashes_inside_expressions_survive() {
        assert_eq!(
            filter_special_formatting("[## raw] # Title"),
            "[## raw] Title"
        );
    }

    #[test]
    fn emphasis_cannot_swallow_an_expression() {
        assert_eq!(
            filter_special_formatting("* lone [wave] star *"),
            "lone [wave] star"
        );
    }

    #[test]
    fn stray_asterisks_are_removed() {
        assert_eq!(filter_special_formatting("rate 5 * 3 stars"), "rate 5 3 stars");
    }

    #[test]
    fn bullets_only_at_line_start() {
        assert_eq!(
            filter_special_formatting("+ one\n- two\nthree - four"),
            "one two three - four"
        );
    }

    #[test]
    fn seven_hashes_leave_one_behind() {
        assert_eq!(filter_special_formatting("####### deep"), "#deep");
    }

    #[test]
    fn clean_text_only_changes_in_whitespace() {
        assert_eq!(
            filter_special_formatting("Just a  normal sentence."),
            "Just a normal sentence."
        );
    }
}
