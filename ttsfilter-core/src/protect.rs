//! protect.rs - Placeholder protection for expression directives.
//!
//! Bracketed expression directives such as `[smile]` are swapped for opaque
//! placeholder tokens before destructive cleanup runs, then put back verbatim.
//! All state lives in a [`ProtectionContext`] owned by a single call.
//!
//! A placeholder is `PLACEHOLDER_OPEN`, a prefix that does not occur in the
//! input, a counter, then `PLACEHOLDER_CLOSE`. Cleanup rules that could span
//! across a placeholder exclude `PLACEHOLDER_OPEN` from what they match.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use std::ops::Range;

/// First character of every placeholder (a private-use code point).
pub const PLACEHOLDER_OPEN: char = '\u{E000}';
/// Last character of every placeholder.
pub const PLACEHOLDER_CLOSE: char = '\u{E001}';

const PLACEHOLDER_STEM: &str = "TTSF";

/// A placeholder token and the original span it stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtectedSpan {
    pub placeholder: String,
    pub original: String,
}

/// Per-call protection state: placeholder prefix, counter and recorded spans.
#[derive(Debug, Clone)]
pub struct ProtectionContext {
    prefix: String,
    counter: usize,
    spans: Vec<ProtectedSpan>,
}

impl ProtectionContext {
    /// Creates a context whose placeholder prefix does not occur anywhere in `text`.
    pub fn for_text(text: &str) -> Self {
        let mut prefix = format!("{PLACEHOLDER_STEM}_EXPR_");
        let mut salt = 0usize;
        while text.contains(&prefix) {
            salt += 1;
            prefix = format!("{PLACEHOLDER_STEM}{salt}_EXPR_");
        }
        Self {
            prefix,
            counter: 0,
            spans: Vec::new(),
        }
    }

    /// Records `original` and returns the fresh placeholder that replaces it.
    pub fn protect(&mut self, original: &str) -> String {
        let placeholder = format!(
            "{}{}{}{}",
            PLACEHOLDER_OPEN, self.prefix, self.counter, PLACEHOLDER_CLOSE
        );
        self.counter += 1;
        self.spans.push(ProtectedSpan {
            placeholder: placeholder.clone(),
            original: original.to_string(),
        });
        placeholder
    }

    pub fn spans(&self) -> &[ProtectedSpan] {
        &self.spans
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Puts every protected span back in place of its placeholder.
    pub fn restore(&self, text: &str) -> String {
        let mut restored = text.to_string();
        for span in &self.spans {
            restored = restored.replace(&span.placeholder, &span.original);
        }
        restored
    }
}

/// Byte ranges of the outermost `[...]` spans in `text`, in order.
///
/// Each `]` closes the nearest unclosed `[`. A span that is still open at the
/// end of the text extends through the last `]` seen inside it. Spans with no
/// content (`[]`) are skipped.
fn expression_spans(text: &str) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;
    let mut last_close = None;

    for (i, c) in text.char_indices() {
        match c {
            '[' => {
                if depth == 0 {
                    start = i;
                    last_close = None;
                }
                depth += 1;
            }
            ']' if depth > 0 => {
                depth -= 1;
                last_close = Some(i);
                if depth == 0 {
                    spans.push(start..i + 1);
                }
            }
            _ => {}
        }
    }
    if depth > 0 {
        if let Some(end) = last_close {
            spans.push(start..end + 1);
        }
    }

    spans.retain(|span| span.len() > 2);
    spans
}

/// Replaces every `[...]` expression in `text` with a placeholder.
///
/// Returns the protected text together with the context needed to undo it.
pub fn protect_expressions(text: &str) -> (String, ProtectionContext) {
    let mut ctx = ProtectionContext::for_text(text);
    let mut protected = String::with_capacity(text.len());
    let mut last_end = 0;

    for span in expression_spans(text) {
        protected.push_str(&text[last_end..span.start]);
        protected.push_str(&ctx.protect(&text[span.clone()]));
        last_end = span.end;
    }
    protected.push_str(&text[last_end..]);

    if !ctx.is_empty() {
        debug!(
            target: "ttsfilter_core::protect",
            "Protected {} expression span(s).",
            ctx.spans().len()
        );
    }
    (protected, ctx)
}
