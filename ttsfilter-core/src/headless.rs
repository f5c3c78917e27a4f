// File: ttsfilter-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for one-shot filtering of a string.
//!
//! These compose the standalone utilities (list-marker normalization and
//! formatting cleanup) in front of the gated pipeline, as selected by
//! [`FilterConfig::strip_list_markers`] and [`FilterConfig::clean_formatting`].

use std::sync::Arc;

use crate::config::FilterConfig;
use crate::filters::{filter_numbered_lists, filter_special_formatting};
use crate::pipeline::{FilterReport, TtsFilter};
use crate::translate::Translator;

/// Applies the enabled standalone utilities to `text`.
///
/// List markers are stripped line by line so that line starts are still
/// visible to the formatting cleanup that follows.
pub fn apply_text_utilities(config: &FilterConfig, text: &str) -> String {
    let mut out = text.to_string();
    if config.strip_list_markers {
        out = out
            .lines()
            .map(filter_numbered_lists)
            .collect::<Vec<_>>()
            .join("\n");
    }
    if config.clean_formatting {
        out = filter_special_formatting(&out);
    }
    out
}

/// Filters a string through the utilities and the synchronous pipeline stages.
pub fn headless_filter_string(config: FilterConfig, text: &str) -> FilterReport {
    let prepared = apply_text_utilities(&config, text);
    TtsFilter::new(config).filter(&prepared)
}

/// Like [`headless_filter_string`], followed by translation when a translator is given.
pub async fn headless_sanitize_string(
    config: FilterConfig,
    translator: Option<Arc<dyn Translator>>,
    text: &str,
) -> String {
    let prepared = apply_text_utilities(&config, text);
    let mut filter = TtsFilter::new(config);
    if let Some(translator) = translator {
        filter = filter.with_translator(translator);
    }
    filter.sanitize(&prepared).await
}
