// ttsfilter-core/src/lib.rs
//! # TTS Filter Core Library
//!
//! `ttsfilter-core` turns a conversational model's raw reply into text that is
//! safe to hand to a speech synthesizer. Stage directions such as `*waves*`,
//! nested annotations in brackets, parentheses or angle brackets, and
//! characters that cannot be spoken are removed. Subtitles and conversation
//! memory keep the original text; only the audio path sees the filtered copy.
//!
//! The library is pure and stateless: every filter is a function of its input
//! text, and no state survives a call.
//!
//! ## Modules
//!
//! * `filters`: The individual text filters (nested spans, asterisks, special characters, lists, formatting).
//! * `protect`: Placeholder protection for `[expression]` directives during markdown cleanup.
//! * `pipeline`: The fixed-order [`TtsFilter`] dispatcher and its per-stage [`FilterReport`].
//! * `config`: The [`FilterConfig`] toggles and YAML loading.
//! * `translate`: The [`Translator`] collaborator trait.
//! * `headless`: One-shot helpers that compose the utilities with the pipeline.
//! * `errors`: The [`FilterError`] type.
//!
//! ## Usage Example
//!
//! ```rust
//! use ttsfilter_core::{FilterConfig, TtsFilter};
//!
//! let filter = TtsFilter::new(FilterConfig::default());
//! let report = filter.filter("*waves* Hello (softly) there! 👋");
//! assert_eq!(report.text, "Hello there! ");
//! ```
//!
//! ## Error Handling
//!
//! Gated stages never abort the pipeline: a failing stage is logged at warn
//! level and skipped, and a failing translator is logged at error level and
//! its input returned. The only hard error is constructing a degenerate
//! [`DelimiterPair`].
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod errors;
pub mod filters;
pub mod headless;
pub mod pipeline;
pub mod protect;
pub mod translate;

/// Re-exports the configuration type and its lookup helpers.
pub use config::{config_candidate_paths, FilterConfig, LOCAL_CONFIG_FILE};

/// Re-exports the custom error type for clear error reporting.
pub use errors::FilterError;

/// Re-exports every filter function for direct use.
pub use filters::{
    collapse_whitespace, filter_angle_brackets, filter_asterisks, filter_brackets,
    filter_numbered_lists, filter_parentheses, filter_special_formatting, is_whitespace,
    remove_lone_asterisks, remove_special_characters, strip, strip_nested, DelimiterPair,
};

/// Re-exports the dispatcher and its report types.
pub use pipeline::{FilterReport, Stage, StageOutcome, StageRecord, TtsFilter};

pub use protect::{protect_expressions, ProtectedSpan, ProtectionContext};

pub use translate::{NoopTranslator, Translator};

/// Re-exports helpers for one-shot, non-interactive use.
pub use headless::{apply_text_utilities, headless_filter_string, headless_sanitize_string};
