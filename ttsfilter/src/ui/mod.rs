// ttsfilter/src/ui/mod.rs
//! Terminal output for the ttsfilter CLI.

pub mod output_format;
pub mod summary;
