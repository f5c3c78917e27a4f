// ttsfilter/src/commands/mod.rs
pub mod filter;
