// ttsfilter/src/lib.rs
//! # ttsfilter CLI Application
//!
//! This crate provides the command-line front end for `ttsfilter-core`.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
