// ttsfilter/src/logger.rs
//! Logger setup for the ttsfilter binary.
//!
//! All log output goes to stderr so that stdout carries only filtered text.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Initializes `env_logger`. An explicit `level` overrides `RUST_LOG`;
/// otherwise `RUST_LOG` applies and defaults to `warn`.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder
        .format_timestamp(None)
        .target(Target::Stderr)
        .try_init()
        .ok();
}
