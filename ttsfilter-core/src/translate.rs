//! translate.rs - The translation collaborator interface.
//!
//! Translation is the last, optional pipeline stage and the only one that may
//! suspend. Back ends live outside this crate; `NoopTranslator` is a
//! pass-through used for wiring and tests.
//!
//! License: MIT OR APACHE 2.0

use anyhow::Result;
use async_trait::async_trait;

/// A capability that turns filtered text into another language.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translates `text`. Failures are reported to the pipeline, which keeps
    /// the untranslated text.
    async fn translate(&self, text: &str) -> Result<String>;

    /// Short identifier used in log records.
    fn name(&self) -> &str;
}

/// Pass-through translator that returns its input unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTranslator;

impl NoopTranslator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Translator for NoopTranslator {
    async fn translate(&self, text: &str) -> Result<String> {
        Ok(text.to_string())
    }

    fn name(&self) -> &str {
        "noop"
    }
}
