//! pipeline.rs - The fixed-order TTS filter dispatcher.
//!
//! Stages always run in this order when enabled: asterisk emphasis removal,
//! bracket stripping, parenthesis stripping, angle-bracket stripping, the
//! Unicode-category filter and finally translation. Every stage yields a
//! [`StageOutcome`]; a failed stage is recorded and skipped, and the text from
//! before it is carried forward.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, error, info, warn};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

use crate::config::FilterConfig;
use crate::errors::FilterError;
use crate::filters::{
    filter_angle_brackets, filter_asterisks, filter_brackets, filter_parentheses,
    remove_special_characters,
};
use crate::translate::Translator;

/// A pipeline stage, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Asterisks,
    Brackets,
    Parentheses,
    AngleBrackets,
    SpecialCharacters,
    Translation,
}

impl Stage {
    /// The synchronous, flag-gated stages in execution order.
    pub const GATED: [Stage; 5] = [
        Stage::Asterisks,
        Stage::Brackets,
        Stage::Parentheses,
        Stage::AngleBrackets,
        Stage::SpecialCharacters,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Stage::Asterisks => "asterisks",
            Stage::Brackets => "brackets",
            Stage::Parentheses => "parentheses",
            Stage::AngleBrackets => "angle brackets",
            Stage::SpecialCharacters => "special characters",
            Stage::Translation => "translation",
        }
    }

    fn gated_fn(&self) -> Option<StageFn> {
        let f: StageFn = match self {
            Stage::Asterisks => |t| Ok(filter_asterisks(t)),
            Stage::Brackets => |t| Ok(filter_brackets(t)),
            Stage::Parentheses => |t| Ok(filter_parentheses(t)),
            Stage::AngleBrackets => |t| Ok(filter_angle_brackets(t)),
            Stage::SpecialCharacters => |t| Ok(remove_special_characters(t)),
            Stage::Translation => return None,
        };
        Some(f)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A gated stage. Failures are reported as [`FilterError::Stage`].
type StageFn = fn(&str) -> Result<String, FilterError>;

/// What happened to the text at one stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StageOutcome {
    Applied { chars_before: usize, chars_after: usize },
    Skipped,
    Failed { error: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageRecord {
    pub stage: Stage,
    pub outcome: StageOutcome,
}

/// The filtered text plus a record of every stage that was considered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterReport {
    pub text: String,
    pub stages: Vec<StageRecord>,
}

impl FilterReport {
    pub fn outcome(&self, stage: Stage) -> Option<&StageOutcome> {
        self.stages
            .iter()
            .find(|r| r.stage == stage)
            .map(|r| &r.outcome)
    }

    pub fn failed_stages(&self) -> Vec<Stage> {
        self.stages
            .iter()
            .filter(|r| matches!(r.outcome, StageOutcome::Failed { .. }))
            .map(|r| r.stage)
            .collect()
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

/// Runs `stages` over `text`, skipping disabled ones and isolating failures.
fn fold_stages<I>(text: &str, stages: I) -> FilterReport
where
    I: IntoIterator<Item = (Stage, bool, StageFn)>,
{
    let mut current = text.to_string();
    let mut records = Vec::new();

    for (stage, enabled, apply) in stages {
        let outcome = if !enabled {
            StageOutcome::Skipped
        } else {
            match apply(&current) {
                Ok(next) => {
                    let outcome = StageOutcome::Applied {
                        chars_before: current.chars().count(),
                        chars_after: next.chars().count(),
                    };
                    current = next;
                    outcome
                }
                Err(e) => {
                    warn!(target: "ttsfilter_core::pipeline", "Error filtering {}: {}", stage, e);
                    warn!(target: "ttsfilter_core::pipeline", "Text: {}", current);
                    warn!(target: "ttsfilter_core::pipeline", "Skipping...");
                    StageOutcome::Failed { error: e.to_string() }
                }
            }
        };
        records.push(StageRecord { stage, outcome });
    }

    FilterReport {
        text: current,
        stages: records,
    }
}

/// The TTS text filter: configuration plus an optional translator.
#[derive(Clone, Default)]
pub struct TtsFilter {
    config: FilterConfig,
    translator: Option<Arc<dyn Translator>>,
}

impl fmt::Debug for TtsFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TtsFilter")
            .field("config", &self.config)
            .field("translator", &self.translator.as_ref().map(|t| t.name().to_string()))
            .finish()
    }
}

impl TtsFilter {
    pub fn new(config: FilterConfig) -> Self {
        Self {
            config,
            translator: None,
        }
    }

    pub fn with_translator(mut self, translator: Arc<dyn Translator>) -> Self {
        self.translator = Some(translator);
        self
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    pub fn translator(&self) -> Option<&Arc<dyn Translator>> {
        self.translator.as_ref()
    }

    /// Runs the synchronous gated stages. Translation is not attempted.
    pub fn filter(&self, text: &str) -> FilterReport {
        let stages = Stage::GATED.into_iter().filter_map(|stage| {
            stage
                .gated_fn()
                .map(|f| (stage, self.config.is_stage_enabled(stage), f))
        });
        fold_stages(text, stages)
    }

    /// Runs every enabled stage, including translation when a translator is set.
    pub async fn sanitize_with_report(&self, text: &str) -> FilterReport {
        let mut report = self.filter(text);

        let outcome = match &self.translator {
            None => StageOutcome::Skipped,
            Some(translator) => {
                info!(target: "ttsfilter_core::pipeline", "Translating with '{}'...", translator.name());
                match translator.translate(&report.text).await {
                    Ok(translated) => {
                        info!(target: "ttsfilter_core::pipeline", "Translated: {}", translated);
                        let outcome = StageOutcome::Applied {
                            chars_before: report.text.chars().count(),
                            chars_after: translated.chars().count(),
                        };
                        report.text = translated;
                        outcome
                    }
                    Err(e) => {
                        let err = FilterError::Translation(format!("{:#}", e));
                        error!(target: "ttsfilter_core::pipeline", "Error translating: {}", err);
                        error!(target: "ttsfilter_core::pipeline", "Text: {}", report.text);
                        warn!(target: "ttsfilter_core::pipeline", "Skipping...");
                        StageOutcome::Failed { error: err.to_string() }
                    }
                }
            }
        };
        report.stages.push(StageRecord {
            stage: Stage::Translation,
            outcome,
        });

        debug!(target: "ttsfilter_core::pipeline", "Filtered text: {}", report.text);
        report
    }

    /// Runs every enabled stage and returns only the resulting text.
    pub async fn sanitize(&self, text: &str) -> String {
        self.sanitize_with_report(text).await.into_text()
    }
}
