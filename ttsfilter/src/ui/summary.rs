// ttsfilter/src/ui/summary.rs
//! Per-stage summary of a filter run.
//!
//! Every [`FilterReport`] produced during a run is folded into a
//! [`FilterSummary`], which can be printed as a table-like list or as JSON.

use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::{self, Write};

use ttsfilter_core::{FilterReport, Stage, StageOutcome};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageTally {
    pub stage: Stage,
    pub applied: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl StageTally {
    fn new(stage: Stage) -> Self {
        Self {
            stage,
            applied: 0,
            skipped: 0,
            failed: 0,
        }
    }
}

/// Outcome counts per stage across every input filtered in a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterSummary {
    pub inputs: usize,
    pub stages: Vec<StageTally>,
}

impl FilterSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one report. Stages keep the order in which they were first seen.
    pub fn record(&mut self, report: &FilterReport) {
        self.inputs += 1;
        for record in &report.stages {
            let idx = match self.stages.iter().position(|t| t.stage == record.stage) {
                Some(idx) => idx,
                None => {
                    self.stages.push(StageTally::new(record.stage));
                    self.stages.len() - 1
                }
            };
            let tally = &mut self.stages[idx];
            match record.outcome {
                StageOutcome::Applied { .. } => tally.applied += 1,
                StageOutcome::Skipped => tally.skipped += 1,
                StageOutcome::Failed { .. } => tally.failed += 1,
            }
        }
    }

    pub fn total_failures(&self) -> usize {
        self.stages.iter().map(|t| t.failed).sum()
    }
}

pub fn print_summary<W: Write>(summary: &FilterSummary, writer: &mut W, use_color: bool) -> io::Result<()> {
    let header = "--- Filter Summary ---";
    if use_color {
        writeln!(writer, "{}", header.bold())?;
    } else {
        writeln!(writer, "{}", header)?;
    }
    writeln!(writer, "Inputs processed: {}", summary.inputs)?;

    for tally in &summary.stages {
        let counts = format!(
            "{} applied, {} skipped, {} failed",
            tally.applied, tally.skipped, tally.failed
        );
        if use_color && tally.failed > 0 {
            writeln!(writer, "{}: {}", tally.stage.name().cyan(), counts.red())?;
        } else if use_color {
            writeln!(writer, "{}: {}", tally.stage.name().cyan(), counts)?;
        } else {
            writeln!(writer, "{}: {}", tally.stage.name(), counts)?;
        }
    }
    Ok(())
}

pub fn print_json_summary<W: Write>(summary: &FilterSummary, writer: &mut W) -> anyhow::Result<()> {
    serde_json::to_writer(&mut *writer, summary)?;
    writeln!(writer)?;
    Ok(())
}
