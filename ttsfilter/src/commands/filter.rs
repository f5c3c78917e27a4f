//! Filter command implementation: reads a reply, makes it speakable, writes it out.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::fs;
use std::io::{self, BufRead, Read, Write};
use std::path::Path;
use std::sync::Arc;

use ttsfilter_core::{apply_text_utilities, FilterConfig, NoopTranslator, Stage, TtsFilter};

use crate::cli::Cli;
use crate::ui::output_format;
use crate::ui::summary::{self, FilterSummary};

/// Helper for printing info messages to stderr.
pub fn info_msg(msg: impl AsRef<str>) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_info_message(&mut io::stderr(), msg.as_ref(), stderr_supports_color);
}

/// Helper for printing warning messages to stderr.
pub fn warn_msg(msg: impl AsRef<str>) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_warn_message(&mut io::stderr(), msg.as_ref(), stderr_supports_color);
}

/// Builds the effective configuration: built-in defaults, then the config
/// file (explicit or discovered), then the command-line flags.
pub fn resolve_config(cli: &Cli) -> Result<FilterConfig> {
    let mut config = if let Some(path) = &cli.config {
        FilterConfig::load_from_file(path)?
    } else if cli.no_config {
        debug!("Config discovery disabled; using defaults.");
        FilterConfig::default()
    } else {
        match FilterConfig::discover()? {
            Some((path, config)) => {
                info!("Using config file {}", path.display());
                config
            }
            None => FilterConfig::default(),
        }
    };

    apply_cli_overrides(cli, &mut config);
    debug!("Effective filter config: {:?}", config);
    Ok(config)
}

fn apply_cli_overrides(cli: &Cli, config: &mut FilterConfig) {
    if cli.strip_list_markers {
        config.strip_list_markers = true;
    }
    if cli.clean_formatting {
        config.clean_formatting = true;
    }
    let keeps = [
        (Stage::Asterisks, cli.keep_asterisks),
        (Stage::Brackets, cli.keep_brackets),
        (Stage::Parentheses, cli.keep_parentheses),
        (Stage::AngleBrackets, cli.keep_angle_brackets),
        (Stage::SpecialCharacters, cli.keep_special_chars),
    ];
    for (stage, keep) in keeps {
        if keep {
            config.set_stage_enabled(stage, false);
        }
    }
}

/// Builds the filter for this run, attaching a translator when requested.
pub fn build_filter(cli: &Cli, config: FilterConfig) -> TtsFilter {
    let filter = TtsFilter::new(config);
    if cli.translate_noop {
        filter.with_translator(Arc::new(NoopTranslator::new()))
    } else {
        filter
    }
}

/// The main operation runner for the ttsfilter CLI.
pub async fn run_filter(cli: &Cli) -> Result<()> {
    info!("Starting ttsfilter operation.");
    let config = resolve_config(cli)?;
    let filter = build_filter(cli, config);

    let mut writer: Box<dyn Write> = match &cli.output {
        Some(path) => {
            if !cli.quiet {
                info_msg(format!("Writing filtered text to file: {}", path.display()));
            }
            let file = fs::File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Box::new(io::BufWriter::new(file))
        }
        None => Box::new(io::stdout().lock()),
    };

    let summary = if cli.line_buffered {
        if !cli.quiet {
            info_msg("Using line-buffered mode.");
        }
        run_line_buffered(cli, &filter, &mut writer).await?
    } else {
        let input = read_input(cli.input.as_deref())?;
        let mut summary = FilterSummary::new();
        let filtered = filter_one(&filter, &input, &mut summary).await;
        writeln!(writer, "{}", filtered).context("Failed to write filtered text")?;
        summary
    };
    writer.flush().context("Failed to flush output")?;

    report_summary(cli, &summary)?;
    info!("ttsfilter operation completed.");
    Ok(())
}

async fn filter_one(filter: &TtsFilter, text: &str, summary: &mut FilterSummary) -> String {
    let prepared = apply_text_utilities(filter.config(), text);
    let report = filter.sanitize_with_report(&prepared).await;
    summary.record(&report);
    report.into_text()
}

async fn run_line_buffered(
    cli: &Cli,
    filter: &TtsFilter,
    writer: &mut dyn Write,
) -> Result<FilterSummary> {
    let reader: Box<dyn BufRead> = match cli.input.as_deref() {
        Some(path) => Box::new(io::BufReader::new(open_input(path)?)),
        None => Box::new(io::stdin().lock()),
    };

    let mut summary = FilterSummary::new();
    for line in reader.lines() {
        let line = line.context("Failed to read input line")?;
        let filtered = filter_one(filter, &line, &mut summary).await;
        writeln!(writer, "{}", filtered).context("Failed to write filtered line")?;
        writer.flush().context("Failed to flush output")?;
    }
    debug!("Line-buffered run filtered {} line(s).", summary.inputs);
    Ok(summary)
}

fn open_input(path: &Path) -> Result<fs::File> {
    fs::File::open(path).with_context(|| format!("Failed to open input file: {}", path.display()))
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn report_summary(cli: &Cli, summary: &FilterSummary) -> Result<()> {
    if summary.total_failures() > 0 && !cli.quiet {
        warn_msg(format!(
            "{} stage failure(s); affected stages were skipped.",
            summary.total_failures()
        ));
    }
    if cli.summary {
        let use_color = io::stderr().is_terminal();
        summary::print_summary(summary, &mut io::stderr(), use_color)?;
    }
    if cli.json_summary {
        summary::print_json_summary(summary, &mut io::stderr())?;
    }
    Ok(())
}
