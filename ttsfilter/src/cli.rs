// ttsfilter/src/cli.rs
//! This file defines the command-line interface (CLI) for the ttsfilter application.
//! License: MIT OR Apache-2.0

use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "ttsfilter",
    author = "TTSFilter Contributors",
    version = env!("CARGO_PKG_VERSION"),
    about = "Make conversational AI replies safe to speak",
    long_about = "ttsfilter removes stage directions such as *waves*, nested annotations in brackets, parentheses and angle brackets, and characters a speech synthesizer cannot pronounce. It reads stdin or a file and writes the filtered text to stdout or a file."
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short = 'd', conflicts_with = "quiet", help = "Enable debug logging.")]
    pub debug: bool,

    /// Path to a filter configuration file (YAML).
    #[arg(long = "config", value_name = "FILE", help = "Path to a filter configuration file (YAML).")]
    pub config: Option<PathBuf>,

    /// Skip config file discovery and start from the built-in defaults.
    #[arg(long = "no-config", conflicts_with = "config", help = "Ignore any discovered config file.")]
    pub no_config: bool,

    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input: Option<PathBuf>,

    /// Write filtered output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// Filter each input line on its own and flush it immediately.
    #[arg(long = "line-buffered", help = "Process input line by line (useful for streaming replies from pipes).")]
    pub line_buffered: bool,

    /// Print a per-stage summary to stderr.
    #[arg(long = "summary", help = "Print a per-stage summary to stderr.")]
    pub summary: bool,

    /// Print the per-stage summary to stderr as JSON.
    #[arg(long = "json-summary", help = "Print the per-stage summary to stderr as JSON.")]
    pub json_summary: bool,

    #[arg(long = "strip-list-markers", help = "Remove numbered-list markers such as '1.', '2)' and '(3)' at line starts.")]
    pub strip_list_markers: bool,

    #[arg(long = "clean-formatting", help = "Remove markdown emphasis, headers and bullets while keeping [expression] tags.")]
    pub clean_formatting: bool,

    #[arg(long = "keep-asterisks", help = "Do not remove *asterisk* spans.")]
    pub keep_asterisks: bool,

    #[arg(long = "keep-brackets", help = "Do not remove [bracketed] text.")]
    pub keep_brackets: bool,

    #[arg(long = "keep-parentheses", help = "Do not remove (parenthesized) text.")]
    pub keep_parentheses: bool,

    #[arg(long = "keep-angle-brackets", help = "Do not remove <angle-bracketed> text.")]
    pub keep_angle_brackets: bool,

    #[arg(long = "keep-special-chars", help = "Do not remove characters outside letters, numbers, punctuation and whitespace.")]
    pub keep_special_chars: bool,

    /// Attach the pass-through translator as the final stage.
    #[arg(long = "translate-noop", help = "Run the final translation stage with the pass-through translator.")]
    pub translate_noop: bool,
}

impl Cli {
    /// The log level forced by `--quiet`/`--debug`, if any. `None` defers to `RUST_LOG`.
    pub fn log_level(&self) -> Option<LevelFilter> {
        if self.quiet {
            Some(LevelFilter::Off)
        } else if self.debug {
            Some(LevelFilter::Debug)
        } else {
            None
        }
    }
}
