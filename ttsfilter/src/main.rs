// ttsfilter/src/main.rs
//! ttsfilter entry point.
//!
//! Parses the command line, sets up logging and runs the filter command.

use anyhow::Result;
use clap::Parser;
use ttsfilter::cli::Cli;
use ttsfilter::commands::filter::run_filter;
use ttsfilter::logger;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init_logger(cli.log_level());
    run_filter(&cli).await
}
