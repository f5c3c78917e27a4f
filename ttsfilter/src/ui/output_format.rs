// ttsfilter/src/ui/output_format.rs
//! Prefixed status messages written to stderr.

use owo_colors::OwoColorize;
use std::io::{self, Write};

pub fn print_info_message<W: Write>(writer: &mut W, msg: &str, use_color: bool) -> io::Result<()> {
    if use_color {
        writeln!(writer, "{} {}", "[info]".cyan(), msg)
    } else {
        writeln!(writer, "[info] {}", msg)
    }
}

pub fn print_warn_message<W: Write>(writer: &mut W, msg: &str, use_color: bool) -> io::Result<()> {
    if use_color {
        writeln!(writer, "{} {}", "[warn]".yellow(), msg)
    } else {
        writeln!(writer, "[warn] {}", msg)
    }
}
