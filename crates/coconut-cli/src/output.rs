//! Output formatting for route rendering.
//!
//! This module provides formatters for rendering route summaries
//! in the formats selectable with `--format`.

use std::io::{self, Write};

use clap::ValueEnum;
use coconut_lib::{RouteRenderMode, RouteSummary};

/// Output formats accepted by `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Classic two-line report followed by the jetstream hops.
    #[default]
    Text,
    /// Markdown summary with an energy breakdown.
    Rich,
    /// Pretty-printed JSON document.
    Json,
}

impl OutputFormat {
    fn render_mode(self) -> Option<RouteRenderMode> {
        match self {
            OutputFormat::Text => Some(RouteRenderMode::PlainText),
            OutputFormat::Rich => Some(RouteRenderMode::RichText),
            OutputFormat::Json => None,
        }
    }
}

/// Write a route summary to stdout in the requested format.
///
/// # Errors
///
/// Returns an error if JSON serialization or writing fails.
pub fn render_summary(summary: &RouteSummary, format: OutputFormat) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write_summary(&mut stdout, summary, format)
}

/// Write a route summary to any writer in the requested format.
pub fn write_summary<W: Write>(
    writer: &mut W,
    summary: &RouteSummary,
    format: OutputFormat,
) -> io::Result<()> {
    match format.render_mode() {
        Some(mode) => writer.write_all(summary.render(mode).as_bytes()),
        None => {
            serde_json::to_writer_pretty(&mut *writer, summary).map_err(io::Error::other)?;
            writer.write_all(b"\n")
        }
    }
}
