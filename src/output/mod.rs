//! Output module for rendering crawl reports
//!
//! This module handles:
//! - The JSON report (the array of `{url, assets}` records)
//! - A markdown summary for humans
//! - Writing either to a file or stdout

mod json;
mod markdown;
mod traits;

pub use crate::config::OutputFormat;
pub use json::{render_json, JsonOutput};
pub use markdown::{format_markdown_summary, MarkdownOutput};
pub use traits::{CrawlReport, OutputError, OutputHandler, OutputResult, PageRecord};

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Returns the renderer for a report format
pub fn handler_for(format: OutputFormat) -> Box<dyn OutputHandler> {
    match format {
        OutputFormat::Json => Box::new(JsonOutput),
        OutputFormat::Markdown => Box::new(MarkdownOutput),
    }
}

/// Renders `report` in `format` to `path`, or to stdout when no path is given
///
/// # Returns
///
/// * `Ok(())` - Report written
/// * `Err(OutputError)` - Failed to create the file or serialize the report
pub fn write_report(
    report: &CrawlReport,
    format: OutputFormat,
    path: Option<&Path>,
) -> OutputResult<()> {
    let handler = handler_for(format);

    match path {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            handler.render(report, &mut writer)?;
            writer.flush()?;
            tracing::info!("Report written to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            handler.render(report, &mut writer)?;
            writer.flush()?;
        }
    }

    Ok(())
}
