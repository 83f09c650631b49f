//! JSON report rendering
//!
//! The JSON report is an array of `{"url", "assets"}` objects in discovery
//! order, indented with two spaces.

use crate::output::traits::{CrawlReport, OutputHandler, OutputResult, PageRecord};
use std::io::Write;

/// Renders the JSON array of page records
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonOutput;

impl OutputHandler for JsonOutput {
    fn render(&self, report: &CrawlReport, writer: &mut dyn Write) -> OutputResult<()> {
        render_json(&report.pages, writer)
    }
}

/// Writes `records` as pretty-printed JSON followed by a newline
pub fn render_json<W: Write + ?Sized>(records: &[PageRecord], writer: &mut W) -> OutputResult<()> {
    serde_json::to_writer_pretty(&mut *writer, records)?;
    writer.write_all(b"\n")?;
    Ok(())
}
