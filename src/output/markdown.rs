//! Markdown summary generation
//!
//! This module generates a human-readable markdown summary of crawl results:
//! overall statistics, the page state breakdown, and each page's assets.

use crate::output::traits::{CrawlReport, OutputHandler, OutputResult};
use std::io::Write;

/// Renders the markdown summary
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownOutput;

impl OutputHandler for MarkdownOutput {
    fn render(&self, report: &CrawlReport, writer: &mut dyn Write) -> OutputResult<()> {
        writer.write_all(format_markdown_summary(report).as_bytes())?;
        Ok(())
    }
}

/// Formats a crawl report as markdown
pub fn format_markdown_summary(report: &CrawlReport) -> String {
    let mut md = String::new();

    // Title
    md.push_str("# Asset-Atlas Crawl Summary\n\n");

    // Overall statistics
    md.push_str("## Overall Statistics\n\n");
    md.push_str(&format!("- **Seed**: {}\n", report.seed));
    md.push_str(&format!(
        "- **Pages Visited**: {} (cap {})\n",
        report.pages.len(),
        report.max_pages
    ));
    md.push_str(&format!("- **Unique Assets**: {}\n", report.unique_assets()));
    md.push_str(&format!(
        "- **Success Rate**: {:.2}%\n",
        report.success_rate()
    ));
    if report.hit_page_cap() {
        md.push_str("- **Stopped**: page cap reached\n");
    }
    if report.leftover > 0 {
        md.push_str(&format!(
            "- **Not Visited**: {} queued URLs left at the page cap\n",
            report.leftover
        ));
    }
    md.push('\n');

    // State breakdown
    md.push_str("## Page State Breakdown\n\n");
    md.push_str("| State | Count |\n");
    md.push_str("|-------|-------|\n");
    md.push_str(&format!("| Processed | {} |\n", report.processed));
    md.push_str(&format!("| Unreachable | {} |\n", report.unreachable));
    md.push_str(&format!("| Failed | {} |\n\n", report.failed));

    // Per-page assets
    md.push_str("## Pages\n\n");
    for page in &report.pages {
        md.push_str(&format!("### {}\n\n", page.url));
        if page.assets.is_empty() {
            md.push_str("_No static assets_\n\n");
            continue;
        }
        for asset in &page.assets {
            md.push_str(&format!("- {}\n", asset));
        }
        md.push('\n');
    }

    md
}
