use std::io::Write;

use scraper::Html;

use crate::report::{format_row, write_header, ReportOptions};
use crate::rows::message_rows;
use crate::select::{marker_source_lines, MessageQuery, QueryError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSummary {
    pub message_count: usize,
    pub row_count: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("selector error: {0}")]
    Query(#[from] QueryError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Runs the whole extraction pass over one decoded page.
///
/// Writes the header and separator first, then one row per retained content
/// fragment (or one merged row for a Forbidden-prefix message). The message
/// counter advances once per user-message element, even when an element
/// contributes no rows.
pub fn extract_transcript<W: Write>(
    html: &str,
    out: &mut W,
    options: &ReportOptions,
) -> Result<ReportSummary, ExtractError> {
    let query = MessageQuery::compile(options)?;
    let document = Html::parse_document(html);
    let source_lines = marker_source_lines(html, &options.marker_attr, &options.marker_value);

    write_header(out, options)?;

    let messages = query.collect(&document, &source_lines);
    if messages.len() != source_lines.len() {
        log::warn!(
            "marker scan found {} occurrences, selector matched {} elements",
            source_lines.len(),
            messages.len()
        );
    }

    let mut row_count = 0;
    for (index, message) in messages.iter().enumerate() {
        let number = index + 1;
        let rows = message_rows(&message.fragments);
        log::debug!(
            "message {} (source line {}): {} rows, max age {} days",
            number,
            message.source_line,
            rows.rows.len(),
            rows.highest_days
        );
        for row in &rows.rows {
            writeln!(out, "{}", format_row(rows.highest_days, number, &row.text))?;
            row_count += 1;
        }
    }

    Ok(ReportSummary {
        message_count: messages.len(),
        row_count,
    })
}
