use std::io::{self, Write};

/// Knobs for one report run. The defaults match the chat pages this tool
/// was written for; tests and future callers can retarget the selectors.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Attribute marking one chat turn, e.g. `data-cy`.
    pub marker_attr: String,
    /// Attribute value identifying user messages.
    pub marker_value: String,
    /// Tag names treated as text carriers inside a message.
    pub text_carriers: Vec<String>,
    pub separator_width: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            marker_attr: "data-cy".to_string(),
            marker_value: "user-message".to_string(),
            text_carriers: vec!["p".to_string(), "span".to_string()],
            separator_width: 80,
        }
    }
}

/// Header and separator, written before any rows.
pub fn write_header<W: Write>(out: &mut W, options: &ReportOptions) -> io::Result<()> {
    writeln!(out, "{:>5}, {:>8}, Text", "Days", "Message#")?;
    writeln!(out, "{}", "-".repeat(options.separator_width))
}

/// One data row: age right-aligned to width 5, then the message sequence
/// number, then the quoted text. No spaces after the commas, unlike the
/// header line.
pub fn format_row(days: i32, message_number: usize, text: &str) -> String {
    format!(
        "{:>5},{},\"{}\"",
        render_days(days),
        message_number,
        escape_quotes(text)
    )
}

// Negative values render as "-". The tracked maximum starts at 0, so this
// branch is a fallback only.
fn render_days(days: i32) -> String {
    if days < 0 {
        "-".to_string()
    } else {
        days.to_string()
    }
}

fn escape_quotes(text: &str) -> String {
    text.replace('"', "\"\"")
}
