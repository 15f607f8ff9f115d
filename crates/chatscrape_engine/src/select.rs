use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::report::ReportOptions;

#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("invalid selector `{selector}`: {message}")]
    InvalidSelector { selector: String, message: String },
}

/// Compiled selectors for one report configuration.
pub struct MessageQuery {
    message: Selector,
    text_carrier: Selector,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFragment {
    /// Trimmed inner text, never empty.
    pub text: String,
    /// Index among the selected carriers before empty fragments were dropped.
    pub position: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserMessage {
    /// 1-based line of the marker attribute in the raw markup, 0 if unknown.
    /// Debug identifier only; the report column uses the sequence counter.
    pub source_line: u32,
    pub fragments: Vec<TextFragment>,
}

impl MessageQuery {
    pub fn compile(options: &ReportOptions) -> Result<Self, QueryError> {
        let marker = format!("[{}=\"{}\"]", options.marker_attr, options.marker_value);
        let message = parse_selector(&marker)?;
        let text_carrier = parse_selector(&options.text_carriers.join(", "))?;
        Ok(Self {
            message,
            text_carrier,
        })
    }

    /// All user-message elements in document order, each with its trimmed,
    /// non-empty text fragments. `source_lines` is index-aligned with the
    /// matches (see [`marker_source_lines`]).
    pub fn collect(&self, document: &Html, source_lines: &[u32]) -> Vec<UserMessage> {
        document
            .select(&self.message)
            .enumerate()
            .map(|(index, element)| UserMessage {
                source_line: source_lines.get(index).copied().unwrap_or(0),
                fragments: self.fragments_of(element),
            })
            .collect()
    }

    fn fragments_of(&self, element: ElementRef) -> Vec<TextFragment> {
        element
            .select(&self.text_carrier)
            .enumerate()
            .filter_map(|(position, carrier)| {
                let text = carrier.text().collect::<String>().trim().to_string();
                if text.is_empty() {
                    None
                } else {
                    Some(TextFragment { text, position })
                }
            })
            .collect()
    }
}

fn parse_selector(selector: &str) -> Result<Selector, QueryError> {
    Selector::parse(selector).map_err(|err| QueryError::InvalidSelector {
        selector: selector.to_string(),
        message: err.to_string(),
    })
}

/// Best-effort 1-based source lines of each marker attribute occurrence in
/// the raw markup, in document order.
///
/// The parsed tree does not retain source positions, so this scans the
/// original text for `attr="value"` (either quote style) instead.
pub fn marker_source_lines(html: &str, attr: &str, value: &str) -> Vec<u32> {
    let pattern = format!(
        r#"{}\s*=\s*["']{}["']"#,
        regex::escape(attr),
        regex::escape(value)
    );
    let Ok(marker) = Regex::new(&pattern) else {
        return Vec::new();
    };

    let mut lines = Vec::new();
    let mut line: u32 = 1;
    let mut cursor = 0;
    for found in marker.find_iter(html) {
        line += html[cursor..found.start()]
            .bytes()
            .filter(|&b| b == b'\n')
            .count() as u32;
        cursor = found.start();
        lines.push(line);
    }
    lines
}
