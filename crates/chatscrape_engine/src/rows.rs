use std::sync::LazyLock;

use regex::Regex;

use crate::select::TextFragment;

// Anchored full-string match; "no days ago" or text with trailing words is
// ordinary content.
static AGE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+) days? ago$").expect("age marker pattern"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowText {
    pub text: String,
    /// Carrier index the row came from (first fragment for merged rows).
    pub position: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRows {
    /// Maximum "N days ago" value seen in the message, 0 when none matched.
    pub highest_days: i32,
    pub rows: Vec<RowText>,
}

/// Cleans one message's fragments into report rows.
///
/// Age-marker fragments raise `highest_days` and are dropped before the
/// consecutive-duplicate comparison, so two identical content fragments
/// separated only by an age marker still collapse into one. A message whose
/// first content fragment starts with "Forbidden" is merged into a single
/// row.
pub fn message_rows(fragments: &[TextFragment]) -> MessageRows {
    let mut highest_days: i32 = 0;
    let mut content: Vec<&TextFragment> = Vec::new();

    for fragment in fragments {
        if let Some(caps) = AGE_MARKER.captures(&fragment.text) {
            if let Ok(days) = caps[1].parse::<i32>() {
                highest_days = highest_days.max(days);
            }
            continue;
        }
        // Compare against the previously kept fragment's raw text; CR/LF
        // normalization happens after this filter.
        if content.last().map(|kept| kept.text.as_str()) != Some(fragment.text.as_str()) {
            content.push(fragment);
        }
    }

    let mut rows = Vec::new();
    match content.first() {
        Some(first) if has_forbidden_prefix(&first.text) => {
            let combined = content
                .iter()
                .map(|fragment| normalize_inline(&fragment.text))
                .collect::<Vec<_>>()
                .join(" ");
            rows.push(RowText {
                text: combined,
                position: first.position,
            });
        }
        _ => {
            rows.extend(content.iter().map(|fragment| RowText {
                text: normalize_inline(&fragment.text),
                position: fragment.position,
            }));
        }
    }
    rows.retain(|row| !row.text.trim().is_empty());

    MessageRows { highest_days, rows }
}

fn has_forbidden_prefix(text: &str) -> bool {
    text.get(..9)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("forbidden"))
}

/// Replaces every CR and LF with a single space, then trims.
fn normalize_inline(text: &str) -> String {
    text.replace(['\r', '\n'], " ").trim().to_string()
}
