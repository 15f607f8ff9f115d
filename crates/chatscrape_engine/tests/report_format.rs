use chatscrape_engine::{format_row, write_header, ReportOptions};
use pretty_assertions::assert_eq;

#[test]
fn header_matches_fixed_layout() {
    let mut out = Vec::new();
    write_header(&mut out, &ReportOptions::default()).unwrap();
    let text = String::from_utf8(out).unwrap();

    let separator = "-".repeat(80);
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some(" Days, Message#, Text"));
    assert_eq!(lines.next(), Some(separator.as_str()));
    assert_eq!(lines.next(), None);
}

#[test]
fn separator_width_is_configurable() {
    let options = ReportOptions {
        separator_width: 10,
        ..ReportOptions::default()
    };
    let mut out = Vec::new();
    write_header(&mut out, &options).unwrap();
    assert!(String::from_utf8(out).unwrap().ends_with("----------\n"));
}

#[test]
fn row_right_aligns_days_with_no_spaces_after_commas() {
    assert_eq!(format_row(2, 1, "Hello"), "    2,1,\"Hello\"");
    assert_eq!(format_row(0, 12, "x"), "    0,12,\"x\"");
    assert_eq!(format_row(12345, 1, "x"), "12345,1,\"x\"");
}

#[test]
fn embedded_quotes_are_doubled() {
    assert_eq!(
        format_row(0, 3, r#"He said "hi""#),
        "    0,3,\"He said \"\"hi\"\"\""
    );
}

#[test]
fn quoted_field_round_trips() {
    let original = r#"He said "hi""#;
    let rendered = format_row(0, 1, original);

    // Parse the quoted-CSV-style field back out of the row.
    let field = rendered
        .splitn(3, ',')
        .nth(2)
        .unwrap()
        .strip_prefix('"')
        .unwrap()
        .strip_suffix('"')
        .unwrap()
        .replace("\"\"", "\"");
    assert_eq!(field, original);
}

#[test]
fn negative_days_render_as_dash() {
    // Unreachable through the extractor (the maximum starts at 0), but the
    // fallback rendering is part of the row contract.
    assert_eq!(format_row(-1, 1, "x"), "    -,1,\"x\"");
}
