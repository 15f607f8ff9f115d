use chatscrape_engine::{
    marker_source_lines, MessageQuery, ReportOptions, TextFragment, UserMessage,
};
use pretty_assertions::assert_eq;
use scraper::Html;

#[test]
fn fragments_keep_prefilter_positions() {
    let html = r#"<div data-cy="user-message">
        <p>  </p>
        <p>A</p>
        <span></span>
        <span>B</span>
    </div>"#;
    let document = Html::parse_document(html);
    let query = MessageQuery::compile(&ReportOptions::default()).unwrap();

    let messages = query.collect(&document, &[]);
    assert_eq!(
        messages,
        vec![UserMessage {
            source_line: 0,
            fragments: vec![
                TextFragment {
                    text: "A".to_string(),
                    position: 1,
                },
                TextFragment {
                    text: "B".to_string(),
                    position: 3,
                },
            ],
        }]
    );
}

#[test]
fn messages_come_back_in_document_order() {
    let html = r#"
        <section><div data-cy="user-message"><p>first</p></div></section>
        <div data-cy="user-message"><p>second</p></div>
    "#;
    let document = Html::parse_document(html);
    let query = MessageQuery::compile(&ReportOptions::default()).unwrap();

    let texts: Vec<String> = query
        .collect(&document, &[])
        .into_iter()
        .map(|message| message.fragments[0].text.clone())
        .collect();
    assert_eq!(texts, vec!["first".to_string(), "second".to_string()]);
}

#[test]
fn elements_without_the_marker_are_ignored() {
    let html = r#"
        <div data-cy="bot-message"><p>not me</p></div>
        <div data-cy="user-message"><p>me</p></div>
    "#;
    let document = Html::parse_document(html);
    let query = MessageQuery::compile(&ReportOptions::default()).unwrap();

    let messages = query.collect(&document, &[]);
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].fragments[0].text, "me");
}

#[test]
fn source_lines_align_with_matches() {
    let html = "<html>\n<body>\n<div data-cy=\"user-message\"></div>\n<div data-cy='user-message'></div>\n</body>\n</html>";
    let lines = marker_source_lines(html, "data-cy", "user-message");
    assert_eq!(lines, vec![3, 4]);

    let document = Html::parse_document(html);
    let query = MessageQuery::compile(&ReportOptions::default()).unwrap();
    let messages = query.collect(&document, &lines);
    assert_eq!(messages[0].source_line, 3);
    assert_eq!(messages[1].source_line, 4);
}

#[test]
fn bad_selector_configuration_is_an_error() {
    let options = ReportOptions {
        marker_attr: "da[ta".to_string(),
        ..ReportOptions::default()
    };
    assert!(MessageQuery::compile(&options).is_err());
}
