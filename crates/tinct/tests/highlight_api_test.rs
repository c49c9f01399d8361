//! Integration tests for the public highlighting API.

use std::thread;

use tinct::{
    Document, Highlighter, TokenKind,
    config::{AppConfig, HighlightConfig},
    highlight_code, highlight_line, line_count,
    page::render_page,
    templates, tokenize_line,
};

#[test]
fn test_tokenize_scenarios() {
    let cases: &[(&str, &[(TokenKind, &str)])] = &[
        (
            "flowchart TD",
            &[
                (TokenKind::Keyword, "flowchart"),
                (TokenKind::Default, " "),
                (TokenKind::Keyword, "TD"),
            ],
        ),
        (
            "A-->B",
            &[
                (TokenKind::Default, "A"),
                (TokenKind::Arrow, "-->"),
                (TokenKind::Default, "B"),
            ],
        ),
        ("%% note here", &[(TokenKind::Comment, "%% note here")]),
        ("", &[]),
        (
            "A[Start] --> B",
            &[
                (TokenKind::Default, "A"),
                (TokenKind::Bracket, "[Start]"),
                (TokenKind::Default, " "),
                (TokenKind::Arrow, "-->"),
                (TokenKind::Default, " "),
                (TokenKind::Default, "B"),
            ],
        ),
    ];

    for (line, expected) in cases {
        let actual: Vec<_> = tokenize_line(line)
            .iter()
            .map(|token| (token.kind(), token.value()))
            .collect();
        assert_eq!(actual.as_slice(), *expected, "line {line:?}");
    }
}

#[test]
fn test_style_line_starts_with_style_keyword() {
    let tokens = tokenize_line("style A fill:#06b6d4");
    assert_eq!(tokens[0].kind(), TokenKind::Style);
    assert_eq!(tokens[0].value(), "style");
    assert_eq!(tokens.last().map(|t| t.kind()), Some(TokenKind::Label));
}

#[test]
fn test_templates_round_trip_through_tokens() {
    for template in templates::all() {
        let rebuilt: Vec<String> = Document::new(template.source)
            .tokens()
            .map(|line| line.iter().map(|token| token.value()).collect())
            .collect();
        assert_eq!(rebuilt.join("\n"), template.source, "template `{}`", template.id);
    }
}

#[test]
fn test_templates_highlight_line_for_line() {
    for template in templates::all() {
        let html = highlight_code(template.source);
        assert_eq!(line_count(&html), line_count(template.source));
        assert!(!html.contains("<script"));
    }
}

#[test]
fn test_highlight_line_of_empty_input() {
    assert_eq!(highlight_line(""), "");
}

#[test]
fn test_highlighter_is_shareable_across_threads() {
    let highlighter = Highlighter::new(&HighlightConfig::new("hl-"));
    let expected = highlighter.highlight_code(templates::SEQUENCE.source);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let highlighter = highlighter.clone();
            thread::spawn(move || highlighter.highlight_code(templates::SEQUENCE.source))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().expect("highlighting thread panicked"), expected);
    }
}

#[test]
fn test_render_page_for_template() {
    let html = render_page(templates::GANTT.source, &AppConfig::default());
    assert!(html.contains("<span class=\"syntax-keyword\">gantt</span>"));
    assert!(html.contains(&format!(
        "<div>{}</div>",
        line_count(templates::GANTT.source)
    )));
}
