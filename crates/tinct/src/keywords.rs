//! Reserved word tables used to classify bare words.
//!
//! Lookups are case-sensitive and only ever applied to a slice the lexer
//! has already isolated as a word.

use crate::tokens::TokenKind;

/// Diagram type declarations, layout directions and diagram-specific
/// reserved words.
pub const KEYWORDS: &[&str] = &[
    // Diagram types
    "graph",
    "flowchart",
    "sequenceDiagram",
    "classDiagram",
    "stateDiagram",
    "stateDiagram-v2",
    "erDiagram",
    "gantt",
    "pie",
    "mindmap",
    "timeline",
    "gitGraph",
    "journey",
    "quadrantChart",
    "xychart-beta",
    // Flowchart structure and directions
    "subgraph",
    "end",
    "direction",
    "TB",
    "TD",
    "BT",
    "RL",
    "LR",
    // Sequence, class and state diagrams
    "participant",
    "actor",
    "class",
    "state",
    "note",
    "loop",
    "alt",
    "else",
    "opt",
    "par",
    "critical",
    "break",
    "rect",
    "activate",
    "deactivate",
    "autonumber",
    // Gantt
    "title",
    "section",
    "dateFormat",
    "excludes",
    "includes",
    "done",
    "active",
    "crit",
    "milestone",
    "after",
    // Entity relationship keys
    "PK",
    "FK",
    "UK",
];

/// Styling directive words.
pub const STYLE_KEYWORDS: &[&str] = &[
    "style",
    "classDef",
    "linkStyle",
    "fill",
    "stroke",
    "color",
    "stroke-width",
    "font-size",
    "font-family",
];

/// Returns `true` if `word` is a reserved keyword.
pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(&word)
}

/// Returns `true` if `word` is a styling keyword.
pub fn is_style_keyword(word: &str) -> bool {
    STYLE_KEYWORDS.contains(&word)
}

/// Classify a bare word. Keywords take precedence over style keywords.
pub fn classify_word(word: &str) -> TokenKind {
    if is_keyword(word) {
        TokenKind::Keyword
    } else if is_style_keyword(word) {
        TokenKind::Style
    } else {
        TokenKind::Default
    }
}
