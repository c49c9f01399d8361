//! Token types produced by the [`lexer`](crate::lexer).
//!
//! A [`Token`] borrows its text from the line it was lexed from. Every
//! token carries exactly one [`TokenKind`], and the tokens of a line,
//! concatenated in order, reproduce that line exactly.

use std::fmt;

use crate::span::Span;

/// Syntactic category of a token.
///
/// The set is closed: highlighting dispatches on it through
/// [`TokenKind::style_id`] rather than comparing strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Diagram type declarations, directions and reserved words.
    Keyword,
    /// `:::class` directives.
    Directive,
    /// Connector operators, including an attached `|label|`.
    Arrow,
    /// Single or double quoted text.
    String,
    /// `%%` comments, always running to the end of the line.
    Comment,
    /// A node shape or grouping delimiter pair with its content.
    Bracket,
    /// Colon-introduced text, up to a `;` or the end of the line.
    Label,
    /// Styling directive words such as `style` or `fill`.
    Style,
    /// Integer or decimal literal.
    Number,
    /// Anything else, including plain identifiers and whitespace.
    Default,
}

impl TokenKind {
    /// All kinds, in declaration order.
    pub const ALL: [TokenKind; 10] = [
        TokenKind::Keyword,
        TokenKind::Directive,
        TokenKind::Arrow,
        TokenKind::String,
        TokenKind::Comment,
        TokenKind::Bracket,
        TokenKind::Label,
        TokenKind::Style,
        TokenKind::Number,
        TokenKind::Default,
    ];

    /// The style identifier used to build markup class names.
    pub fn style_id(self) -> &'static str {
        match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Directive => "directive",
            TokenKind::Arrow => "arrow",
            TokenKind::String => "string",
            TokenKind::Comment => "comment",
            TokenKind::Bracket => "bracket",
            TokenKind::Label => "label",
            TokenKind::Style => "style",
            TokenKind::Number => "number",
            TokenKind::Default => "default",
        }
    }

    /// Whether tokens of this kind are emitted without a wrapping span.
    pub fn is_plain(self) -> bool {
        self == TokenKind::Default
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.style_id())
    }
}

/// A classified, lossless slice of one source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    kind: TokenKind,
    value: &'src str,
    span: Span,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, value: &'src str, span: Span) -> Self {
        debug_assert_eq!(value.len(), span.len(), "token span does not cover its value");
        Self { kind, value, span }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The exact text consumed from the line.
    pub fn value(&self) -> &'src str {
        self.value
    }

    /// Byte range of the token within its line.
    pub fn span(&self) -> Span {
        self.span
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.value)
    }
}
