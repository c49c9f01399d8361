//! HTML rendering of tokenized diagram source.
//!
//! Each line is tokenized on its own, every token value is escaped, and
//! tokens of any kind other than [`TokenKind::Default`] are wrapped in a
//! `<span>` whose class names the kind. The markup contains nothing but
//! escaped text and inert `span` tags, so it can be placed directly in a
//! `<pre>` element.

use log::{debug, trace};

use crate::{
    config::HighlightConfig,
    lexer::tokenize_line,
    tokens::{Token, TokenKind},
};

/// Append `text` to `out` with HTML special characters escaped.
///
/// Every character is replaced at most once, so an `&` that is already
/// part of an entity in the input is escaped again rather than left alone.
pub fn escape_into(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
}

/// Escape HTML special characters (`&`, `<`, `>`, `"`, `'`).
///
/// # Example
///
/// ```
/// assert_eq!(tinct::escape_html("a < b && 'c'"), "a &lt; b &amp;&amp; &#039;c&#039;");
/// ```
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_into(&mut out, text);
    out
}

/// Renders diagram source as highlighted HTML markup.
///
/// A `Highlighter` holds only its configuration; it is cheap to clone and
/// can be shared between threads.
#[derive(Debug, Clone)]
pub struct Highlighter {
    /// Escaped class prefix, ready to be placed inside an attribute.
    class_prefix: String,
}

impl Highlighter {
    /// Create a highlighter from the given configuration.
    pub fn new(config: &HighlightConfig) -> Self {
        Self {
            class_prefix: escape_html(config.class_prefix()),
        }
    }

    /// The class attribute value used for tokens of `kind`.
    pub fn class_name(&self, kind: TokenKind) -> String {
        format!("{}{}", self.class_prefix, kind.style_id())
    }

    fn push_token(&self, out: &mut String, token: &Token<'_>) {
        if token.kind().is_plain() {
            escape_into(out, token.value());
            return;
        }

        out.push_str("<span class=\"");
        out.push_str(&self.class_prefix);
        out.push_str(token.kind().style_id());
        out.push_str("\">");
        escape_into(out, token.value());
        out.push_str("</span>");
    }

    fn push_line(&self, out: &mut String, line: &str) {
        for token in tokenize_line(line) {
            self.push_token(out, &token);
        }
    }

    /// Highlight a single line. An empty line produces an empty string.
    pub fn highlight_line(&self, line: &str) -> String {
        let mut out = String::with_capacity(line.len());
        self.push_line(&mut out, line);
        out
    }

    /// Highlight a whole document.
    ///
    /// Lines are separated by `\n` and highlighted independently; the
    /// output contains exactly as many `\n` characters as the input.
    pub fn highlight_code(&self, text: &str) -> String {
        debug!(bytes = text.len(); "Highlighting document");

        let mut out = String::with_capacity(text.len() * 2);
        for (index, line) in text.split('\n').enumerate() {
            if index > 0 {
                out.push('\n');
            }
            self.push_line(&mut out, line);
        }

        trace!(input_bytes = text.len(), output_bytes = out.len(); "Document highlighted");
        out
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new(&HighlightConfig::default())
    }
}

/// Highlight a single line with the default `syntax-` class prefix.
///
/// # Example
///
/// ```
/// assert_eq!(
///     tinct::highlight_line("A-->B"),
///     "A<span class=\"syntax-arrow\">--&gt;</span>B"
/// );
/// ```
pub fn highlight_line(line: &str) -> String {
    Highlighter::default().highlight_line(line)
}

/// Highlight a document with the default `syntax-` class prefix.
pub fn highlight_code(text: &str) -> String {
    Highlighter::default().highlight_code(text)
}
