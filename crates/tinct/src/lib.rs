//! Tinct - syntax highlighting for text-based diagram languages.
//!
//! Tinct classifies flowchart, sequence, class, state, ER and gantt diagram
//! source into typed tokens and renders them as HTML-safe markup for a
//! monospaced editor backdrop. It does not parse or render diagrams; the
//! markup is for display only.
//!
//! - [`tokenize_line`] turns one line into [`Token`]s. It is total: any
//!   input produces tokens that reassemble to the original line.
//! - [`highlight_line`] and [`highlight_code`] render escaped markup with
//!   `syntax-*` classes; [`Highlighter`] does the same with a custom
//!   [`config::HighlightConfig`].
//! - [`Document`], [`line_count`] and [`line_numbers`] serve the gutter.
//! - [`page::render_page`] produces a standalone HTML page.
//! - [`templates`] holds the built-in sample diagrams.
//!
//! # Example
//!
//! ```
//! let html = tinct::highlight_code("flowchart TD\n    A[Start] --> B");
//! assert_eq!(
//!     html,
//!     "<span class=\"syntax-keyword\">flowchart</span> <span class=\"syntax-keyword\">TD</span>\n    \
//!      A<span class=\"syntax-bracket\">[Start]</span> <span class=\"syntax-arrow\">--&gt;</span> B"
//! );
//! ```

pub mod config;
pub mod keywords;
pub mod page;
pub mod templates;

mod document;
mod highlight;
mod lexer;
mod span;
mod tokens;

pub use document::{Document, line_count, line_numbers};
pub use highlight::{Highlighter, escape_html, escape_into, highlight_code, highlight_line};
pub use lexer::{ARROW_OPERATORS, tokenize_line};
pub use span::Span;
pub use tokens::{Token, TokenKind};
