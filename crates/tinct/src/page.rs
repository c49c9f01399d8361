//! Standalone HTML page export.
//!
//! [`render_page`] wraps highlighted markup in a complete document with a
//! line-number gutter and an inline style sheet, reproducing the editor's
//! backdrop layer outside the browser application.

use std::{fmt, str::FromStr};

use log::debug;
use serde::Deserialize;
use thiserror::Error;

use crate::{
    config::AppConfig,
    document::line_numbers,
    highlight::{Highlighter, escape_html},
    tokens::TokenKind,
};

/// Color scheme of an exported page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

/// Error returned when parsing an unknown [`Theme`] name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme `{0}`, expected `light` or `dark`")]
pub struct ParseThemeError(String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => f.write_str("light"),
            Theme::Dark => f.write_str("dark"),
        }
    }
}

/// Colors of one theme.
struct Palette {
    background: &'static str,
    foreground: &'static str,
    gutter: &'static str,
}

impl Theme {
    fn palette(self) -> Palette {
        match self {
            Theme::Light => Palette {
                background: "#ffffff",
                foreground: "#1e293b",
                gutter: "#94a3b8",
            },
            Theme::Dark => Palette {
                background: "#0f172a",
                foreground: "#e2e8f0",
                gutter: "#475569",
            },
        }
    }

    /// Foreground color of a token kind, `None` for unstyled kinds.
    fn token_color(self, kind: TokenKind) -> Option<&'static str> {
        let (light, dark) = match kind {
            TokenKind::Keyword => ("#7c3aed", "#c084fc"),
            TokenKind::Directive => ("#db2777", "#f472b6"),
            TokenKind::Arrow => ("#0891b2", "#22d3ee"),
            TokenKind::String => ("#16a34a", "#a3e635"),
            TokenKind::Comment => ("#64748b", "#64748b"),
            TokenKind::Bracket => ("#d97706", "#fbbf24"),
            TokenKind::Label => ("#be185d", "#f9a8d4"),
            TokenKind::Style => ("#ea580c", "#fb923c"),
            TokenKind::Number => ("#dc2626", "#f87171"),
            TokenKind::Default => return None,
        };
        Some(match self {
            Theme::Light => light,
            Theme::Dark => dark,
        })
    }
}

fn style_sheet(highlighter: &Highlighter, theme: Theme) -> String {
    let palette = theme.palette();
    let mut css = format!(
        "body {{ margin: 0; background: {bg}; color: {fg}; }}\n\
         .editor-container {{ display: flex; font-family: 'JetBrains Mono', monospace; \
         font-size: 14px; line-height: 1.6; }}\n\
         .line-numbers {{ padding: 16px 12px; text-align: right; color: {gutter}; \
         user-select: none; }}\n\
         .code-highlight {{ margin: 0; padding: 16px; white-space: pre; }}\n",
        bg = palette.background,
        fg = palette.foreground,
        gutter = palette.gutter,
    );

    for kind in TokenKind::ALL {
        if let Some(color) = theme.token_color(kind) {
            css.push_str(&format!(
                ".{} {{ color: {color}; }}\n",
                highlighter.class_name(kind)
            ));
        }
    }
    css.push_str(&format!(
        ".{} {{ font-style: italic; }}\n",
        highlighter.class_name(TokenKind::Comment)
    ));
    css
}

/// Render `source` as a complete, self-contained HTML document.
///
/// The document carries the configured title and theme, an optional
/// line-number gutter, and the highlighted source inside
/// `<pre class="code-highlight">`.
pub fn render_page(source: &str, config: &AppConfig) -> String {
    let page = config.page();
    let highlighter = Highlighter::new(config.highlight());

    debug!(theme = page.theme().to_string(), line_numbers = page.line_numbers(); "Rendering page");

    let mut html = String::with_capacity(source.len() * 3 + 2048);
    html.push_str("<!DOCTYPE html>\n");
    html.push_str(&format!("<html lang=\"en\" data-theme=\"{}\">\n", page.theme()));
    html.push_str("<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape_html(page.title())));
    html.push_str("<style>\n");
    html.push_str(&style_sheet(&highlighter, page.theme()));
    html.push_str("</style>\n</head>\n<body>\n<div class=\"editor-container\">\n");

    if page.line_numbers() {
        html.push_str("<div class=\"line-numbers\" aria-hidden=\"true\">\n");
        for number in line_numbers(source) {
            html.push_str(&format!("<div>{number}</div>\n"));
        }
        html.push_str("</div>\n");
    }

    html.push_str("<pre class=\"code-highlight\">");
    html.push_str(&highlighter.highlight_code(source));
    html.push_str("\n</pre>\n</div>\n</body>\n</html>\n");
    html
}
