//! Configuration types for highlighting and page export.
//!
//! All types implement [`serde::Deserialize`] so front ends can load them
//! from external sources. Every field has a default, so an empty document
//! deserializes to [`AppConfig::default`].
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining highlight and page settings.
//! - [`HighlightConfig`] - Controls the class names placed on highlighted tokens.
//! - [`PageConfig`] - Controls the standalone HTML page produced by [`crate::page`].
//!
//! # Example
//!
//! ```
//! # use tinct::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.highlight().class_prefix(), "syntax-");
//! ```

use serde::Deserialize;

use crate::page::Theme;

const DEFAULT_CLASS_PREFIX: &str = "syntax-";
const DEFAULT_PAGE_TITLE: &str = "Diagram source";

/// Top-level configuration combining highlight and page settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Highlight configuration section.
    #[serde(default)]
    highlight: HighlightConfig,

    /// Page export configuration section.
    #[serde(default)]
    page: PageConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(highlight: HighlightConfig, page: PageConfig) -> Self {
        Self { highlight, page }
    }

    /// Returns the highlight configuration.
    pub fn highlight(&self) -> &HighlightConfig {
        &self.highlight
    }

    /// Returns the page configuration.
    pub fn page(&self) -> &PageConfig {
        &self.page
    }

    /// Replaces the page configuration.
    pub fn with_page(self, page: PageConfig) -> Self {
        Self { page, ..self }
    }
}

/// Class naming for highlighted tokens.
///
/// The class of a token is the prefix followed by the kind's
/// [`style_id`](crate::TokenKind::style_id), e.g. `syntax-keyword`.
#[derive(Debug, Clone, Deserialize)]
pub struct HighlightConfig {
    #[serde(default = "default_class_prefix")]
    class_prefix: String,
}

fn default_class_prefix() -> String {
    DEFAULT_CLASS_PREFIX.to_string()
}

impl HighlightConfig {
    pub fn new(class_prefix: impl Into<String>) -> Self {
        Self {
            class_prefix: class_prefix.into(),
        }
    }

    /// Returns the prefix placed before every style identifier.
    pub fn class_prefix(&self) -> &str {
        &self.class_prefix
    }
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CLASS_PREFIX)
    }
}

/// Settings for the standalone HTML page.
#[derive(Debug, Clone, Deserialize)]
pub struct PageConfig {
    /// Document title, escaped before it is written.
    #[serde(default = "default_page_title")]
    title: String,

    /// Color [`Theme`] of the page.
    #[serde(default)]
    theme: Theme,

    /// Whether to render the line-number gutter.
    #[serde(default = "default_line_numbers")]
    line_numbers: bool,
}

fn default_page_title() -> String {
    DEFAULT_PAGE_TITLE.to_string()
}

fn default_line_numbers() -> bool {
    true
}

impl PageConfig {
    /// Creates a new [`PageConfig`].
    ///
    /// # Arguments
    ///
    /// * `title` - Title of the generated document.
    /// * `theme` - Light or dark color scheme.
    /// * `line_numbers` - Whether to render the gutter.
    pub fn new(title: impl Into<String>, theme: Theme, line_numbers: bool) -> Self {
        Self {
            title: title.into(),
            theme,
            line_numbers,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn line_numbers(&self) -> bool {
        self.line_numbers
    }

    /// Returns a copy with the theme replaced.
    pub fn with_theme(self, theme: Theme) -> Self {
        Self { theme, ..self }
    }

    /// Returns a copy with the title replaced.
    pub fn with_title(self, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..self
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_TITLE, Theme::default(), true)
    }
}
