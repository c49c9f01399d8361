//! Command-line argument definitions for the Tinct CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the source (file, stdin or built-in
//! template), the output format and path, configuration file selection,
//! and logging verbosity.

use clap::{Parser, ValueEnum};

use tinct::page::Theme;

/// What the CLI writes for the given source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Highlighted markup only, one output line per source line
    #[default]
    Html,
    /// A standalone HTML page with gutter and style sheet
    Page,
    /// One line per token: `line:start..end`, kind and value
    Tokens,
}

/// Command-line arguments for the Tinct highlighter
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input diagram source; `-` or nothing reads stdin
    #[arg(help = "Path to the input file", conflicts_with = "template")]
    pub input: Option<String>,

    /// Highlight a built-in template instead of an input file
    #[arg(short, long)]
    pub template: Option<String>,

    /// Print the built-in templates and exit
    #[arg(long)]
    pub list_templates: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Html)]
    pub format: OutputFormat,

    /// Path to the output file; stdout when omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Page theme (light, dark), overriding the configuration file
    #[arg(long)]
    pub theme: Option<Theme>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["tinct", "diagram.mmd"]).expect("args should parse");
        assert_eq!(args.input.as_deref(), Some("diagram.mmd"));
        assert_eq!(args.format, OutputFormat::Html);
        assert!(args.output.is_none());
        assert!(args.theme.is_none());
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_format_and_theme() {
        let args = Args::try_parse_from(["tinct", "-f", "page", "--theme", "light", "-o", "out.html"])
            .expect("args should parse");
        assert_eq!(args.format, OutputFormat::Page);
        assert_eq!(args.theme, Some(Theme::Light));
        assert_eq!(args.output.as_deref(), Some("out.html"));
        assert!(args.input.is_none());
    }

    #[test]
    fn test_invalid_theme_is_rejected() {
        assert!(Args::try_parse_from(["tinct", "--theme", "sepia"]).is_err());
    }

    #[test]
    fn test_template_conflicts_with_input() {
        assert!(Args::try_parse_from(["tinct", "in.mmd", "--template", "gantt"]).is_err());
    }
}
