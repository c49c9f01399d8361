//! Error types for the Tinct CLI.
//!
//! Highlighting itself cannot fail; everything here comes from the
//! surroundings: reading input, writing output, loading configuration and
//! resolving template names. [`CliError`] derives [`miette::Diagnostic`]
//! so `main` can render it with codes, labels and help text.

use std::{io, path::PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use tinct::templates;

/// The main error type for CLI operations.
#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("I/O error: {0}")]
    #[diagnostic(code(tinct::io))]
    Io(#[from] io::Error),

    #[error("Failed to parse TOML configuration: {message}")]
    #[diagnostic(
        code(tinct::config::parse),
        help("supported sections are `[highlight]` and `[page]`")
    )]
    ConfigParse {
        message: String,

        /// The configuration file contents
        #[source_code]
        src: NamedSource<String>,

        /// Location of the error in the file, when known
        #[label("here")]
        span: Option<SourceSpan>,
    },

    #[error("Missing configuration file: {}", .0.display())]
    #[diagnostic(code(tinct::config::missing))]
    MissingConfig(PathBuf),

    #[error("Unknown template `{id}`")]
    #[diagnostic(code(tinct::template))]
    UnknownTemplate {
        id: String,

        #[help]
        help: Option<String>,
    },
}

impl CliError {
    /// Create an `UnknownTemplate` error listing the available identifiers.
    pub fn unknown_template(id: impl Into<String>) -> Self {
        let available: Vec<_> = templates::all().iter().map(|t| t.id).collect();
        Self::UnknownTemplate {
            id: id.into(),
            help: Some(format!("available templates: {}", available.join(", "))),
        }
    }

    /// Create a `ConfigParse` error from a TOML error and the file it came from.
    pub fn config_parse(err: &toml::de::Error, name: impl AsRef<str>, src: String) -> Self {
        Self::ConfigParse {
            message: err.message().to_string(),
            span: err.span().map(SourceSpan::from),
            src: NamedSource::new(name, src),
        }
    }
}
