//! CLI logic for the Tinct highlighter.
//!
//! Reads diagram source from a file, stdin or a built-in template, and
//! writes highlighted markup, a standalone page, or a token listing.

pub mod error;

mod args;
mod config;

pub use args::{Args, OutputFormat};
pub use error::CliError;

use std::{
    fs,
    io::{self, Read, Write},
};

use log::{debug, info};

use tinct::{Document, Highlighter, config::AppConfig, page, templates};

/// Run the Tinct CLI application
///
/// # Errors
///
/// Returns `CliError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Unknown template names
pub fn run(args: &Args) -> Result<(), CliError> {
    if args.list_templates {
        let listing: String = templates::all()
            .iter()
            .map(|template| format!("{}\t{}\n", template.id, template.name))
            .collect();
        return write_output(args.output.as_deref(), &listing);
    }

    let mut app_config = config::load_config(args.config.as_ref())?;
    if let Some(theme) = args.theme {
        let page = app_config.page().clone().with_theme(theme);
        app_config = app_config.with_page(page);
    }

    let source = read_source(args)?;
    info!(format:? = args.format, bytes = source.len(); "Highlighting source");

    let rendered = render(&source, args.format, &app_config);
    write_output(args.output.as_deref(), &rendered)?;

    info!(output:? = args.output; "Output written");

    Ok(())
}

/// Render `source` in the requested format.
pub fn render(source: &str, format: OutputFormat, config: &AppConfig) -> String {
    match format {
        OutputFormat::Html => Highlighter::new(config.highlight()).highlight_code(source),
        OutputFormat::Page => page::render_page(source, config),
        OutputFormat::Tokens => token_listing(source),
    }
}

/// One line per token: `line:start..end`, kind and debug-quoted value.
fn token_listing(source: &str) -> String {
    let mut listing = String::new();
    for (index, tokens) in Document::new(source).tokens().enumerate() {
        for token in tokens {
            listing.push_str(&format!(
                "{}:{}\t{}\t{:?}\n",
                index + 1,
                token.span(),
                token.kind(),
                token.value()
            ));
        }
    }
    listing
}

fn read_source(args: &Args) -> Result<String, CliError> {
    if let Some(id) = &args.template {
        let template = templates::find(id).ok_or_else(|| CliError::unknown_template(id))?;
        debug!(template = template.id; "Using built-in template");
        return Ok(template.source.to_string());
    }

    match args.input.as_deref() {
        None | Some("-") => {
            debug!("Reading source from stdin");
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
        Some(path) => Ok(fs::read_to_string(path)?),
    }
}

fn write_output(path: Option<&str>, contents: &str) -> Result<(), CliError> {
    match path {
        Some(path) => fs::write(path, contents)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(contents.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_listing() {
        let listing = token_listing("A-->B\n%% c");
        assert_eq!(
            listing,
            "1:0..1\tdefault\t\"A\"\n\
             1:1..4\tarrow\t\"-->\"\n\
             1:4..5\tdefault\t\"B\"\n\
             2:0..4\tcomment\t\"%% c\"\n"
        );
    }

    #[test]
    fn test_render_html_uses_config_prefix() {
        let config: AppConfig =
            toml::from_str("[highlight]\nclass_prefix = \"x-\"").expect("config should parse");
        assert_eq!(
            render("end", OutputFormat::Html, &config),
            "<span class=\"x-keyword\">end</span>"
        );
    }
}
