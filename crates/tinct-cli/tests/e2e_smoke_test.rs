use std::{fs, path::Path};

use tempfile::tempdir;

use tinct::templates;
use tinct_cli::{Args, CliError, OutputFormat};

/// Arguments for a run with an explicit (empty) config, so no local or
/// system configuration leaks into the test.
fn args(input: Option<&Path>, output: &Path, config: &Path) -> Args {
    Args {
        input: input.map(|p| p.to_string_lossy().to_string()),
        template: None,
        list_templates: false,
        format: OutputFormat::Html,
        output: Some(output.to_string_lossy().to_string()),
        config: Some(config.to_string_lossy().to_string()),
        theme: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_highlight_file_to_html() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("diagram.mmd");
    let output = temp_dir.path().join("diagram.html");
    let config = temp_dir.path().join("config.toml");
    fs::write(&input, "flowchart TD\n    A[Start] --> B").expect("Failed to write input");
    fs::write(&config, "").expect("Failed to write config");

    tinct_cli::run(&args(Some(&input), &output, &config)).expect("run should succeed");

    let html = fs::read_to_string(&output).expect("Failed to read output");
    assert_eq!(
        html,
        "<span class=\"syntax-keyword\">flowchart</span> <span class=\"syntax-keyword\">TD</span>\n    \
         A<span class=\"syntax-bracket\">[Start]</span> <span class=\"syntax-arrow\">--&gt;</span> B"
    );
}

#[test]
fn e2e_every_template_renders_as_page() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config = temp_dir.path().join("config.toml");
    fs::write(&config, "[page]\ntheme = \"dark\"\n").expect("Failed to write config");

    let mut failed_templates = Vec::new();

    for template in templates::all() {
        let output = temp_dir.path().join(format!("{}.html", template.id));
        let mut cfg = args(None, &output, &config);
        cfg.template = Some(template.id.to_string());
        cfg.format = OutputFormat::Page;
        cfg.theme = Some(tinct::page::Theme::Light);

        if let Err(e) = tinct_cli::run(&cfg) {
            failed_templates.push((template.id, e));
            continue;
        }

        let html = fs::read_to_string(&output).expect("Failed to read output");
        assert!(html.contains("data-theme=\"light\""), "template `{}`", template.id);
        assert!(html.contains("<pre class=\"code-highlight\">"));
    }

    if !failed_templates.is_empty() {
        eprintln!("\nTemplates that failed:");
        for (id, err) in &failed_templates {
            eprintln!("  - {id}: {err}");
        }
        panic!("{} template(s) failed unexpectedly", failed_templates.len());
    }
}

#[test]
fn e2e_token_listing() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("seq.mmd");
    let output = temp_dir.path().join("tokens.txt");
    let config = temp_dir.path().join("config.toml");
    fs::write(&input, "U->>C: hi").expect("Failed to write input");
    fs::write(&config, "").expect("Failed to write config");

    let mut cfg = args(Some(&input), &output, &config);
    cfg.format = OutputFormat::Tokens;
    tinct_cli::run(&cfg).expect("run should succeed");

    let listing = fs::read_to_string(&output).expect("Failed to read output");
    assert_eq!(
        listing,
        "1:0..1\tdefault\t\"U\"\n1:1..4\tarrow\t\"->>\"\n1:4..5\tdefault\t\"C\"\n1:5..9\tlabel\t\": hi\"\n"
    );
}

#[test]
fn e2e_config_class_prefix() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("d.mmd");
    let output = temp_dir.path().join("d.html");
    let config = temp_dir.path().join("config.toml");
    fs::write(&input, "end").expect("Failed to write input");
    fs::write(&config, "[highlight]\nclass_prefix = \"mm-\"\n").expect("Failed to write config");

    tinct_cli::run(&args(Some(&input), &output, &config)).expect("run should succeed");

    let html = fs::read_to_string(&output).expect("Failed to read output");
    assert_eq!(html, "<span class=\"mm-keyword\">end</span>");
}

#[test]
fn e2e_list_templates() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("list.txt");
    let config = temp_dir.path().join("config.toml");

    let mut cfg = args(None, &output, &config);
    cfg.list_templates = true;
    tinct_cli::run(&cfg).expect("listing should succeed");

    let listing = fs::read_to_string(&output).expect("Failed to read output");
    assert_eq!(listing.lines().count(), templates::all().len());
    assert!(listing.starts_with("flowchart\tFlowchart\n"));
}

#[test]
fn e2e_unknown_template_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("out.html");
    let config = temp_dir.path().join("config.toml");
    fs::write(&config, "").expect("Failed to write config");

    let mut cfg = args(None, &output, &config);
    cfg.template = Some("venn".to_string());

    assert!(matches!(
        tinct_cli::run(&cfg),
        Err(CliError::UnknownTemplate { .. })
    ));
    assert!(!output.exists());
}

#[test]
fn e2e_missing_input_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("absent.mmd");
    let output = temp_dir.path().join("out.html");
    let config = temp_dir.path().join("config.toml");
    fs::write(&config, "").expect("Failed to write config");

    assert!(matches!(
        tinct_cli::run(&args(Some(&input), &output, &config)),
        Err(CliError::Io(_))
    ));
}

#[test]
fn e2e_missing_config_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("d.mmd");
    let output = temp_dir.path().join("d.html");
    let config = temp_dir.path().join("absent.toml");
    fs::write(&input, "graph").expect("Failed to write input");

    assert!(matches!(
        tinct_cli::run(&args(Some(&input), &output, &config)),
        Err(CliError::MissingConfig(_))
    ));
}
