use std::{fs, path::Path};

use tempfile::tempdir;

use inkview::{build_image_url, substitute_diagram_blocks};
use inkview_cli::{Args, TypeArg};

/// Builds CLI arguments for rendering `input` into `output`
fn args_for(input: &Path, output: &Path, content_type: TypeArg) -> Args {
    Args {
        input: Some(input.to_string_lossy().to_string()),
        output: Some(output.to_string_lossy().to_string()),
        content_type,
        config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_markdown_with_blocks() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("notes.md");
    let output = temp_dir.path().join("notes.out.md");

    let source = "# Architecture\n\n```mermaid\ngraph TD\nA-->B\n```\n\nSee above.\n";
    fs::write(&input, source).unwrap();

    inkview_cli::run(&args_for(&input, &output, TypeArg::Auto)).expect("run succeeds");

    let rendered = fs::read_to_string(&output).unwrap();
    assert_eq!(rendered, substitute_diagram_blocks(source));
    assert!(rendered.contains(&build_image_url("graph TD\nA-->B")));
}

#[test]
fn e2e_auto_detects_diagram() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("flow.mmd");
    let output = temp_dir.path().join("flow.md");

    let source = "flowchart LR\n  A --> B";
    fs::write(&input, source).unwrap();

    inkview_cli::run(&args_for(&input, &output, TypeArg::Auto)).expect("run succeeds");

    let rendered = fs::read_to_string(&output).unwrap();
    assert_eq!(rendered, format!("![Mermaid Diagram]({})", build_image_url(source)));
}

#[test]
fn e2e_explicit_type_overrides_detection() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("pie.txt");
    let output = temp_dir.path().join("pie.md");

    let source = "Pie charts are great";
    fs::write(&input, source).unwrap();

    inkview_cli::run(&args_for(&input, &output, TypeArg::Markdown)).expect("run succeeds");

    assert_eq!(fs::read_to_string(&output).unwrap(), source);
}

#[test]
fn e2e_blank_input_writes_nothing() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("blank.md");
    let output = temp_dir.path().join("blank.out.md");

    fs::write(&input, "  \n\t\n").unwrap();

    inkview_cli::run(&args_for(&input, &output, TypeArg::Auto)).expect("run succeeds");

    assert!(!output.exists(), "No output expected for blank input");
}

#[test]
fn e2e_config_file_is_applied() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("gantt.mmd");
    let output = temp_dir.path().join("gantt.md");
    let config = temp_dir.path().join("config.toml");

    fs::write(&input, "gantt\ntitle Plan").unwrap();
    fs::write(
        &config,
        "[service]\nbase_url = \"http://localhost:3000\"\n\n[style]\nbackground_color = \"white\"\n",
    )
    .unwrap();

    let mut args = args_for(&input, &output, TypeArg::Mermaid);
    args.config = Some(config.to_string_lossy().to_string());
    inkview_cli::run(&args).expect("run succeeds");

    let rendered = fs::read_to_string(&output).unwrap();
    assert!(rendered.starts_with("![Mermaid Diagram](http://localhost:3000/img/"));
    assert!(rendered.ends_with("?bgColor=!ffffff)"));
}

#[test]
fn e2e_error_cases() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("out.md");

    // Missing input file
    let missing = temp_dir.path().join("missing.md");
    let result = inkview_cli::run(&args_for(&missing, &output, TypeArg::Auto));
    assert!(result.is_err(), "Missing input should fail");

    // Malformed configuration
    let input = temp_dir.path().join("ok.md");
    let config = temp_dir.path().join("bad.toml");
    fs::write(&input, "# ok").unwrap();
    fs::write(&config, "[style\nbackground_color = ").unwrap();

    let mut args = args_for(&input, &output, TypeArg::Auto);
    args.config = Some(config.to_string_lossy().to_string());
    let err = inkview_cli::run(&args).expect_err("Malformed config should fail");
    assert!(err.to_string().starts_with("Failed to parse TOML configuration"));
    assert!(!output.exists());
}
