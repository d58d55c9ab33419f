//! CLI logic for the Inkview preview tool.
//!
//! This module contains the core CLI logic: it reads the input, decides how
//! to interpret it, and writes the rendered Markdown document.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, TypeArg};

use std::{
    fs,
    io::{self, Read, Write},
};

use log::{debug, info, warn};

use inkview::{InkviewError, Previewer, session::PreviewState};

/// Run the Inkview CLI application
///
/// This function reads the input, renders it through the preview pipeline
/// and writes the resulting document to the output file or standard output.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `InkviewError` for:
/// - File I/O errors
/// - Configuration loading errors
pub fn run(args: &Args) -> Result<(), InkviewError> {
    info!(
        input_path = args.input.as_deref().unwrap_or("-"),
        output_path = args.output.as_deref().unwrap_or("-");
        "Processing input"
    );

    let app_config = config::load_config(args.config.as_ref())?;
    let previewer = Previewer::new(app_config)?;

    let source = read_input(args.input.as_deref())?;
    let state = prepare_state(source, args.content_type);

    if let Some(mismatch) = state.mismatch() {
        warn!(
            declared:% = mismatch.declared(),
            detected:% = mismatch.detected();
            "{mismatch}"
        );
    }

    let Some(document) = previewer.preview(&state) else {
        warn!(
            content_type:% = state.declared();
            "Nothing to preview, the input is blank. {} input looks like:\n{}",
            state.declared(),
            state.placeholder()
        );
        return Ok(());
    };

    write_output(args.output.as_deref(), &document)?;

    info!(output_len = document.len(); "Preview rendered successfully");

    Ok(())
}

/// Builds the editor state for `source`.
///
/// With [`TypeArg::Auto`] the input is treated like pasted text and adopts
/// its detected type; otherwise the requested type is kept as declared.
fn prepare_state(source: String, content_type: TypeArg) -> PreviewState {
    match content_type.declared() {
        Some(declared) => PreviewState::new(source, declared),
        None => {
            let mut state = PreviewState::default();
            if let Some(detected) = state.paste(&source) {
                info!(content_type:% = detected; "Detected as {detected}");
            }
            state
        }
    }
}

fn read_input(path: Option<&str>) -> Result<String, InkviewError> {
    match path {
        Some(path) if path != "-" => Ok(fs::read_to_string(path)?),
        _ => {
            debug!("Reading input from standard input");
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

fn write_output(path: Option<&str>, document: &str) -> Result<(), InkviewError> {
    match path {
        Some(path) if path != "-" => {
            write_document(&mut fs::File::create(path)?, document)?;
            info!(output_file = path; "Preview written");
        }
        _ => write_document(&mut io::stdout().lock(), document)?,
    }
    Ok(())
}

/// Writes `document` verbatim, whatever the destination.
fn write_document(writer: &mut impl Write, document: &str) -> io::Result<()> {
    writer.write_all(document.as_bytes())?;
    writer.flush()
}
