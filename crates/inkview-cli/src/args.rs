//! Command-line argument definitions for the Inkview CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, the declared
//! content type, configuration file selection, and logging verbosity.

use clap::{Parser, ValueEnum};

use inkview::content::ContentType;

/// How the input should be interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TypeArg {
    /// Use the detected content type
    #[default]
    Auto,
    /// Markdown, with fenced mermaid blocks rendered as images
    Markdown,
    /// A single Mermaid diagram
    Mermaid,
}

impl TypeArg {
    /// Returns the explicitly requested type, or `None` for [`TypeArg::Auto`].
    pub fn declared(self) -> Option<ContentType> {
        match self {
            Self::Auto => None,
            Self::Markdown => Some(ContentType::Markdown),
            Self::Mermaid => Some(ContentType::Mermaid),
        }
    }
}

/// Command-line arguments for the Inkview preview tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input file; reads standard input when omitted or `-`
    #[arg(help = "Path to the input file, or - for standard input")]
    pub input: Option<String>,

    /// Path to the output Markdown file; writes standard output when omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// Content type to render the input as
    #[arg(short = 't', long = "type", value_enum, default_value_t = TypeArg::Auto)]
    pub content_type: TypeArg,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
