//! Error types for Inkview operations.
//!
//! This module provides the main error type [`InkviewError`]. Rendering a
//! preview never fails; errors only arise while reading input or setting up
//! a [`Previewer`](crate::Previewer) from configuration.

use std::io;

use thiserror::Error;

use crate::config::ConfigError;

/// The main error type for Inkview operations.
#[derive(Debug, Error)]
pub enum InkviewError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
