//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files
//! from various locations (explicit path, local directory, system directory).

use std::{fs, path::Path};

use directories::ProjectDirs;
use log::{debug, info};

use inkview::{
    InkviewError,
    config::{AppConfig, ConfigError},
};
use inkview_parser::Span;

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (inkview/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be read or parsed
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, InkviewError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new("inkview/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    if let Some(proj_dirs) = ProjectDirs::from("com", "inkview", "inkview") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Load configuration from a TOML file
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, InkviewError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;

    Ok(parse_config(&content)?)
}

/// Parse TOML configuration text, keeping the source for error reports
fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    toml::from_str(content).map_err(|err| {
        ConfigError::new_parse_error(err.message(), err.span().map(Span::new), content)
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = parse_config(
            r##"
            [service]
            base_url = "http://localhost:3000"

            [style]
            background_color = "#ffffff"
            theme_directive = "%%{init: {'theme': 'default'}}%%"
            "##,
        )
        .unwrap();

        assert_eq!(config.service().base_url().unwrap(), "http://localhost:3000");
        assert_eq!(config.style().background_color().unwrap().to_hex(), "ffffff");
    }

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.service().base_url().unwrap(), "https://mermaid.ink");
    }

    #[test]
    fn test_parse_error_keeps_span_and_source() {
        let src = "[style\nbackground_color = 42\n";
        let err = parse_config(src).unwrap_err();

        match err {
            ConfigError::Parse { span, src: kept, .. } => {
                assert_eq!(kept, src);
                let span = span.expect("TOML errors carry a span");
                assert!(span.end() <= src.len());
            }
            other => panic!("Expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_explicit_missing_file() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("absent.toml");

        let err = load_config(Some(&missing)).unwrap_err();
        assert!(matches!(
            err,
            InkviewError::Config(ConfigError::MissingFile(path)) if path == missing
        ));
    }

    #[test]
    fn test_explicit_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[service]\nbase_url = \"https://ink.example.com\"\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.service().base_url().unwrap(), "https://ink.example.com");
    }
}
