//! Typed error variants for the golden-fonts-config crate.
//!
//! Provides structured error types for config I/O and validation so callers
//! can match on specific failure modes.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading or validating configuration.
///
/// # Example
///
/// ```rust,no_run
/// use golden_fonts_config::{ConfigError, LoaderConfig};
///
/// match LoaderConfig::load() {
///     Ok(config) => println!("fonts dir: {}", config.fonts_dir_name),
///     Err(ConfigError::Io { path, source }) => eprintln!("I/O error on {path:?}: {source}"),
///     Err(ConfigError::Parse(p)) => eprintln!("YAML parse error: {p}"),
///     Err(ConfigError::Validation(msg)) => eprintln!("Validation: {msg}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("I/O error reading config '{}': {source}", .path.display())]
    Io {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The config file contained invalid YAML that could not be parsed.
    #[error("YAML parse error in config: {0}")]
    Parse(#[from] serde_yaml_ng::Error),

    /// A field value failed semantic validation.
    ///
    /// The inner string describes which field is invalid and why.
    #[error("Config validation error: {0}")]
    Validation(String),
}
