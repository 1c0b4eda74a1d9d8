//! Configuration for the golden-fonts loader.
//!
//! This crate provides configuration loading and default values for the
//! font loader used by golden (screenshot) tests. It includes:
//!
//! - Directory layout settings (script directory, fonts directory name, asset bundle root)
//! - The override list of system font families exempt from package namespacing
//! - Icon font settings (environment variable, relative path, reserved family)
//! - YAML persistence via `serde_yaml_ng`

pub mod config;
pub mod defaults;
pub mod error;

// Re-export main types for convenience
pub use config::{CONFIG_PATH_ENV, IconFontConfig, LoaderConfig};
pub use error::ConfigError;
