//! `LoaderConfig` definition, YAML loading and path resolution.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Environment variable naming an alternate config file.
pub const CONFIG_PATH_ENV: &str = "GOLDEN_FONTS_CONFIG";

const CONFIG_DIR_NAME: &str = "golden-fonts";
const CONFIG_FILE_NAME: &str = "config.yaml";

/// Settings for the icon font that every batch load appends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconFontConfig {
    /// Environment variable naming the platform root directory
    #[serde(default = "crate::defaults::icon_font_root_env_var")]
    pub root_env_var: String,

    /// Path of the icon font file relative to the platform root
    #[serde(default = "crate::defaults::icon_font_relative_path")]
    pub relative_path: String,

    /// Reserved family name the icon font is registered under
    #[serde(default = "crate::defaults::icon_font_family")]
    pub family: String,
}

impl Default for IconFontConfig {
    fn default() -> Self {
        Self {
            root_env_var: crate::defaults::icon_font_root_env_var(),
            relative_path: crate::defaults::icon_font_relative_path(),
            family: crate::defaults::icon_font_family(),
        }
    }
}

/// Font loader configuration.
///
/// Every field has a serde default, so an empty YAML document (or no config
/// file at all) yields the same values as [`LoaderConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Directory the test script runs from (defaults to the current directory)
    #[serde(default)]
    pub script_dir: Option<PathBuf>,

    /// Root of the asset bundle holding the font manifest (defaults to `script_dir`)
    #[serde(default)]
    pub bundle_dir: Option<PathBuf>,

    /// Name of the fonts directory under the script (or package) directory
    #[serde(default = "crate::defaults::fonts_dir_name")]
    pub fonts_dir_name: String,

    /// Bundle key of the font manifest
    #[serde(default = "crate::defaults::manifest_key")]
    pub manifest_key: String,

    /// System families exempt from package namespacing
    #[serde(default = "crate::defaults::overridable_families")]
    pub overridable_families: Vec<String>,

    /// Icon font appended to every batch load
    #[serde(default)]
    pub icon_font: IconFontConfig,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            script_dir: None,
            bundle_dir: None,
            fonts_dir_name: crate::defaults::fonts_dir_name(),
            manifest_key: crate::defaults::manifest_key(),
            overridable_families: crate::defaults::overridable_families(),
            icon_font: IconFontConfig::default(),
        }
    }
}

impl LoaderConfig {
    /// Load configuration from `$GOLDEN_FONTS_CONFIG` or the default config path.
    ///
    /// A missing file is not an error: defaults are returned instead.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_or_default(std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from))
    }

    /// Load `path` (or [`LoaderConfig::config_path`] when `None`), falling
    /// back to defaults when the file does not exist.
    pub fn load_or_default(path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let config_path = path.unwrap_or_else(Self::config_path);
        log::info!("Config path: {:?}", config_path);

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            log::info!("No config file at {:?}, using defaults", config_path);
            Ok(Self::default())
        }
    }

    /// Load and validate configuration from a specific YAML file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        log::info!("Loading config from {:?}", path);
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&contents)
    }

    /// Parse and validate configuration from a YAML string.
    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes to unit, not a mapping.
        let config: Self = if contents.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml_ng::from_str(contents)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Check field values that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fonts_dir_name.is_empty() {
            return Err(ConfigError::Validation(
                "fonts_dir_name must not be empty".to_string(),
            ));
        }
        if self.fonts_dir_name.contains(['/', '\\']) {
            return Err(ConfigError::Validation(format!(
                "fonts_dir_name must be a single directory name, got '{}'",
                self.fonts_dir_name
            )));
        }
        if self.manifest_key.is_empty() {
            return Err(ConfigError::Validation(
                "manifest_key must not be empty".to_string(),
            ));
        }
        if self.icon_font.root_env_var.is_empty() {
            return Err(ConfigError::Validation(
                "icon_font.root_env_var must not be empty".to_string(),
            ));
        }
        if self.icon_font.relative_path.is_empty() {
            return Err(ConfigError::Validation(
                "icon_font.relative_path must not be empty".to_string(),
            ));
        }
        if self.icon_font.family.is_empty() {
            return Err(ConfigError::Validation(
                "icon_font.family must not be empty".to_string(),
            ));
        }
        if let Some(empty_at) = self.overridable_families.iter().position(String::is_empty) {
            return Err(ConfigError::Validation(format!(
                "overridable_families[{empty_at}] must not be empty"
            )));
        }
        Ok(())
    }

    /// Directory the fonts directory is resolved against.
    ///
    /// Falls back to the process working directory, then to `.`.
    pub fn resolve_script_dir(&self) -> PathBuf {
        self.script_dir.clone().unwrap_or_else(|| {
            std::env::current_dir().unwrap_or_else(|e| {
                log::warn!("Could not determine current directory ({e}), using '.'");
                PathBuf::from(".")
            })
        })
    }

    /// Root directory of the asset bundle that holds the font manifest.
    pub fn bundle_dir(&self) -> PathBuf {
        self.bundle_dir
            .clone()
            .unwrap_or_else(|| self.resolve_script_dir())
    }

    /// Per-user config file: `<config dir>/golden-fonts/config.yaml`.
    ///
    /// Windows uses the roaming app data directory. Unix platforms, macOS
    /// included, use `~/.config` so test machines share one layout. With no
    /// home directory the file is looked up in the working directory.
    pub fn config_path() -> PathBuf {
        #[cfg(target_os = "windows")]
        let base = dirs::config_dir();
        #[cfg(not(target_os = "windows"))]
        let base = dirs::home_dir().map(|home| home.join(".config"));

        match base {
            Some(dir) => dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME),
            None => PathBuf::from(CONFIG_FILE_NAME),
        }
    }
}
