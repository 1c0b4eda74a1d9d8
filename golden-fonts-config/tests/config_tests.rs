//! Integration tests for golden-fonts-config.

use golden_fonts_config::defaults::OVERRIDABLE_FAMILIES;
use golden_fonts_config::{ConfigError, IconFontConfig, LoaderConfig};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_default_values() {
    let config = LoaderConfig::default();
    assert_eq!(config.fonts_dir_name, "fonts");
    assert_eq!(config.manifest_key, "FontManifest.json");
    assert_eq!(config.overridable_families.len(), OVERRIDABLE_FAMILIES.len());
    assert!(config.overridable_families.iter().any(|f| f == "Roboto"));
    assert_eq!(config.icon_font.root_env_var, "FLUTTER_ROOT");
    assert_eq!(config.icon_font.family, "MaterialIcons");
    assert!(
        config
            .icon_font
            .relative_path
            .ends_with("MaterialIcons-Regular.otf")
    );
}

#[test]
fn test_empty_yaml_yields_defaults() {
    let config = LoaderConfig::from_yaml_str("").expect("empty yaml should parse");
    assert_eq!(config, LoaderConfig::default());
}

#[test]
fn test_partial_yaml_keeps_other_defaults() {
    let yaml = r#"
script_dir: /work/app/test
icon_font:
  root_env_var: PLATFORM_SDK_ROOT
"#;
    let config = LoaderConfig::from_yaml_str(yaml).expect("yaml should parse");
    assert_eq!(config.script_dir, Some(PathBuf::from("/work/app/test")));
    assert_eq!(config.icon_font.root_env_var, "PLATFORM_SDK_ROOT");
    assert_eq!(config.icon_font.family, IconFontConfig::default().family);
    assert_eq!(config.fonts_dir_name, "fonts");
}

#[test]
fn test_overridable_families_can_be_replaced() {
    let yaml = "overridable_families: [\"Inter\", \"Noto Sans\"]\n";
    let config = LoaderConfig::from_yaml_str(yaml).expect("yaml should parse");
    assert_eq!(config.overridable_families, vec!["Inter", "Noto Sans"]);
}

#[test]
fn test_invalid_yaml_is_parse_error() {
    let result = LoaderConfig::from_yaml_str("fonts_dir_name: [unterminated");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_fonts_dir_name_with_separator_is_rejected() {
    let result = LoaderConfig::from_yaml_str("fonts_dir_name: assets/fonts\n");
    assert!(matches!(result, Err(ConfigError::Validation(_))));
}

#[test]
fn test_empty_icon_family_is_rejected() {
    let yaml = "icon_font:\n  family: \"\"\n";
    let result = LoaderConfig::from_yaml_str(yaml);
    match result {
        Err(ConfigError::Validation(msg)) => assert!(msg.contains("icon_font.family")),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn test_load_from_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.yaml");
    fs::write(&config_path, "fonts_dir_name: typefaces\n").expect("Failed to write config");

    let config = LoaderConfig::load_from(&config_path).expect("config should load");
    assert_eq!(config.fonts_dir_name, "typefaces");
}

#[test]
fn test_load_from_missing_file_is_io_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("absent.yaml");

    match LoaderConfig::load_from(&config_path) {
        Err(ConfigError::Io { path, .. }) => assert_eq!(path, config_path),
        other => panic!("expected I/O error, got {other:?}"),
    }
}

#[test]
fn test_round_trip_through_yaml() {
    let config = LoaderConfig {
        script_dir: Some(PathBuf::from("/srv/tests")),
        ..LoaderConfig::default()
    };
    let yaml = serde_yaml_ng::to_string(&config).expect("config should serialize");
    let parsed = LoaderConfig::from_yaml_str(&yaml).expect("config should parse back");
    assert_eq!(parsed, config);
}

#[test]
fn test_load_or_default_without_file_yields_defaults() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("golden-fonts").join("config.yaml");

    let config = LoaderConfig::load_or_default(Some(config_path)).expect("defaults expected");
    assert_eq!(config, LoaderConfig::default());
}

#[test]
fn test_load_or_default_reads_existing_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.yaml");
    fs::write(
        &config_path,
        "manifest_key: assets/FontManifest.json\nicon_font:\n  family: Icons\n",
    )
    .expect("Failed to write config");

    let config = LoaderConfig::load_or_default(Some(config_path)).expect("config should load");
    assert_eq!(config.manifest_key, "assets/FontManifest.json");
    assert_eq!(config.icon_font.family, "Icons");
    assert_eq!(config.fonts_dir_name, "fonts");
}

#[test]
fn test_load_or_default_validates_existing_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.yaml");
    fs::write(&config_path, "manifest_key: \"\"\n").expect("Failed to write config");

    assert!(matches!(
        LoaderConfig::load_or_default(Some(config_path)),
        Err(ConfigError::Validation(_))
    ));
}

#[test]
fn test_config_path_layout() {
    let path = LoaderConfig::config_path();
    assert!(path.ends_with("golden-fonts/config.yaml") || path == PathBuf::from("config.yaml"));
}
