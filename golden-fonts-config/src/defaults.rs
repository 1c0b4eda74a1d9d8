//! Default value functions for configuration.
//!
//! Each function backs a `#[serde(default = "crate::defaults::...")]`
//! attribute on a `LoaderConfig` or `IconFontConfig` field.

/// System font families that are always registered under their canonical
/// name, never under a `packages/<name>/` namespace.
///
/// Matching is exact and case-sensitive.
pub const OVERRIDABLE_FAMILIES: &[&str] = &[
    // Default UI font
    "Roboto",
    // Apple system fonts
    ".SF UI Display",
    ".SF UI Text",
    ".SF Pro Text",
    ".SF Pro Display",
];

pub fn fonts_dir_name() -> String {
    "fonts".to_string()
}

pub fn manifest_key() -> String {
    "FontManifest.json".to_string()
}

pub fn overridable_families() -> Vec<String> {
    OVERRIDABLE_FAMILIES.iter().map(|s| s.to_string()).collect()
}

pub fn icon_font_root_env_var() -> String {
    "FLUTTER_ROOT".to_string()
}

pub fn icon_font_relative_path() -> String {
    "bin/cache/artifacts/material_fonts/MaterialIcons-Regular.otf".to_string()
}

pub fn icon_font_family() -> String {
    "MaterialIcons".to_string()
}
