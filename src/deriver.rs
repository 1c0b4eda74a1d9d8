//! Family name derivation.
//!
//! Works out the family a font must be registered under, from either a
//! manifest descriptor or a font file name. Package-contributed fonts are
//! namespaced as `packages/<pkg>/<family>` so same-named fonts from
//! different packages do not collide, except for the override list of
//! system families which always keep their canonical name.

use std::path::Path;

use serde::Deserialize;

use crate::package::PACKAGES_SEGMENT;

pub use golden_fonts_config::defaults::OVERRIDABLE_FAMILIES as DEFAULT_OVERRIDABLE_FAMILIES;

/// One asset entry of a font descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AssetRef {
    /// Bundle key of the font file, e.g. `packages/theme/fonts/Lato-Bold.ttf`
    pub asset: String,
}

impl AssetRef {
    pub fn new(asset: impl Into<String>) -> Self {
        Self {
            asset: asset.into(),
        }
    }
}

/// A font family as declared in a font manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FontDescriptor {
    /// Declared family; entries without one are skipped
    #[serde(default)]
    pub family: Option<String>,
    /// Asset files of the family, in declaration order
    pub fonts: Vec<AssetRef>,
}

impl FontDescriptor {
    pub fn new<I, S>(family: impl Into<String>, assets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            family: Some(family.into()),
            fonts: assets.into_iter().map(AssetRef::new).collect(),
        }
    }
}

fn is_overridable<S: AsRef<str>>(family: &str, overridable_families: &[S]) -> bool {
    overridable_families.iter().any(|f| f.as_ref() == family)
}

/// Derive the family name a descriptor's fonts must be registered under.
///
/// Rules, first match wins:
/// 1. No declared family: `""` (the caller skips the entry)
/// 2. Declared family in `overridable_families`: returned unchanged
/// 3. Declared `packages/<pkg>/.../<name>`: `<name>` if it is overridable,
///    otherwise the declared family unchanged
/// 4. The first asset under `packages/<pkg>/` namespaces the family as
///    `packages/<pkg>/<family>`; with no such asset the family is unchanged
pub fn derive_family<S: AsRef<str>>(
    descriptor: &FontDescriptor,
    overridable_families: &[S],
) -> String {
    let Some(family) = descriptor.family.as_deref() else {
        return String::new();
    };

    if is_overridable(family, overridable_families) {
        return family.to_string();
    }

    if family.starts_with("packages/") {
        let bare_name = family.rsplit('/').next().unwrap_or(family);
        if is_overridable(bare_name, overridable_families) {
            return bare_name.to_string();
        }
        return family.to_string();
    }

    for font in &descriptor.fonts {
        if let Some(package) = asset_package(&font.asset) {
            return format!("{PACKAGES_SEGMENT}/{package}/{family}");
        }
    }

    family.to_string()
}

/// Package name of an asset key under `packages/<pkg>/...`.
fn asset_package(asset: &str) -> Option<&str> {
    if !asset.starts_with(PACKAGES_SEGMENT) {
        return None;
    }
    asset.split('/').nth(1).filter(|segment| !segment.is_empty())
}

/// Derive a family from a font file name.
///
/// The extension is dropped and the stem is cut at its first hyphen, so
/// `Roboto-Bold.ttf` and `Roboto-Italic.ttf` both give `Roboto`.
///
/// # Returns
/// `None` when nothing is left of the name (e.g. `-Bold.ttf`).
pub fn family_from_file_name(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_str()?;
    let family = stem.split('-').next().unwrap_or(stem);
    if family.is_empty() {
        None
    } else {
        Some(family.to_string())
    }
}
