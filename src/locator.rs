//! Font discovery from a fonts directory on disk.

use std::fs;
use std::path::{Path, PathBuf};

use golden_fonts_config::LoaderConfig;

use crate::batch::FamilyBatch;
use crate::deriver::family_from_file_name;
use crate::error::{FontError, Result};
use crate::package::PackageScope;
use crate::source::FontSource;

/// Finds font files in a fonts directory and groups them by family.
///
/// Layout:
/// - no scope: `<script_dir>/fonts`
/// - `PackageScope::Relative(p)`: `<script_dir>/<p>/fonts`
/// - `PackageScope::Named(n)`: `<script_dir>/fonts`, families prefixed with `packages/<n>/`
#[derive(Debug, Clone)]
pub struct AssetLocator {
    script_dir: PathBuf,
    fonts_dir_name: String,
}

impl AssetLocator {
    pub fn new(script_dir: impl Into<PathBuf>, fonts_dir_name: impl Into<String>) -> Self {
        Self {
            script_dir: script_dir.into(),
            fonts_dir_name: fonts_dir_name.into(),
        }
    }

    pub fn from_config(config: &LoaderConfig) -> Self {
        Self::new(config.resolve_script_dir(), config.fonts_dir_name.clone())
    }

    /// Fonts directory searched for `scope`.
    pub fn fonts_dir(&self, scope: Option<&PackageScope>) -> PathBuf {
        let base = match scope.and_then(PackageScope::relative_path) {
            Some(relative) => self.script_dir.join(relative),
            None => self.script_dir.clone(),
        };
        base.join(&self.fonts_dir_name)
    }

    /// Group the font files of `scope`'s fonts directory by derived family.
    ///
    /// Only regular files directly inside the directory are considered.
    /// A missing directory is an error; callers with optional font
    /// directories must check for them first.
    pub fn locate(&self, scope: Option<&PackageScope>) -> Result<FamilyBatch> {
        let fonts_dir = self.fonts_dir(scope);
        let prefix = scope
            .and_then(PackageScope::family_prefix)
            .unwrap_or_default();

        let files = list_font_files(&fonts_dir)?;
        log::info!(
            "Found {} font file(s) in {}",
            files.len(),
            fonts_dir.display()
        );

        let mut batch = FamilyBatch::new();
        for path in files {
            let Some(family) = family_from_file_name(&path) else {
                log::warn!(
                    "Skipping font file with no family in its name: {}",
                    path.display()
                );
                continue;
            };
            let family = format!("{prefix}{family}");
            log::debug!("{} -> family '{}'", path.display(), family);
            batch.add(family, FontSource::File(path));
        }
        Ok(batch)
    }

    /// Locate several scopes and merge them into one batch.
    ///
    /// Fails on the first missing directory without returning a partial batch.
    pub fn locate_all(&self, scopes: &[Option<PackageScope>]) -> Result<FamilyBatch> {
        let mut batch = FamilyBatch::new();
        for scope in scopes {
            batch.merge(self.locate(scope.as_ref())?);
        }
        Ok(batch)
    }
}

/// Regular files directly inside `dir`, sorted by path.
fn list_font_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let missing = |source: std::io::Error| FontError::MissingDirectory {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(missing)? {
        let entry = entry.map_err(missing)?;
        let path = entry.path();
        // Follows symlinks, so a link to a font file counts as a file.
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
