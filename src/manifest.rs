//! Font manifest reading.
//!
//! A build tool describes the app's fonts in `FontManifest.json`:
//!
//! ```json
//! [
//!   { "family": "Lato", "fonts": [{ "asset": "fonts/Lato-Regular.ttf" }] },
//!   { "family": "Icons", "fonts": [{ "asset": "packages/icons/fonts/Icons.ttf" }] }
//! ]
//! ```
//!
//! Asset keys are resolved through an [`AssetBundle`].

use std::fs;
use std::path::PathBuf;

use crate::batch::FamilyBatch;
use crate::deriver::{FontDescriptor, derive_family};
use crate::error::{FontError, Result};
use crate::source::FontSource;

/// Bundle key of the font manifest.
pub const MANIFEST_KEY: &str = "FontManifest.json";

/// Read-only store of packaged assets, addressed by key.
pub trait AssetBundle: Send + Sync {
    /// Read a text asset in full.
    fn load_string(&self, key: &str) -> Result<String>;

    /// Lazy byte source for a binary asset.
    fn source(&self, key: &str) -> FontSource;
}

/// Asset bundle laid out as plain files under a root directory.
#[derive(Debug, Clone)]
pub struct DirectoryBundle {
    root: PathBuf,
}

impl DirectoryBundle {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &std::path::Path {
        &self.root
    }

    fn resolve(&self, key: &str) -> PathBuf {
        // Keys always use '/' regardless of platform.
        key.split('/')
            .filter(|segment| !segment.is_empty())
            .fold(self.root.clone(), |path, segment| path.join(segment))
    }
}

impl AssetBundle for DirectoryBundle {
    fn load_string(&self, key: &str) -> Result<String> {
        let path = self.resolve(key);
        fs::read_to_string(&path).map_err(|source| FontError::MissingAsset { path, source })
    }

    fn source(&self, key: &str) -> FontSource {
        FontSource::File(self.resolve(key))
    }
}

/// Parsed font manifest: one descriptor per declared family.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontManifest {
    descriptors: Vec<FontDescriptor>,
}

impl FontManifest {
    /// Parse manifest JSON.
    ///
    /// Entries without a `family` are kept (and later skipped); a missing
    /// `fonts` array or `asset` string is a `MalformedManifest` error.
    pub fn parse(json: &str) -> Result<Self> {
        let descriptors: Vec<FontDescriptor> = serde_json::from_str(json)?;
        Ok(Self { descriptors })
    }

    /// Read and parse the manifest stored under `key` in `bundle`.
    pub fn load(bundle: &dyn AssetBundle, key: &str) -> Result<Self> {
        let json = bundle.load_string(key)?;
        Self::parse(&json)
    }

    pub fn descriptors(&self) -> &[FontDescriptor] {
        &self.descriptors
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Derive each descriptor's family and group its assets into a batch.
    ///
    /// Descriptors deriving the same family share one batch entry.
    pub fn to_batch<S: AsRef<str>>(
        &self,
        overridable_families: &[S],
        bundle: &dyn AssetBundle,
    ) -> FamilyBatch {
        let mut batch = FamilyBatch::new();
        for descriptor in &self.descriptors {
            let family = derive_family(descriptor, overridable_families);
            if family.is_empty() {
                if descriptor.family.is_some() {
                    log::warn!(
                        "Skipping manifest entry with an empty family name ({} asset(s))",
                        descriptor.fonts.len()
                    );
                } else {
                    log::debug!(
                        "Skipping manifest entry without a family ({} asset(s))",
                        descriptor.fonts.len()
                    );
                }
                continue;
            }
            log::debug!(
                "Manifest family '{}' -> '{}' ({} asset(s))",
                descriptor.family.as_deref().unwrap_or_default(),
                family,
                descriptor.fonts.len()
            );
            for font in &descriptor.fonts {
                batch.add(family.clone(), bundle.source(&font.asset));
            }
        }
        batch
    }
}
