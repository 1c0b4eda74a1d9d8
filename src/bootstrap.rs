//! Entry points for test bootstrap hooks.
//!
//! A golden test suite calls one of these once before rendering so text is
//! drawn with the app's real fonts instead of the engine's fallback font.

use std::path::PathBuf;
use std::sync::Arc;

use golden_fonts_config::LoaderConfig;
use golden_fonts_registry::FontRegistry;

use crate::batch::FamilyBatch;
use crate::batch_loader::{BatchLoader, EnvLookup, LoadSummary};
use crate::error::Result;
use crate::locator::AssetLocator;
use crate::manifest::{DirectoryBundle, FontManifest};
use crate::package::PackageScope;

/// Ties configuration, discovery and loading together.
pub struct FontBootstrap {
    config: LoaderConfig,
    loader: BatchLoader,
}

impl FontBootstrap {
    pub fn new(config: LoaderConfig, registry: Arc<dyn FontRegistry>) -> Self {
        let loader = BatchLoader::from_config(registry, &config);
        Self { config, loader }
    }

    /// Load configuration with [`LoaderConfig::load`] and build a bootstrap from it.
    pub fn from_default_config(registry: Arc<dyn FontRegistry>) -> Result<Self> {
        Ok(Self::new(LoaderConfig::load()?, registry))
    }

    /// Build a bootstrap from the config file at `path`, or the default
    /// config path when `None`. A missing file gives the default config.
    pub fn from_config_file(
        path: Option<PathBuf>,
        registry: Arc<dyn FontRegistry>,
    ) -> Result<Self> {
        Ok(Self::new(LoaderConfig::load_or_default(path)?, registry))
    }

    /// Resolve environment variables through `env` instead of the process environment.
    pub fn with_env(mut self, env: impl EnvLookup + 'static) -> Self {
        self.loader = self.loader.with_env(env);
        self
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Batch described by the font manifest in the configured asset bundle.
    pub fn manifest_batch(&self) -> Result<FamilyBatch> {
        let bundle = DirectoryBundle::new(self.config.bundle_dir());
        let manifest = FontManifest::load(&bundle, &self.config.manifest_key)?;
        log::info!(
            "Read {} font manifest entries from {}",
            manifest.len(),
            bundle.root().display()
        );
        Ok(manifest.to_batch(&self.config.overridable_families, &bundle))
    }

    /// Batch of the font files found for `scopes` (`None` is the app itself).
    pub fn directory_batch(&self, scopes: &[Option<PackageScope>]) -> Result<FamilyBatch> {
        AssetLocator::from_config(&self.config).locate_all(scopes)
    }

    /// Load every font declared in the font manifest.
    pub async fn load_app_fonts(&self) -> Result<LoadSummary> {
        let batch = self.manifest_batch()?;
        self.loader.load(&batch).await
    }

    /// Load every font file found in the fonts directories of `scopes`.
    pub async fn load_directory_fonts(
        &self,
        scopes: &[Option<PackageScope>],
    ) -> Result<LoadSummary> {
        let batch = self.directory_batch(scopes)?;
        self.loader.load(&batch).await
    }
}
