//! Concurrent loading of a family batch into a font registry.
//!
//! Every family is loaded by its own task and the loader waits for all of
//! them, so one failing family never hides which other families made it into
//! the registry. The icon font is appended to every batch.

use std::collections::HashMap;
use std::ffi::OsString;
use std::path::PathBuf;
use std::sync::Arc;

use golden_fonts_config::{IconFontConfig, LoaderConfig};
use golden_fonts_registry::FontRegistry;
use tokio::task::JoinHandle;

use crate::batch::FamilyBatch;
use crate::error::{FailureSet, FontError, Result};
use crate::loader::FontLoader;
use crate::source::FontSource;

/// Read access to environment variables.
pub trait EnvLookup: Send + Sync {
    fn var(&self, name: &str) -> Option<OsString>;
}

/// The process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvLookup for ProcessEnv {
    fn var(&self, name: &str) -> Option<OsString> {
        std::env::var_os(name)
    }
}

impl EnvLookup for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<OsString> {
        self.get(name).map(OsString::from)
    }
}

/// Outcome of a fully successful batch load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Families registered, sorted (includes the icon font family)
    pub families: Vec<String>,
    /// Faces registered across all families
    pub faces: usize,
}

/// Loads family batches into a registry.
pub struct BatchLoader {
    registry: Arc<dyn FontRegistry>,
    icon_font: IconFontConfig,
    env: Arc<dyn EnvLookup>,
}

impl BatchLoader {
    pub fn new(registry: Arc<dyn FontRegistry>, icon_font: IconFontConfig) -> Self {
        Self {
            registry,
            icon_font,
            env: Arc::new(ProcessEnv),
        }
    }

    pub fn from_config(registry: Arc<dyn FontRegistry>, config: &LoaderConfig) -> Self {
        Self::new(registry, config.icon_font.clone())
    }

    /// Resolve environment variables through `env` instead of the process environment.
    pub fn with_env(mut self, env: impl EnvLookup + 'static) -> Self {
        self.env = Arc::new(env);
        self
    }

    /// Location of the icon font: `$<root_env_var>/<relative_path>`.
    pub fn icon_font_path(&self) -> Result<PathBuf> {
        let var_name = &self.icon_font.root_env_var;
        let root = self
            .env
            .var(var_name)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| FontError::MissingEnvironmentVariable(var_name.clone()))?;

        Ok(self
            .icon_font
            .relative_path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .fold(PathBuf::from(root), |path, segment| path.join(segment)))
    }

    /// Read the icon font synchronously.
    fn read_icon_font(&self) -> Result<FontSource> {
        let path = self.icon_font_path()?;
        let bytes = std::fs::read(&path).map_err(|source| FontError::MissingAsset {
            path: path.clone(),
            source,
        })?;
        log::debug!(
            "Read icon font '{}' from {} ({} bytes)",
            self.icon_font.family,
            path.display(),
            bytes.len()
        );
        Ok(FontSource::bytes(bytes))
    }

    /// Load every family of `batch`, plus the icon font, into the registry.
    ///
    /// The icon font is resolved first; a missing environment variable or
    /// icon font file fails the call before any family is loaded. After that
    /// all families load concurrently and the call returns only once each of
    /// them has finished. If any failed, the error lists every failure.
    ///
    /// `batch` is only borrowed, so loading the same batch again gives the
    /// same outcome for the same registry state.
    pub async fn load(&self, batch: &FamilyBatch) -> Result<LoadSummary> {
        let icon_source = self.read_icon_font()?;

        let mut tasks: Vec<(String, JoinHandle<Result<usize>>)> =
            Vec::with_capacity(batch.len() + 1);
        for (family, sources) in batch.iter() {
            let loader = FontLoader::with_sources(family, sources.to_vec());
            tasks.push((family.to_string(), self.spawn(loader)));
        }
        let icon_loader = FontLoader::with_sources(self.icon_font.family.clone(), vec![icon_source]);
        tasks.push((self.icon_font.family.clone(), self.spawn(icon_loader)));

        log::info!(
            "Loading {} font family(ies) ({} source(s)) plus icon font '{}'",
            batch.len(),
            batch.source_count(),
            self.icon_font.family
        );

        // Fan in: await every task, never stop at the first failure.
        let mut summary = LoadSummary::default();
        let mut failures = FailureSet::new();
        for (family, handle) in tasks {
            match handle.await {
                Ok(Ok(faces)) => {
                    summary.faces += faces;
                    summary.families.push(family);
                }
                Ok(Err(error)) => {
                    log::error!("Failed to load font family '{}': {}", family, error);
                    failures.push(family, error);
                }
                Err(join_error) => {
                    log::error!("Load task for font family '{}' failed: {}", family, join_error);
                    failures.push(
                        family.clone(),
                        FontError::TaskFailed {
                            family,
                            reason: join_error.to_string(),
                        },
                    );
                }
            }
        }

        if !failures.is_empty() {
            failures.sort();
            return Err(FontError::BatchFailed(failures));
        }

        summary.families.sort();
        summary.families.dedup();
        log::info!(
            "Loaded {} font family(ies), {} face(s)",
            summary.families.len(),
            summary.faces
        );
        Ok(summary)
    }

    fn spawn(&self, loader: FontLoader) -> JoinHandle<Result<usize>> {
        tokio::spawn(loader.load(Arc::clone(&self.registry)))
    }
}
