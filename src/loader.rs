//! Per-family font loading.

use std::sync::Arc;

use golden_fonts_registry::FontRegistry;

use crate::error::Result;
use crate::source::FontSource;

/// Collects the sources of one family and registers them in a single step.
///
/// Sources are read only when [`FontLoader::load`] runs. A family is
/// registered completely or not at all.
#[derive(Debug, Clone)]
pub struct FontLoader {
    family: String,
    sources: Vec<FontSource>,
}

impl FontLoader {
    pub fn new(family: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            sources: Vec::new(),
        }
    }

    pub fn with_sources(family: impl Into<String>, sources: Vec<FontSource>) -> Self {
        Self {
            family: family.into(),
            sources,
        }
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn add_font(&mut self, source: FontSource) -> &mut Self {
        self.sources.push(source);
        self
    }

    /// Read every source and register the family with `registry`.
    ///
    /// The first unreadable source fails the family before anything is
    /// registered.
    ///
    /// # Returns
    /// Number of faces the registry added for this family.
    pub async fn load(self, registry: Arc<dyn FontRegistry>) -> Result<usize> {
        let mut fonts = Vec::with_capacity(self.sources.len());
        for source in &self.sources {
            fonts.push(source.read().await?);
        }

        let faces = registry.register_family(&self.family, fonts)?;
        log::debug!(
            "Loaded family '{}': {} source(s), {} face(s)",
            self.family,
            self.sources.len(),
            faces
        );
        Ok(faces)
    }
}
