//! Font registration under explicit family names.
//!
//! A rendering engine resolves text styles by family name, so a golden test
//! only matches its reference image when every face is registered under the
//! family the app requests. This module provides:
//! - The [`FontRegistry`] trait, implemented by any engine-side registry
//! - [`FontDbRegistry`], a `fontdb`-backed registry with a family alias table

mod types;

use std::collections::HashMap;

use fontdb::{Database, ID, Source};
use parking_lot::Mutex;

use crate::error::RegistryError;

pub use types::FontData;

/// Destination for loaded fonts.
///
/// Implementations must be `Send + Sync`: family loads run as concurrent
/// tasks that share one registry.
pub trait FontRegistry: Send + Sync {
    /// Register every face in the raw font files `fonts` under `family`.
    ///
    /// Either all faces are registered or none are. Registering the same
    /// family again adds the new faces to it. Data the registry cannot use
    /// is reported as [`RegistryError::Rejected`].
    ///
    /// # Returns
    /// Number of faces registered by this call.
    fn register_family(&self, family: &str, fonts: Vec<Vec<u8>>) -> Result<usize, RegistryError>;

    /// Whether at least one face is registered under `family`.
    fn contains_family(&self, family: &str) -> bool;

    /// Registered family names, sorted.
    fn families(&self) -> Vec<String>;
}

/// Registry state guarded by a single lock so the database and the alias
/// table can never disagree.
struct RegistryState {
    /// Font database holding every registered face
    font_db: Database,

    /// Registered family name -> faces registered under it
    aliases: HashMap<String, Vec<ID>>,
}

impl Default for RegistryState {
    fn default() -> Self {
        Self {
            font_db: Database::new(),
            aliases: HashMap::new(),
        }
    }
}

impl RegistryState {
    /// Load validated fonts with `load` and record their faces under `family`.
    ///
    /// If any font yields no faces, the faces loaded earlier in this call
    /// are removed again and nothing is recorded.
    fn add_family<F>(
        &mut self,
        family: &str,
        fonts: Vec<FontData>,
        mut load: F,
    ) -> Result<usize, RegistryError>
    where
        F: FnMut(&mut Database, &FontData) -> Vec<ID>,
    {
        let mut loaded: Vec<ID> = Vec::new();
        for (index, font) in fonts.iter().enumerate() {
            let ids = load(&mut self.font_db, font);
            if ids.is_empty() {
                self.remove_faces(&loaded);
                log::warn!(
                    "Font database could not parse font #{} of family '{}' ({} bytes)",
                    index,
                    family,
                    font.len()
                );
                return Err(RegistryError::rejected(
                    family,
                    format!("font #{index} contains no loadable faces"),
                ));
            }
            loaded.extend(ids);
        }

        let count = loaded.len();
        self.aliases
            .entry(family.to_string())
            .or_default()
            .extend(loaded);
        log::debug!("Registered {} face(s) under family '{}'", count, family);
        Ok(count)
    }

    fn remove_faces(&mut self, ids: &[ID]) {
        for id in ids {
            self.font_db.remove_face(*id);
        }
    }
}

fn load_into_database(font_db: &mut Database, font: &FontData) -> Vec<ID> {
    font_db
        .load_font_source(Source::Binary(font.data.clone()))
        .iter()
        .copied()
        .collect()
}

/// Registry backed by a `fontdb::Database`.
///
/// `fontdb` indexes faces by the family names in their own `name` table,
/// while a golden test addresses them by the family they were registered
/// under (e.g. `packages/theme/Lato`). The alias table maps the latter to
/// face IDs.
#[derive(Default)]
pub struct FontDbRegistry {
    state: Mutex<RegistryState>,
}

impl FontDbRegistry {
    /// Create an empty registry (no system fonts are loaded).
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of faces in the underlying database.
    pub fn face_count(&self) -> usize {
        self.state.lock().font_db.len()
    }

    /// Face IDs registered under `family`, in registration order.
    pub fn face_ids(&self, family: &str) -> Vec<ID> {
        self.state
            .lock()
            .aliases
            .get(family)
            .cloned()
            .unwrap_or_default()
    }

    /// Family names the faces of `family` declare in their own name tables.
    ///
    /// Useful for spotting a font registered under the wrong family.
    pub fn internal_family_names(&self, family: &str) -> Vec<String> {
        let state = self.state.lock();
        let Some(ids) = state.aliases.get(family) else {
            return Vec::new();
        };
        let mut names: Vec<String> = ids
            .iter()
            .filter_map(|id| state.font_db.face(*id))
            .filter_map(|face| face.families.first().map(|(name, _)| name.clone()))
            .collect();
        names.dedup();
        names
    }
}

impl FontRegistry for FontDbRegistry {
    fn register_family(&self, family: &str, fonts: Vec<Vec<u8>>) -> Result<usize, RegistryError> {
        if family.is_empty() {
            return Err(RegistryError::rejected(family, "family name is empty"));
        }
        if fonts.is_empty() {
            return Err(RegistryError::rejected(family, "no font data supplied"));
        }

        // Validate everything before touching the database.
        let mut validated = Vec::with_capacity(fonts.len());
        for (index, bytes) in fonts.into_iter().enumerate() {
            let len = bytes.len();
            let Some(font) = FontData::new(bytes) else {
                log::warn!(
                    "Font #{} of family '{}' is not valid font data ({} bytes)",
                    index,
                    family,
                    len
                );
                return Err(RegistryError::rejected(
                    family,
                    format!("font #{index} is not a TrueType/OpenType font"),
                ));
            };
            validated.push(font);
        }

        self.state
            .lock()
            .add_family(family, validated, load_into_database)
    }

    fn contains_family(&self, family: &str) -> bool {
        self.state
            .lock()
            .aliases
            .get(family)
            .is_some_and(|ids| !ids.is_empty())
    }

    fn families(&self) -> Vec<String> {
        let mut families: Vec<String> = self.state.lock().aliases.keys().cloned().collect();
        families.sort();
        families
    }
}
