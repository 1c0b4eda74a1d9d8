//! Font loading for golden (screenshot) tests.
//!
//! Rendered text only matches a reference image when the engine draws it
//! with the app's own fonts, registered under the exact family names the app
//! requests. This crate provides:
//! - Family name derivation for manifest entries and font file names,
//!   including `packages/<pkg>/` namespacing and the system-font override list
//! - Discovery of font files in fonts directories and of fonts declared in
//!   `FontManifest.json`
//! - Concurrent loading of the resulting batch into a [`FontRegistry`]
//!
//! # Architecture
//!
//! Locator or manifest reader -> deriver (per entry) -> [`FamilyBatch`]
//! -> [`BatchLoader`] -> registry. [`FontBootstrap`] wires these together
//! from a [`LoaderConfig`].

pub mod batch;
pub mod batch_loader;
pub mod bootstrap;
pub mod deriver;
pub mod error;
pub mod loader;
pub mod locator;
pub mod manifest;
pub mod package;
pub mod source;

// Re-export main types for convenience
pub use batch::FamilyBatch;
pub use batch_loader::{BatchLoader, EnvLookup, LoadSummary, ProcessEnv};
pub use bootstrap::FontBootstrap;
pub use deriver::{
    AssetRef, DEFAULT_OVERRIDABLE_FAMILIES, FontDescriptor, derive_family, family_from_file_name,
};
pub use error::{FailureSet, FamilyFailure, FontError, Result};
pub use loader::FontLoader;
pub use locator::AssetLocator;
pub use manifest::{AssetBundle, DirectoryBundle, FontManifest, MANIFEST_KEY};
pub use package::PackageScope;
pub use source::FontSource;

pub use golden_fonts_config::{IconFontConfig, LoaderConfig};
pub use golden_fonts_registry::{FontDbRegistry, FontRegistry, RegistryError};
