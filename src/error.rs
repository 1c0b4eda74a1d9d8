//! Typed error types for golden-fonts.
//!
//! Every failure propagates to the caller of the loader entry point. A
//! partially available font set is a misconfigured test environment, so
//! nothing here is recovered from or skipped locally.

use std::fmt;
use std::path::PathBuf;

use golden_fonts_config::ConfigError;
use golden_fonts_registry::RegistryError;
use thiserror::Error;

/// Top-level error type for font discovery and loading.
#[derive(Debug, Error)]
pub enum FontError {
    // -----------------------------------------------------------------------
    // Discovery
    // -----------------------------------------------------------------------
    /// The fonts directory does not exist or cannot be listed.
    #[error("Fonts directory '{}' is missing or unreadable: {source}", .path.display())]
    MissingDirectory {
        /// Directory that was expected to hold font files.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The environment variable naming the platform root is unset or empty.
    #[error("Environment variable '{0}' is not set")]
    MissingEnvironmentVariable(String),

    /// A font file (icon font or manifest asset) is absent or unreadable.
    #[error("Font asset '{}' is missing or unreadable: {source}", .path.display())]
    MissingAsset {
        /// Path of the asset that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The font manifest does not have the expected shape.
    #[error("Malformed font manifest: {0}")]
    MalformedManifest(String),

    /// A package scope was constructed with both or neither of its fields.
    #[error("Invalid package scope: {0}")]
    InvalidPackageScope(String),

    /// Loader configuration could not be loaded or is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    // -----------------------------------------------------------------------
    // Loading
    // -----------------------------------------------------------------------
    /// The font registry refused a family (bad font data or registry policy).
    #[error("Registry rejected family '{family}': {reason}")]
    RegistryRejected {
        /// Family the registration was made under.
        family: String,
        /// Human-readable reason.
        reason: String,
    },

    /// A family load task panicked before reporting a result.
    #[error("Load task for family '{family}' failed: {reason}")]
    TaskFailed {
        /// Family whose task failed.
        family: String,
        /// Join error description.
        reason: String,
    },

    /// One or more families of a batch failed to load.
    #[error("{0}")]
    BatchFailed(FailureSet),
}

impl From<serde_json::Error> for FontError {
    fn from(e: serde_json::Error) -> Self {
        FontError::MalformedManifest(e.to_string())
    }
}

impl From<RegistryError> for FontError {
    fn from(e: RegistryError) -> Self {
        match e {
            RegistryError::Rejected { family, reason } => {
                FontError::RegistryRejected { family, reason }
            }
        }
    }
}

/// A single family that failed during a batch load.
#[derive(Debug)]
pub struct FamilyFailure {
    /// Family that failed.
    pub family: String,
    /// Why it failed.
    pub error: FontError,
}

/// Every family that failed during one batch load.
///
/// Siblings of a failing family are still awaited, so this lists all
/// failures of the batch, not only the first.
#[derive(Debug, Default)]
pub struct FailureSet {
    failures: Vec<FamilyFailure>,
}

impl FailureSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, family: impl Into<String>, error: FontError) {
        self.failures.push(FamilyFailure {
            family: family.into(),
            error,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn len(&self) -> usize {
        self.failures.len()
    }

    /// Names of the failed families, sorted.
    pub fn families(&self) -> Vec<&str> {
        let mut families: Vec<&str> = self.failures.iter().map(|f| f.family.as_str()).collect();
        families.sort_unstable();
        families
    }

    pub fn iter(&self) -> impl Iterator<Item = &FamilyFailure> {
        self.failures.iter()
    }

    /// Sort failures by family so reports are stable across runs.
    pub(crate) fn sort(&mut self) {
        self.failures.sort_by(|a, b| a.family.cmp(&b.family));
    }
}

impl fmt::Display for FailureSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} font family load(s) failed", self.failures.len())?;
        for failure in &self.failures {
            write!(f, "\n  {}: {}", failure.family, failure.error)?;
        }
        Ok(())
    }
}

impl IntoIterator for FailureSet {
    type Item = FamilyFailure;
    type IntoIter = std::vec::IntoIter<FamilyFailure>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.into_iter()
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FontError>;
