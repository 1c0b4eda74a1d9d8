//! Typed error types for golden-fonts-registry.

use thiserror::Error;

/// Errors reported by a [`FontRegistry`](crate::FontRegistry).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The registry refused to register a family.
    #[error("Registry rejected family '{family}': {reason}")]
    Rejected {
        /// Family the registration was made under.
        family: String,
        /// Human-readable reason.
        reason: String,
    },
}

impl RegistryError {
    pub fn rejected(family: impl Into<String>, reason: impl Into<String>) -> Self {
        RegistryError::Rejected {
            family: family.into(),
            reason: reason.into(),
        }
    }
}
