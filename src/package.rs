//! Package scopes for font discovery.

use std::path::{Path, PathBuf};

use crate::error::{FontError, Result};

/// Prefix segment of package-namespaced family names and asset paths.
pub const PACKAGES_SEGMENT: &str = "packages";

/// Where a set of fonts comes from when it does not belong to the app itself.
///
/// Exactly one of a package name or a relative path identifies the scope:
/// - `Named` fonts live in the app's fonts directory but register under the
///   `packages/<name>/` namespace
/// - `Relative` fonts live under `<script_dir>/<path>/fonts` and register
///   under their bare names
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageScope {
    Named(String),
    Relative(PathBuf),
}

impl PackageScope {
    /// Build a scope from optional fields, enforcing that exactly one is set.
    pub fn new(name: Option<&str>, relative_path: Option<&Path>) -> Result<Self> {
        match (name, relative_path) {
            (Some(name), None) => Self::named(name),
            (None, Some(path)) => Self::relative(path),
            (Some(_), Some(_)) => Err(FontError::InvalidPackageScope(
                "both a package name and a relative path were given".to_string(),
            )),
            (None, None) => Err(FontError::InvalidPackageScope(
                "neither a package name nor a relative path was given".to_string(),
            )),
        }
    }

    /// Scope whose families are namespaced as `packages/<name>/`.
    pub fn named(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() || name.contains(['/', '\\']) {
            return Err(FontError::InvalidPackageScope(format!(
                "package name '{name}' must be a non-empty single path segment"
            )));
        }
        Ok(PackageScope::Named(name))
    }

    /// Scope whose fonts directory lives under `<script_dir>/<path>`.
    pub fn relative(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if path.as_os_str().is_empty() {
            return Err(FontError::InvalidPackageScope(
                "relative path must not be empty".to_string(),
            ));
        }
        if path.is_absolute() {
            return Err(FontError::InvalidPackageScope(format!(
                "relative path '{}' must not be absolute",
                path.display()
            )));
        }
        Ok(PackageScope::Relative(path))
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            PackageScope::Named(name) => Some(name),
            PackageScope::Relative(_) => None,
        }
    }

    pub fn relative_path(&self) -> Option<&Path> {
        match self {
            PackageScope::Named(_) => None,
            PackageScope::Relative(path) => Some(path),
        }
    }

    /// Namespace prefix (`packages/<name>/`) prepended to derived families.
    pub fn family_prefix(&self) -> Option<String> {
        self.name()
            .map(|name| format!("{PACKAGES_SEGMENT}/{name}/"))
    }
}
