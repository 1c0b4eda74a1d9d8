//! Shared fixtures for golden-fonts integration tests.

#![allow(dead_code)]

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;
use std::sync::Mutex;

use golden_fonts::{FontRegistry, IconFontConfig, RegistryError};
use tempfile::TempDir;

/// Bytes written to the fake icon font.
pub const ICON_BYTES: &[u8] = b"icon-font";

/// Registry double that records every registration.
///
/// Accepts any bytes; families listed in `reject` are refused.
#[derive(Default)]
pub struct RecordingRegistry {
    registered: Mutex<BTreeMap<String, Vec<Vec<u8>>>>,
    calls: Mutex<Vec<String>>,
    reject: Vec<String>,
}

impl RecordingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rejecting(families: &[&str]) -> Self {
        Self {
            reject: families.iter().map(|f| f.to_string()).collect(),
            ..Self::default()
        }
    }

    /// Bytes registered under `family`, in registration order.
    pub fn fonts(&self, family: &str) -> Vec<Vec<u8>> {
        self.registered
            .lock()
            .unwrap()
            .get(family)
            .cloned()
            .unwrap_or_default()
    }

    /// Families in the order `register_family` was called.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl FontRegistry for RecordingRegistry {
    fn register_family(&self, family: &str, fonts: Vec<Vec<u8>>) -> Result<usize, RegistryError> {
        self.calls.lock().unwrap().push(family.to_string());
        if self.reject.iter().any(|f| f == family) {
            return Err(RegistryError::rejected(family, "refused by test registry"));
        }
        let count = fonts.len();
        self.registered
            .lock()
            .unwrap()
            .entry(family.to_string())
            .or_default()
            .extend(fonts);
        Ok(count)
    }

    fn contains_family(&self, family: &str) -> bool {
        self.registered.lock().unwrap().contains_key(family)
    }

    fn families(&self) -> Vec<String> {
        self.registered.lock().unwrap().keys().cloned().collect()
    }
}

/// Write `contents` to `dir/name`, creating parent directories.
pub fn write_file(dir: &Path, name: &str, contents: &[u8]) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    fs::write(&path, contents).expect("Failed to write fixture file");
}

/// A platform root containing the icon font, and an environment pointing at it.
pub fn icon_font_env() -> (TempDir, HashMap<String, String>) {
    let root = TempDir::new().expect("Failed to create temp dir");
    let config = IconFontConfig::default();
    write_file(root.path(), &config.relative_path, ICON_BYTES);

    let mut env = HashMap::new();
    env.insert(
        config.root_env_var,
        root.path().to_string_lossy().into_owned(),
    );
    (root, env)
}
