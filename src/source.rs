//! Lazy font byte sources.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{FontError, Result};

/// Where the bytes of one font file come from.
///
/// Nothing is read until [`FontSource::read`] runs inside a family load
/// task. Cloning is cheap (a path or a shared buffer).
#[derive(Clone, PartialEq, Eq)]
pub enum FontSource {
    /// A font file on disk
    File(PathBuf),
    /// Font bytes already in memory (e.g. embedded with `include_bytes!`)
    Bytes(Arc<Vec<u8>>),
}

impl fmt::Debug for FontSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontSource::File(path) => f.debug_tuple("File").field(path).finish(),
            FontSource::Bytes(data) => f
                .debug_struct("Bytes")
                .field("data_len", &data.len())
                .finish(),
        }
    }
}

impl FontSource {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        FontSource::File(path.into())
    }

    pub fn bytes(data: impl Into<Vec<u8>>) -> Self {
        FontSource::Bytes(Arc::new(data.into()))
    }

    /// Path of the backing file, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            FontSource::File(path) => Some(path),
            FontSource::Bytes(_) => None,
        }
    }

    /// Produce the font bytes.
    pub async fn read(&self) -> Result<Vec<u8>> {
        match self {
            FontSource::File(path) => {
                tokio::fs::read(path)
                    .await
                    .map_err(|source| FontError::MissingAsset {
                        path: path.clone(),
                        source,
                    })
            }
            FontSource::Bytes(data) => Ok(data.as_ref().clone()),
        }
    }
}
