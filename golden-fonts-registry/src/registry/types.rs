//! Font data types for registration.

use std::sync::Arc;
use swash::{FontDataRef, FontRef};

/// Validated raw font bytes.
///
/// Construction parses the table directory of every face with swash, so a
/// `FontData` always holds a TrueType/OpenType font or a collection of them.
/// The bytes are shared, cloning is cheap.
#[derive(Clone)]
pub struct FontData {
    /// Raw font data bytes (TTF/OTF/TTC)
    pub data: Arc<Vec<u8>>,
    /// Number of faces in the data (more than one for collections)
    face_count: usize,
}

impl std::fmt::Debug for FontData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontData")
            .field("data_len", &self.data.len())
            .field("face_count", &self.face_count)
            .finish()
    }
}

impl FontData {
    /// Validate raw bytes as font data.
    ///
    /// # Returns
    /// `Some(FontData)` if every face in the data parses, `None` otherwise.
    pub fn new(data: Vec<u8>) -> Option<Self> {
        let face_count = {
            let data_ref = FontDataRef::new(&data)?;
            data_ref.len()
        };
        if face_count == 0 {
            return None;
        }
        let all_faces_parse =
            (0..face_count).all(|index| FontRef::from_index(&data, index).is_some());
        if !all_faces_parse {
            return None;
        }

        Some(FontData {
            data: Arc::new(data),
            face_count,
        })
    }

    /// Number of faces contained in the data.
    pub fn face_count(&self) -> usize {
        self.face_count
    }

    /// Size of the raw data in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
