//! Integration tests for golden-fonts-registry.

use golden_fonts_registry::{FontData, FontDbRegistry, FontRegistry, RegistryError};

/// Find raw bytes of any installed TrueType/OpenType font.
///
/// Returns `None` on machines without system fonts; tests that need real
/// font data return early in that case.
fn any_system_font() -> Option<Vec<u8>> {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();
    db.faces().find_map(|face| match &face.source {
        fontdb::Source::File(path) => {
            let ext = path.extension()?.to_str()?.to_ascii_lowercase();
            if ext == "ttf" || ext == "otf" {
                std::fs::read(path).ok()
            } else {
                None
            }
        }
        _ => None,
    })
}

#[test]
fn test_font_data_invalid_bytes() {
    let data = vec![0u8; 100];
    assert!(
        FontData::new(data).is_none(),
        "Should return None for invalid font data"
    );
}

#[test]
fn test_font_data_empty_bytes() {
    assert!(FontData::new(vec![]).is_none(), "Should return None for empty data");
}

#[test]
fn test_font_data_from_system_font() {
    let Some(bytes) = any_system_font() else {
        return;
    };
    let len = bytes.len();
    let font_data = FontData::new(bytes).expect("system font should validate");
    assert_eq!(font_data.len(), len);
    assert!(font_data.face_count() >= 1);

    let debug_str = format!("{:?}", font_data);
    assert!(debug_str.contains("FontData"));
    assert!(debug_str.contains("data_len"));
}

#[test]
fn test_register_family_under_alias() {
    let Some(bytes) = any_system_font() else {
        return;
    };
    let registry = FontDbRegistry::new();

    let count = registry
        .register_family("packages/theme/Reference", vec![bytes.clone()])
        .expect("registration should succeed");
    assert!(count >= 1);
    assert!(registry.contains_family("packages/theme/Reference"));
    assert_eq!(registry.face_ids("packages/theme/Reference").len(), count);
    assert_eq!(registry.face_count(), count);
    assert!(!registry.internal_family_names("packages/theme/Reference").is_empty());

    // Registering again adds faces to the same family.
    let again = registry
        .register_family("packages/theme/Reference", vec![bytes])
        .expect("second registration should succeed");
    assert_eq!(
        registry.face_ids("packages/theme/Reference").len(),
        count + again
    );
    assert_eq!(registry.families(), vec!["packages/theme/Reference".to_string()]);
}

#[test]
fn test_register_family_with_empty_name_is_rejected() {
    let Some(bytes) = any_system_font() else {
        return;
    };
    let registry = FontDbRegistry::new();

    let result = registry.register_family("", vec![bytes]);
    assert!(matches!(result, Err(RegistryError::Rejected { .. })));
    assert_eq!(registry.face_count(), 0);
}

#[test]
fn test_invalid_font_rejected_before_loading() {
    let Some(bytes) = any_system_font() else {
        return;
    };
    let registry = FontDbRegistry::new();

    let result = registry.register_family("Reference", vec![bytes, vec![0u8; 100]]);
    assert!(matches!(result, Err(RegistryError::Rejected { .. })));
    assert_eq!(registry.face_count(), 0);
    assert!(!registry.contains_family("Reference"));
}

#[test]
fn test_registry_error_display() {
    let err = RegistryError::rejected("Lato", "no font data supplied");
    assert_eq!(
        err.to_string(),
        "Registry rejected family 'Lato': no font data supplied"
    );
}
