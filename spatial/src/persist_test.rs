#![allow(clippy::float_cmp)]

use super::*;

/// Backend that fails every call, standing in for a disabled `localStorage`.
struct BrokenStorage;

impl SizeStorage for BrokenStorage {
    fn read(&self) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("disabled".to_owned()))
    }

    fn write(&mut self, _raw: &str) -> Result<(), StorageError> {
        Err(StorageError::Access("quota exceeded".to_owned()))
    }
}

fn sample() -> SavedSizes {
    let mut sizes = SavedSizes::new();
    sizes.insert(Section::Welcome, Size::new(640.0, 480.0));
    sizes.insert(Section::Projects, Size::new(300.0, 260.0));
    sizes
}

// =============================================================
// decode / encode
// =============================================================

#[test]
fn decode_reads_section_keys() {
    let sizes = decode_sizes(r#"{"about":{"width":500,"height":420}}"#).unwrap();
    assert_eq!(sizes.get(&Section::About), Some(&Size::new(500.0, 420.0)));
}

#[test]
fn decode_skips_unknown_sections() {
    let sizes = decode_sizes(r#"{"blog":{"width":500,"height":420}}"#).unwrap();
    assert!(sizes.is_empty());
}

#[test]
fn decode_clamps_undersized_entries() {
    let sizes = decode_sizes(r#"{"skills":{"width":10,"height":10}}"#).unwrap();
    assert_eq!(sizes.get(&Section::Skills), Some(&Size::new(280.0, 200.0)));
}

#[test]
fn decode_rejects_malformed_json() {
    let err = decode_sizes("{not json").unwrap_err();
    assert!(matches!(err, StorageError::Corrupt(_)));
}

#[test]
fn decode_rejects_wrong_shape() {
    assert!(decode_sizes(r#"{"about":"wide"}"#).is_err());
}

#[test]
fn encode_uses_lowercase_keys() {
    let raw = encode_sizes(&sample()).unwrap();
    assert!(raw.contains("\"welcome\""));
    assert!(raw.contains("\"projects\""));
    assert_eq!(decode_sizes(&raw).unwrap(), sample());
}

// =============================================================
// load / save
// =============================================================

#[test]
fn load_from_empty_storage_is_empty() {
    assert!(load_sizes(&MemoryStorage::new()).is_empty());
}

#[test]
fn load_from_corrupt_storage_falls_back_to_empty() {
    let storage = MemoryStorage::with_value("]]corrupt[[");
    assert!(load_sizes(&storage).is_empty());
}

#[test]
fn load_from_broken_storage_falls_back_to_empty() {
    assert!(load_sizes(&BrokenStorage).is_empty());
}

#[test]
fn save_writes_through_shared_handle() {
    let handle = MemoryStorage::new();
    let mut storage = handle.clone();
    assert!(save_sizes(&mut storage, &sample()));
    let raw = handle.value().unwrap();
    assert_eq!(decode_sizes(&raw).unwrap(), sample());
}

#[test]
fn save_to_broken_storage_reports_failure_without_panicking() {
    assert!(!save_sizes(&mut BrokenStorage, &sample()));
}

#[test]
fn storage_key_defaults_to_card_dimensions() {
    assert_eq!(MemoryStorage::new().key(), "cardDimensions");
}

#[test]
fn storage_errors_render_readably() {
    let err = StorageError::Unavailable("no window".to_owned());
    assert_eq!(err.to_string(), "storage unavailable: no window");
}
