#![allow(clippy::float_cmp)]

use super::*;
use crate::doc::{Room, Selection};

fn temp_path() -> PathBuf {
    std::env::temp_dir().join(format!("simspace-store-{}.json", uuid::Uuid::new_v4().simple()))
}

fn sample() -> Document {
    Document {
        room: Room { width_cm: 520.0, depth_cm: 410.0 },
        selection: Selection::Door("door_1".into()),
        ..Document::default()
    }
}

// =============================================================
// MemoryStore
// =============================================================

#[test]
fn memory_store_starts_empty() {
    let store = MemoryStore::new();
    assert!(store.load().unwrap().is_none());
    assert!(store.raw().is_none());
}

#[test]
fn memory_store_save_then_load() {
    let store = MemoryStore::new();
    store.save(&sample()).unwrap();
    assert_eq!(store.load().unwrap(), Some(sample()));
    assert!(store.raw().unwrap().contains("\"widthCm\":520.0"));
}

#[test]
fn memory_store_corrupt_data_loads_as_none() {
    let store = MemoryStore::with_raw("{ not json");
    assert!(store.load().unwrap().is_none());
}

#[test]
fn storage_key_is_versioned() {
    assert!(STORAGE_KEY.ends_with(":v1"));
}

// =============================================================
// FileStore
// =============================================================

#[test]
fn file_store_missing_file_is_none() {
    let store = FileStore::new(temp_path());
    assert!(store.load().unwrap().is_none());
}

#[test]
fn file_store_round_trip() {
    let path = temp_path();
    let store = FileStore::new(&path);
    store.save(&sample()).unwrap();
    assert_eq!(store.load().unwrap(), Some(sample()));
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn file_store_corrupt_file_is_none() {
    let path = temp_path();
    std::fs::write(&path, "[[[").unwrap();
    let store = FileStore::new(&path);
    assert!(store.load().unwrap().is_none());
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn file_store_write_failure_is_error() {
    let dir = temp_path();
    std::fs::create_dir(&dir).unwrap();
    // A directory cannot be written as a file.
    let store = FileStore::new(&dir);
    let err = store.save(&sample()).unwrap_err();
    assert!(matches!(err, StoreError::Write { .. }));
    assert!(err.to_string().starts_with("failed to write"));
    std::fs::remove_dir(&dir).unwrap();
}
