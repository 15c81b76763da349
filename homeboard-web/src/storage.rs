//! Thin wrapper over browser `localStorage`.
//!
//! Values are JSON via serde. Reads never write back, so an absent key stays
//! absent until someone stores a value; a corrupt entry logs a console
//! warning and falls back to the caller's default. Writes are synchronous and
//! last-writer-wins, with no cross-tab coordination.

use gloo_console::warn;
use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Read `key`, returning `default` when the key is absent or unreadable.
pub fn get<T: DeserializeOwned>(key: &str, default: T) -> T {
    match LocalStorage::get(key) {
        Ok(value) => value,
        Err(StorageError::KeyNotFound(_)) => default,
        Err(err) => {
            warn!(format!("storage: discarding unreadable entry {key}: {err}"));
            default
        }
    }
}

/// Write `value` under `key`, replacing any previous entry. A write failure
/// (quota, storage disabled) is logged and otherwise swallowed.
pub fn set<T: Serialize>(key: &str, value: &T) {
    if let Err(err) = LocalStorage::set(key, value) {
        warn!(format!("storage: failed to write {key}: {err}"));
    }
}

/// Delete the entry under `key`, if any.
pub fn remove(key: &str) {
    LocalStorage::delete(key);
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_get_returns_default_when_absent() {
        remove("storage_test_absent");
        assert_eq!(get("storage_test_absent", 7_i32), 7);
        // No write-back: the key is still absent.
        assert_eq!(LocalStorage::raw().get_item("storage_test_absent"), Ok(None));
    }

    #[wasm_bindgen_test]
    fn test_set_then_get_roundtrips() {
        set("storage_test_roundtrip", &vec![1_i32, 2, 3]);
        let read: Vec<i32> = get("storage_test_roundtrip", Vec::new());
        assert_eq!(read, vec![1, 2, 3]);
        remove("storage_test_roundtrip");
    }

    #[wasm_bindgen_test]
    fn test_set_replaces_previous_value() {
        set("storage_test_replace", &"old");
        set("storage_test_replace", &"new");
        let read: String = get("storage_test_replace", String::new());
        assert_eq!(read, "new");
        remove("storage_test_replace");
    }

    #[wasm_bindgen_test]
    fn test_corrupt_entry_falls_back_to_default() {
        LocalStorage::raw()
            .set_item("storage_test_corrupt", "{not json")
            .unwrap();
        let read: Vec<i32> = get("storage_test_corrupt", vec![9]);
        assert_eq!(read, vec![9]);
        remove("storage_test_corrupt");
    }

    #[wasm_bindgen_test]
    fn test_remove_deletes_entry() {
        set("storage_test_remove", &true);
        remove("storage_test_remove");
        assert_eq!(get("storage_test_remove", false), false);
    }
}
