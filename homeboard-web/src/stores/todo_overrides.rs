//! Persistence shell over per-user todo completion overrides.
//!
//! Each user gets their own map keyed by todo id. Toggling writes through
//! immediately; once a todo carries an override it never returns to
//! "defer to remote", it can only be toggled again.

use shared::models::{OverrideMap, Todo, toggle_override};

use crate::storage;

fn key(user_id: i64) -> String {
    format!("todos_override_{user_id}")
}

/// Load the override map for `user_id`, or an empty one.
#[must_use]
pub fn load(user_id: i64) -> OverrideMap {
    storage::get(&key(user_id), OverrideMap::new())
}

/// Persist the override map for `user_id`.
pub fn save(user_id: i64, overrides: &OverrideMap) {
    storage::set(&key(user_id), overrides);
}

/// Flip the effective completion of `todo` and persist immediately.
pub fn toggle(user_id: i64, overrides: &mut OverrideMap, todo: &Todo) {
    toggle_override(overrides, todo);
    save(user_id, overrides);
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use shared::models::effective_completion;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn todo(user_id: i64, id: i64, completed: bool) -> Todo {
        Todo {
            user_id,
            id,
            title: "t".to_string(),
            completed,
        }
    }

    fn clear(user_id: i64) {
        storage::remove(&key(user_id));
    }

    #[wasm_bindgen_test]
    fn test_load_defaults_to_empty_map() {
        clear(1);
        assert!(load(1).is_empty());
    }

    #[wasm_bindgen_test]
    fn test_toggle_roundtrips_through_storage() {
        clear(1);
        let item = todo(1, 42, false);
        let mut overrides = load(1);

        toggle(1, &mut overrides, &item);
        let reloaded = load(1);
        assert!(effective_completion(&reloaded, &item));
        clear(1);
    }

    #[wasm_bindgen_test]
    fn test_maps_are_scoped_per_user() {
        clear(1);
        clear(2);
        let item = todo(1, 5, false);
        let mut overrides = load(1);
        toggle(1, &mut overrides, &item);

        assert!(!load(1).is_empty());
        assert!(load(2).is_empty());
        clear(1);
    }
}
