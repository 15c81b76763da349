use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A todo item owned by a directory user.
///
/// The remote `completed` flag is read-only. The signed-in user can shadow it
/// locally through an [`OverrideMap`] without ever writing to the remote
/// record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Id of the owning user.
    pub user_id: i64,

    /// Unique identifier for the todo.
    pub id: i64,

    /// Todo text.
    pub title: String,

    /// Completion flag as reported by the directory.
    pub completed: bool,
}

/// Local completion overrides for one user's todos, keyed by todo id.
///
/// An absent key defers to the remote flag; a present key always wins.
pub type OverrideMap = HashMap<i64, bool>;

/// Completion as the user sees it: the local override when one exists, the
/// remote flag otherwise.
#[must_use]
pub fn effective_completion(overrides: &OverrideMap, todo: &Todo) -> bool {
    overrides.get(&todo.id).copied().unwrap_or(todo.completed)
}

/// Flip the effective completion of `todo`, recording the result as an
/// override.
///
/// Once a todo has an override there is no way back to "defer to remote";
/// toggling only alternates the override value.
pub fn toggle_override(overrides: &mut OverrideMap, todo: &Todo) {
    overrides.insert(todo.id, !effective_completion(overrides, todo));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: i64, completed: bool) -> Todo {
        Todo {
            user_id: 1,
            id,
            title: format!("todo {id}"),
            completed,
        }
    }

    #[test]
    fn test_todo_deserializes_camel_case() {
        let json = r#"{"userId": 1, "id": 5, "title": "laboriosam", "completed": true}"#;
        let parsed: Todo = serde_json::from_str(json).unwrap();

        assert_eq!(parsed.user_id, 1);
        assert_eq!(parsed.id, 5);
        assert!(parsed.completed);
    }

    #[test]
    fn test_effective_completion_defers_to_remote() {
        let overrides = OverrideMap::new();

        assert!(effective_completion(&overrides, &todo(1, true)));
        assert!(!effective_completion(&overrides, &todo(2, false)));
    }

    #[test]
    fn test_effective_completion_prefers_override() {
        let mut overrides = OverrideMap::new();
        overrides.insert(1, false);
        overrides.insert(2, true);

        assert!(!effective_completion(&overrides, &todo(1, true)));
        assert!(effective_completion(&overrides, &todo(2, false)));
    }

    #[test]
    fn test_toggle_records_inverse_of_remote() {
        let mut overrides = OverrideMap::new();
        let item = todo(9, true);

        toggle_override(&mut overrides, &item);

        assert_eq!(overrides.get(&9), Some(&false));
        assert!(!effective_completion(&overrides, &item));
    }

    #[test]
    fn test_double_toggle_returns_to_remote_value() {
        let mut overrides = OverrideMap::new();
        let item = todo(9, true);

        toggle_override(&mut overrides, &item);
        toggle_override(&mut overrides, &item);

        // Back to the remote value, but now pinned as an override.
        assert_eq!(overrides.get(&9), Some(&true));
        assert!(effective_completion(&overrides, &item));
    }

    #[test]
    fn test_toggle_leaves_other_entries_alone() {
        let mut overrides = OverrideMap::from([(1, true), (2, false)]);

        toggle_override(&mut overrides, &todo(3, false));

        assert_eq!(overrides.get(&1), Some(&true));
        assert_eq!(overrides.get(&2), Some(&false));
        assert_eq!(overrides.get(&3), Some(&true));
    }

    #[test]
    fn test_override_map_roundtrips_integer_keys() {
        let overrides = OverrideMap::from([(3, true), (17, false)]);
        let json = serde_json::to_string(&overrides).unwrap();
        let reparsed: OverrideMap = serde_json::from_str(&json).unwrap();

        assert_eq!(reparsed, overrides);
        // Integer keys are serialized as JSON strings.
        assert!(json.contains("\"3\":true"));
    }
}
