pub mod notes;
pub mod todo_overrides;
