//! Persistence shell over the notes list.
//!
//! The list itself lives in `shared`; this module loads it from storage and
//! writes it back after every successful mutation.

use shared::models::{NoteList, NotePriority};
use uuid::Uuid;

use crate::storage;

const NOTES_KEY: &str = "notes_v1";

/// Load the persisted list, or an empty one.
#[must_use]
pub fn load() -> NoteList {
    storage::get(NOTES_KEY, NoteList::default())
}

/// Persist the whole list.
pub fn save(notes: &NoteList) {
    storage::set(NOTES_KEY, notes);
}

/// Add a note and persist. Blank text is a silent no-op with no write.
pub fn add(notes: &mut NoteList, text: &str, priority: NotePriority) -> bool {
    let added = notes.add(text, priority);
    if added {
        save(notes);
    }
    added
}

/// Remove a note and persist when something changed.
pub fn remove(notes: &mut NoteList, id: Uuid) -> bool {
    let removed = notes.remove(id);
    if removed {
        save(notes);
    }
    removed
}

/// Re-bucket a note and persist when something changed.
pub fn set_priority(notes: &mut NoteList, id: Uuid, priority: NotePriority) -> bool {
    let changed = notes.set_priority(id, priority);
    if changed {
        save(notes);
    }
    changed
}
