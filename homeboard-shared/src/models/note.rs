use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use uuid::Uuid;

use super::Timestamp;

/// Priority bucket for a note.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum NotePriority {
    /// Needs attention first.
    Important,
    /// The everyday bucket.
    #[default]
    Normal,
    /// Parked for later.
    Delayed,
}

impl NotePriority {
    /// Capitalized label shown in the UI.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Important => "Important",
            Self::Normal => "Normal",
            Self::Delayed => "Delayed",
        }
    }
}

/// A freeform note kept entirely on this device.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Random id assigned at creation.
    pub id: Uuid,

    /// Trimmed, non-empty body text.
    pub text: String,

    /// Current priority bucket.
    pub priority: NotePriority,

    /// Creation time, fixed for the life of the note.
    pub created_at: Timestamp,
}

/// Notes in canonical newest-first order.
///
/// Serializes as a bare JSON array, which is also the persisted shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct NoteList(Vec<Note>);

/// The canonical list partitioned by priority. Order within each bucket
/// follows the canonical newest-first order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupedNotes {
    /// Notes in the important bucket.
    pub important: Vec<Note>,
    /// Notes in the normal bucket.
    pub normal: Vec<Note>,
    /// Notes in the delayed bucket.
    pub delayed: Vec<Note>,
}

impl GroupedNotes {
    /// The bucket holding notes of `priority`.
    #[must_use]
    pub fn bucket(&self, priority: NotePriority) -> &[Note] {
        match priority {
            NotePriority::Important => &self.important,
            NotePriority::Normal => &self.normal,
            NotePriority::Delayed => &self.delayed,
        }
    }
}

impl NoteList {
    /// Create a note from `text` and prepend it to the list.
    ///
    /// The text is trimmed first; a blank result leaves the list unchanged
    /// and returns `false`. The note gets a fresh random id and the current
    /// time as its creation time.
    pub fn add(&mut self, text: &str, priority: NotePriority) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.0.insert(
            0,
            Note {
                id: Uuid::new_v4(),
                text: trimmed.to_string(),
                priority,
                created_at: Timestamp::now(),
            },
        );
        true
    }

    /// Remove the note with `id`. Returns `false` when no note matches.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.0.len();
        self.0.retain(|note| note.id != id);
        self.0.len() != before
    }

    /// Move the note with `id` to another priority bucket. Returns `false`
    /// when no note matches.
    pub fn set_priority(&mut self, id: Uuid, priority: NotePriority) -> bool {
        match self.0.iter_mut().find(|note| note.id == id) {
            Some(note) => {
                note.priority = priority;
                true
            }
            None => false,
        }
    }

    /// Partition the list into its three priority buckets.
    #[must_use]
    pub fn grouped(&self) -> GroupedNotes {
        let mut grouped = GroupedNotes::default();
        for note in &self.0 {
            match note.priority {
                NotePriority::Important => grouped.important.push(note.clone()),
                NotePriority::Normal => grouped.normal.push(note.clone()),
                NotePriority::Delayed => grouped.delayed.push(note.clone()),
            }
        }
        grouped
    }

    /// Iterate the notes in canonical order.
    pub fn iter(&self) -> std::slice::Iter<'_, Note> {
        self.0.iter()
    }

    /// Number of notes across all buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` when the list holds no notes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a NoteList {
    type Item = &'a Note;
    type IntoIter = std::slice::Iter<'a, Note>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    fn list_with(texts: &[(&str, NotePriority)]) -> NoteList {
        let mut list = NoteList::default();
        // `add` prepends, so feed oldest-first to get input order reversed.
        for (text, priority) in texts {
            assert!(list.add(text, *priority));
        }
        list
    }

    #[test]
    fn test_add_trims_and_prepends() {
        let mut list = NoteList::default();

        assert!(list.add("first", NotePriority::Normal));
        assert!(list.add("  second  ", NotePriority::Important));

        let texts: Vec<&str> = list.iter().map(|note| note.text.as_str()).collect();
        assert_eq!(texts, vec!["second", "first"]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_add_rejects_blank_text() {
        let mut list = NoteList::default();

        assert!(!list.add("", NotePriority::Normal));
        assert!(!list.add("   ", NotePriority::Important));
        assert!(!list.add("\t\n", NotePriority::Delayed));
        assert!(list.is_empty());
    }

    #[test]
    fn test_add_stamps_creation_time() {
        let before = Timestamp::now();
        let mut list = NoteList::default();
        list.add("Buy milk", NotePriority::Normal);

        let note = list.iter().next().unwrap();
        assert!(note.created_at >= before);
        assert_eq!(note.text, "Buy milk");
        assert_eq!(note.priority, NotePriority::Normal);
    }

    #[test]
    fn test_add_assigns_distinct_ids() {
        let mut list = NoteList::default();
        list.add("one", NotePriority::Normal);
        list.add("two", NotePriority::Normal);

        let ids: Vec<Uuid> = list.iter().map(|note| note.id).collect();
        assert_ne!(ids[0], ids[1]);
    }

    #[test]
    fn test_remove_by_id() {
        let mut list = list_with(&[("keep", NotePriority::Normal), ("drop", NotePriority::Normal)]);
        let drop_id = list.iter().next().unwrap().id;

        assert!(list.remove(drop_id));
        assert_eq!(list.len(), 1);
        assert_eq!(list.iter().next().unwrap().text, "keep");
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut list = list_with(&[("keep", NotePriority::Normal)]);

        assert!(!list.remove(Uuid::new_v4()));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_set_priority_moves_note() {
        let mut list = list_with(&[("note", NotePriority::Normal)]);
        let id = list.iter().next().unwrap().id;

        assert!(list.set_priority(id, NotePriority::Delayed));
        assert_eq!(list.iter().next().unwrap().priority, NotePriority::Delayed);

        assert!(!list.set_priority(Uuid::new_v4(), NotePriority::Important));
    }

    #[test]
    fn test_set_priority_keeps_canonical_order() {
        let mut list = list_with(&[
            ("oldest", NotePriority::Normal),
            ("middle", NotePriority::Normal),
            ("newest", NotePriority::Normal),
        ]);
        let middle_id = list.iter().nth(1).unwrap().id;

        list.set_priority(middle_id, NotePriority::Important);

        let texts: Vec<&str> = list.iter().map(|note| note.text.as_str()).collect();
        assert_eq!(texts, vec!["newest", "middle", "oldest"]);
    }

    #[test]
    fn test_grouped_partitions_in_order() {
        let list = list_with(&[
            ("old normal", NotePriority::Normal),
            ("old important", NotePriority::Important),
            ("new normal", NotePriority::Normal),
            ("delayed", NotePriority::Delayed),
            ("new important", NotePriority::Important),
        ]);

        let grouped = list.grouped();

        let important: Vec<&str> = grouped
            .important
            .iter()
            .map(|note| note.text.as_str())
            .collect();
        let normal: Vec<&str> = grouped
            .normal
            .iter()
            .map(|note| note.text.as_str())
            .collect();
        let delayed: Vec<&str> = grouped
            .delayed
            .iter()
            .map(|note| note.text.as_str())
            .collect();

        assert_eq!(important, vec!["new important", "old important"]);
        assert_eq!(normal, vec!["new normal", "old normal"]);
        assert_eq!(delayed, vec!["delayed"]);

        let total = grouped.important.len() + grouped.normal.len() + grouped.delayed.len();
        assert_eq!(total, list.len());
    }

    #[test]
    fn test_grouped_bucket_accessor() {
        let list = list_with(&[("a", NotePriority::Delayed)]);
        let grouped = list.grouped();

        for priority in NotePriority::iter() {
            let expected = match priority {
                NotePriority::Delayed => 1,
                _ => 0,
            };
            assert_eq!(grouped.bucket(priority).len(), expected);
        }
    }

    #[test]
    fn test_note_serializes_camel_case_and_lowercase_priority() {
        let mut list = NoteList::default();
        list.add("shop", NotePriority::Important);

        let json = serde_json::to_string(&list).unwrap();

        // A bare array with camelCase keys and a lowercase priority tag.
        assert!(json.starts_with('['));
        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"priority\":\"important\""));
        assert!(!json.contains("created_at"));
    }

    #[test]
    fn test_note_list_roundtrip() {
        let list = list_with(&[
            ("one", NotePriority::Normal),
            ("two", NotePriority::Delayed),
        ]);

        let json = serde_json::to_string(&list).unwrap();
        let reparsed: NoteList = serde_json::from_str(&json).unwrap();

        assert_eq!(reparsed, list);
    }

    #[test]
    fn test_priority_parses_from_lowercase() {
        assert_eq!(
            NotePriority::from_str("important").unwrap(),
            NotePriority::Important
        );
        assert_eq!(
            NotePriority::from_str("normal").unwrap(),
            NotePriority::Normal
        );
        assert_eq!(
            NotePriority::from_str("delayed").unwrap(),
            NotePriority::Delayed
        );
        assert!(NotePriority::from_str("urgent").is_err());
    }

    #[test]
    fn test_priority_display_matches_serde_tag() {
        for priority in NotePriority::iter() {
            let displayed = priority.to_string();
            let tagged = serde_json::to_string(&priority).unwrap();
            assert_eq!(tagged, format!("\"{displayed}\""));
        }
    }

    #[test]
    fn test_default_priority_is_normal() {
        assert_eq!(NotePriority::default(), NotePriority::Normal);
    }

    #[test]
    fn test_priority_labels() {
        for priority in NotePriority::iter() {
            assert_eq!(priority.label().to_lowercase(), priority.to_string());
        }
    }
}
