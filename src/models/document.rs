use serde::{Deserialize, Serialize};

use crate::models::{date::Date, diary::DiaryEntry, milestone::Milestone, todo::Todo};

/// The full persisted state for one named log: one JSON file per document.
///
/// Equality is deep and structural; the default (all-empty) value is the
/// "no such document" sentinel returned by the store when a name is
/// unknown. The collections default to empty on decode, but `name` is a
/// structural field and must be present.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LogDocument {
    pub name: String,
    #[serde(default)]
    pub calendar_events: Vec<Date>,
    #[serde(default)]
    pub todos: Vec<Todo>,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
    #[serde(default)]
    pub diary_entries: Vec<DiaryEntry>,
}

impl LogDocument {
    /// A fresh document with empty collections, as written on create.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}
