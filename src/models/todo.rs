use serde::{Deserialize, Serialize};

use crate::models::date::Date;

/// Suffix appended to a todo name to mark it done.
///
/// The done state lives inside the name itself so it survives
/// serialization without a schema change. Storage convention, not
/// display formatting.
pub const DONE_SUFFIX: &str = " (done)";

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: i32,
    pub create_date: Date,
    pub due_date: Date,
    pub name: String,
    pub description: String,
}

impl Todo {
    pub fn is_done(&self) -> bool {
        self.name.ends_with(DONE_SUFFIX)
    }
}
