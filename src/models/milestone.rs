use serde::{Deserialize, Serialize};

use crate::models::date::Date;

/// A single dated completion/non-completion marker on a milestone.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProgressPoint {
    pub date: Date,
    pub is_completed: bool,
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub id: i32,
    pub start_date: Date,
    pub name: String,
    pub description: String,
    /// Ordered by insertion; at most one point per calendar day, enforced
    /// by the record operations at insertion time.
    #[serde(default)]
    pub progress_points: Vec<ProgressPoint>,
}
