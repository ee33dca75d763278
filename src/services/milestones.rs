use thiserror::Error;

use crate::models::{
    date::Date,
    document::LogDocument,
    milestone::{Milestone, ProgressPoint},
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProgressPointError {
    #[error("Milestone #{0} not found")]
    MilestoneNotFound(i32),

    #[error("This milestone already has a progress point for today")]
    DuplicateForToday,
}

/// Adds a milestone starting now and returns its id.
pub fn add_milestone(document: &mut LogDocument, name: String, description: String) -> i32 {
    add_milestone_at(document, name, description, Date::now())
}

/// Same id rule as todos: one past the current milestone count.
pub fn add_milestone_at(
    document: &mut LogDocument,
    name: String,
    description: String,
    start_date: Date,
) -> i32 {
    let id = document.milestones.len() as i32 + 1;
    document.milestones.push(Milestone {
        id,
        start_date,
        name,
        description,
        progress_points: vec![],
    });
    id
}

/// Removes the milestone with the given id; a no-op when absent.
pub fn remove_milestone(document: &mut LogDocument, id: i32) {
    document.milestones.retain(|milestone| milestone.id != id);
}

/// Appends a progress point stamped with today's date.
pub fn add_progress_point(
    document: &mut LogDocument,
    id: i32,
    is_completed: bool,
    description: String,
) -> Result<(), ProgressPointError> {
    add_progress_point_on(document, id, is_completed, description, Date::today())
}

/// Same as `add_progress_point` with an explicit date.
///
/// A milestone carries at most one progress point per calendar day; a
/// same-day insert reports `DuplicateForToday` and leaves the milestone
/// untouched.
pub fn add_progress_point_on(
    document: &mut LogDocument,
    id: i32,
    is_completed: bool,
    description: String,
    date: Date,
) -> Result<(), ProgressPointError> {
    let milestone = document
        .milestones
        .iter_mut()
        .find(|milestone| milestone.id == id)
        .ok_or(ProgressPointError::MilestoneNotFound(id))?;

    if milestone
        .progress_points
        .iter()
        .any(|point| point.date.same_day(&date))
    {
        return Err(ProgressPointError::DuplicateForToday);
    }

    milestone.progress_points.push(ProgressPoint {
        date,
        is_completed,
        description,
    });
    Ok(())
}
