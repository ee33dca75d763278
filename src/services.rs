pub mod diary;
pub mod milestones;
pub mod todos;
