pub mod date;
pub mod diary;
pub mod document;
pub mod index;
pub mod milestone;
pub mod todo;
