//! Plain-data records and the reconstruction boundary.
//!
//! Session stores persist only plain data. Every request rebuilds live
//! [`TodoList`] aggregates from these records and turns them back into
//! records before the response completes. Ids are copied verbatim in both
//! directions.
//!
//! ```text
//! { "id": 2, "title": "Home", "todos": [{ "id": 1, "title": "Feed cats", "done": true }] }
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{TodoId, TodoListId};

use super::aggregate::TodoList;
use super::collection::TodoLists;
use super::entity::Todo;

/// Persisted shape of a todo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoRecord {
    pub id: TodoId,
    pub title: String,
    #[serde(default)]
    pub done: bool,
}

/// Persisted shape of a todo list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoListRecord {
    pub id: TodoListId,
    pub title: String,
    #[serde(default)]
    pub todos: Vec<TodoRecord>,
    /// Todo id counter. Absent in records written by older sessions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_todo_id: Option<TodoId>,
}

/// Rebuild a live list from its record, preserving every id.
pub fn make_todo_list(record: TodoListRecord) -> TodoList {
    let todos = record.todos.into_iter().map(Todo::from).collect();
    TodoList::reconstitute(record.id, record.title, todos, record.next_todo_id)
}

impl From<TodoRecord> for Todo {
    fn from(record: TodoRecord) -> Self {
        Todo::reconstitute(record.id, record.title, record.done)
    }
}

impl From<&Todo> for TodoRecord {
    fn from(todo: &Todo) -> Self {
        Self {
            id: todo.id(),
            title: todo.title().to_string(),
            done: todo.is_done(),
        }
    }
}

impl From<TodoListRecord> for TodoList {
    fn from(record: TodoListRecord) -> Self {
        make_todo_list(record)
    }
}

impl TodoList {
    /// Snapshot this list into plain data.
    pub fn to_record(&self) -> TodoListRecord {
        TodoListRecord {
            id: self.id(),
            title: self.title().to_string(),
            todos: self.todos().iter().map(TodoRecord::from).collect(),
            next_todo_id: Some(self.next_todo_id()),
        }
    }
}

impl TodoLists {
    /// Rebuild the whole collection from session data.
    pub fn from_records(records: Vec<TodoListRecord>, next_list_id: Option<TodoListId>) -> Self {
        let lists = records.into_iter().map(make_todo_list).collect();
        TodoLists::reconstitute(lists, next_list_id)
    }

    /// Snapshot every list, in order.
    pub fn to_records(&self) -> Vec<TodoListRecord> {
        self.iter().map(TodoList::to_record).collect()
    }
}
