//! ListTodoListsHandler - Query handler for the sorted overview of lists.

use crate::domain::foundation::TodoListId;
use crate::domain::todo::{sort_todo_lists, TodoList, TodoLists};

/// One row of the overview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoListSummary {
    pub id: TodoListId,
    pub title: String,
    pub is_done: bool,
    pub todo_count: usize,
    pub remaining: usize,
}

impl From<&TodoList> for TodoListSummary {
    fn from(list: &TodoList) -> Self {
        Self {
            id: list.id(),
            title: list.title().to_string(),
            is_done: list.is_done(),
            todo_count: list.len(),
            remaining: list.remaining(),
        }
    }
}

/// Handler for listing every list, not-done first then by title.
#[derive(Debug, Default)]
pub struct ListTodoListsHandler;

impl ListTodoListsHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, lists: &TodoLists) -> Vec<TodoListSummary> {
        sort_todo_lists(lists.as_slice())
            .into_iter()
            .map(TodoListSummary::from)
            .collect()
    }
}
