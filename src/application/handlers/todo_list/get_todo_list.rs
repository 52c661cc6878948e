//! GetTodoListHandler - Query handler for one list with its sorted todos.

use crate::domain::foundation::{TodoId, TodoListId};
use crate::domain::todo::{sort_todos, Todo, TodoError, TodoLists};

use super::parse_list_id;

/// Query to get a list by its raw id parameter.
#[derive(Debug, Clone)]
pub struct GetTodoListQuery {
    pub list_id: String,
}

/// Read model of a todo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoView {
    pub id: TodoId,
    pub title: String,
    pub done: bool,
}

impl From<&Todo> for TodoView {
    fn from(todo: &Todo) -> Self {
        Self {
            id: todo.id(),
            title: todo.title().to_string(),
            done: todo.is_done(),
        }
    }
}

/// Read model of a list; `todos` are already in presentation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoListView {
    pub id: TodoListId,
    pub title: String,
    pub is_done: bool,
    pub todos: Vec<TodoView>,
}

/// Handler for retrieving one list.
#[derive(Debug, Default)]
pub struct GetTodoListHandler;

impl GetTodoListHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(
        &self,
        lists: &TodoLists,
        query: GetTodoListQuery,
    ) -> Result<TodoListView, TodoError> {
        let list_id = parse_list_id(&query.list_id)?;
        let list = lists
            .find(list_id)
            .ok_or_else(|| TodoError::list_not_found(&query.list_id))?;

        Ok(TodoListView {
            id: list.id(),
            title: list.title().to_string(),
            is_done: list.is_done(),
            todos: sort_todos(list).into_iter().map(TodoView::from).collect(),
        })
    }
}
