//! DeleteTodoHandler - Command handler for removing a todo from its list.

use crate::domain::foundation::{TodoId, TodoListId};
use crate::domain::todo::{TodoError, TodoLists};

use super::{parse_list_id, parse_todo_id};

/// Command to delete a todo.
#[derive(Debug, Clone)]
pub struct DeleteTodoCommand {
    pub list_id: String,
    pub todo_id: String,
}

/// Result of a successful delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTodoResult {
    pub list_id: TodoListId,
    pub todo_id: TodoId,
    pub title: String,
}

/// Handler for deleting todos.
#[derive(Debug, Default)]
pub struct DeleteTodoHandler;

impl DeleteTodoHandler {
    pub fn new() -> Self {
        Self
    }

    /// # Errors
    ///
    /// - `ListNotFound` / `TodoNotFound` for unknown or malformed ids
    /// - `IndexOutOfBounds` only if the list changed between lookup and
    ///   removal, which cannot happen under `&mut`
    pub fn handle(
        &self,
        lists: &mut TodoLists,
        cmd: DeleteTodoCommand,
    ) -> Result<DeleteTodoResult, TodoError> {
        let list_id = parse_list_id(&cmd.list_id)?;
        let list = lists
            .find_mut(list_id)
            .ok_or_else(|| TodoError::list_not_found(&cmd.list_id))?;

        let todo_id = parse_todo_id(&cmd.list_id, &cmd.todo_id)?;
        let index = list
            .find_index_of(todo_id)
            .ok_or_else(|| TodoError::todo_not_found(&cmd.list_id, &cmd.todo_id))?;

        let removed = list.remove_at(index)?;

        Ok(DeleteTodoResult {
            list_id,
            todo_id: removed.id(),
            title: removed.title().to_string(),
        })
    }
}
