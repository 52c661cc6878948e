//! ToggleTodoHandler - Command handler for flipping a todo's completion.

use crate::domain::foundation::{TodoId, TodoListId};
use crate::domain::todo::{TodoError, TodoLists};

use super::{parse_list_id, parse_todo_id};

/// Command to toggle a todo.
#[derive(Debug, Clone)]
pub struct ToggleTodoCommand {
    pub list_id: String,
    pub todo_id: String,
}

/// Result of a toggle; `done` is the new state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleTodoResult {
    pub list_id: TodoListId,
    pub todo_id: TodoId,
    pub title: String,
    pub done: bool,
}

/// Handler for toggling todos.
#[derive(Debug, Default)]
pub struct ToggleTodoHandler;

impl ToggleTodoHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(
        &self,
        lists: &mut TodoLists,
        cmd: ToggleTodoCommand,
    ) -> Result<ToggleTodoResult, TodoError> {
        let list_id = parse_list_id(&cmd.list_id)?;
        let list = lists
            .find_mut(list_id)
            .ok_or_else(|| TodoError::list_not_found(&cmd.list_id))?;

        let todo_id = parse_todo_id(&cmd.list_id, &cmd.todo_id)?;
        let todo = list
            .find_mut(todo_id)
            .ok_or_else(|| TodoError::todo_not_found(&cmd.list_id, &cmd.todo_id))?;

        let status = todo.toggle();

        Ok(ToggleTodoResult {
            list_id,
            todo_id,
            title: todo.title().to_string(),
            done: status.is_done(),
        })
    }
}
