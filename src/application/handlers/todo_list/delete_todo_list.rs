//! DeleteTodoListHandler - Command handler for deleting lists.

use crate::domain::foundation::TodoListId;
use crate::domain::todo::{TodoError, TodoLists};

use super::parse_list_id;

/// Command to delete a list.
#[derive(Debug, Clone)]
pub struct DeleteTodoListCommand {
    pub list_id: String,
}

/// Result of successful list deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTodoListResult {
    pub list_id: TodoListId,
    pub title: String,
}

/// Handler for deleting lists.
#[derive(Debug, Default)]
pub struct DeleteTodoListHandler;

impl DeleteTodoListHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(
        &self,
        lists: &mut TodoLists,
        cmd: DeleteTodoListCommand,
    ) -> Result<DeleteTodoListResult, TodoError> {
        let list_id = parse_list_id(&cmd.list_id)?;
        let removed = lists
            .remove(list_id)
            .ok_or_else(|| TodoError::list_not_found(&cmd.list_id))?;

        tracing::debug!(list_id = %list_id, todos = removed.len(), "todo list deleted");

        Ok(DeleteTodoListResult {
            list_id,
            title: removed.title().to_string(),
        })
    }
}
