//! CreateTodoListHandler - Command handler for creating lists.

use std::sync::Arc;

use crate::domain::foundation::TodoListId;
use crate::domain::todo::{TodoError, TodoLists};
use crate::ports::TitleValidator;

/// Command to create a new list.
#[derive(Debug, Clone)]
pub struct CreateTodoListCommand {
    pub title: String,
}

/// Result of successful list creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTodoListResult {
    pub list_id: TodoListId,
    pub title: String,
}

/// Handler for creating lists.
pub struct CreateTodoListHandler {
    validator: Arc<dyn TitleValidator>,
}

impl CreateTodoListHandler {
    pub fn new(validator: Arc<dyn TitleValidator>) -> Self {
        Self { validator }
    }

    pub fn handle(
        &self,
        lists: &mut TodoLists,
        cmd: CreateTodoListCommand,
    ) -> Result<CreateTodoListResult, TodoError> {
        let title = self
            .validator
            .validate_list_title(&cmd.title, lists)
            .map_err(TodoError::validation)?;

        let list = lists.create(title);
        tracing::debug!(list_id = %list.id(), "todo list created");

        Ok(CreateTodoListResult {
            list_id: list.id(),
            title: list.title().to_string(),
        })
    }
}
