//! AddTodoHandler - Command handler for adding a todo to a list.

use std::sync::Arc;

use crate::domain::foundation::{TodoId, TodoListId};
use crate::domain::todo::{TodoError, TodoLists};
use crate::ports::TitleValidator;

use super::parse_list_id;

/// Command to add a todo.
#[derive(Debug, Clone)]
pub struct AddTodoCommand {
    pub list_id: String,
    pub title: String,
}

/// Result of a successful add.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddTodoResult {
    pub list_id: TodoListId,
    pub todo_id: TodoId,
    pub title: String,
}

/// Handler for adding todos.
pub struct AddTodoHandler {
    validator: Arc<dyn TitleValidator>,
}

impl AddTodoHandler {
    pub fn new(validator: Arc<dyn TitleValidator>) -> Self {
        Self { validator }
    }

    pub fn handle(
        &self,
        lists: &mut TodoLists,
        cmd: AddTodoCommand,
    ) -> Result<AddTodoResult, TodoError> {
        let list_id = parse_list_id(&cmd.list_id)?;
        let list = lists
            .find_mut(list_id)
            .ok_or_else(|| TodoError::list_not_found(&cmd.list_id))?;

        let title = self
            .validator
            .validate_todo_title(&cmd.title)
            .map_err(TodoError::validation)?;

        let todo = list.add(title);

        Ok(AddTodoResult {
            list_id,
            todo_id: todo.id(),
            title: todo.title().to_string(),
        })
    }
}
