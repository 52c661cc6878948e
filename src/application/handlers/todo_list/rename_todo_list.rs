//! RenameTodoListHandler - Command handler for renaming lists.

use std::sync::Arc;

use crate::domain::foundation::TodoListId;
use crate::domain::todo::{TodoError, TodoLists};
use crate::ports::TitleValidator;

use super::parse_list_id;

/// Command to rename a list.
#[derive(Debug, Clone)]
pub struct RenameTodoListCommand {
    pub list_id: String,
    pub title: String,
}

/// Result of successful list rename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameTodoListResult {
    pub list_id: TodoListId,
    pub old_title: String,
    pub new_title: String,
}

/// Handler for renaming lists.
pub struct RenameTodoListHandler {
    validator: Arc<dyn TitleValidator>,
}

impl RenameTodoListHandler {
    pub fn new(validator: Arc<dyn TitleValidator>) -> Self {
        Self { validator }
    }

    pub fn handle(
        &self,
        lists: &mut TodoLists,
        cmd: RenameTodoListCommand,
    ) -> Result<RenameTodoListResult, TodoError> {
        // 1. Resolve the list before looking at the title
        let list_id = parse_list_id(&cmd.list_id)?;
        if lists.find(list_id).is_none() {
            return Err(TodoError::list_not_found(&cmd.list_id));
        }

        // 2. Validate against every list, including this one
        let title = self
            .validator
            .validate_list_title(&cmd.title, lists)
            .map_err(TodoError::validation)?;

        // 3. Apply
        let list = lists
            .find_mut(list_id)
            .ok_or_else(|| TodoError::list_not_found(&cmd.list_id))?;
        let old_title = list.set_title(title);

        Ok(RenameTodoListResult {
            list_id,
            old_title,
            new_title: list.title().to_string(),
        })
    }
}
