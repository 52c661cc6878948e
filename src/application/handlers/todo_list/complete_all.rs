//! CompleteAllHandler - Command handler for marking a whole list done.

use crate::domain::foundation::TodoListId;
use crate::domain::todo::{TodoError, TodoLists};

use super::parse_list_id;

/// Command to mark every todo in a list done.
#[derive(Debug, Clone)]
pub struct CompleteAllCommand {
    pub list_id: String,
}

/// Result of completing a list; `completed` counts todos that changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompleteAllResult {
    pub list_id: TodoListId,
    pub completed: usize,
}

/// Handler for completing lists.
#[derive(Debug, Default)]
pub struct CompleteAllHandler;

impl CompleteAllHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(
        &self,
        lists: &mut TodoLists,
        cmd: CompleteAllCommand,
    ) -> Result<CompleteAllResult, TodoError> {
        let list_id = parse_list_id(&cmd.list_id)?;
        let list = lists
            .find_mut(list_id)
            .ok_or_else(|| TodoError::list_not_found(&cmd.list_id))?;

        let completed = list.remaining();
        list.mark_all_done();

        Ok(CompleteAllResult { list_id, completed })
    }
}
