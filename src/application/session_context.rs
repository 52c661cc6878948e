//! Per-request session context.
//!
//! A `TodoSession` is the live form of a [`SessionRecord`]: it is built at
//! the start of a request, handed explicitly to the handlers that need it,
//! and turned back into a record before the response is sent.

use crate::domain::todo::TodoLists;
use crate::ports::{FlashMessage, SessionRecord};

/// Live session state: the rehydrated lists plus pending flash messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoSession {
    todo_lists: TodoLists,
    flash: Vec<FlashMessage>,
}

impl TodoSession {
    /// A fresh session with no lists.
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh session starting from the given lists.
    pub fn with_todo_lists(todo_lists: TodoLists) -> Self {
        Self {
            todo_lists,
            flash: Vec::new(),
        }
    }

    /// Rehydrate live aggregates from a stored record.
    pub fn from_record(record: SessionRecord) -> Self {
        Self {
            todo_lists: TodoLists::from_records(record.todo_lists, record.next_list_id),
            flash: record.flash,
        }
    }

    /// Snapshot the live state back into plain data.
    pub fn to_record(&self) -> SessionRecord {
        SessionRecord {
            todo_lists: self.todo_lists.to_records(),
            next_list_id: Some(self.todo_lists.next_list_id()),
            flash: self.flash.clone(),
        }
    }

    pub fn todo_lists(&self) -> &TodoLists {
        &self.todo_lists
    }

    pub fn todo_lists_mut(&mut self) -> &mut TodoLists {
        &mut self.todo_lists
    }

    /// Queue a message for the next rendered page.
    pub fn flash(&mut self, message: FlashMessage) {
        self.flash.push(message);
    }

    /// Drain queued messages.
    pub fn take_flash(&mut self) -> Vec<FlashMessage> {
        std::mem::take(&mut self.flash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::TodoListId;
    use crate::domain::todo::fixtures::demo_todo_lists;

    #[test]
    fn record_roundtrip_preserves_lists_counter_and_flash() {
        let mut session = TodoSession::with_todo_lists(demo_todo_lists());
        session.flash(FlashMessage::success("hello"));

        let rebuilt = TodoSession::from_record(session.to_record());

        assert_eq!(rebuilt, session);
        assert_eq!(rebuilt.todo_lists().next_list_id(), TodoListId::new(5));
    }

    #[test]
    fn take_flash_drains_messages() {
        let mut session = TodoSession::new();
        session.flash(FlashMessage::success("one"));
        session.flash(FlashMessage::success("two"));

        assert_eq!(session.take_flash().len(), 2);
        assert!(session.take_flash().is_empty());
        assert!(session.to_record().flash.is_empty());
    }

    #[test]
    fn empty_record_yields_empty_session() {
        let session = TodoSession::from_record(SessionRecord::default());
        assert!(session.todo_lists().is_empty());
        assert_eq!(session.todo_lists().next_list_id(), TodoListId::FIRST);
    }
}
