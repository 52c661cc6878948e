//! Todo entity.
//!
//! A todo has no lifetime of its own: it is created by its owning
//! [`TodoList`](super::TodoList), mutated through it, and dropped when
//! removed from it.

use crate::domain::foundation::{TodoId, TodoStatus};

/// A single task with a completion state.
///
/// # Invariants
///
/// - `id` never changes after construction
/// - `title` is stored as given; length and content are checked by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    id: TodoId,
    title: String,
    status: TodoStatus,
}

impl Todo {
    /// Creates a pending todo with the given id.
    pub fn new(id: TodoId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            status: TodoStatus::Pending,
        }
    }

    /// Reconstitute a todo from persisted state, keeping its original id.
    pub fn reconstitute(id: TodoId, title: String, done: bool) -> Self {
        Self {
            id,
            title,
            status: TodoStatus::from_done(done),
        }
    }

    pub fn id(&self) -> TodoId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn status(&self) -> TodoStatus {
        self.status
    }

    pub fn is_done(&self) -> bool {
        self.status.is_done()
    }

    /// Marks the todo done. Idempotent.
    pub fn mark_done(&mut self) {
        self.status = TodoStatus::Done;
    }

    /// Marks the todo not done. Idempotent.
    pub fn mark_undone(&mut self) {
        self.status = TodoStatus::Pending;
    }

    /// Flips the completion state and returns the new one.
    pub fn toggle(&mut self) -> TodoStatus {
        self.status = self.status.toggled();
        self.status
    }
}
