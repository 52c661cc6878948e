//! TodoList aggregate.
//!
//! A list exclusively owns its todos and hands out their ids. Titles are
//! trusted as given: trimming, length and uniqueness are enforced by the
//! `TitleValidator` port before the application layer calls in here.

use crate::domain::foundation::{TodoId, TodoListId};

use super::entity::Todo;
use super::errors::TodoError;

/// An ordered collection of todos with a title.
///
/// # Invariants
///
/// - `id` never changes after construction
/// - todo ids are unique within the list and never reused after removal
/// - insertion order is preserved; duplicate todo titles are allowed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoList {
    id: TodoListId,
    title: String,
    todos: Vec<Todo>,
    next_todo_id: TodoId,
}

impl TodoList {
    /// Create an empty list.
    pub fn new(id: TodoListId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            todos: Vec::new(),
            next_todo_id: TodoId::FIRST,
        }
    }

    /// Reconstitute a list from persistence (no validation).
    ///
    /// The todo id counter resumes after the highest id present, or at the
    /// stored counter if that is further along.
    pub fn reconstitute(
        id: TodoListId,
        title: String,
        todos: Vec<Todo>,
        next_todo_id: Option<TodoId>,
    ) -> Self {
        let after_highest = todos
            .iter()
            .map(|todo| todo.id().next())
            .max()
            .unwrap_or(TodoId::FIRST);
        let next_todo_id = next_todo_id.map_or(after_highest, |stored| stored.max(after_highest));

        Self {
            id,
            title,
            todos,
            next_todo_id,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> TodoListId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Todos in insertion order.
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Number of todos not yet done.
    pub fn remaining(&self) -> usize {
        self.todos.iter().filter(|todo| !todo.is_done()).count()
    }

    /// The id the next added todo will receive.
    pub fn next_todo_id(&self) -> TodoId {
        self.next_todo_id
    }

    /// A list is done when it has at least one todo and all of them are done.
    pub fn is_done(&self) -> bool {
        !self.todos.is_empty() && self.todos.iter().all(Todo::is_done)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Lookup
    // ─────────────────────────────────────────────────────────────────────────

    /// Position of the todo with the given id.
    pub fn find_index_of(&self, todo_id: TodoId) -> Option<usize> {
        self.todos.iter().position(|todo| todo.id() == todo_id)
    }

    pub fn find(&self, todo_id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id() == todo_id)
    }

    pub fn find_mut(&mut self, todo_id: TodoId) -> Option<&mut Todo> {
        self.todos.iter_mut().find(|todo| todo.id() == todo_id)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Create a todo with the next id and append it.
    pub fn add(&mut self, title: impl Into<String>) -> &Todo {
        let todo = Todo::new(self.next_todo_id, title);
        self.next_todo_id = self.next_todo_id.next();
        self.todos.push(todo);
        &self.todos[self.todos.len() - 1]
    }

    /// Remove and return the todo at `index`.
    ///
    /// # Errors
    ///
    /// - `IndexOutOfBounds` if `index >= len`. Callers derive the index from
    ///   [`find_index_of`](Self::find_index_of), so this signals a bug.
    pub fn remove_at(&mut self, index: usize) -> Result<Todo, TodoError> {
        if index >= self.todos.len() {
            return Err(TodoError::index_out_of_bounds(index, self.todos.len()));
        }
        Ok(self.todos.remove(index))
    }

    /// Mark every todo done. No-op on an empty list.
    pub fn mark_all_done(&mut self) {
        self.todos.iter_mut().for_each(Todo::mark_done);
    }

    /// Replace the title unconditionally and return the old one.
    pub fn set_title(&mut self, title: impl Into<String>) -> String {
        std::mem::replace(&mut self.title, title.into())
    }

    /// Mark the first todo titled exactly `title` as done; no-op if none.
    ///
    /// Only used to build fixtures. Request flows address todos by id.
    pub(crate) fn mark_done_by_title(&mut self, title: &str) {
        if let Some(todo) = self.todos.iter_mut().find(|todo| todo.title() == title) {
            todo.mark_done();
        }
    }
}
