//! The session-wide collection of todo lists.
//!
//! Not an entity of its own: it is rebuilt from the session record on each
//! request and owns the counter that hands out list ids.

use crate::domain::foundation::TodoListId;

use super::aggregate::TodoList;

/// Ordered sequence of todo lists plus the next list id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoLists {
    lists: Vec<TodoList>,
    next_list_id: TodoListId,
}

impl TodoLists {
    /// An empty collection whose first list will get id 1.
    pub fn new() -> Self {
        Self {
            lists: Vec::new(),
            next_list_id: TodoListId::FIRST,
        }
    }

    /// Reconstitute a collection from persistence.
    ///
    /// The list id counter resumes after the highest id present, or at the
    /// stored counter if that is further along.
    pub fn reconstitute(lists: Vec<TodoList>, next_list_id: Option<TodoListId>) -> Self {
        let after_highest = lists
            .iter()
            .map(|list| list.id().next())
            .max()
            .unwrap_or(TodoListId::FIRST);
        let next_list_id = next_list_id.map_or(after_highest, |stored| stored.max(after_highest));

        Self {
            lists,
            next_list_id,
        }
    }

    /// Lists in creation order.
    pub fn as_slice(&self) -> &[TodoList] {
        &self.lists
    }

    pub fn iter(&self) -> impl Iterator<Item = &TodoList> {
        self.lists.iter()
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// The id the next created list will receive.
    pub fn next_list_id(&self) -> TodoListId {
        self.next_list_id
    }

    /// Create an empty list with the next id and append it.
    pub fn create(&mut self, title: impl Into<String>) -> &mut TodoList {
        let list = TodoList::new(self.next_list_id, title);
        self.next_list_id = self.next_list_id.next();
        self.lists.push(list);
        let last = self.lists.len() - 1;
        &mut self.lists[last]
    }

    pub fn find(&self, id: TodoListId) -> Option<&TodoList> {
        self.lists.iter().find(|list| list.id() == id)
    }

    pub fn find_mut(&mut self, id: TodoListId) -> Option<&mut TodoList> {
        self.lists.iter_mut().find(|list| list.id() == id)
    }

    /// Remove a list by id, returning it if it was present.
    pub fn remove(&mut self, id: TodoListId) -> Option<TodoList> {
        let index = self.lists.iter().position(|list| list.id() == id)?;
        Some(self.lists.remove(index))
    }

    /// Whether any list carries exactly this title.
    pub fn contains_title(&self, title: &str) -> bool {
        self.lists.iter().any(|list| list.title() == title)
    }
}

impl Default for TodoLists {
    fn default() -> Self {
        Self::new()
    }
}
