//! Todo domain module.
//!
//! Lists and their todos, the rules for identity and completion, the
//! presentation ordering, and the plain-data records used to carry them
//! through the session store.
//!
//! # Ownership
//!
//! [`TodoLists`] owns its lists and the list id counter; each [`TodoList`]
//! owns its todos and the todo id counter. Nothing is shared between lists.

mod aggregate;
mod collection;
mod entity;
mod errors;
pub mod fixtures;
pub mod snapshot;
pub mod sorting;

pub use aggregate::TodoList;
pub use collection::TodoLists;
pub use entity::Todo;
pub use errors::TodoError;
pub use snapshot::{make_todo_list, TodoListRecord, TodoRecord};
pub use sorting::{compare_by_title, sort_todo_lists, sort_todos, Titled};
