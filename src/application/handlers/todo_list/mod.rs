//! Todo list command and query handlers.
//!
//! Ids arrive as raw request parameters. Each handler coerces them itself;
//! anything that does not parse is reported as not found.

mod add_todo;
mod complete_all;
mod create_todo_list;
mod delete_todo;
mod delete_todo_list;
mod get_todo_list;
mod list_todo_lists;
mod rename_todo_list;
mod toggle_todo;

pub use add_todo::{AddTodoCommand, AddTodoHandler, AddTodoResult};
pub use complete_all::{CompleteAllCommand, CompleteAllHandler, CompleteAllResult};
pub use create_todo_list::{CreateTodoListCommand, CreateTodoListHandler, CreateTodoListResult};
pub use delete_todo::{DeleteTodoCommand, DeleteTodoHandler, DeleteTodoResult};
pub use delete_todo_list::{DeleteTodoListCommand, DeleteTodoListHandler, DeleteTodoListResult};
pub use get_todo_list::{GetTodoListHandler, GetTodoListQuery, TodoListView, TodoView};
pub use list_todo_lists::{ListTodoListsHandler, TodoListSummary};
pub use rename_todo_list::{RenameTodoListCommand, RenameTodoListHandler, RenameTodoListResult};
pub use toggle_todo::{ToggleTodoCommand, ToggleTodoHandler, ToggleTodoResult};

use crate::domain::foundation::{TodoId, TodoListId};
use crate::domain::todo::TodoError;

fn parse_list_id(raw: &str) -> Result<TodoListId, TodoError> {
    TodoListId::parse(raw).ok_or_else(|| TodoError::list_not_found(raw))
}

fn parse_todo_id(list_id: &str, todo_id: &str) -> Result<TodoId, TodoError> {
    TodoId::parse(todo_id).ok_or_else(|| TodoError::todo_not_found(list_id, todo_id))
}
