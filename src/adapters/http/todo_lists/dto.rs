//! HTTP DTOs for todo list endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::application::handlers::todo_list::{TodoListSummary, TodoListView, TodoView};
use crate::ports::FlashMessage;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Body of every request that submits a title.
///
/// A missing title is treated as empty so that it fails validation with the
/// usual message instead of a deserialization error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TitleRequest {
    #[serde(default)]
    pub title: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// One row of the lists overview.
#[derive(Debug, Clone, Serialize)]
pub struct TodoListSummaryResponse {
    pub id: u32,
    pub title: String,
    pub is_done: bool,
    pub todo_count: usize,
    pub remaining: usize,
}

impl From<TodoListSummary> for TodoListSummaryResponse {
    fn from(summary: TodoListSummary) -> Self {
        Self {
            id: summary.id.value(),
            title: summary.title,
            is_done: summary.is_done,
            todo_count: summary.todo_count,
            remaining: summary.remaining,
        }
    }
}

/// GET /lists
#[derive(Debug, Clone, Serialize)]
pub struct TodoListsResponse {
    pub todo_lists: Vec<TodoListSummaryResponse>,
    pub flash: Vec<FlashMessage>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TodoResponse {
    pub id: u32,
    pub title: String,
    pub done: bool,
}

impl From<TodoView> for TodoResponse {
    fn from(view: TodoView) -> Self {
        Self {
            id: view.id.value(),
            title: view.title,
            done: view.done,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TodoListHeader {
    pub id: u32,
    pub title: String,
    pub is_done: bool,
}

/// GET /lists/:list_id
#[derive(Debug, Clone, Serialize)]
pub struct TodoListResponse {
    pub todo_list: TodoListHeader,
    pub todos: Vec<TodoResponse>,
    pub flash: Vec<FlashMessage>,
}

impl TodoListResponse {
    pub fn new(view: TodoListView, flash: Vec<FlashMessage>) -> Self {
        Self {
            todo_list: TodoListHeader {
                id: view.id.value(),
                title: view.title,
                is_done: view.is_done,
            },
            todos: view.todos.into_iter().map(TodoResponse::from).collect(),
            flash,
        }
    }
}
