//! HTTP routes for todo list endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    add_todo, complete_all, create_todo_list, delete_todo, delete_todo_list, get_todo_list,
    list_todo_lists, rename_todo_list, toggle_todo, TodoHandlers,
};

/// Creates the todo list router with all endpoints.
///
/// Routes need [`session_middleware`](crate::adapters::http::session_middleware)
/// layered above them.
pub fn todo_list_routes(handlers: TodoHandlers) -> Router {
    Router::new()
        .route("/lists", get(list_todo_lists).post(create_todo_list))
        .route("/lists/:list_id", get(get_todo_list))
        .route("/lists/:list_id/edit", post(rename_todo_list))
        .route("/lists/:list_id/destroy", post(delete_todo_list))
        .route("/lists/:list_id/complete_all", post(complete_all))
        .route("/lists/:list_id/todos", post(add_todo))
        .route("/lists/:list_id/todos/:todo_id/toggle", post(toggle_todo))
        .route("/lists/:list_id/todos/:todo_id/destroy", post(delete_todo))
        .with_state(handlers)
}
