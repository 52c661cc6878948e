//! HTTP handlers for todo list endpoints.
//!
//! Queries answer with JSON and drain pending flash messages. Commands
//! answer with a 303 redirect and queue a flash message for the next page.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::adapters::http::middleware::ActiveSession;
use crate::application::handlers::todo_list::{
    AddTodoCommand, AddTodoHandler, CompleteAllCommand, CompleteAllHandler,
    CreateTodoListCommand, CreateTodoListHandler, DeleteTodoCommand, DeleteTodoHandler,
    DeleteTodoListCommand, DeleteTodoListHandler, GetTodoListHandler, GetTodoListQuery,
    ListTodoListsHandler, RenameTodoListCommand, RenameTodoListHandler, ToggleTodoCommand,
    ToggleTodoHandler,
};
use crate::domain::todo::TodoError;
use crate::ports::{FlashMessage, TitleValidator};

use super::dto::{TodoListResponse, TodoListSummaryResponse, TodoListsResponse};
use super::extract::TitleBody;

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct TodoHandlers {
    list_handler: Arc<ListTodoListsHandler>,
    get_handler: Arc<GetTodoListHandler>,
    create_handler: Arc<CreateTodoListHandler>,
    rename_handler: Arc<RenameTodoListHandler>,
    delete_list_handler: Arc<DeleteTodoListHandler>,
    add_todo_handler: Arc<AddTodoHandler>,
    toggle_handler: Arc<ToggleTodoHandler>,
    delete_todo_handler: Arc<DeleteTodoHandler>,
    complete_all_handler: Arc<CompleteAllHandler>,
}

impl TodoHandlers {
    /// Wire every handler; the ones that accept titles share `validator`.
    pub fn new(validator: Arc<dyn TitleValidator>) -> Self {
        Self {
            list_handler: Arc::new(ListTodoListsHandler::new()),
            get_handler: Arc::new(GetTodoListHandler::new()),
            create_handler: Arc::new(CreateTodoListHandler::new(validator.clone())),
            rename_handler: Arc::new(RenameTodoListHandler::new(validator.clone())),
            delete_list_handler: Arc::new(DeleteTodoListHandler::new()),
            add_todo_handler: Arc::new(AddTodoHandler::new(validator)),
            toggle_handler: Arc::new(ToggleTodoHandler::new()),
            delete_todo_handler: Arc::new(DeleteTodoHandler::new()),
            complete_all_handler: Arc::new(CompleteAllHandler::new()),
        }
    }
}

fn list_path(list_id: impl std::fmt::Display) -> String {
    format!("/lists/{}", list_id)
}

// ════════════════════════════════════════════════════════════════════════════
// Queries
// ════════════════════════════════════════════════════════════════════════════

/// GET /lists - All lists, not-done first then by title
pub async fn list_todo_lists(
    State(handlers): State<TodoHandlers>,
    ActiveSession(handle): ActiveSession,
) -> Response {
    let mut session = handle.lock().await;
    let todo_lists = handlers
        .list_handler
        .handle(session.todo_lists())
        .into_iter()
        .map(TodoListSummaryResponse::from)
        .collect();

    let response = TodoListsResponse {
        todo_lists,
        flash: session.take_flash(),
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// GET /lists/:list_id - One list with its todos, not-done first then by title
pub async fn get_todo_list(
    State(handlers): State<TodoHandlers>,
    ActiveSession(handle): ActiveSession,
    Path(list_id): Path<String>,
) -> Response {
    let mut session = handle.lock().await;

    match handlers
        .get_handler
        .handle(session.todo_lists(), GetTodoListQuery { list_id })
    {
        Ok(view) => {
            let response = TodoListResponse::new(view, session.take_flash());
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_todo_error(e, None),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// List commands
// ════════════════════════════════════════════════════════════════════════════

/// POST /lists - Create a new list
pub async fn create_todo_list(
    State(handlers): State<TodoHandlers>,
    ActiveSession(handle): ActiveSession,
    TitleBody(req): TitleBody,
) -> Response {
    let mut session = handle.lock().await;
    let cmd = CreateTodoListCommand {
        title: req.title.clone(),
    };

    match handlers.create_handler.handle(session.todo_lists_mut(), cmd) {
        Ok(_) => {
            session.flash(FlashMessage::success("The todo list has been created."));
            Redirect::to("/lists").into_response()
        }
        Err(e) => handle_todo_error(e, Some(req.title)),
    }
}

/// POST /lists/:list_id/edit - Rename a list
pub async fn rename_todo_list(
    State(handlers): State<TodoHandlers>,
    ActiveSession(handle): ActiveSession,
    Path(list_id): Path<String>,
    TitleBody(req): TitleBody,
) -> Response {
    let mut session = handle.lock().await;
    let cmd = RenameTodoListCommand {
        list_id,
        title: req.title.clone(),
    };

    match handlers.rename_handler.handle(session.todo_lists_mut(), cmd) {
        Ok(result) => {
            session.flash(FlashMessage::success("Todo list updated."));
            Redirect::to(&list_path(result.list_id)).into_response()
        }
        Err(e) => handle_todo_error(e, Some(req.title)),
    }
}

/// POST /lists/:list_id/destroy - Delete a list and its todos
pub async fn delete_todo_list(
    State(handlers): State<TodoHandlers>,
    ActiveSession(handle): ActiveSession,
    Path(list_id): Path<String>,
) -> Response {
    let mut session = handle.lock().await;
    let cmd = DeleteTodoListCommand { list_id };

    match handlers.delete_list_handler.handle(session.todo_lists_mut(), cmd) {
        Ok(_) => {
            session.flash(FlashMessage::success("Todo list deleted."));
            Redirect::to("/lists").into_response()
        }
        Err(e) => handle_todo_error(e, None),
    }
}

/// POST /lists/:list_id/complete_all - Mark every todo done
pub async fn complete_all(
    State(handlers): State<TodoHandlers>,
    ActiveSession(handle): ActiveSession,
    Path(list_id): Path<String>,
) -> Response {
    let mut session = handle.lock().await;
    let cmd = CompleteAllCommand { list_id };

    match handlers.complete_all_handler.handle(session.todo_lists_mut(), cmd) {
        Ok(result) => {
            session.flash(FlashMessage::success("All todos have been marked as done."));
            Redirect::to(&list_path(result.list_id)).into_response()
        }
        Err(e) => handle_todo_error(e, None),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Todo commands
// ════════════════════════════════════════════════════════════════════════════

/// POST /lists/:list_id/todos - Add a todo
pub async fn add_todo(
    State(handlers): State<TodoHandlers>,
    ActiveSession(handle): ActiveSession,
    Path(list_id): Path<String>,
    TitleBody(req): TitleBody,
) -> Response {
    let mut session = handle.lock().await;
    let cmd = AddTodoCommand {
        list_id,
        title: req.title.clone(),
    };

    match handlers.add_todo_handler.handle(session.todo_lists_mut(), cmd) {
        Ok(result) => {
            session.flash(FlashMessage::success("The todo has been created."));
            Redirect::to(&list_path(result.list_id)).into_response()
        }
        Err(e) => handle_todo_error(e, Some(req.title)),
    }
}

/// POST /lists/:list_id/todos/:todo_id/toggle - Flip a todo's completion
pub async fn toggle_todo(
    State(handlers): State<TodoHandlers>,
    ActiveSession(handle): ActiveSession,
    Path((list_id, todo_id)): Path<(String, String)>,
) -> Response {
    let mut session = handle.lock().await;
    let cmd = ToggleTodoCommand { list_id, todo_id };

    match handlers.toggle_handler.handle(session.todo_lists_mut(), cmd) {
        Ok(result) => {
            let message = if result.done {
                format!("{} marked done.", result.title)
            } else {
                format!("{} marked as NOT done.", result.title)
            };
            session.flash(FlashMessage::success(message));
            Redirect::to(&list_path(result.list_id)).into_response()
        }
        Err(e) => handle_todo_error(e, None),
    }
}

/// POST /lists/:list_id/todos/:todo_id/destroy - Delete a todo
pub async fn delete_todo(
    State(handlers): State<TodoHandlers>,
    ActiveSession(handle): ActiveSession,
    Path((list_id, todo_id)): Path<(String, String)>,
) -> Response {
    let mut session = handle.lock().await;
    let cmd = DeleteTodoCommand { list_id, todo_id };

    match handlers.delete_todo_handler.handle(session.todo_lists_mut(), cmd) {
        Ok(result) => {
            session.flash(FlashMessage::success("The todo has been deleted."));
            Redirect::to(&list_path(result.list_id)).into_response()
        }
        Err(e) => handle_todo_error(e, None),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

/// Map a todo error to its status code and JSON body.
fn handle_todo_error(error: TodoError, submitted_title: Option<String>) -> Response {
    if error.is_not_found() {
        tracing::warn!(error = %error, "Todo lookup failed");
        return ErrorResponse::not_found().with_status(StatusCode::NOT_FOUND);
    }

    match error {
        TodoError::ValidationFailed(errors) => {
            tracing::debug!(count = errors.len(), "Title rejected");
            ErrorResponse::validation(&errors, submitted_title)
                .with_status(StatusCode::UNPROCESSABLE_ENTITY)
        }
        other => {
            tracing::error!(error = %other, "Todo operation failed");
            ErrorResponse::internal("Something went wrong.")
                .with_status(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
