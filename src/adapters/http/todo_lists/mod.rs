//! HTTP adapter for todo list endpoints.

pub mod dto;
mod extract;
mod handlers;
mod routes;

pub use handlers::TodoHandlers;
pub use routes::todo_list_routes;
