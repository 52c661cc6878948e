//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps, status enums and error types
//! that form the vocabulary of the todo domain.

mod errors;
mod ids;
mod timestamp;
mod todo_status;

pub use errors::{ErrorCode, TitleKind, ValidationError};
pub use ids::{SessionId, TodoId, TodoListId};
pub use timestamp::Timestamp;
pub use todo_status::TodoStatus;
