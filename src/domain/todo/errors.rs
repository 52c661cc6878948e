//! Todo-specific error types.

use crate::domain::foundation::ValidationError;

/// Errors raised while looking up or mutating todo lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
    /// No list matches the requested id.
    ListNotFound(String),
    /// The list exists but holds no todo with the requested id.
    TodoNotFound { list_id: String, todo_id: String },
    /// The submitted title was rejected; nothing was changed.
    ValidationFailed(Vec<ValidationError>),
    /// `remove_at` was given a position outside `[0, len)`.
    IndexOutOfBounds { index: usize, len: usize },
}

impl TodoError {
    pub fn list_not_found(list_id: impl Into<String>) -> Self {
        TodoError::ListNotFound(list_id.into())
    }
    pub fn todo_not_found(list_id: impl Into<String>, todo_id: impl Into<String>) -> Self {
        TodoError::TodoNotFound {
            list_id: list_id.into(),
            todo_id: todo_id.into(),
        }
    }
    pub fn validation(errors: Vec<ValidationError>) -> Self {
        TodoError::ValidationFailed(errors)
    }
    pub fn index_out_of_bounds(index: usize, len: usize) -> Self {
        TodoError::IndexOutOfBounds { index, len }
    }
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            TodoError::ListNotFound(_) | TodoError::TodoNotFound { .. }
        )
    }
    pub fn message(&self) -> String {
        match self {
            TodoError::ListNotFound(id) => format!("Todo list not found: {}", id),
            TodoError::TodoNotFound { list_id, todo_id } => {
                format!("Todo {} not found in list {}", todo_id, list_id)
            }
            TodoError::ValidationFailed(errors) => errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" "),
            TodoError::IndexOutOfBounds { index, len } => {
                format!("Index {} out of bounds for list of length {}", index, len)
            }
        }
    }
}

impl std::fmt::Display for TodoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for TodoError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::TitleKind;

    #[test]
    fn both_lookup_failures_are_not_found() {
        assert!(TodoError::list_not_found("9").is_not_found());
        assert!(TodoError::todo_not_found("1", "9").is_not_found());
        assert!(!TodoError::validation(Vec::new()).is_not_found());
    }

    #[test]
    fn validation_message_joins_all_errors() {
        let err = TodoError::validation(vec![
            ValidationError::too_long(TitleKind::List, 100),
            ValidationError::not_unique(TitleKind::List),
        ]);
        assert_eq!(
            err.message(),
            "List title must be between 1 and 100 characters. List title must be unique."
        );
    }

    #[test]
    fn index_error_is_not_a_lookup_failure() {
        let err = TodoError::index_out_of_bounds(3, 2);
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "Index 3 out of bounds for list of length 2");
    }
}
