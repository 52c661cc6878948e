//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Which kind of title a validation rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TitleKind {
    List,
    Todo,
}

impl TitleKind {
    /// Lower-case noun used mid-sentence.
    pub fn noun(&self) -> &'static str {
        match self {
            TitleKind::List => "list",
            TitleKind::Todo => "todo",
        }
    }

    /// Capitalised noun used at the start of a sentence.
    pub fn label(&self) -> &'static str {
        match self {
            TitleKind::List => "List",
            TitleKind::Todo => "Todo",
        }
    }
}

/// A rejected title. The display text is the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("The {} title is required.", .kind.noun())]
    Required { kind: TitleKind },

    #[error("{} title must be between 1 and {max} characters.", .kind.label())]
    TooLong { kind: TitleKind, max: usize },

    #[error("{} title must be unique.", .kind.label())]
    NotUnique { kind: TitleKind },
}

impl ValidationError {
    /// Creates a missing-title error.
    pub fn required(kind: TitleKind) -> Self {
        ValidationError::Required { kind }
    }

    /// Creates a title-too-long error.
    pub fn too_long(kind: TitleKind, max: usize) -> Self {
        ValidationError::TooLong { kind, max }
    }

    /// Creates a duplicate-title error.
    pub fn not_unique(kind: TitleKind) -> Self {
        ValidationError::NotUnique { kind }
    }

    /// Name of the request field the error refers to.
    pub fn field(&self) -> &'static str {
        "title"
    }
}

/// Stable machine-readable error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    InvalidRequest,
    ValidationFailed,
    NotFound,
    SessionStoreError,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::InvalidRequest => "INVALID_REQUEST",
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::SessionStoreError => "SESSION_STORE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}
