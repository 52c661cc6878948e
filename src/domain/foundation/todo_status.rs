//! TodoStatus enum for tracking completion of a single todo.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Completion state of a todo.
///
/// Neither state is terminal: `mark_done` and `mark_undone` may be applied
/// from either state, and applying one to a todo already in the target
/// state leaves it unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TodoStatus {
    #[default]
    Pending,
    Done,
}

impl TodoStatus {
    /// Builds a status from the persisted `done` flag.
    pub fn from_done(done: bool) -> Self {
        if done {
            TodoStatus::Done
        } else {
            TodoStatus::Pending
        }
    }

    /// Returns true for `Done`.
    pub fn is_done(&self) -> bool {
        matches!(self, TodoStatus::Done)
    }

    /// Returns the opposite state.
    pub fn toggled(&self) -> Self {
        match self {
            TodoStatus::Pending => TodoStatus::Done,
            TodoStatus::Done => TodoStatus::Pending,
        }
    }
}

impl fmt::Display for TodoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TodoStatus::Pending => "Pending",
            TodoStatus::Done => "Done",
        };
        write!(f, "{}", s)
    }
}
