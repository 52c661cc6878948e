//! Strongly-typed identifier value objects.
//!
//! List and todo ids are small sequential integers scoped to their owner
//! (the session's collection for lists, the list for todos). Session ids
//! are random UUIDs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use uuid::Uuid;

/// Identifier of a todo list, unique within one session's collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoListId(u32);

impl TodoListId {
    /// The first id handed out by an empty collection.
    pub const FIRST: TodoListId = TodoListId(1);

    /// Wraps a raw numeric id.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw numeric value.
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// Returns the id that follows this one.
    pub fn next(&self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Coerces a request parameter into an id.
    ///
    /// Non-numeric, negative or out-of-range input yields `None`, which
    /// callers treat as "not found".
    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim().parse().ok()
    }
}

impl fmt::Display for TodoListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TodoListId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// Identifier of a todo, unique within its owning list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(u32);

impl TodoId {
    /// The first id handed out by an empty list.
    pub const FIRST: TodoId = TodoId(1);

    /// Wraps a raw numeric id.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw numeric value.
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// Returns the id that follows this one.
    pub fn next(&self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Coerces a request parameter into an id. See [`TodoListId::parse`].
    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim().parse().ok()
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TodoId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// Unique identifier for a browser session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Creates a new random SessionId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a SessionId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_id_parses_numeric_parameter() {
        assert_eq!(TodoListId::parse("42"), Some(TodoListId::new(42)));
    }

    #[test]
    fn list_id_rejects_non_numeric_parameter() {
        assert_eq!(TodoListId::parse("abc"), None);
        assert_eq!(TodoListId::parse(""), None);
        assert_eq!(TodoListId::parse("1.5"), None);
    }

    #[test]
    fn list_id_rejects_negative_and_overflowing_parameters() {
        assert_eq!(TodoListId::parse("-1"), None);
        assert_eq!(TodoListId::parse("99999999999999999999"), None);
    }

    #[test]
    fn todo_id_parse_mirrors_list_id() {
        assert_eq!(TodoId::parse("7"), Some(TodoId::new(7)));
        assert_eq!(TodoId::parse("seven"), None);
    }

    #[test]
    fn next_increments_by_one() {
        assert_eq!(TodoListId::FIRST.next(), TodoListId::new(2));
        assert_eq!(TodoId::FIRST.next(), TodoId::new(2));
    }

    #[test]
    fn numeric_ids_serialize_as_plain_numbers() {
        assert_eq!(serde_json::to_string(&TodoListId::new(3)).unwrap(), "3");
        let id: TodoId = serde_json::from_str("5").unwrap();
        assert_eq!(id, TodoId::new(5));
    }

    #[test]
    fn session_id_roundtrips_through_string() {
        let id = SessionId::new();
        let parsed: SessionId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn session_ids_are_unique() {
        assert_ne!(SessionId::new(), SessionId::new());
    }
}
