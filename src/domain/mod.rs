//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, status, errors)
//! - `todo` - Todo lists, todos, ordering and reconstruction

pub mod foundation;
pub mod todo;
