//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations. Handlers receive the live
//! collection explicitly; they never reach for ambient session state.

pub mod handlers;
mod session_context;

pub use session_context::TodoSession;
