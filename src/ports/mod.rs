//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SessionStore` - persistence of per-browser session records
//! - `TitleValidator` - title rules applied before any mutation

mod session_store;
mod title_validator;

pub use session_store::{FlashLevel, FlashMessage, SessionRecord, SessionStore, SessionStoreError};
pub use title_validator::TitleValidator;
