//! Title Validator Port - validation capability for list and todo titles.
//!
//! Entities store whatever title they are handed. The application layer
//! runs submitted titles through this port first and only mutates on
//! success.

use crate::domain::foundation::ValidationError;
use crate::domain::todo::TodoLists;

/// Port for validating and normalising user-submitted titles.
///
/// # Contract
///
/// - On success, returns the normalised title that should be stored
/// - On failure, returns every rule the title broke, in rule order
pub trait TitleValidator: Send + Sync {
    /// Validate a list title against the rules and the sibling lists.
    fn validate_list_title(
        &self,
        title: &str,
        existing: &TodoLists,
    ) -> Result<String, Vec<ValidationError>>;

    /// Validate a todo title. Duplicates within a list are allowed.
    fn validate_todo_title(&self, title: &str) -> Result<String, Vec<ValidationError>>;
}
