//! Title rules used by the HTTP service.
//!
//! Titles are trimmed before any rule runs and the trimmed value is what
//! gets stored. Every failing rule is reported.

use crate::domain::foundation::{TitleKind, ValidationError};
use crate::domain::todo::TodoLists;
use crate::ports::TitleValidator;

/// Default maximum title length, in characters.
pub const MAX_TITLE_LENGTH: usize = 100;

/// Length and uniqueness rules for list and todo titles.
#[derive(Debug, Clone)]
pub struct TitleRules {
    max_length: usize,
}

impl TitleRules {
    pub fn new() -> Self {
        Self {
            max_length: MAX_TITLE_LENGTH,
        }
    }

    #[cfg(test)]
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    fn check_length(&self, kind: TitleKind, title: &str, errors: &mut Vec<ValidationError>) {
        if title.is_empty() {
            errors.push(ValidationError::required(kind));
        }
        if title.chars().count() > self.max_length {
            errors.push(ValidationError::too_long(kind, self.max_length));
        }
    }
}

impl Default for TitleRules {
    fn default() -> Self {
        Self::new()
    }
}

impl TitleValidator for TitleRules {
    fn validate_list_title(
        &self,
        title: &str,
        existing: &TodoLists,
    ) -> Result<String, Vec<ValidationError>> {
        let title = title.trim();
        let mut errors = Vec::new();

        self.check_length(TitleKind::List, title, &mut errors);
        if existing.contains_title(title) {
            errors.push(ValidationError::not_unique(TitleKind::List));
        }

        if errors.is_empty() {
            Ok(title.to_string())
        } else {
            Err(errors)
        }
    }

    fn validate_todo_title(&self, title: &str) -> Result<String, Vec<ValidationError>> {
        let title = title.trim();
        let mut errors = Vec::new();

        self.check_length(TitleKind::Todo, title, &mut errors);

        if errors.is_empty() {
            Ok(title.to_string())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lists_with(titles: &[&str]) -> TodoLists {
        let mut lists = TodoLists::new();
        for title in titles {
            lists.create(*title);
        }
        lists
    }

    #[test]
    fn list_title_is_trimmed() {
        let rules = TitleRules::new();
        assert_eq!(
            rules.validate_list_title("  Groceries \n", &TodoLists::new()),
            Ok("Groceries".to_string())
        );
    }

    #[test]
    fn blank_list_title_is_required() {
        let rules = TitleRules::new();
        assert_eq!(
            rules.validate_list_title("   ", &TodoLists::new()),
            Err(vec![ValidationError::required(TitleKind::List)])
        );
    }

    #[test]
    fn list_title_at_max_length_is_accepted() {
        let rules = TitleRules::new();
        let title = "x".repeat(MAX_TITLE_LENGTH);
        assert!(rules.validate_list_title(&title, &TodoLists::new()).is_ok());
    }

    #[test]
    fn list_title_over_max_length_is_rejected() {
        let rules = TitleRules::new();
        let title = "x".repeat(MAX_TITLE_LENGTH + 1);
        assert_eq!(
            rules.validate_list_title(&title, &TodoLists::new()),
            Err(vec![ValidationError::too_long(TitleKind::List, MAX_TITLE_LENGTH)])
        );
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let rules = TitleRules::new().with_max_length(3);
        assert!(rules.validate_todo_title("äöü").is_ok());
    }

    #[test]
    fn duplicate_list_title_is_rejected_after_trimming() {
        let rules = TitleRules::new();
        let lists = lists_with(&["Work"]);
        assert_eq!(
            rules.validate_list_title(" Work ", &lists),
            Err(vec![ValidationError::not_unique(TitleKind::List)])
        );
    }

    #[test]
    fn uniqueness_is_case_sensitive() {
        let rules = TitleRules::new();
        let lists = lists_with(&["Work"]);
        assert!(rules.validate_list_title("work", &lists).is_ok());
    }

    #[test]
    fn all_failing_rules_are_reported() {
        let rules = TitleRules::new().with_max_length(3);
        let lists = lists_with(&["Long"]);
        assert_eq!(
            rules.validate_list_title("Long", &lists),
            Err(vec![
                ValidationError::too_long(TitleKind::List, 3),
                ValidationError::not_unique(TitleKind::List),
            ])
        );
    }

    #[test]
    fn todo_titles_may_repeat() {
        let rules = TitleRules::new();
        assert_eq!(rules.validate_todo_title("Buy milk"), Ok("Buy milk".to_string()));
        assert_eq!(rules.validate_todo_title("Buy milk"), Ok("Buy milk".to_string()));
    }

    #[test]
    fn blank_todo_title_is_required() {
        let rules = TitleRules::new();
        assert_eq!(
            rules.validate_todo_title(""),
            Err(vec![ValidationError::required(TitleKind::Todo)])
        );
    }
}
