//! Presentation ordering for lists and todos.
//!
//! Both entry points partition by completion (not done first), then order
//! each partition by case-insensitive title. Inputs are never reordered;
//! a fresh vector of references is returned.

use std::cmp::Ordering;

use super::aggregate::TodoList;
use super::entity::Todo;

/// Anything that can be ordered by completion and title.
pub trait Titled {
    fn title(&self) -> &str;
    fn is_done(&self) -> bool;
}

impl Titled for Todo {
    fn title(&self) -> &str {
        Todo::title(self)
    }

    fn is_done(&self) -> bool {
        Todo::is_done(self)
    }
}

impl Titled for TodoList {
    fn title(&self) -> &str {
        TodoList::title(self)
    }

    fn is_done(&self) -> bool {
        TodoList::is_done(self)
    }
}

/// Compare titles after lower-casing both, by code point.
pub fn compare_by_title<T: Titled + ?Sized>(a: &T, b: &T) -> Ordering {
    a.title().to_lowercase().cmp(&b.title().to_lowercase())
}

/// Lists ordered not-done first, then by title.
pub fn sort_todo_lists(lists: &[TodoList]) -> Vec<&TodoList> {
    by_completion_then_title(lists)
}

/// The list's todos ordered not-done first, then by title.
pub fn sort_todos(list: &TodoList) -> Vec<&Todo> {
    by_completion_then_title(list.todos())
}

fn by_completion_then_title<'a, T: Titled>(
    items: impl IntoIterator<Item = &'a T>,
) -> Vec<&'a T> {
    let (mut done, mut undone): (Vec<&T>, Vec<&T>) =
        items.into_iter().partition(|item| item.is_done());

    undone.sort_by(|a, b| compare_by_title(*a, *b));
    done.sort_by(|a, b| compare_by_title(*a, *b));

    undone.append(&mut done);
    undone
}
