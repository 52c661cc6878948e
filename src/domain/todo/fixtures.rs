//! Demo data for development sessions and tests.

use super::collection::TodoLists;

/// The four demo lists: one partly done, one fully done, one empty and
/// one untouched.
pub fn demo_todo_lists() -> TodoLists {
    let mut lists = TodoLists::new();

    let work = lists.create("Work Todos");
    work.add("Get coffee");
    work.add("Chat with co-workers");
    work.add("Duck out of meeting");
    work.mark_done_by_title("Get coffee");
    work.mark_done_by_title("Chat with co-workers");

    let home = lists.create("Home Todos");
    for title in ["Feed the cats", "Go to bed", "Buy milk", "Study for Launch School"] {
        home.add(title);
        home.mark_done_by_title(title);
    }

    lists.create("Additional Todos");

    let social = lists.create("social todos");
    social.add("Go to Libby's birthday party");

    lists
}
