//! Pure state transitions over the todo list.
//!
//! # Responsibility
//! - Validate and append new todos.
//! - Flip completion, clear, and sort in place.
//!
//! # Invariants
//! - `add_todo` is the only validation gate; a rejected add leaves the list
//!   untouched.
//! - Every operation mutates the caller's `Vec` in place; none replaces it.

use crate::model::todo::{Todo, TodoValidationError, MIN_TODO_TEXT_CHARS};
use icu_collator::{Collator, CollatorError, CollatorOptions, Strength};
use log::warn;

/// Appends a new open todo when `text` has at least three characters.
///
/// Length is counted in Unicode scalar values, so `"åäö"` passes.
///
/// # Errors
/// - Returns `TodoValidationError::TooShort` for text of two characters or
///   fewer. The list is not modified.
pub fn add_todo(text: &str, todos: &mut Vec<Todo>) -> Result<(), TodoValidationError> {
    let len = text.chars().count();
    if len < MIN_TODO_TEXT_CHARS {
        return Err(TodoValidationError::TooShort {
            len,
            min: MIN_TODO_TEXT_CHARS,
        });
    }

    todos.push(Todo::new(text));
    Ok(())
}

/// Flips `done` on one todo.
pub fn change_todo(todo: &mut Todo) {
    todo.done = !todo.done;
}

/// Empties the list while keeping the same container.
pub fn remove_all_todos(todos: &mut Vec<Todo>) {
    todos.clear();
}

/// Sorts ascending by text in root-locale collation order.
///
/// Case and accents are secondary to the base letters, so `"Éclair"` lands
/// between `"apple"` and `"Fish"`. Falls back to code point order if the
/// collator cannot be built.
pub fn sort_todos(todos: &mut [Todo]) {
    match text_collator() {
        Ok(collator) => todos.sort_unstable_by(|a, b| collator.compare(&a.text, &b.text)),
        Err(err) => {
            warn!("event=todo_sort module=service status=degraded error={err}");
            todos.sort_unstable_by(|a, b| a.text.cmp(&b.text));
        }
    }
}

/// Builds the collator used for ordering todo text.
///
/// Root locale at tertiary strength: base letters first, then accents,
/// then case with lowercase ahead of uppercase. Punctuation is not
/// ignored and sorts before letters.
///
/// # Errors
/// - Returns the collator error when the compiled collation data cannot be
///   loaded.
pub fn text_collator() -> Result<Collator, CollatorError> {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Tertiary);
    Collator::try_new(&Default::default(), options)
}

#[cfg(test)]
mod tests {
    use super::{add_todo, change_todo, remove_all_todos, sort_todos, text_collator};
    use crate::model::todo::{Todo, TodoValidationError};
    use std::cmp::Ordering;

    #[test]
    fn add_todo_appends_open_item() {
        let mut todos = vec![Todo::new("first")];

        add_todo("hello world", &mut todos).unwrap();

        assert_eq!(todos.len(), 2);
        assert_eq!(todos[1].text, "hello world");
        assert!(!todos[1].done);
    }

    #[test]
    fn add_todo_boundary_is_three_characters() {
        let mut todos = Vec::new();

        for short in ["", "h", "he"] {
            let err = add_todo(short, &mut todos).unwrap_err();
            assert!(matches!(err, TodoValidationError::TooShort { min: 3, .. }));
        }
        assert!(todos.is_empty());

        add_todo("hey", &mut todos).unwrap();
        assert_eq!(todos.len(), 1);
    }

    #[test]
    fn add_todo_counts_characters_not_bytes() {
        let mut todos = Vec::new();

        // two characters, four bytes
        assert!(add_todo("åä", &mut todos).is_err());
        add_todo("åäö", &mut todos).unwrap();
        assert_eq!(todos.len(), 1);
    }

    #[test]
    fn change_todo_is_its_own_inverse() {
        let mut todo = Todo::with_done("hello", false);

        change_todo(&mut todo);
        assert!(todo.done);

        change_todo(&mut todo);
        assert!(!todo.done);
    }

    #[test]
    fn remove_all_todos_empties_any_list() {
        let mut todos = vec![Todo::with_done("hello", true), Todo::new("world")];
        remove_all_todos(&mut todos);
        assert!(todos.is_empty());

        remove_all_todos(&mut todos);
        assert!(todos.is_empty());
    }

    #[test]
    fn sort_todos_moves_items_not_copies() {
        let mut todos = vec![
            Todo::with_done("Bubbles", true),
            Todo::new("Clean"),
            Todo::with_done("Acrobatics", true),
        ];
        let ids: Vec<_> = todos.iter().map(Todo::id).collect();

        sort_todos(&mut todos);

        let texts: Vec<_> = todos.iter().map(|todo| todo.text.as_str()).collect();
        assert_eq!(texts, ["Acrobatics", "Bubbles", "Clean"]);
        assert_eq!(todos[0].id(), ids[2]);
        assert_eq!(todos[1].id(), ids[0]);
        assert_eq!(todos[2].id(), ids[1]);
    }

    fn sorted_texts(texts: &[&str]) -> Vec<String> {
        let mut todos: Vec<_> = texts.iter().map(|text| Todo::new(*text)).collect();
        sort_todos(&mut todos);
        todos.into_iter().map(|todo| todo.text).collect()
    }

    #[test]
    fn text_collator_orders_case_after_letters() {
        let collator = text_collator().unwrap();
        assert_eq!(collator.compare("apple", "Banana"), Ordering::Less);
        assert_eq!(collator.compare("Zebra", "apple"), Ordering::Greater);
        assert_eq!(collator.compare("a", "A"), Ordering::Less);
        assert_eq!(collator.compare("same", "same"), Ordering::Equal);
        assert_eq!(collator.compare("ab", "abc"), Ordering::Less);
    }

    #[test]
    fn sort_todos_places_accents_and_punctuation_like_a_browser() {
        assert_eq!(
            sorted_texts(&["Fish", "Éclair", "apple", "{brace}"]),
            ["{brace}", "apple", "Éclair", "Fish"]
        );
        assert_eq!(
            sorted_texts(&["zebra", "Ängel", "öl", "Oliv"]),
            ["Ängel", "öl", "Oliv", "zebra"]
        );
    }
}
