//! Rendering surface contract.
//!
//! # Responsibility
//! - Describe the visible page the core draws into, by element id and
//!   class marker.
//! - Build one `TodoRow` per list item, including its click binding.
//!
//! # Invariants
//! - Rows are rebuilt from scratch on every render; a row's `todo_id` is
//!   always the handle of the item it was built from.

pub mod memory;

use crate::model::todo::{Todo, TodoId};

/// List container element id.
pub const TODOS_LIST_ID: &str = "todos";
/// New-item form element id.
pub const NEW_TODO_FORM_ID: &str = "newTodoForm";
/// New-item text input element id.
pub const NEW_TODO_TEXT_ID: &str = "newTodoText";
/// Clear-all control element id.
pub const CLEAR_TODOS_ID: &str = "clearTodos";
/// Error message region element id.
pub const ERROR_ID: &str = "error";

/// Base class of every rendered row.
pub const TODO_TEXT_CLASS: &str = "todo__text";
/// Modifier class for rows of completed items.
pub const TODO_DONE_CLASS: &str = "todo__text--done";
/// Visibility marker of the error region.
pub const SHOW_CLASS: &str = "show";

/// One visible list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoRow {
    /// Item this row toggles when clicked.
    pub todo_id: TodoId,
    pub text: String,
    pub classes: Vec<&'static str>,
}

impl TodoRow {
    pub fn from_todo(todo: &Todo) -> Self {
        let mut classes = Vec::with_capacity(2);
        if todo.done {
            classes.push(TODO_DONE_CLASS);
        }
        classes.push(TODO_TEXT_CLASS);

        Self {
            todo_id: todo.id(),
            text: todo.text.clone(),
            classes,
        }
    }

    pub fn is_done(&self) -> bool {
        self.classes.contains(&TODO_DONE_CLASS)
    }
}

/// Page the core renders into.
///
/// Implementations own whatever widgets or markup back the page; the core
/// only ever talks to it through these calls.
pub trait RenderSurface {
    /// Removes every row from the list container.
    fn clear_rows(&mut self);
    /// Appends one row at the end of the list container.
    fn append_row(&mut self, row: TodoRow);
    /// Replaces the error region text.
    fn set_error_text(&mut self, text: &str);
    /// Adds a class to the error region; no-op when already present.
    fn add_error_class(&mut self, class: &'static str);
    /// Removes a class from the error region; no-op when absent.
    fn remove_error_class(&mut self, class: &'static str);
}

/// Escapes text for use as HTML element content or attribute value.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
