//! In-memory page model.
//!
//! Holds the list rows and error region the way a browser page would, and
//! can print them back as markup. Used by tests and by hosts that render a
//! snapshot after each call.

use super::{
    escape_html, RenderSurface, TodoRow, CLEAR_TODOS_ID, ERROR_ID, NEW_TODO_FORM_ID,
    NEW_TODO_TEXT_ID, SHOW_CLASS, TODOS_LIST_ID,
};
use crate::model::todo::TodoId;

const ERROR_BASE_CLASS: &str = "error";

#[derive(Debug, Clone)]
pub struct MemorySurface {
    rows: Vec<TodoRow>,
    error_text: String,
    error_classes: Vec<&'static str>,
    render_count: usize,
}

impl Default for MemorySurface {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            error_text: String::new(),
            error_classes: vec![ERROR_BASE_CLASS],
            render_count: 0,
        }
    }
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[TodoRow] {
        &self.rows
    }

    /// Returns the handle bound to the row at `index`, as a click would.
    pub fn click_row(&self, index: usize) -> Option<TodoId> {
        self.rows.get(index).map(|row| row.todo_id)
    }

    pub fn error_text(&self) -> &str {
        &self.error_text
    }

    pub fn error_classes(&self) -> &[&'static str] {
        &self.error_classes
    }

    pub fn is_error_shown(&self) -> bool {
        self.error_classes.contains(&SHOW_CLASS)
    }

    /// Number of times the list container was cleared for a rebuild.
    pub fn render_count(&self) -> usize {
        self.render_count
    }

    /// Inner markup of the list container.
    pub fn list_html(&self) -> String {
        self.rows
            .iter()
            .map(|row| {
                format!(
                    r#"<li class="{}">{}</li>"#,
                    row.classes.join(" "),
                    escape_html(&row.text)
                )
            })
            .collect()
    }

    /// Markup of the error region element.
    pub fn error_html(&self) -> String {
        format!(
            r#"<div id="{ERROR_ID}" class="{}">{}</div>"#,
            self.error_classes.join(" "),
            escape_html(&self.error_text)
        )
    }

    /// Markup of the whole page body.
    pub fn page_html(&self) -> String {
        format!(
            concat!(
                r#"<form id="{form}"><input id="{input}" type="text">{error}</form>"#,
                r#"<button id="{clear}">Clear</button>"#,
                r#"<ul id="{list}" class="todo">{rows}</ul>"#
            ),
            form = NEW_TODO_FORM_ID,
            input = NEW_TODO_TEXT_ID,
            error = self.error_html(),
            clear = CLEAR_TODOS_ID,
            list = TODOS_LIST_ID,
            rows = self.list_html(),
        )
    }
}

impl RenderSurface for MemorySurface {
    fn clear_rows(&mut self) {
        self.rows.clear();
        self.render_count += 1;
    }

    fn append_row(&mut self, row: TodoRow) {
        self.rows.push(row);
    }

    fn set_error_text(&mut self, text: &str) {
        self.error_text = text.to_string();
    }

    fn add_error_class(&mut self, class: &'static str) {
        if !self.error_classes.contains(&class) {
            self.error_classes.push(class);
        }
    }

    fn remove_error_class(&mut self, class: &'static str) {
        self.error_classes.retain(|existing| *existing != class);
    }
}
