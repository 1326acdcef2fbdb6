//! Terminal rendering surface.
//!
//! Buffers the rows and error state the core draws, then prints them once
//! the command finishes.

use std::io::{self, Write};
use todo_core::render::{RenderSurface, TodoRow, SHOW_CLASS};

#[derive(Debug, Default)]
pub struct TerminalSurface {
    rows: Vec<TodoRow>,
    rendered: bool,
    error_text: String,
    error_shown: bool,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prints the list as `N. [x] text` lines; nothing if no render ran.
    pub fn write_rows(&self, out: &mut impl Write) -> io::Result<()> {
        if !self.rendered {
            return Ok(());
        }
        if self.rows.is_empty() {
            return writeln!(out, "(no todos)");
        }
        for (index, row) in self.rows.iter().enumerate() {
            let mark = if row.is_done() { 'x' } else { ' ' };
            writeln!(out, "{}. [{mark}] {}", index + 1, row.text)?;
        }
        Ok(())
    }

    /// Prints the error region when it is shown.
    pub fn write_error(&self, out: &mut impl Write) -> io::Result<()> {
        if self.error_shown {
            writeln!(out, "error: {}", self.error_text)?;
        }
        Ok(())
    }
}

impl RenderSurface for TerminalSurface {
    fn clear_rows(&mut self) {
        self.rows.clear();
        self.rendered = true;
    }

    fn append_row(&mut self, row: TodoRow) {
        self.rows.push(row);
    }

    fn set_error_text(&mut self, text: &str) {
        self.error_text = text.to_string();
    }

    fn add_error_class(&mut self, class: &'static str) {
        if class == SHOW_CLASS {
            self.error_shown = true;
        }
    }

    fn remove_error_class(&mut self, class: &'static str) {
        if class == SHOW_CLASS {
            self.error_shown = false;
        }
    }
}
