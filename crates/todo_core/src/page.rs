//! Page capabilities: the injectable operation set orchestration runs on.
//!
//! # Responsibility
//! - Group the list mutations, the render step and the error display behind
//!   one trait so callers can substitute any of them.
//! - Provide `Page`, the production implementation over a key-value store
//!   and a render surface.
//!
//! # Invariants
//! - `create_html` persists before it touches the surface; a store failure
//!   leaves the visible rows as they were.
//! - After a successful `create_html`, stored JSON and the given list hold
//!   the same `(text, done)` sequence.

use crate::model::todo::{Todo, TodoId, TodoValidationError};
use crate::render::{RenderSurface, TodoRow, SHOW_CLASS};
use crate::repo::kv_store::{KeyValueStore, StoreError};
use crate::repo::todo_store::{load_todos, save_todos};
use crate::service::list_ops;
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type PageResult<T> = Result<T, PageError>;

/// Orchestration failure.
#[derive(Debug)]
pub enum PageError {
    Store(StoreError),
    /// A row binding pointed at an item no longer in the list.
    TodoNotFound(TodoId),
}

impl Display for PageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::TodoNotFound(id) => write!(f, "todo not found: {id}"),
        }
    }
}

impl Error for PageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::TodoNotFound(_) => None,
        }
    }
}

impl From<StoreError> for PageError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Operations orchestration composes.
///
/// Mutations default to `service::list_ops`; `create_html` and
/// `display_error` depend on the host page and must be provided.
pub trait TodoCapabilities {
    fn add_todo(&mut self, text: &str, todos: &mut Vec<Todo>) -> Result<(), TodoValidationError> {
        list_ops::add_todo(text, todos)
    }

    fn change_todo(&mut self, todo: &mut Todo) {
        list_ops::change_todo(todo);
    }

    fn remove_all_todos(&mut self, todos: &mut Vec<Todo>) {
        list_ops::remove_all_todos(todos);
    }

    fn sort_todos(&mut self, todos: &mut [Todo]) {
        list_ops::sort_todos(todos);
    }

    /// Persists `todos` and rebuilds the visible list from it.
    fn create_html(&mut self, todos: &[Todo]) -> PageResult<()>;

    /// Sets the error text and shows or hides the error region.
    fn display_error(&mut self, message: &str, show: bool);
}

/// Production page: persists through `S`, draws into `R`.
pub struct Page<S: KeyValueStore, R: RenderSurface> {
    store: S,
    surface: R,
}

impl<S: KeyValueStore, R: RenderSurface> Page<S, R> {
    pub fn new(store: S, surface: R) -> Self {
        Self { store, surface }
    }

    /// Reads the persisted list; see [`load_todos`].
    pub fn load_todos(&self) -> Vec<Todo> {
        load_todos(&self.store)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn surface(&self) -> &R {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut R {
        &mut self.surface
    }

    pub fn into_parts(self) -> (S, R) {
        (self.store, self.surface)
    }
}

impl<S: KeyValueStore, R: RenderSurface> TodoCapabilities for Page<S, R> {
    fn create_html(&mut self, todos: &[Todo]) -> PageResult<()> {
        save_todos(&mut self.store, todos)?;

        self.surface.clear_rows();
        for todo in todos {
            self.surface.append_row(TodoRow::from_todo(todo));
        }

        debug!(
            "event=render module=page status=ok rows={} done={}",
            todos.len(),
            todos.iter().filter(|todo| todo.done).count()
        );
        Ok(())
    }

    fn display_error(&mut self, message: &str, show: bool) {
        self.surface.set_error_text(message);
        if show {
            self.surface.add_error_class(SHOW_CLASS);
        } else {
            self.surface.remove_error_class(SHOW_CLASS);
        }
    }
}
