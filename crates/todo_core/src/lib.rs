//! Core logic for the todo page.
//! This crate owns the list state, its transitions, persistence and render
//! step; hosts only translate input into `PageEvent`s.

pub mod app;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod page;
pub mod render;
pub mod repo;
pub mod service;

pub use app::{PageEvent, SubmitOutcome, TodoApp};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::todo::{AddResponse, Todo, TodoId, TodoValidationError, TODO_TOO_SHORT_MESSAGE};
pub use page::{Page, PageError, PageResult, TodoCapabilities};
pub use render::memory::MemorySurface;
pub use render::{RenderSurface, TodoRow};
pub use repo::kv_store::{KeyValueStore, MemoryStore, SqliteStore, StoreError, StoreResult};
pub use repo::todo_store::{load_todos, save_todos, TODOS_STORAGE_KEY};
pub use service::list_ops::{add_todo, change_todo, remove_all_todos, sort_todos};

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
