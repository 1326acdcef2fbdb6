//! Persistence layer: key-value stores and the todo list bridge.
//!
//! # Responsibility
//! - Define the synchronous key-value contract the core persists through.
//! - Isolate SQLite details from page/orchestration code.
//!
//! # Invariants
//! - The todo list is always stored whole under `TODOS_STORAGE_KEY`.
//! - A missing or corrupt stored list loads as empty.

pub mod kv_store;
pub mod todo_store;
