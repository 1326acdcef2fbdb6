//! Domain model for the todo list.
//!
//! # Responsibility
//! - Define canonical data structures used by core logic.
//!
//! # Invariants
//! - The todo list is an ordered `Vec<Todo>` with no identity beyond
//!   runtime handles.

pub mod todo;
