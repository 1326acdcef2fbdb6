//! Todo domain model.
//!
//! # Responsibility
//! - Define the single record kept in the todo list.
//! - Define the validation error raised when new text is too short.
//!
//! # Invariants
//! - Persisted shape is exactly `{"text": ..., "done": ...}`.
//! - `id` is a runtime handle only; it is regenerated on every load and
//!   never written to storage.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Minimum number of characters accepted for new todo text.
pub const MIN_TODO_TEXT_CHARS: usize = 3;

/// Fixed user-facing message shown when todo text is rejected.
pub const TODO_TOO_SHORT_MESSAGE: &str = "You must enter at least three characters";

/// Runtime handle binding rendered rows to list items.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TodoId = Uuid;

/// One todo item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Todo {
    #[serde(skip, default = "Uuid::new_v4")]
    id: TodoId,
    pub text: String,
    #[serde(default)]
    pub done: bool,
}

impl Todo {
    /// Creates an open (`done = false`) todo with a fresh handle.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_done(text, false)
    }

    /// Creates a todo with an explicit completion flag.
    pub fn with_done(text: impl Into<String>, done: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            done,
        }
    }

    /// Returns the runtime handle of this item.
    pub fn id(&self) -> TodoId {
        self.id
    }
}

/// Structural equality over persisted fields; handles are ignored.
impl PartialEq for Todo {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text && self.done == other.done
    }
}

impl Eq for Todo {}

/// Rejection of new todo text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoValidationError {
    TooShort { len: usize, min: usize },
}

impl Display for TodoValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooShort { .. } => f.write_str(TODO_TOO_SHORT_MESSAGE),
        }
    }
}

impl Error for TodoValidationError {}

/// Boundary envelope for hosts that want a `{success, error_message}` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddResponse {
    pub success: bool,
    pub error_message: String,
}

impl From<Result<(), TodoValidationError>> for AddResponse {
    fn from(value: Result<(), TodoValidationError>) -> Self {
        match value {
            Ok(()) => Self {
                success: true,
                error_message: String::new(),
            },
            Err(err) => Self {
                success: false,
                error_message: err.to_string(),
            },
        }
    }
}
