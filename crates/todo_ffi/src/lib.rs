//! Flutter bridge for the todo page core.

pub mod api;
