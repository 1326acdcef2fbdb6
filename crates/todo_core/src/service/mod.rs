//! Core use-case logic.
//!
//! # Responsibility
//! - Hold the pure list transitions that orchestration composes.
//! - Keep page/host layers decoupled from mutation rules.

pub mod list_ops;
