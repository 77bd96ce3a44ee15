//! Command orchestration layer.
//!
//! Each command wraps one store or service call with `start`/`end`/
//! `end_error` log events. Lower layers only emit `tracing::debug!` detail.

pub mod catalog;
pub mod engine_command;
pub mod order;
