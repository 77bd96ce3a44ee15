//! Structured logging facility for OrderTx
//!
//! This module provides:
//! - Single initialization point via `init(profile)`
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! # Usage
//!
//! ```rust
//! use ordertx_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```
//!
//! Engine commands own the `start`/`end`/`end_error` events of an operation.
//! Core and store code only emits `tracing::debug!`/`warn!` detail.

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
