//! OrderTx Engine - Orchestration layer
//!
//! Coordinates the core registration service with the SQLite store and owns
//! operation lifecycle logging.

pub mod commands;
pub mod options;

pub use options::RegistrationOptions;
