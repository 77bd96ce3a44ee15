//! OrderTx Store - SQLite persistence for order registration
//!
//! Provides:
//! - Connection setup and embedded, checksummed migrations
//! - Menu and order repositories
//! - `SqliteUnitOfWork`, the transactional implementation of the core ports
//! - YAML menu catalog import

pub mod catalog;
pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;
pub mod unit_of_work;

// Re-export key types
pub use errors::Result;
pub use unit_of_work::SqliteUnitOfWork;
