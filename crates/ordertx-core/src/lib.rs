//! OrderTx Core - order registration domain
//!
//! This crate provides the storage-agnostic half of order registration:
//! - Order, line item, menu and submission models
//! - Submission validation and price computation
//! - Collaborator traits (`ports`) including the `UnitOfWork` boundary
//! - `OrderService`, which runs the whole registration inside one unit of work
//! - An in-memory backend implementing the ports
//! - The error facility and the structured logging facility

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod ports;
pub mod pricing;
pub mod rules;
pub mod service;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, ExResult, OrderError, Result};
pub use model::{MenuItem, Order, OrderLineItem, OrderSubmission, OrderedMenu, RegisteredOrder};
pub use ops::InMemoryStore;
pub use ports::{MenuMapper, OrderMapper, TransactionContext, UnitOfWork};
pub use pricing::PriceMatching;
pub use service::OrderService;
