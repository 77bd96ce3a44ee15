//! Collaborator traits the registration service depends on
//!
//! Storage backends implement the two mapper traits on whatever object holds
//! their open transaction, and implement [`UnitOfWork`] to hand that object
//! to the service's work closure.

use crate::errors::ExResult;
use crate::model::{MenuItem, Order, OrderLineItem};

/// Batch menu lookup
pub trait MenuMapper {
    /// Return one `MenuItem` per requested code, in request order
    ///
    /// Repeated codes yield repeated items. Unknown codes are skipped, so the
    /// result is shorter than `codes` when any code is missing.
    fn select_menu_items_by_codes(&self, codes: &[i64]) -> ExResult<Vec<MenuItem>>;
}

/// Order and line item inserts
pub trait OrderMapper {
    /// Insert the order header and return the generated order code
    fn insert_order(&self, order: &Order) -> ExResult<i64>;

    fn insert_order_line_item(&self, line_item: &OrderLineItem) -> ExResult<()>;
}

/// Everything available inside a transaction
pub trait TransactionContext: MenuMapper + OrderMapper {}

impl<T: MenuMapper + OrderMapper> TransactionContext for T {}

/// Transaction boundary provider
pub trait UnitOfWork {
    /// Run `work` inside one transaction
    ///
    /// Commits when `work` returns `Ok`. On `Err` every write made through
    /// the context is rolled back and the error is returned unchanged.
    ///
    /// # Errors
    /// The work's own error, or a `Persistence` error if the transaction
    /// could not be opened or committed.
    fn run_in_transaction<T, F>(&mut self, work: F) -> ExResult<T>
    where
        F: FnOnce(&dyn TransactionContext) -> ExResult<T>;
}

impl<U: UnitOfWork> UnitOfWork for &mut U {
    fn run_in_transaction<T, F>(&mut self, work: F) -> ExResult<T>
    where
        F: FnOnce(&dyn TransactionContext) -> ExResult<T>,
    {
        (**self).run_in_transaction(work)
    }
}
