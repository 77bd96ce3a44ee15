//! SQLite implementation of the core `UnitOfWork`
//!
//! One `run_in_transaction` call maps to one IMMEDIATE transaction. The work
//! closure sees the transaction through `SqliteTxContext`, whose mapper calls
//! go to the repositories.

use crate::errors::persistence;
use crate::repo::{SqliteMenuRepo, SqliteOrderRepo};
use ordertx_core::errors::ExResult;
use ordertx_core::model::{MenuItem, Order, OrderLineItem};
use ordertx_core::ports::{MenuMapper, OrderMapper, TransactionContext, UnitOfWork};
use rusqlite::{Connection, TransactionBehavior};

/// Unit of work over a borrowed connection
pub struct SqliteUnitOfWork<'c> {
    conn: &'c mut Connection,
}

impl<'c> SqliteUnitOfWork<'c> {
    pub fn new(conn: &'c mut Connection) -> Self {
        Self { conn }
    }
}

/// Mapper view of an open transaction
struct SqliteTxContext<'t> {
    conn: &'t Connection,
}

impl MenuMapper for SqliteTxContext<'_> {
    fn select_menu_items_by_codes(&self, codes: &[i64]) -> ExResult<Vec<MenuItem>> {
        SqliteMenuRepo::select_menu_items_by_codes(self.conn, codes)
    }
}

impl OrderMapper for SqliteTxContext<'_> {
    fn insert_order(&self, order: &Order) -> ExResult<i64> {
        SqliteOrderRepo::insert_order(self.conn, order)
    }

    fn insert_order_line_item(&self, line_item: &OrderLineItem) -> ExResult<()> {
        SqliteOrderRepo::insert_order_line_item(self.conn, line_item)
    }
}

impl UnitOfWork for SqliteUnitOfWork<'_> {
    fn run_in_transaction<T, F>(&mut self, work: F) -> ExResult<T>
    where
        F: FnOnce(&dyn TransactionContext) -> ExResult<T>,
    {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(|e| persistence("begin_transaction", e))?;

        let outcome = {
            let ctx = SqliteTxContext { conn: &tx };
            work(&ctx)
        };

        match outcome {
            Ok(value) => {
                tx.commit().map_err(|e| persistence("commit_transaction", e))?;
                Ok(value)
            }
            Err(err) => {
                match tx.rollback() {
                    Ok(()) => tracing::debug!(err_code = err.code(), "Rolled back transaction"),
                    // Dropping the failed transaction still rolls it back
                    Err(rollback_err) => tracing::warn!(
                        err_code = err.code(),
                        rollback_error = %rollback_err,
                        "Explicit rollback failed"
                    ),
                }
                Err(err)
            }
        }
    }
}
