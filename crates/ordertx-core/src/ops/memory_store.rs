use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::errors::{ExError, ExErrorKind, ExResult};
use crate::model::{MenuItem, Order, OrderLineItem};
use crate::ports::{MenuMapper, OrderMapper, TransactionContext, UnitOfWork};

#[derive(Debug, Clone, Default)]
struct StoreState {
    menus: BTreeMap<i64, MenuItem>,
    orders: BTreeMap<i64, Order>,
    line_items: Vec<OrderLineItem>,
    last_order_code: i64,
}

/// In-memory backend for the registration ports
///
/// A transaction works on a copy of the state; the copy replaces the
/// committed state only when the work succeeds. Order codes are assigned
/// from a counter that is part of the state, so a rolled back transaction
/// does not consume a code.
///
/// Not thread-safe - designed for single-threaded use and tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    state: StoreState,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store preloaded with catalog entries
    pub fn with_menus(menus: impl IntoIterator<Item = MenuItem>) -> Self {
        let mut store = Self::new();
        for menu in menus {
            store.insert_menu(menu);
        }
        store
    }

    /// Add or replace a catalog entry (outside any transaction)
    pub fn insert_menu(&mut self, menu: MenuItem) {
        self.state.menus.insert(menu.code, menu);
    }

    pub fn order(&self, code: i64) -> Option<&Order> {
        self.state.orders.get(&code)
    }

    /// Committed line items of one order, in insertion order
    pub fn line_items_for(&self, order_code: i64) -> Vec<&OrderLineItem> {
        self.state
            .line_items
            .iter()
            .filter(|item| item.order_code == order_code)
            .collect()
    }

    pub fn order_count(&self) -> usize {
        self.state.orders.len()
    }

    pub fn line_item_count(&self) -> usize {
        self.state.line_items.len()
    }
}

/// Open transaction over a staged copy of the state
struct StagedTransaction {
    state: RefCell<StoreState>,
}

impl MenuMapper for StagedTransaction {
    fn select_menu_items_by_codes(&self, codes: &[i64]) -> ExResult<Vec<MenuItem>> {
        let state = self.state.borrow();
        Ok(codes
            .iter()
            .filter_map(|code| state.menus.get(code).cloned())
            .collect())
    }
}

impl OrderMapper for StagedTransaction {
    fn insert_order(&self, order: &Order) -> ExResult<i64> {
        let mut state = self.state.borrow_mut();
        let code = state.last_order_code.checked_add(1).ok_or_else(|| {
            ExError::new(ExErrorKind::Persistence)
                .with_op("insert_order")
                .with_message("Order code sequence exhausted")
        })?;

        let mut stored = order.clone();
        stored.code = Some(code);
        state.orders.insert(code, stored);
        state.last_order_code = code;

        Ok(code)
    }

    fn insert_order_line_item(&self, line_item: &OrderLineItem) -> ExResult<()> {
        let mut state = self.state.borrow_mut();

        if !state.orders.contains_key(&line_item.order_code) {
            return Err(ExError::new(ExErrorKind::ConstraintViolation)
                .with_op("insert_order_line_item")
                .with_entity_id(line_item.order_code.to_string())
                .with_message("Line item references an unknown order"));
        }
        if !state.menus.contains_key(&line_item.menu_code) {
            return Err(ExError::new(ExErrorKind::ConstraintViolation)
                .with_op("insert_order_line_item")
                .with_entity_id(line_item.menu_code.to_string())
                .with_message("Line item references an unknown menu"));
        }

        state.line_items.push(line_item.clone());
        Ok(())
    }
}

impl UnitOfWork for InMemoryStore {
    fn run_in_transaction<T, F>(&mut self, work: F) -> ExResult<T>
    where
        F: FnOnce(&dyn TransactionContext) -> ExResult<T>,
    {
        let staged = StagedTransaction {
            state: RefCell::new(self.state.clone()),
        };

        match work(&staged) {
            Ok(value) => {
                self.state = staged.state.into_inner();
                Ok(value)
            }
            Err(err) => {
                tracing::debug!(err_code = err.code(), "Discarded staged in-memory transaction");
                Err(err)
            }
        }
    }
}
