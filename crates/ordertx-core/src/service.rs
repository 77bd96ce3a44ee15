//! Order registration service

use crate::errors::ExResult;
use crate::model::{Order, OrderLineItem, OrderSubmission, RegisteredOrder};
use crate::ports::{TransactionContext, UnitOfWork};
use crate::pricing::{compute_total_price, PriceMatching};
use crate::rules::validate_submission;

/// Registers orders through a [`UnitOfWork`]
///
/// The lookup, the header insert and every line item insert share one
/// transaction. Errors are never caught here; the unit of work rolls back.
pub struct OrderService<U: UnitOfWork> {
    uow: U,
    matching: PriceMatching,
}

impl<U: UnitOfWork> OrderService<U> {
    pub fn new(uow: U) -> Self {
        Self {
            uow,
            matching: PriceMatching::default(),
        }
    }

    pub fn with_price_matching(mut self, matching: PriceMatching) -> Self {
        self.matching = matching;
        self
    }

    pub fn price_matching(&self) -> PriceMatching {
        self.matching
    }

    /// Register a new order
    ///
    /// 1. Validate the submission
    /// 2. Look up menus for the submitted codes (one batch)
    /// 3. Compute the total from looked-up prices
    /// 4. Insert the order and take the generated code
    /// 5. Insert one line item per submitted entry
    ///
    /// Steps 2-5 run in one transaction.
    ///
    /// # Errors
    /// - `Validation` for an empty or oversized submission, or a zero quantity
    /// - `LookupMismatch` when the lookup cannot be correlated with the items
    /// - `ArithmeticOverflow` when the total does not fit
    /// - `Persistence` (or any mapper error) from storage
    pub fn register_new_order(&mut self, submission: &OrderSubmission) -> ExResult<RegisteredOrder> {
        validate_submission(submission)?;

        let matching = self.matching;
        self.uow
            .run_in_transaction(|ctx| register_in_context(ctx, submission, matching))
    }
}

fn register_in_context(
    ctx: &dyn TransactionContext,
    submission: &OrderSubmission,
    matching: PriceMatching,
) -> ExResult<RegisteredOrder> {
    let codes = submission.menu_codes();
    let menus = ctx.select_menu_items_by_codes(&codes)?;

    let total_price = compute_total_price(&submission.items, &menus, matching)?;

    let order = Order::new(submission.order_date, submission.order_time, total_price);
    let order_code = ctx.insert_order(&order)?;

    tracing::debug!(
        order_code = order_code,
        total_price = total_price,
        item_count = submission.items.len(),
        "Inserted order header"
    );

    for item in &submission.items {
        let line_item = OrderLineItem::new(order_code, item.menu_code, item.quantity);
        ctx.insert_order_line_item(&line_item)?;
    }

    Ok(RegisteredOrder {
        order_code,
        total_price,
        line_item_count: submission.items.len(),
    })
}
