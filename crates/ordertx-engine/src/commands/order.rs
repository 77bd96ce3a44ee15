//! Order registration command

use crate::options::RegistrationOptions;
use ordertx_core::model::{OrderSubmission, RegisteredOrder};
use ordertx_core::{log_op_end, log_op_error, log_op_start, ExError, OrderService};
use ordertx_core_types::RequestContext;
use ordertx_store::errors::Result;
use ordertx_store::SqliteUnitOfWork;
use rusqlite::Connection;

/// Register one order against the SQLite store
///
/// The submission is validated first, before any transaction is opened. Menu
/// lookup, total computation and all inserts then run in one
/// `SqliteUnitOfWork`; on error nothing of the order is left behind.
///
/// ## Errors
///
/// - `Validation`: empty or oversized submission, or zero quantity
/// - `LookupMismatch`: a submitted menu code is not in the catalog
/// - `ArithmeticOverflow`: the total does not fit an `i64`
/// - `Persistence`: any database failure
///
/// Every error carries the request id of `ctx`.
pub fn register_order(
    conn: &mut Connection,
    ctx: &RequestContext,
    submission: &OrderSubmission,
    options: &RegistrationOptions,
) -> Result<RegisteredOrder> {
    log_op_start!(
        "register_order",
        request_id = ctx.request_id.as_str(),
        item_count = submission.items.len()
    );
    let start = std::time::Instant::now();

    let result = OrderService::new(SqliteUnitOfWork::new(conn))
        .with_price_matching(options.price_matching)
        .register_new_order(submission)
        .map_err(|e| tag_with_context(e, ctx))
        .map_err(|e| {
            log_op_error!(
                "register_order",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                request_id = ctx.request_id.as_str()
            );
            e
        })?;

    log_op_end!(
        "register_order",
        duration_ms = start.elapsed().as_millis() as u64,
        request_id = ctx.request_id.as_str(),
        order_code = result.order_code,
        total_price = result.total_price
    );

    Ok(result)
}

fn tag_with_context(err: ExError, ctx: &RequestContext) -> ExError {
    let err = err.with_request_id(ctx.request_id.clone());
    match &ctx.trace_id {
        Some(trace_id) => err.with_trace_id(trace_id.clone()),
        None => err,
    }
}
