use crate::errors::{OrderError, Result};
use crate::model::OrderSubmission;

/// Upper bound on items per order
///
/// Keeps the batch lookup well below SQLite's bound-parameter limit.
pub const MAX_ORDER_ITEMS: usize = 1000;

/// Validate the shape of a submission
///
/// Checks, in order:
/// 1. At least one ordered menu
/// 2. No more than [`MAX_ORDER_ITEMS`] ordered menus
/// 3. Every quantity is at least one
///
/// Menu existence is not checked here; the lookup decides that.
///
/// # Errors
/// `EmptySubmission`, `TooManyItems` or the first `InvalidQuantity` found.
pub fn validate_submission(submission: &OrderSubmission) -> Result<()> {
    if submission.items.is_empty() {
        return Err(OrderError::EmptySubmission);
    }

    if submission.items.len() > MAX_ORDER_ITEMS {
        return Err(OrderError::TooManyItems {
            count: submission.items.len(),
            max: MAX_ORDER_ITEMS,
        });
    }

    if let Some(item) = submission.items.iter().find(|item| item.quantity == 0) {
        return Err(OrderError::InvalidQuantity {
            menu_code: item.menu_code,
            quantity: item.quantity,
        });
    }

    Ok(())
}
