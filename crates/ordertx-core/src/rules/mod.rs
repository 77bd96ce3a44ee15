//! Input rules checked before any storage access

pub mod validation;

pub use validation::{validate_submission, MAX_ORDER_ITEMS};
