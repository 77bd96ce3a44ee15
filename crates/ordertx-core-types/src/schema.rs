//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_REQUEST_ID: &str = "request_id";

// Registration outcome
pub const FIELD_ORDER_CODE: &str = "order_code";
pub const FIELD_ITEM_COUNT: &str = "item_count";
pub const FIELD_TOTAL_PRICE: &str = "total_price";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names_are_distinct() {
        assert_ne!(EVENT_START, EVENT_END);
        assert_ne!(EVENT_START, EVENT_END_ERROR);
        assert_ne!(EVENT_END, EVENT_END_ERROR);
    }

    #[test]
    fn test_field_keys_match_macro_fields() {
        // The logging macros emit these names literally
        assert_eq!(FIELD_COMPONENT, "component");
        assert_eq!(FIELD_OP, "op");
        assert_eq!(FIELD_EVENT, "event");
        assert_eq!(FIELD_DURATION_MS, "duration_ms");
        assert_eq!(FIELD_ERR_CODE, "err_code");
    }
}
