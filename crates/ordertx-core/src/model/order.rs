use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Order header row
///
/// `code` is `None` until the storage layer has assigned one on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub code: Option<i64>,
    pub date: NaiveDate,
    pub time: NaiveTime,

    /// Sum of quantity x unit price over the line items, computed server side
    pub total_price: i64,
}

impl Order {
    /// Create an order that has not been persisted yet
    ///
    /// Order times have whole-second precision; any fraction is dropped here
    /// so every backend stores the same value.
    pub fn new(date: NaiveDate, time: NaiveTime, total_price: i64) -> Self {
        Self {
            code: None,
            date,
            time: time.with_nanosecond(0).unwrap_or(time),
            total_price,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.code.is_some()
    }
}

/// One ordered menu of an order (`tbl_order_menu` row)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLineItem {
    pub order_code: i64,
    pub menu_code: i64,
    pub quantity: u32,
}

impl OrderLineItem {
    pub fn new(order_code: i64, menu_code: i64, quantity: u32) -> Self {
        Self {
            order_code,
            menu_code,
            quantity,
        }
    }
}

/// What a successful registration hands back to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredOrder {
    pub order_code: i64,
    pub total_price: i64,
    pub line_item_count: usize,
}
