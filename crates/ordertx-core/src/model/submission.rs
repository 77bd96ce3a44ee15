use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// One entry of a submission: which menu and how many
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderedMenu {
    pub menu_code: i64,
    pub quantity: u32,
}

impl OrderedMenu {
    pub fn new(menu_code: i64, quantity: u32) -> Self {
        Self {
            menu_code,
            quantity,
        }
    }
}

/// Order as submitted by a client
///
/// Carries no prices; those are always looked up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSubmission {
    pub order_date: NaiveDate,
    pub order_time: NaiveTime,
    pub items: Vec<OrderedMenu>,
}

impl OrderSubmission {
    pub fn new(order_date: NaiveDate, order_time: NaiveTime, items: Vec<OrderedMenu>) -> Self {
        Self {
            order_date,
            order_time,
            items,
        }
    }

    /// Menu codes in submission order, repeats included
    pub fn menu_codes(&self) -> Vec<i64> {
        self.items.iter().map(|item| item.menu_code).collect()
    }
}
