use serde::{Deserialize, Serialize};

/// Menu category (catalog grouping)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub code: i64,
    pub name: String,
}

/// A menu entry from the catalog
///
/// Registration only reads `code` and `price`; the remaining columns come
/// along because the lookup returns whole rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Menu code (primary key in the catalog)
    pub code: i64,

    pub name: String,

    /// Unit price in integer currency units
    pub price: i64,

    pub category_code: i64,

    /// Whether the menu is currently offered (`orderable_status = 'Y'`)
    pub orderable: bool,
}

impl MenuItem {
    pub fn new(code: i64, name: impl Into<String>, price: i64, category_code: i64) -> Self {
        Self {
            code,
            name: name.into(),
            price,
            category_code,
            orderable: true,
        }
    }
}
