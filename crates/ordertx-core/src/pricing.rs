//! Order total computation
//!
//! The total is always derived from looked-up unit prices. Two ways exist to
//! pair submitted items with lookup rows:
//!
//! - [`PriceMatching::ByCode`] matches by menu code and is the default.
//! - [`PriceMatching::Positional`] pairs element `i` with element `i`. It is
//!   only correct when the lookup preserves request order, which a plain
//!   `WHERE code IN (...)` query does not promise.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::{OrderError, Result};
use crate::model::{MenuItem, OrderedMenu};

/// How lookup rows are correlated with submitted items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PriceMatching {
    /// Look each submitted code up in a map built from the result
    #[default]
    ByCode,
    /// Trust that the result is in request order; codes are not compared
    Positional,
}

impl std::str::FromStr for PriceMatching {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "by-code" => Ok(PriceMatching::ByCode),
            "positional" => Ok(PriceMatching::Positional),
            other => Err(format!(
                "unknown price matching '{}', expected 'by-code' or 'positional'",
                other
            )),
        }
    }
}

/// Compute Σ quantity × unit price
///
/// `menus` must have exactly one entry per submitted item (repeats included).
///
/// # Errors
/// - `LookupMismatch` when the lengths differ
/// - `MenuNotFound` when matching by code and a submitted code is absent
/// - `TotalOverflow` when the product or sum leaves the `i64` range
pub fn compute_total_price(
    items: &[OrderedMenu],
    menus: &[MenuItem],
    matching: PriceMatching,
) -> Result<i64> {
    if items.len() != menus.len() {
        return Err(OrderError::LookupMismatch {
            requested: items.len(),
            returned: menus.len(),
        });
    }

    match matching {
        PriceMatching::ByCode => {
            let prices: HashMap<i64, i64> = menus.iter().map(|m| (m.code, m.price)).collect();
            items.iter().try_fold(0i64, |total, item| {
                let price = prices
                    .get(&item.menu_code)
                    .copied()
                    .ok_or(OrderError::MenuNotFound {
                        menu_code: item.menu_code,
                    })?;
                add_line(total, item, price)
            })
        }
        PriceMatching::Positional => items
            .iter()
            .zip(menus)
            .try_fold(0i64, |total, (item, menu)| add_line(total, item, menu.price)),
    }
}

fn add_line(total: i64, item: &OrderedMenu, price: i64) -> Result<i64> {
    price
        .checked_mul(i64::from(item.quantity))
        .and_then(|line| total.checked_add(line))
        .ok_or(OrderError::TotalOverflow {
            menu_code: item.menu_code,
        })
}
