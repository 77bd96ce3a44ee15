//! Order and line item repository

use crate::errors::{corrupt_row, persistence, Result};
use chrono::{NaiveDate, NaiveTime};
use ordertx_core::model::{Order, OrderLineItem};
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Row};

/// Storage format of `tbl_order.order_date`
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Storage format of `tbl_order.order_time`
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// SQLite repository for orders
pub struct SqliteOrderRepo;

impl SqliteOrderRepo {
    /// Insert an order header and return the generated order code
    ///
    /// `order.code` is ignored; the code comes from the AUTOINCREMENT key.
    pub fn insert_order(conn: &Connection, order: &Order) -> Result<i64> {
        conn.execute(
            "INSERT INTO tbl_order (order_date, order_time, total_order_price)
             VALUES (?1, ?2, ?3)",
            rusqlite::params![
                order.date.format(DATE_FORMAT).to_string(),
                order.time.format(TIME_FORMAT).to_string(),
                order.total_price,
            ],
        )
        .map_err(|e| persistence("insert_order", e))?;

        let order_code = conn.last_insert_rowid();
        if order_code <= 0 {
            return Err(corrupt_row("insert_order", "No generated order code returned"));
        }

        Ok(order_code)
    }

    /// Insert one line item
    pub fn insert_order_line_item(conn: &Connection, line_item: &OrderLineItem) -> Result<()> {
        conn.execute(
            "INSERT INTO tbl_order_menu (order_code, menu_code, order_amount)
             VALUES (?1, ?2, ?3)",
            rusqlite::params![line_item.order_code, line_item.menu_code, line_item.quantity],
        )
        .map_err(|e| {
            persistence("insert_order_line_item", e)
                .with_entity_id(line_item.menu_code.to_string())
        })?;

        Ok(())
    }

    /// Get an order by code
    pub fn get_order(conn: &Connection, order_code: i64) -> Result<Option<Order>> {
        conn.query_row(
            "SELECT order_code, order_date, order_time, total_order_price
             FROM tbl_order WHERE order_code = ?1",
            [order_code],
            order_from_row,
        )
        .optional()
        .map_err(|e| persistence("get_order", e))
    }

    /// Line items of one order in insertion order
    pub fn list_line_items(conn: &Connection, order_code: i64) -> Result<Vec<OrderLineItem>> {
        let mut stmt = conn
            .prepare(
                "SELECT order_code, menu_code, order_amount
                 FROM tbl_order_menu WHERE order_code = ?1 ORDER BY rowid",
            )
            .map_err(|e| persistence("list_line_items", e))?;

        let items = stmt
            .query_map([order_code], |row| {
                Ok(OrderLineItem {
                    order_code: row.get(0)?,
                    menu_code: row.get(1)?,
                    quantity: row.get(2)?,
                })
            })
            .map_err(|e| persistence("list_line_items", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| persistence("list_line_items", e))?;

        Ok(items)
    }

    pub fn count_orders(conn: &Connection) -> Result<i64> {
        conn.query_row("SELECT COUNT(*) FROM tbl_order", [], |row| row.get(0))
            .map_err(|e| persistence("count_orders", e))
    }

    pub fn count_line_items(conn: &Connection) -> Result<i64> {
        conn.query_row("SELECT COUNT(*) FROM tbl_order_menu", [], |row| row.get(0))
            .map_err(|e| persistence("count_line_items", e))
    }
}

fn order_from_row(row: &Row<'_>) -> rusqlite::Result<Order> {
    let date: String = row.get(1)?;
    let time: String = row.get(2)?;

    Ok(Order {
        code: Some(row.get(0)?),
        date: NaiveDate::parse_from_str(&date, DATE_FORMAT)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(1, Type::Text, Box::new(e)))?,
        time: NaiveTime::parse_from_str(&time, TIME_FORMAT)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e)))?,
        total_price: row.get(3)?,
    })
}
