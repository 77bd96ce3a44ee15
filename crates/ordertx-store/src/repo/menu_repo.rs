//! Menu catalog repository

use std::collections::HashMap;

use crate::errors::{persistence, Result};
use ordertx_core::model::{Category, MenuItem};
use rusqlite::{Connection, OptionalExtension, Row};

const MENU_COLUMNS: &str =
    "menu_code, menu_name, menu_price, category_code, orderable_status";

/// SQLite repository for categories and menus
pub struct SqliteMenuRepo;

impl SqliteMenuRepo {
    /// Look up menus for a list of codes in one query
    ///
    /// The result follows the request: one item per requested code, in the
    /// requested order, repeats included. Codes with no row are skipped, so a
    /// missing menu shows up as a shorter result.
    pub fn select_menu_items_by_codes(conn: &Connection, codes: &[i64]) -> Result<Vec<MenuItem>> {
        if codes.is_empty() {
            return Ok(Vec::new());
        }

        let mut distinct = codes.to_vec();
        distinct.sort_unstable();
        distinct.dedup();

        let placeholders = vec!["?"; distinct.len()].join(", ");
        let sql = format!(
            "SELECT {} FROM tbl_menu WHERE menu_code IN ({})",
            MENU_COLUMNS, placeholders
        );

        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| persistence("select_menu_items_by_codes", e))?;
        let found: HashMap<i64, MenuItem> = stmt
            .query_map(rusqlite::params_from_iter(distinct.iter()), menu_from_row)
            .map_err(|e| persistence("select_menu_items_by_codes", e))?
            .map(|row| row.map(|menu| (menu.code, menu)))
            .collect::<std::result::Result<_, _>>()
            .map_err(|e| persistence("select_menu_items_by_codes", e))?;

        tracing::debug!(
            requested = codes.len(),
            distinct = distinct.len(),
            found = found.len(),
            "Menu lookup"
        );

        Ok(codes
            .iter()
            .filter_map(|code| found.get(code).cloned())
            .collect())
    }

    /// Get a single menu by code
    pub fn get_menu(conn: &Connection, code: i64) -> Result<Option<MenuItem>> {
        let sql = format!("SELECT {} FROM tbl_menu WHERE menu_code = ?1", MENU_COLUMNS);
        conn.query_row(&sql, [code], menu_from_row)
            .optional()
            .map_err(|e| persistence("get_menu", e))
    }

    /// All menus ordered by code
    pub fn list_menus(conn: &Connection) -> Result<Vec<MenuItem>> {
        let sql = format!("SELECT {} FROM tbl_menu ORDER BY menu_code", MENU_COLUMNS);
        let mut stmt = conn.prepare(&sql).map_err(|e| persistence("list_menus", e))?;
        let menus = stmt
            .query_map([], menu_from_row)
            .map_err(|e| persistence("list_menus", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| persistence("list_menus", e))?;
        Ok(menus)
    }

    /// Insert or update a category
    pub fn upsert_category(conn: &Connection, category: &Category) -> Result<()> {
        conn.execute(
            "INSERT INTO tbl_category (category_code, category_name)
             VALUES (?1, ?2)
             ON CONFLICT(category_code) DO UPDATE SET
                category_name = excluded.category_name",
            rusqlite::params![category.code, category.name],
        )
        .map_err(|e| persistence("upsert_category", e))?;
        Ok(())
    }

    pub fn category_exists(conn: &Connection, code: i64) -> Result<bool> {
        let found = conn
            .query_row(
                "SELECT 1 FROM tbl_category WHERE category_code = ?1",
                [code],
                |_| Ok(()),
            )
            .optional()
            .map_err(|e| persistence("category_exists", e))?;
        Ok(found.is_some())
    }

    /// Insert or update a menu
    pub fn upsert_menu(conn: &Connection, menu: &MenuItem) -> Result<()> {
        conn.execute(
            "INSERT INTO tbl_menu (menu_code, menu_name, menu_price, category_code, orderable_status)
             VALUES (?1, ?2, ?3, ?4, ?5)
             ON CONFLICT(menu_code) DO UPDATE SET
                menu_name = excluded.menu_name,
                menu_price = excluded.menu_price,
                category_code = excluded.category_code,
                orderable_status = excluded.orderable_status",
            rusqlite::params![
                menu.code,
                menu.name,
                menu.price,
                menu.category_code,
                if menu.orderable { "Y" } else { "N" },
            ],
        )
        .map_err(|e| persistence("upsert_menu", e))?;
        Ok(())
    }
}

fn menu_from_row(row: &Row<'_>) -> rusqlite::Result<MenuItem> {
    let status: String = row.get(4)?;
    Ok(MenuItem {
        code: row.get(0)?,
        name: row.get(1)?,
        price: row.get(2)?,
        category_code: row.get(3)?,
        orderable: status == "Y",
    })
}
