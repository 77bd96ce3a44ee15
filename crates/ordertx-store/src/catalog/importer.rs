//! Catalog importer
//!
//! Upserts every category and menu of a validated catalog in one transaction.

use crate::catalog::{compute_catalog_digest, parse_catalog_file_with_db};
use crate::errors::{from_rusqlite, Result};
use crate::repo::SqliteMenuRepo;
use ordertx_core::model::{Category, MenuItem};
use rusqlite::Connection;
use serde::Serialize;
use std::path::Path;

/// Outcome of a catalog import
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogImportSummary {
    pub digest: String,
    pub categories: usize,
    pub menus: usize,
}

/// Import a catalog file into the database
///
/// Categories referenced by menus may already exist in the database. Nothing
/// is written unless the whole file validates and every upsert succeeds.
pub fn import_catalog(path: &Path, conn: &mut Connection) -> Result<CatalogImportSummary> {
    let catalog = parse_catalog_file_with_db(path, Some(&*conn))?;
    let digest = compute_catalog_digest(&catalog)?;

    let tx = conn.transaction().map_err(from_rusqlite)?;

    for category in &catalog.categories {
        SqliteMenuRepo::upsert_category(&tx, &Category::from(category))?;
    }
    for menu in &catalog.menus {
        SqliteMenuRepo::upsert_menu(&tx, &MenuItem::from(menu))?;
    }

    tx.commit().map_err(from_rusqlite)?;

    tracing::debug!(
        digest = %digest,
        categories = catalog.categories.len(),
        menus = catalog.menus.len(),
        "Imported menu catalog"
    );

    Ok(CatalogImportSummary {
        digest,
        categories: catalog.categories.len(),
        menus: catalog.menus.len(),
    })
}
